use crate::constants::SVG_NS;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create an element in the SVG namespace.
pub fn svg_element(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {:?}", e))
}

/// Set attributes, logging (not failing) on the rare DOM rejection.
pub fn set_attributes(el: &web::Element, attrs: &[(&str, String)]) {
    for (name, value) in attrs {
        if let Err(e) = el.set_attribute(name, value) {
            log::warn!("[dom] set {name}={value} failed: {:?}", e);
        }
    }
}

/// Client coordinates relative to the top-left of `el`'s bounding box.
#[inline]
pub fn point_in_element(el: &web::Element, client_x: i32, client_y: i32) -> (f64, f64) {
    let rect = el.get_bounding_client_rect();
    (
        f64::from(client_x) - rect.left(),
        f64::from(client_y) - rect.top(),
    )
}
