//! SVG output for one knob: builds the element tree once, then rewrites
//! attributes from [`knob_core::KnobGeometry`] whenever the value or config
//! changes.

use crate::constants::{
    BACKDROP_STROKE_WIDTH, CLASS_ACTIVE, CLASS_BACKDROP, CLASS_INDICATOR, CLASS_ROOT, CLASS_TRACK,
};
use crate::dom;
use knob_core::KnobConfig;
use web_sys as web;

pub struct KnobParts {
    pub svg: web::Element,
    backdrop: web::Element,
    track: web::Element,
    active: web::Element,
    indicator: web::Element,
}

impl KnobParts {
    /// Build the SVG tree and append it to `container`.
    pub fn create(document: &web::Document, container: &web::Element) -> anyhow::Result<Self> {
        let svg = dom::svg_element(document, "svg")?;
        let backdrop = dom::svg_element(document, "circle")?;
        let track = dom::svg_element(document, "path")?;
        let active = dom::svg_element(document, "path")?;
        let indicator = dom::svg_element(document, "circle")?;

        dom::set_attributes(&svg, &[("class", CLASS_ROOT.into()), ("role", "slider".into())]);
        dom::set_attributes(&backdrop, &[("class", CLASS_BACKDROP.into())]);
        for (el, class) in [(&track, CLASS_TRACK), (&active, CLASS_ACTIVE)] {
            dom::set_attributes(
                el,
                &[
                    ("class", class.into()),
                    ("fill", "none".into()),
                    ("stroke-linecap", "round".into()),
                ],
            );
        }
        dom::set_attributes(&indicator, &[("class", CLASS_INDICATOR.into())]);

        for child in [&backdrop, &track, &active, &indicator] {
            svg.append_child(child)
                .map_err(|e| anyhow::anyhow!("append knob part: {:?}", e))?;
        }
        container
            .append_child(&svg)
            .map_err(|e| anyhow::anyhow!("append knob svg: {:?}", e))?;

        Ok(Self {
            svg,
            backdrop,
            track,
            active,
            indicator,
        })
    }

    pub fn update(&self, config: &KnobConfig, value: f64) {
        let geometry = config.geometry();
        let knob = geometry.knob(&config.sweep, &config.range, value);
        let aria = config.aria(value);
        let size = config.size;
        let stroke = knob.stroke_width.to_string();

        dom::set_attributes(
            &self.svg,
            &[
                ("width", size.to_string()),
                ("height", size.to_string()),
                ("viewBox", format!("0 0 {size} {size}")),
                ("aria-valuemin", aria.value_min.to_string()),
                ("aria-valuemax", aria.value_max.to_string()),
                ("aria-valuenow", aria.value_now.to_string()),
                ("aria-disabled", aria.disabled.to_string()),
                ("tabindex", aria.tab_index.to_string()),
                ("data-disabled", aria.disabled.to_string()),
            ],
        );
        dom::set_attributes(
            &self.backdrop,
            &[
                ("cx", knob.center.x.to_string()),
                ("cy", knob.center.y.to_string()),
                ("r", knob.backdrop_radius.to_string()),
                ("stroke-width", BACKDROP_STROKE_WIDTH.to_string()),
            ],
        );
        dom::set_attributes(
            &self.track,
            &[("d", knob.track.to_svg_path()), ("stroke-width", stroke.clone())],
        );
        dom::set_attributes(
            &self.active,
            &[("d", knob.active.to_svg_path()), ("stroke-width", stroke)],
        );
        dom::set_attributes(
            &self.indicator,
            &[
                ("cx", knob.indicator.x.to_string()),
                ("cy", knob.indicator.y.to_string()),
                ("r", knob.indicator_radius.to_string()),
            ],
        );
    }

    pub fn remove(&self) {
        self.svg.remove();
    }
}
