#![cfg(target_arch = "wasm32")]
//! Browser front-end for the rotary knob.
//!
//! `mountKnob` renders a knob into a container element and reports new values
//! through an `onChange` callback. The page owns the value: the knob only
//! redraws after the page calls `setValue`.

use knob_core::{GestureController, InputEvent, KnobConfig, Transition};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod options;
mod render;

pub use options::KnobOptions;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("knob-web starting");
    Ok(())
}

pub(crate) struct KnobInner {
    pub config: Cell<KnobConfig>,
    pub value: Cell<f64>,
    pub parts: render::KnobParts,
    controller: RefCell<GestureController>,
    on_change: js_sys::Function,
    session: RefCell<Option<events::SessionListeners>>,
    element_listeners: RefCell<Vec<events::Listener>>,
}

impl KnobInner {
    /// Run one input event through the controller and act on the outcome.
    pub fn dispatch(self: &Rc<Self>, event: InputEvent) {
        let config = self.config.get();
        let outcome = self
            .controller
            .borrow_mut()
            .handle(&config, self.value.get(), event);
        self.apply_transition(outcome.transition);
        if let Some(next) = outcome.value {
            self.notify(next);
        }
    }

    fn notify(&self, next: f64) {
        if let Err(e) = self.on_change.call1(&JsValue::NULL, &JsValue::from_f64(next)) {
            log::error!("[knob] onChange threw: {:?}", e);
        }
    }

    fn apply_transition(self: &Rc<Self>, transition: Transition) {
        match transition {
            Transition::None => {}
            Transition::Started(source) => self.attach_session(source),
            Transition::Ended(_) => self.release_session(),
            Transition::Replaced { started, .. } => {
                self.release_session();
                self.attach_session(started);
            }
        }
    }

    fn attach_session(self: &Rc<Self>, source: knob_core::DragSource) {
        // the start event comes from an element listener, never a retired one
        events::flush_retired();
        match events::SessionListeners::attach(Rc::downgrade(self), source) {
            Ok(listeners) => *self.session.borrow_mut() = Some(listeners),
            Err(e) => {
                // without end listeners the session could never close
                log::error!("[knob] could not attach drag listeners: {e:#}");
                self.controller.borrow_mut().teardown();
            }
        }
    }

    fn release_session(&self) {
        let session = self.session.borrow_mut().take();
        if let Some(session) = session {
            log::debug!("[knob] releasing {:?} session listeners", session.source);
            events::retire(session.into_listeners());
        }
    }

    fn rerender(&self) {
        self.parts.update(&self.config.get(), self.value.get());
    }

    fn teardown(&self) {
        self.controller.borrow_mut().teardown();
        self.release_session();
        let listeners = std::mem::take(&mut *self.element_listeners.borrow_mut());
        events::retire(listeners);
        self.parts.remove();
    }
}

/// Handle to a mounted knob.
#[wasm_bindgen]
pub struct KnobHandle {
    inner: Rc<KnobInner>,
}

/// Render a knob into the element with id `container_id`.
#[wasm_bindgen(js_name = mountKnob)]
pub fn mount_knob(
    container_id: &str,
    options: &KnobOptions,
    value: f64,
    on_change: js_sys::Function,
) -> Result<KnobHandle, JsValue> {
    mount(container_id, KnobConfig::from(options), value, on_change)
        .map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn mount(
    container_id: &str,
    config: KnobConfig,
    value: f64,
    on_change: js_sys::Function,
) -> anyhow::Result<KnobHandle> {
    config.validate()?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container: web::Element = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{container_id}"))?;
    let parts = render::KnobParts::create(&document, &container)?;

    let inner = Rc::new(KnobInner {
        config: Cell::new(config),
        value: Cell::new(value),
        parts,
        controller: RefCell::new(GestureController::new()),
        on_change,
        session: RefCell::new(None),
        element_listeners: RefCell::new(Vec::new()),
    });
    let mut listeners = events::wire_pointer(&inner)?;
    listeners.extend(events::wire_keyboard(&inner)?);
    *inner.element_listeners.borrow_mut() = listeners;
    inner.rerender();

    log::info!(
        "[knob] mounted in #{} range=[{}, {}] step={}",
        container_id,
        config.range.min,
        config.range.max,
        config.range.step
    );
    Ok(KnobHandle { inner })
}

#[wasm_bindgen]
impl KnobHandle {
    /// Accept a new value from the owner and redraw.
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&self, value: f64) {
        self.inner.value.set(value);
        self.inner.rerender();
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> f64 {
        self.inner.value.get()
    }

    #[wasm_bindgen(js_name = setDisabled)]
    pub fn set_disabled(&self, disabled: bool) {
        let config = self.inner.config.get().with_disabled(disabled);
        self.inner.config.set(config);
        self.inner.rerender();
    }

    /// Replace every option at once; rejected options leave the knob unchanged.
    pub fn reconfigure(&self, options: &KnobOptions) -> Result<(), JsValue> {
        let config = KnobConfig::from(options);
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.config.set(config);
        self.inner.rerender();
        Ok(())
    }

    /// Remove the knob and every listener it registered, including those of
    /// a drag still in progress.
    pub fn destroy(&self) {
        self.inner.teardown();
    }
}

impl Drop for KnobHandle {
    fn drop(&mut self) {
        self.inner.teardown();
    }
}
