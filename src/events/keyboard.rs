use super::listener::Listener;
use super::pointer::dispatch;
use crate::KnobInner;
use knob_core::{InputEvent, KnobKey};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Key and focus listeners on the knob element.
pub fn wire_keyboard(knob: &Rc<KnobInner>) -> anyhow::Result<Vec<Listener>> {
    let target: &web::EventTarget = knob.parts.svg.as_ref();
    let weak = Rc::downgrade(knob);

    let keydown = Listener::attach(target, "keydown", None, {
        let knob = weak.clone();
        move |ev: web::Event| {
            let Some(ke) = ev.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            let Some(key) = KnobKey::from_key(&ke.key()) else {
                return;
            };
            let Some(inner) = knob.upgrade() else {
                return;
            };
            if inner.config.get().disabled {
                return;
            }
            ev.prevent_default();
            inner.dispatch(InputEvent::Key(key));
        }
    })?;

    let focus = Listener::attach(target, "focus", None, {
        let knob = weak.clone();
        move |_ev: web::Event| dispatch(&knob, InputEvent::Focus)
    })?;

    let blur = Listener::attach(target, "blur", None, {
        let knob = weak;
        move |_ev: web::Event| dispatch(&knob, InputEvent::Blur)
    })?;

    Ok(vec![keydown, focus, blur])
}
