//! Mouse, touch, wheel and click wiring.
//!
//! Mouse-down and touch-start are listened for on the knob itself; the
//! matching move/end listeners go on the window for the lifetime of one drag
//! session so the drag keeps tracking after the pointer leaves the knob.

use super::listener::Listener;
use crate::dom;
use crate::KnobInner;
use knob_core::{DragSource, InputEvent};
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window listeners owned by one live drag session.
pub struct SessionListeners {
    pub source: DragSource,
    listeners: Vec<Listener>,
}

impl SessionListeners {
    pub fn attach(knob: Weak<KnobInner>, source: DragSource) -> anyhow::Result<Self> {
        let window: web::EventTarget = web::window()
            .ok_or_else(|| anyhow::anyhow!("no window"))?
            .into();
        let listeners = match source {
            DragSource::Mouse => vec![
                Listener::attach(&window, "mousemove", None, {
                    let knob = knob.clone();
                    move |ev: web::Event| {
                        let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
                            return;
                        };
                        dispatch(&knob, InputEvent::DragMove {
                            source,
                            y: f64::from(me.client_y()),
                        });
                    }
                })?,
                Listener::attach(&window, "mouseup", None, {
                    let knob = knob.clone();
                    move |_ev: web::Event| dispatch(&knob, InputEvent::DragEnd { source })
                })?,
            ],
            DragSource::Touch => vec![
                Listener::attach(&window, "touchmove", Some(true), {
                    let knob = knob.clone();
                    move |ev: web::Event| {
                        let Some(y) = first_touch_y(&ev) else {
                            return;
                        };
                        dispatch(&knob, InputEvent::DragMove { source, y });
                    }
                })?,
                Listener::attach(&window, "touchend", None, {
                    let knob = knob.clone();
                    move |_ev: web::Event| dispatch(&knob, InputEvent::DragEnd { source })
                })?,
            ],
        };
        log::debug!("[events] attached {:?} session listeners", source);
        Ok(Self { source, listeners })
    }

    pub fn into_listeners(self) -> Vec<Listener> {
        self.listeners
    }
}

/// Listeners on the knob element for drag starts, wheel and arc clicks.
pub fn wire_pointer(knob: &Rc<KnobInner>) -> anyhow::Result<Vec<Listener>> {
    let target: &web::EventTarget = knob.parts.svg.as_ref();
    let weak = Rc::downgrade(knob);

    let mousedown = Listener::attach(target, "mousedown", None, {
        let knob = weak.clone();
        move |ev: web::Event| {
            let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            if is_disabled(&knob) {
                return;
            }
            // keeps the drag from selecting page text
            ev.prevent_default();
            dispatch(&knob, InputEvent::DragStart {
                source: DragSource::Mouse,
                y: f64::from(me.client_y()),
            });
        }
    })?;

    let touchstart = Listener::attach(target, "touchstart", None, {
        let knob = weak.clone();
        move |ev: web::Event| {
            let Some(y) = first_touch_y(&ev) else {
                return;
            };
            dispatch(&knob, InputEvent::DragStart {
                source: DragSource::Touch,
                y,
            });
        }
    })?;

    let click = Listener::attach(target, "click", None, {
        let knob = weak.clone();
        move |ev: web::Event| {
            let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let Some(inner) = knob.upgrade() else {
                return;
            };
            let (x, y) = dom::point_in_element(&inner.parts.svg, me.client_x(), me.client_y());
            inner.dispatch(InputEvent::Click { x, y });
        }
    })?;

    let wheel = Listener::attach(target, "wheel", Some(false), {
        let knob = weak;
        move |ev: web::Event| {
            let Some(we) = ev.dyn_ref::<web::WheelEvent>() else {
                return;
            };
            if is_disabled(&knob) {
                return;
            }
            ev.prevent_default();
            dispatch(&knob, InputEvent::Wheel {
                delta_y: we.delta_y(),
            });
        }
    })?;

    Ok(vec![mousedown, touchstart, click, wheel])
}

fn first_touch_y(ev: &web::Event) -> Option<f64> {
    let te = ev.dyn_ref::<web::TouchEvent>()?;
    let touch = te.touches().get(0)?;
    Some(f64::from(touch.client_y()))
}

#[inline]
fn is_disabled(knob: &Weak<KnobInner>) -> bool {
    knob.upgrade().map_or(true, |k| k.config.get().disabled)
}

#[inline]
pub(crate) fn dispatch(knob: &Weak<KnobInner>, event: InputEvent) {
    if let Some(inner) = knob.upgrade() {
        inner.dispatch(event);
    }
}
