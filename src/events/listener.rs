//! Owned DOM event listeners.
//!
//! A [`Listener`] removes itself from its target exactly once, either through
//! [`Listener::detach`] or on drop. Listeners that detach from inside one of
//! their own callbacks are parked with [`retire`] and freed later by
//! [`flush_retired`], so a closure is never freed while it is running.

use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
    attached: bool,
}

impl Listener {
    /// Register `handler` for `kind` on `target`.
    ///
    /// `passive` is passed through to `addEventListener` when given; wheel
    /// listeners need `Some(false)` to be allowed to cancel page scroll.
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        passive: Option<bool>,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let func: &js_sys::Function = closure.as_ref().unchecked_ref();
        let added = match passive {
            Some(passive) => {
                let opts = web::AddEventListenerOptions::new();
                opts.set_passive(passive);
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    kind, func, &opts,
                )
            }
            None => target.add_event_listener_with_callback(kind, func),
        };
        added.map_err(|e| anyhow::anyhow!("add {kind} listener: {:?}", e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
            attached: true,
        })
    }

    /// Remove from the target. Safe to call more than once.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("[events] remove {} listener failed: {:?}", self.kind, e);
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}

thread_local! {
    static RETIRED: RefCell<Vec<Listener>> = const { RefCell::new(Vec::new()) };
}

/// Detach `listeners` now and keep their closures alive until the next flush.
pub fn retire(listeners: impl IntoIterator<Item = Listener>) {
    let mut listeners: Vec<Listener> = listeners.into_iter().collect();
    for l in &mut listeners {
        l.detach();
    }
    RETIRED.with(|r| r.borrow_mut().extend(listeners));
}

/// Free retired listeners. Call only from a callback that is not retired.
pub fn flush_retired() {
    let drained = RETIRED.with(|r| std::mem::take(&mut *r.borrow_mut()));
    drop(drained);
}
