//! Input handling for one knob instance.
//!
//! [`GestureController`] turns raw input events into at most one new value
//! per event. It never stores the knob's value: the owner passes the current
//! value into every call and re-renders when a value is emitted. The only
//! state kept between events is the focus flag and the anchor of an
//! in-progress drag.
//!
//! Drag sessions tell the caller when to attach and detach global move/end
//! listeners through [`Transition`], so listener lifetimes follow session
//! lifetimes exactly.

use crate::config::KnobConfig;
use crate::keys::KnobKey;
use glam::DVec2;

/// Which input device owns a drag session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    Mouse,
    Touch,
}

/// Anchor for one continuous drag gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub source: DragSource,
    pub start_y: f64,
    pub start_value: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Raw input, already reduced to the coordinates the core needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse-down or touch-start on the knob; `y` is the client Y coordinate.
    DragStart { source: DragSource, y: f64 },
    /// Move on the global surface while a session may be active.
    DragMove { source: DragSource, y: f64 },
    /// Mouse-up or touch-end on the global surface.
    DragEnd { source: DragSource },
    /// One wheel event; negative `delta_y` scrolls up.
    Wheel { delta_y: f64 },
    /// Click position relative to the knob's bounding box.
    Click { x: f64, y: f64 },
    Key(KnobKey),
    Focus,
    Blur,
}

/// Change in drag-session lifecycle caused by one event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transition {
    #[default]
    None,
    /// Attach global listeners for `source`.
    Started(DragSource),
    /// Detach the global listeners for `source`.
    Ended(DragSource),
    /// A stale session was overwritten: detach `ended`, then attach `started`.
    Replaced {
        ended: DragSource,
        started: DragSource,
    },
}

/// Result of handling one event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Outcome {
    /// New value to hand to the owner, if any.
    pub value: Option<f64>,
    pub transition: Transition,
}

impl Outcome {
    fn emit(value: Option<f64>) -> Self {
        Self {
            value,
            transition: Transition::None,
        }
    }

    fn transition(transition: Transition) -> Self {
        Self {
            value: None,
            transition,
        }
    }
}

/// Snap and clamp `candidate`, returning it only if it differs from `current`.
///
/// Every emission path goes through here.
pub fn emit(config: &KnobConfig, current: f64, candidate: f64) -> Option<f64> {
    let range = &config.range;
    let next = range.snap(range.clamp(candidate));
    if next == current {
        None
    } else {
        log::trace!("[knob] emit {next} (was {current})");
        Some(next)
    }
}

/// Per-instance gesture state machine.
#[derive(Clone, Debug, Default)]
pub struct GestureController {
    state: GestureState,
    focused: bool,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn session(&self) -> Option<DragSession> {
        match self.state {
            GestureState::Dragging(session) => Some(session),
            GestureState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Handle one event against the owner's `current` value.
    pub fn handle(&mut self, config: &KnobConfig, current: f64, event: InputEvent) -> Outcome {
        match event {
            InputEvent::Focus => {
                self.focused = true;
                Outcome::default()
            }
            InputEvent::Blur => {
                self.focused = false;
                Outcome::default()
            }
            // Ending a session is always honored so a knob disabled
            // mid-drag still releases its global listeners.
            InputEvent::DragEnd { source } => Outcome::transition(self.end_drag(source)),
            _ if config.disabled => Outcome::default(),
            InputEvent::DragStart { source, y } => {
                Outcome::transition(self.start_drag(source, y, current))
            }
            InputEvent::DragMove { source, y } => {
                Outcome::emit(self.drag_to(config, current, source, y))
            }
            InputEvent::Wheel { delta_y } => Outcome::emit(self.wheel(config, current, delta_y)),
            InputEvent::Click { x, y } => {
                Outcome::emit(self.click(config, current, DVec2::new(x, y)))
            }
            InputEvent::Key(key) => Outcome::emit(self.key(config, current, key)),
        }
    }

    /// Drop any live session without waiting for its end event.
    ///
    /// Returns the source whose listeners must be released, if a session
    /// was live. Owners call this when the knob is torn down.
    pub fn teardown(&mut self) -> Option<DragSource> {
        let session = self.session()?;
        log::warn!("[knob] teardown during {:?} drag; releasing session", session.source);
        self.state = GestureState::Idle;
        Some(session.source)
    }

    fn start_drag(&mut self, source: DragSource, y: f64, current: f64) -> Transition {
        let previous = self.session();
        self.state = GestureState::Dragging(DragSession {
            source,
            start_y: y,
            start_value: current,
        });
        match previous {
            Some(stale) => {
                log::warn!(
                    "[knob] {:?} drag started while a {:?} session was live; replacing it",
                    source,
                    stale.source
                );
                Transition::Replaced {
                    ended: stale.source,
                    started: source,
                }
            }
            None => {
                log::debug!("[knob] begin {:?} drag at y={} value={}", source, y, current);
                Transition::Started(source)
            }
        }
    }

    fn end_drag(&mut self, source: DragSource) -> Transition {
        match self.session() {
            Some(session) if session.source == source => {
                self.state = GestureState::Idle;
                log::debug!("[knob] end {:?} drag", source);
                Transition::Ended(source)
            }
            _ => Transition::None,
        }
    }

    fn drag_to(
        &self,
        config: &KnobConfig,
        current: f64,
        source: DragSource,
        y: f64,
    ) -> Option<f64> {
        let session = self.session().filter(|s| s.source == source)?;
        let delta = session.start_y - y;
        let delta_value = delta / config.sensitivity * config.range.span();
        emit(config, current, session.start_value + delta_value)
    }

    fn wheel(&self, config: &KnobConfig, current: f64, delta_y: f64) -> Option<f64> {
        if delta_y == 0.0 {
            return None;
        }
        let direction = if delta_y < 0.0 { 1.0 } else { -1.0 };
        emit(config, current, current + direction * config.range.step)
    }

    fn click(&self, config: &KnobConfig, current: f64, point: DVec2) -> Option<f64> {
        // browsers can deliver a click while a drag is still live
        if self.is_dragging() {
            return None;
        }
        let angle = config.geometry().angle_at(point);
        let candidate = config.sweep.angle_to_value(&config.range, angle);
        emit(config, current, candidate)
    }

    fn key(&self, config: &KnobConfig, current: f64, key: KnobKey) -> Option<f64> {
        if !self.focused {
            return None;
        }
        emit(config, current, key.candidate(&config.range, current))
    }
}
