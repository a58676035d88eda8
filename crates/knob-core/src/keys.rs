use crate::value::Range;

/// Keyboard commands understood by a focused knob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KnobKey {
    Increment,
    Decrement,
    Home,
    End,
}

impl KnobKey {
    /// Map a DOM `KeyboardEvent.key` name to a command.
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "ArrowRight" => Some(Self::Increment),
            "ArrowDown" | "ArrowLeft" => Some(Self::Decrement),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }

    /// Unsnapped candidate value for this key pressed at `current`.
    pub fn candidate(self, range: &Range, current: f64) -> f64 {
        match self {
            Self::Increment => current + range.step,
            Self::Decrement => current - range.step,
            Self::Home => range.min,
            Self::End => range.max,
        }
    }
}
