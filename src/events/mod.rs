pub mod keyboard;
pub mod listener;
pub mod pointer;

pub use keyboard::wire_keyboard;
pub use listener::{flush_retired, retire, Listener};
pub use pointer::{wire_pointer, SessionListeners};
