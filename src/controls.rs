//! Interactive widgets.

mod button;
mod control;

pub use button::{Button, ButtonCallback};
pub use control::{ControlState, DEFAULT_HOLD_INTERVAL, PointerButton, TextBasedControl};
