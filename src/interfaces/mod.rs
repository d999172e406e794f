//! Adapters between the engine and the outside world: key names in,
//! display lines out.

pub mod keyboard;
pub mod terminal;
