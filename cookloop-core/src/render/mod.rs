//! Output renderers
//!
//! Pure functions of door state, mode, phase and time that decide what
//! the LED ring shows and what the buzzer plays on each tick.

pub mod pattern;
pub mod tone;

pub use pattern::{PatternRenderer, RingPattern};
pub use tone::{play_finish_chime, ToneCommand, ToneController};
