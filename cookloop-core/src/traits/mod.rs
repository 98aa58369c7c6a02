//! Hardware abstraction traits
//!
//! These traits define the interface between the appliance logic
//! and board-specific peripheral wrappers. None of them carries
//! decision logic; every method is assumed to succeed.

pub mod display;
pub mod keypad;
pub mod outputs;
pub mod ring;
pub mod sensor;
pub mod store;

pub use display::{CharDisplay, DISPLAY_COLS, DISPLAY_ROWS};
pub use keypad::{Key, Keypad};
pub use outputs::{Buzzer, Light};
pub use ring::{LedRing, Rgb, RingFrame, RING_PIXELS};
pub use sensor::{Clock, DoorSensor};
pub use store::ProgramStore;
