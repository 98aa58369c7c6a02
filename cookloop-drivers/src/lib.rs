//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in cookloop-core on top of embedded-hal 1.0:
//!
//! - Door switch and interior light (GPIO)
//! - 4x4 matrix keypad (GPIO row scan)
//! - 16x2 character LCD (HD44780 behind a PCF8574 I2C expander)

#![no_std]
#![deny(unsafe_code)]

pub mod door;
pub mod keypad;
pub mod lcd;
pub mod light;

pub use door::GpioDoorSensor;
pub use keypad::{KeypadError, MatrixKeypad, KEYMAP};
pub use lcd::{Lcd1602, LCD_ADDRESS};
pub use light::GpioLight;
