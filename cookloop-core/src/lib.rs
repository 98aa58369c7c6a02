//! Board-agnostic core logic for the cooking appliance firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Peripheral traits (keypad, door, display, light, buzzer, LED ring)
//! - Mode state machine with door preemption
//! - Custom program wizard
//! - Cook/cool cycle engine
//! - LED ring and buzzer renderers
//! - Program table, timing values and the stored program record

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod appliance;
pub mod config;
pub mod cycle;
pub mod editor;
pub mod render;
pub mod screens;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;

pub use appliance::{Appliance, Board, Io};
