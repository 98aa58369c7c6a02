//! Appliance mode state machine
//!
//! Defines the top-level modes and the events that move between them.
//! The machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{Mode, ModeMachine};
