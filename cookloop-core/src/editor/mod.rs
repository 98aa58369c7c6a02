//! Custom program wizard
//!
//! Collects cook time, cool time and repetitions for slot D through
//! numeric keypad entry, one screen per step.

pub mod wizard;

pub use wizard::{ConfigDraft, ConfigStep, ConfigurationEditor, EditorOutcome, MAX_INPUT_DIGITS};
