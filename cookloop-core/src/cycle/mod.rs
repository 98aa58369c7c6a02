//! Cook cycle engine
//!
//! Owns the active cooking session and advances it once per elapsed
//! second through heating and cooling phases and their repetitions.

pub mod engine;
pub mod session;

pub use engine::{CookCycleEngine, CycleStep};
pub use session::{CookSession, Phase};
