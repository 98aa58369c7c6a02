//! Program store trait

use crate::config::ProgramTable;

/// Persistent storage for the four program slots
///
/// Both operations are synchronous and treated as failure-free; an
/// implementation that cannot read its medium returns the factory table.
pub trait ProgramStore {
    /// Load all four slots
    fn load_programs(&mut self) -> ProgramTable;

    /// Write all four slots
    fn save_programs(&mut self, programs: &ProgramTable);
}
