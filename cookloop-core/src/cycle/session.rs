//! Active session state

use crate::config::{CookingProgram, Slot};

/// Phase of an active session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Heating,
    Cooling,
}

/// Live parameters and countdowns of a cook cycle
///
/// The remaining counters step down to -1, which marks the phase as
/// complete on the following tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CookSession {
    /// Slot the program came from, `None` for quick cook
    pub source: Option<Slot>,
    /// Label shown while cooking
    pub label: &'static str,
    /// Configured heating time (s)
    pub cook_s: u16,
    /// Configured standing time (s)
    pub cool_s: u16,
    /// Configured number of cycles
    pub total_repetitions: u16,
    /// Current phase
    pub phase: Phase,
    /// Heating seconds still to show
    pub remaining_cook_s: i32,
    /// Standing seconds still to show
    pub remaining_cool_s: i32,
    /// Cycles left including the current one
    pub remaining_repetitions: u16,
}

impl CookSession {
    /// Create a session at the start of its first heating phase
    pub fn new(source: Option<Slot>, program: &CookingProgram) -> Self {
        let repetitions = program.repetitions.max(1);
        Self {
            source,
            label: program.label,
            cook_s: program.cook_s,
            cool_s: program.cool_s,
            total_repetitions: repetitions,
            phase: Phase::Heating,
            remaining_cook_s: program.cook_s as i32,
            remaining_cool_s: program.cool_s as i32,
            remaining_repetitions: repetitions,
        }
    }

    /// Quick-cook session started from a digit key
    pub fn quick(cook_s: u16) -> Self {
        Self::new(None, &CookingProgram::quick(cook_s))
    }

    /// Check if this session came from a digit key
    pub fn is_quick_cook(&self) -> bool {
        self.source.is_none()
    }

    /// Rewind both countdowns for the next repetition
    pub fn restart_cycle(&mut self) {
        self.remaining_cook_s = self.cook_s as i32;
        self.remaining_cool_s = self.cool_s as i32;
        self.phase = Phase::Heating;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProgramTable, QUICK_COOK_LABEL};

    #[test]
    fn test_session_from_slot() {
        let table = ProgramTable::factory();
        let session = CookSession::new(Some(Slot::B), table.get(Slot::B));

        assert_eq!(session.label, "Descongelar");
        assert_eq!(session.phase, Phase::Heating);
        assert_eq!(session.remaining_cook_s, 20);
        assert_eq!(session.remaining_cool_s, 10);
        assert_eq!(session.remaining_repetitions, 5);
        assert!(!session.is_quick_cook());
    }

    #[test]
    fn test_quick_cook_session() {
        let session = CookSession::quick(5);

        assert_eq!(session.source, None);
        assert_eq!(session.label, QUICK_COOK_LABEL);
        assert_eq!((session.cook_s, session.cool_s), (5, 0));
        assert_eq!(session.total_repetitions, 1);
        assert!(session.is_quick_cook());
    }

    #[test]
    fn test_restart_cycle() {
        let mut session = CookSession::quick(3);
        session.remaining_cook_s = -1;
        session.phase = Phase::Cooling;

        session.restart_cycle();
        assert_eq!(session.remaining_cook_s, 3);
        assert_eq!(session.phase, Phase::Heating);
    }
}
