//! Events that trigger mode transitions

use super::machine::Mode;

/// Events that can trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Keypad events
    /// `#` pressed while idle
    Configure,
    /// Program key or quick-cook digit pressed while idle
    StartCook,
    /// `*` pressed
    Cancel,
    /// `#` pressed on the final configuration screen
    ConfigFinalized,

    // Cook cycle events
    /// Active cook suspended without losing progress
    Pause,
    /// Suspended cook continues
    Resume,
    /// Last repetition finished
    CycleComplete,
    /// Completion chime and message done
    FinishCleared,

    // Door events
    /// Door sampled open
    DoorOpened,
    /// Door sampled closed; carries the mode saved at preemption
    DoorClosed(Mode),
}
