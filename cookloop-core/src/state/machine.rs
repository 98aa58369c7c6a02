//! Mode definition
//!
//! Light, ring, tone and key handling are all functions of the
//! current mode and an event.

use super::events::Event;

/// Appliance modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Home menu shown, waiting for a key
    Idle,
    /// Custom program wizard active
    Configuring,
    /// Cook cycle running
    Cooking,
    /// Cook cycle suspended, session kept
    Paused,
    /// Last repetition done; cleared within the same tick
    Finished,
    /// Door open; everything else preempted
    DoorOpen,
}

impl Mode {
    /// Check if a cook session exists in this mode
    pub fn has_session(&self) -> bool {
        matches!(self, Mode::Cooking | Mode::Paused)
    }

    /// Check if `*` tears this mode down
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Mode::Configuring | Mode::Cooking | Mode::Paused)
    }

    /// Process an event and return the next mode
    ///
    /// This is the core transition logic. Events that do not apply to
    /// the current mode leave it unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Mode::*;

        match (self, event) {
            // Door preemption wins from every mode
            (_, DoorOpened) => DoorOpen,
            (DoorOpen, DoorClosed(previous)) if previous != DoorOpen => previous,
            (DoorOpen, _) => DoorOpen,

            // Idle transitions
            (Idle, Configure) => Configuring,
            (Idle, StartCook) => Cooking,

            // Configuring transitions
            (Configuring, ConfigFinalized) => Idle,
            (Configuring, Cancel) => Idle,

            // Cooking transitions
            (Cooking, Pause) => Paused,
            (Cooking, CycleComplete) => Finished,
            (Cooking, Cancel) => Idle,

            // Paused transitions
            (Paused, Resume) => Cooking,
            (Paused, Cancel) => Idle,

            // Finished transitions
            (Finished, FinishCleared) => Idle,

            // Default: stay in current mode
            _ => self,
        }
    }
}

/// Current mode plus the mode saved by door preemption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeMachine {
    current: Mode,
    /// Mode to restore when the door closes; never `DoorOpen`
    previous: Mode,
}

impl Default for ModeMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeMachine {
    /// Create a machine in `Idle`
    pub const fn new() -> Self {
        Self {
            current: Mode::Idle,
            previous: Mode::Idle,
        }
    }

    /// Current mode
    pub fn current(&self) -> Mode {
        self.current
    }

    /// Mode that will be restored when the door closes
    pub fn previous(&self) -> Mode {
        self.previous
    }

    /// Apply an ordinary event, returning the new mode
    pub fn apply(&mut self, event: Event) -> Mode {
        let next = self.current.transition(event);
        self.set(next);
        next
    }

    /// Apply the door sample for this tick
    ///
    /// Returns true if the door caused a mode change.
    pub fn resolve_door(&mut self, door_closed: bool) -> bool {
        let preempted = self.current == Mode::DoorOpen;

        if !door_closed && !preempted {
            self.previous = self.current;
            let next = self.current.transition(Event::DoorOpened);
            self.set(next);
            true
        } else if door_closed && preempted {
            let restored = self.current.transition(Event::DoorClosed(self.previous));
            self.set(restored);
            true
        } else {
            false
        }
    }

    /// Return to `Idle` after cancel, finalize or completion
    pub fn reset(&mut self) {
        self.set(Mode::Idle);
        self.previous = Mode::Idle;
    }

    fn set(&mut self, next: Mode) {
        if next != self.current {
            #[cfg(feature = "defmt")]
            defmt::debug!("mode {} -> {}", self.current, next);
            self.current = next;
        }
    }
}
