//! Phase engine
//!
//! Each elapsed cook tick performs exactly one action: show and count
//! down the current phase, switch to cooling, restart the next
//! repetition, or report completion.

use super::session::{CookSession, Phase};
use crate::screens::{self, write_padded};
use crate::traits::CharDisplay;

/// Result of polling the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleStep {
    /// Tick interval not elapsed yet
    Waiting,
    /// One phase action performed
    Advanced,
    /// Last repetition done; carries the phase that ran out
    Completed(Phase),
}

/// Cook cycle engine
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CookCycleEngine {
    session: CookSession,
    /// Clock reading of the last tick (ms)
    last_tick_ms: u32,
    /// Tick interval (ms)
    tick_ms: u32,
}

impl CookCycleEngine {
    /// Start a session; the first tick fires one interval after `now_ms`
    pub fn start(session: CookSession, now_ms: u32, tick_ms: u32) -> Self {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "session start: {} cook={}s cool={}s reps={}",
            session.label,
            session.cook_s,
            session.cool_s,
            session.total_repetitions
        );

        Self {
            session,
            last_tick_ms: now_ms,
            tick_ms,
        }
    }

    /// Active session
    pub fn session(&self) -> &CookSession {
        &self.session
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    /// Restart the tick baseline without touching the countdowns
    pub fn rebase(&mut self, now_ms: u32) {
        self.last_tick_ms = now_ms;
    }

    /// Repaint the label and the countdown value last shown
    ///
    /// Counters are left untouched.
    pub fn redraw<D: CharDisplay>(&self, display: &mut D) {
        write_padded(display, 0, 0, self.session.label);

        let line = match self.session.phase {
            Phase::Heating => {
                let shown = (self.session.remaining_cook_s + 1).min(self.session.cook_s as i32);
                screens::heating_line(shown)
            }
            Phase::Cooling => {
                let shown = (self.session.remaining_cool_s + 1).min(self.session.cool_s as i32);
                screens::cooling_line(shown)
            }
        };
        write_padded(display, 1, 0, &line);
    }

    /// Advance if a full tick has elapsed since the last one
    ///
    /// Overrun is not compensated; a late poll simply starts the next
    /// interval late.
    pub fn poll<D: CharDisplay>(&mut self, now_ms: u32, display: &mut D) -> CycleStep {
        if now_ms.wrapping_sub(self.last_tick_ms) < self.tick_ms {
            return CycleStep::Waiting;
        }
        self.last_tick_ms = now_ms;
        self.advance(display)
    }

    /// Perform one tick action unconditionally
    pub fn advance<D: CharDisplay>(&mut self, display: &mut D) -> CycleStep {
        write_padded(display, 0, 0, self.session.label);

        match self.session.phase {
            Phase::Heating => {
                if self.session.remaining_cook_s >= 0 {
                    let line = screens::heating_line(self.session.remaining_cook_s);
                    write_padded(display, 1, 0, &line);
                    self.session.remaining_cook_s -= 1;
                    CycleStep::Advanced
                } else if self.session.cool_s > 0 {
                    // Cool countdown was primed at start or restart
                    self.session.phase = Phase::Cooling;
                    CycleStep::Advanced
                } else {
                    self.finish_repetition(Phase::Heating)
                }
            }
            Phase::Cooling => {
                if self.session.remaining_cool_s >= 0 {
                    let line = screens::cooling_line(self.session.remaining_cool_s);
                    write_padded(display, 1, 0, &line);
                    self.session.remaining_cool_s -= 1;
                    CycleStep::Advanced
                } else {
                    self.finish_repetition(Phase::Cooling)
                }
            }
        }
    }

    fn finish_repetition(&mut self, ended: Phase) -> CycleStep {
        self.session.remaining_repetitions = self.session.remaining_repetitions.saturating_sub(1);

        if self.session.remaining_repetitions > 0 {
            self.session.restart_cycle();
            CycleStep::Advanced
        } else {
            #[cfg(feature = "defmt")]
            defmt::debug!("session complete: {}", self.session.label);
            CycleStep::Completed(ended)
        }
    }
}
