//! Buzzer tone selection and the finish chime

use embedded_hal::delay::DelayNs;

use crate::config::TimingConfig;
use crate::cycle::Phase;
use crate::state::Mode;
use crate::traits::Buzzer;

/// What the buzzer should be doing this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneCommand {
    Silent,
    /// Continuous tone (Hz)
    Tone(u16),
}

impl ToneCommand {
    /// Drive the buzzer to match this command
    pub fn apply<B: Buzzer>(self, buzzer: &mut B) {
        match self {
            ToneCommand::Silent => buzzer.silence(),
            ToneCommand::Tone(hz) => buzzer.tone(hz),
        }
    }
}

/// Phase tone controller
///
/// Each phase change opens a mute window. Once it has elapsed the
/// phase tone plays continuously until the door opens, the phase
/// changes again or the session ends.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneController {
    /// Phase seen on the last evaluation, `None` without a session
    phase: Option<Phase>,
    /// Clock reading of the last phase change (ms)
    phase_changed_ms: u32,
    /// Tone latch, dropped while the door is open
    enabled: bool,
}

impl Default for ToneController {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneController {
    pub const fn new() -> Self {
        Self {
            phase: None,
            phase_changed_ms: 0,
            enabled: false,
        }
    }

    /// Check if the tone latch is set
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Decide the buzzer output for this instant
    pub fn evaluate(
        &mut self,
        door_closed: bool,
        mode: Mode,
        phase: Option<Phase>,
        now_ms: u32,
        timing: &TimingConfig,
    ) -> ToneCommand {
        if phase != self.phase {
            self.phase = phase;
            self.phase_changed_ms = now_ms;
            self.enabled = false;
        }

        if !door_closed {
            self.enabled = false;
            return ToneCommand::Silent;
        }

        if mode != Mode::Cooking {
            return ToneCommand::Silent;
        }

        if now_ms.wrapping_sub(self.phase_changed_ms) >= timing.tone_mute_ms {
            self.enabled = true;
        }

        match (self.enabled, self.phase) {
            (true, Some(Phase::Heating)) => ToneCommand::Tone(timing.heating_tone_hz),
            (true, Some(Phase::Cooling)) => ToneCommand::Tone(timing.cooling_tone_hz),
            _ => ToneCommand::Silent,
        }
    }
}

/// Play the completion chime, blocking until it ends
pub fn play_finish_chime<B: Buzzer, W: DelayNs>(
    buzzer: &mut B,
    delay: &mut W,
    timing: &TimingConfig,
) {
    for _ in 0..timing.chime_beeps {
        buzzer.tone(timing.chime_tone_hz);
        delay.delay_ms(timing.chime_beep_ms);
        buzzer.silence();
        delay.delay_ms(timing.chime_gap_ms);
    }
}
