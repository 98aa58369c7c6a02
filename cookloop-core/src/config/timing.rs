//! Fixed timing and tone values
//!
//! Every interval the appliance waits on lives here. The defaults are
//! the appliance values; tests may shorten them.

/// Timing and tone configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Cook cycle tick (ms)
    pub cook_tick_ms: u32,
    /// Hold time for cancel, resume, completion and validation messages (ms)
    pub message_hold_ms: u32,
    /// Rotating pattern step (ms)
    pub ring_step_ms: u32,
    /// Blink pattern on time (ms)
    pub blink_on_ms: u32,
    /// Blink pattern off time (ms)
    pub blink_off_ms: u32,
    /// Brightness lost per trailing pixel of the rotating pattern
    pub trail_fade_step: u8,
    /// Tone suppression after a phase change (ms)
    pub tone_mute_ms: u32,
    /// Heating tone (Hz)
    pub heating_tone_hz: u16,
    /// Cooling tone (Hz)
    pub cooling_tone_hz: u16,
    /// Finish chime tone (Hz)
    pub chime_tone_hz: u16,
    /// Finish chime beep length (ms)
    pub chime_beep_ms: u32,
    /// Silence after each chime beep (ms)
    pub chime_gap_ms: u32,
    /// Number of chime beeps
    pub chime_beeps: u8,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            cook_tick_ms: 1000,
            message_hold_ms: 1000,
            ring_step_ms: 100,
            blink_on_ms: 500,
            blink_off_ms: 250,
            trail_fade_step: 80,
            tone_mute_ms: 1000,
            heating_tone_hz: 300,
            cooling_tone_hz: 600,
            chime_tone_hz: 2000,
            chime_beep_ms: 100,
            chime_gap_ms: 500,
            chime_beeps: 3,
        }
    }
}

impl TimingConfig {
    /// Total time the finish chime blocks the loop (ms)
    pub fn chime_duration_ms(&self) -> u32 {
        (self.chime_beep_ms + self.chime_gap_ms) * self.chime_beeps as u32
    }
}
