//! PWM piezo buzzer
//!
//! Square wave at 50% duty from one PWM slice output.

use defmt::*;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::traits::ToFixed;

use cookloop_core::traits::Buzzer;

/// Clock divider; keeps 300 Hz to 2 kHz within the 16-bit counter
const DIVIDER: u8 = 64;

pub struct PwmBuzzer {
    pwm: Pwm<'static>,
    config: PwmConfig,
    /// Frequency playing now
    current: Option<u16>,
}

impl PwmBuzzer {
    /// Take over a PWM output, initially silent
    pub fn new(mut pwm: Pwm<'static>) -> Self {
        let mut config = PwmConfig::default();
        config.divider = DIVIDER.to_fixed();
        config.compare_a = 0;
        pwm.set_config(&config);

        Self {
            pwm,
            config,
            current: None,
        }
    }

    /// Counter wrap value for a frequency
    fn top_for(freq_hz: u16) -> u16 {
        let counts = clk_sys_freq() / DIVIDER as u32 / freq_hz.max(1) as u32;
        counts.saturating_sub(1).min(u16::MAX as u32) as u16
    }
}

impl Buzzer for PwmBuzzer {
    fn tone(&mut self, freq_hz: u16) {
        if self.current == Some(freq_hz) {
            return;
        }

        let top = Self::top_for(freq_hz);
        self.config.top = top;
        self.config.compare_a = top / 2;
        self.pwm.set_config(&self.config);
        self.current = Some(freq_hz);

        trace!("Buzzer {} Hz (top={})", freq_hz, top);
    }

    fn silence(&mut self) {
        if self.current.is_none() {
            return;
        }

        self.config.compare_a = 0;
        self.pwm.set_config(&self.config);
        self.current = None;
    }
}
