//! LED ring patterns

use crate::config::TimingConfig;
use crate::cycle::Phase;
use crate::state::Mode;
use crate::traits::{Rgb, RingFrame, RING_PIXELS};

/// Pixels lit by the rotating trail, head included
const TRAIL_LEN: usize = 3;

/// Ring pattern family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RingPattern {
    Off,
    /// Door open: every pixel white
    Solid,
    /// Heating: fading trail walking round the ring
    Rotating,
    /// Cooling: whole ring blinks
    Blinking,
}

impl RingPattern {
    /// Pattern for the given inputs
    pub fn select(door_closed: bool, mode: Mode, phase: Option<Phase>) -> Self {
        if !door_closed {
            return RingPattern::Solid;
        }
        match (mode, phase) {
            (Mode::Cooking, Some(Phase::Heating)) => RingPattern::Rotating,
            (Mode::Cooking, Some(Phase::Cooling)) => RingPattern::Blinking,
            _ => RingPattern::Off,
        }
    }
}

/// Animation state of the ring
///
/// Rendering at the same instant twice gives the same frame; animation
/// only moves once a full step or blink interval has elapsed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PatternRenderer {
    pattern: RingPattern,
    /// Rotating trail head position
    head: usize,
    /// Blink state
    lit: bool,
    /// Clock reading of the last animation step (ms)
    last_step_ms: u32,
}

impl Default for PatternRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternRenderer {
    pub const fn new() -> Self {
        Self {
            pattern: RingPattern::Off,
            head: 0,
            lit: true,
            last_step_ms: 0,
        }
    }

    /// Pattern drawn by the last render
    pub fn pattern(&self) -> RingPattern {
        self.pattern
    }

    /// Compute the frame for this instant
    pub fn render(
        &mut self,
        door_closed: bool,
        mode: Mode,
        phase: Option<Phase>,
        now_ms: u32,
        timing: &TimingConfig,
    ) -> RingFrame {
        let pattern = RingPattern::select(door_closed, mode, phase);
        if pattern != self.pattern {
            self.pattern = pattern;
            self.head = 0;
            self.lit = true;
            self.last_step_ms = now_ms;
        }

        let elapsed = now_ms.wrapping_sub(self.last_step_ms);
        match self.pattern {
            RingPattern::Off => [Rgb::OFF; RING_PIXELS],
            RingPattern::Solid => [Rgb::WHITE; RING_PIXELS],
            RingPattern::Rotating => {
                if elapsed >= timing.ring_step_ms {
                    self.head = (self.head + 1) % RING_PIXELS;
                    self.last_step_ms = now_ms;
                }
                trail_frame(self.head, timing.trail_fade_step)
            }
            RingPattern::Blinking => {
                let interval = if self.lit {
                    timing.blink_on_ms
                } else {
                    timing.blink_off_ms
                };
                if elapsed >= interval {
                    self.lit = !self.lit;
                    self.last_step_ms = now_ms;
                }
                if self.lit {
                    [Rgb::WHITE; RING_PIXELS]
                } else {
                    [Rgb::OFF; RING_PIXELS]
                }
            }
        }
    }
}

/// Trail with its head at `head`, fading behind it
fn trail_frame(head: usize, fade_step: u8) -> RingFrame {
    let mut frame = [Rgb::OFF; RING_PIXELS];
    for i in 0..TRAIL_LEN {
        let level = (255u16).saturating_sub(i as u16 * fade_step as u16) as u8;
        let index = (head + RING_PIXELS - i) % RING_PIXELS;
        frame[index] = Rgb::grey(level);
    }
    frame
}
