//! Board wiring
//!
//! Binds the core's peripheral traits to concrete RP2040 drivers.
//! Pin assignments live in `main`.

use embassy_rp::gpio::{Input, Output};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Delay, Instant};
use embedded_hal::delay::DelayNs;

use cookloop_core::traits::{Clock, LedRing, RingFrame};
use cookloop_core::Board;
use cookloop_drivers::{GpioDoorSensor, GpioLight, Lcd1602, MatrixKeypad};

use crate::buzzer::PwmBuzzer;
use crate::channels::RING_FRAME;

/// RP2040 appliance board
pub struct RpBoard;

impl Board for RpBoard {
    type Keypad = MatrixKeypad<Output<'static>, Input<'static>, Delay>;
    type Door = GpioDoorSensor<Input<'static>>;
    type Display = Lcd1602<I2c<'static, I2C0, Blocking>, Delay>;
    type Light = GpioLight<Output<'static>>;
    type Buzzer = PwmBuzzer;
    type Ring = SignalRing;
    type Time = BoardTime;
}

/// Ring handle that forwards frames to the ring task
pub struct SignalRing;

impl LedRing for SignalRing {
    fn show(&mut self, frame: &RingFrame) {
        RING_FRAME.signal(*frame);
    }
}

/// Uptime clock with blocking delays
pub struct BoardTime {
    start: Instant,
    delay: Delay,
}

impl BoardTime {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            delay: Delay,
        }
    }
}

impl Clock for BoardTime {
    fn now_ms(&self) -> u32 {
        // Wraps after ~49 days; consumers use wrapping arithmetic
        self.start.elapsed().as_millis() as u32
    }
}

impl DelayNs for BoardTime {
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_ns(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
