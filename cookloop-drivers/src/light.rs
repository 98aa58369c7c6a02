//! GPIO interior light
//!
//! Lamp driven from a GPIO pin, directly or through a relay/MOSFET.

use cookloop_core::traits::Light;
use embedded_hal::digital::OutputPin;

/// GPIO light output
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioLight<P> {
    pin: P,
    /// If true, light ON = pin LOW
    inverted: bool,
    /// Current logical state (true = light on)
    on: bool,
}

impl<P: OutputPin> GpioLight<P> {
    /// Create a new GPIO light output, initially off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, light is ON when pin is LOW (active-low relay boards)
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut light = Self {
            pin,
            inverted,
            on: false,
        };
        let _ = light.set(false);
        light
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Drive the pin for the requested state
    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        if on != self.inverted {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.on = on;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl<P: OutputPin> Light for GpioLight<P> {
    fn set_on(&mut self, on: bool) {
        if self.set(on).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("light pin write failed");
        }
    }
}
