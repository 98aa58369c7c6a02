//! GPIO door switch

use cookloop_core::traits::DoorSensor;
use embedded_hal::digital::InputPin;

/// Door switch on a GPIO input
///
/// By default the pin reads high when the door is closed.
pub struct GpioDoorSensor<P> {
    pin: P,
    /// If true, door closed = pin LOW
    inverted: bool,
}

impl<P: InputPin> GpioDoorSensor<P> {
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Door closed = pin HIGH
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Door closed = pin LOW
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Sample the switch
    pub fn read(&mut self) -> Result<bool, P::Error> {
        Ok(self.pin.is_high()? != self.inverted)
    }
}

impl<P: InputPin> DoorSensor for GpioDoorSensor<P> {
    fn is_closed(&mut self) -> bool {
        match self.read() {
            Ok(closed) => closed,
            // Unreadable switch counts as open, which stops any cook
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("door switch read failed");
                false
            }
        }
    }
}
