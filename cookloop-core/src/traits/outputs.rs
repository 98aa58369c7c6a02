//! Simple output sinks: interior light and buzzer

/// Trait for the interior light
pub trait Light {
    /// Turn the light on or off
    fn set_on(&mut self, on: bool);
}

/// Trait for the piezo buzzer
pub trait Buzzer {
    /// Emit a continuous square-wave tone
    ///
    /// Calling again with the same frequency must not restart the wave.
    fn tone(&mut self, freq_hz: u16);

    /// Stop any tone
    fn silence(&mut self);
}
