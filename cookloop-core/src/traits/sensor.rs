//! Input samples: door switch and millisecond clock

/// Trait for the door switch
pub trait DoorSensor {
    /// Sample the door, `true` when it is closed
    fn is_closed(&mut self) -> bool;
}

/// Monotonic millisecond clock
///
/// The counter wraps; consumers compare readings with `wrapping_sub`.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch
    fn now_ms(&self) -> u32;
}
