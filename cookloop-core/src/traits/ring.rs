//! LED ring trait and frame type

/// Number of pixels on the ring
pub const RING_PIXELS: usize = 16;

/// One pixel colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pixel off
    pub const OFF: Self = Self::new(0, 0, 0);

    /// Full-brightness white
    pub const WHITE: Self = Self::grey(255);

    /// Create a colour from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// White at the given brightness
    pub const fn grey(level: u8) -> Self {
        Self::new(level, level, level)
    }
}

/// A complete ring image
pub type RingFrame = [Rgb; RING_PIXELS];

/// Trait for the addressable LED ring
pub trait LedRing {
    /// Replace every pixel and latch the new frame onto the LEDs
    fn show(&mut self, frame: &RingFrame);
}
