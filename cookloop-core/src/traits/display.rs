//! Character display trait for the 16x2 status display

/// Number of character rows on the status display
pub const DISPLAY_ROWS: u8 = 2;

/// Number of character columns on the status display
pub const DISPLAY_COLS: u8 = 16;

/// Trait for the character display
///
/// The display is a dumb sink: the appliance decides what goes where.
/// Text written past the last column is dropped by the implementation.
pub trait CharDisplay {
    /// Clear the entire screen and home the cursor
    fn clear(&mut self);

    /// Write text starting at a position
    ///
    /// - `row`: Row number (0-1)
    /// - `col`: Column number (0-15)
    /// - `text`: ASCII text, overwriting whatever was there
    fn write_at(&mut self, row: u8, col: u8, text: &str);
}
