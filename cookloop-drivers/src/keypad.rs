//! 4x4 matrix keypad
//!
//! Rows are outputs held high and pulled low one at a time; columns are
//! inputs with pull-ups, so a pressed key reads low on its column while
//! its row is driven. A key is reported once, when it goes down, after
//! the same reading has been seen on consecutive scans.

use cookloop_core::traits::{Key, Keypad};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

/// Rows on the pad
pub const ROWS: usize = 4;
/// Columns on the pad
pub const COLS: usize = 4;

/// Standard 4x4 membrane layout
pub const KEYMAP: [[char; COLS]; ROWS] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

/// Identical scans required before a change is accepted
const DEBOUNCE_SCANS: u8 = 2;

/// Row drive to column sample settle time (us)
const SETTLE_US: u32 = 10;

/// Scan failure on a row or column pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadError<RE, CE> {
    Row(RE),
    Col(CE),
}

/// Matrix keypad scanner
pub struct MatrixKeypad<R, C, D> {
    rows: [R; ROWS],
    cols: [C; COLS],
    delay: D,
    keymap: [[char; COLS]; ROWS],
    /// Debounced position currently held down
    held: Option<(usize, usize)>,
    /// Latest raw reading and how many scans it has persisted
    candidate: Option<(usize, usize)>,
    candidate_scans: u8,
}

impl<R, C, D> MatrixKeypad<R, C, D>
where
    R: OutputPin,
    C: InputPin,
    D: DelayNs,
{
    /// Create a scanner with the standard keymap
    pub fn new(rows: [R; ROWS], cols: [C; COLS], delay: D) -> Self {
        Self::with_keymap(rows, cols, delay, KEYMAP)
    }

    pub fn with_keymap(
        rows: [R; ROWS],
        cols: [C; COLS],
        delay: D,
        keymap: [[char; COLS]; ROWS],
    ) -> Self {
        Self {
            rows,
            cols,
            delay,
            keymap,
            held: None,
            candidate: None,
            candidate_scans: 0,
        }
    }

    /// Raw scan: first pressed position in row-major order
    pub fn scan(&mut self) -> Result<Option<(usize, usize)>, KeypadError<R::Error, C::Error>> {
        for row in self.rows.iter_mut() {
            row.set_high().map_err(KeypadError::Row)?;
        }

        let mut found = None;
        for (r, row) in self.rows.iter_mut().enumerate() {
            row.set_low().map_err(KeypadError::Row)?;
            self.delay.delay_us(SETTLE_US);

            for (c, col) in self.cols.iter_mut().enumerate() {
                if col.is_low().map_err(KeypadError::Col)? {
                    found = Some((r, c));
                    break;
                }
            }

            row.set_high().map_err(KeypadError::Row)?;
            if found.is_some() {
                break;
            }
        }

        Ok(found)
    }

    /// Feed one raw reading through the debouncer
    ///
    /// Returns the position that has just been pressed, if any.
    fn debounce(&mut self, reading: Option<(usize, usize)>) -> Option<(usize, usize)> {
        if reading != self.candidate {
            self.candidate = reading;
            self.candidate_scans = 1;
        } else if self.candidate_scans < DEBOUNCE_SCANS {
            self.candidate_scans += 1;
        }

        if self.candidate_scans < DEBOUNCE_SCANS || self.candidate == self.held {
            return None;
        }

        self.held = self.candidate;
        self.held
    }
}

impl<R, C, D> Keypad for MatrixKeypad<R, C, D>
where
    R: OutputPin,
    C: InputPin,
    D: DelayNs,
{
    fn poll_key(&mut self) -> Option<Key> {
        let reading = match self.scan() {
            Ok(reading) => reading,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("keypad scan failed");
                None
            }
        };

        let (r, c) = self.debounce(reading)?;
        let key = Key::from_char(self.keymap[r][c]);

        #[cfg(feature = "defmt")]
        if let Some(key) = key {
            defmt::debug!("key {}", key);
        }

        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookloop_core::config::Slot;
    use core::cell::Cell;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Shared wiring state: row levels (true = high) and the key held down
    struct Matrix {
        rows: Cell<[bool; ROWS]>,
        pressed: Cell<Option<(usize, usize)>>,
    }

    impl Matrix {
        fn new() -> Self {
            Self {
                rows: Cell::new([true; ROWS]),
                pressed: Cell::new(None),
            }
        }
    }

    struct RowPin<'a> {
        index: usize,
        matrix: &'a Matrix,
    }

    impl ErrorType for RowPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for RowPin<'_> {
        fn set_high(&mut self) -> Result<(), Self::Error> {
            let mut rows = self.matrix.rows.get();
            rows[self.index] = true;
            self.matrix.rows.set(rows);
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            let mut rows = self.matrix.rows.get();
            rows[self.index] = false;
            self.matrix.rows.set(rows);
            Ok(())
        }
    }

    struct ColPin<'a> {
        index: usize,
        matrix: &'a Matrix,
    }

    impl ErrorType for ColPin<'_> {
        type Error = Infallible;
    }

    impl InputPin for ColPin<'_> {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.is_low().map(|low| !low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(match self.matrix.pressed.get() {
                Some((r, c)) => c == self.index && !self.matrix.rows.get()[r],
                None => false,
            })
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn keypad(matrix: &Matrix) -> MatrixKeypad<RowPin<'_>, ColPin<'_>, NoDelay> {
        let rows = [0, 1, 2, 3].map(|index| RowPin { index, matrix });
        let cols = [0, 1, 2, 3].map(|index| ColPin { index, matrix });
        MatrixKeypad::new(rows, cols, NoDelay)
    }

    #[test]
    fn test_scan_finds_position() {
        let matrix = Matrix::new();
        let mut pad = keypad(&matrix);

        assert_eq!(pad.scan(), Ok(None));

        matrix.pressed.set(Some((2, 1)));
        assert_eq!(pad.scan(), Ok(Some((2, 1))));

        // Rows are released after the scan
        assert_eq!(matrix.rows.get(), [true; ROWS]);
    }

    #[test]
    fn test_press_reported_once_after_debounce() {
        let matrix = Matrix::new();
        let mut pad = keypad(&matrix);

        matrix.pressed.set(Some((0, 3)));
        assert_eq!(pad.poll_key(), None);
        assert_eq!(pad.poll_key(), Some(Key::Program(Slot::A)));

        // Holding does not repeat
        assert_eq!(pad.poll_key(), None);
        assert_eq!(pad.poll_key(), None);
    }

    #[test]
    fn test_bounce_is_ignored() {
        let matrix = Matrix::new();
        let mut pad = keypad(&matrix);

        matrix.pressed.set(Some((3, 0)));
        assert_eq!(pad.poll_key(), None);
        matrix.pressed.set(None);
        assert_eq!(pad.poll_key(), None);
        matrix.pressed.set(Some((3, 0)));
        assert_eq!(pad.poll_key(), None);
        assert_eq!(pad.poll_key(), Some(Key::Star));
    }

    #[test]
    fn test_release_then_press_again() {
        let matrix = Matrix::new();
        let mut pad = keypad(&matrix);

        matrix.pressed.set(Some((3, 2)));
        pad.poll_key();
        assert_eq!(pad.poll_key(), Some(Key::Hash));

        matrix.pressed.set(None);
        pad.poll_key();
        pad.poll_key();

        matrix.pressed.set(Some((3, 2)));
        pad.poll_key();
        assert_eq!(pad.poll_key(), Some(Key::Hash));
    }

    #[test]
    fn test_keymap_layout() {
        let matrix = Matrix::new();
        let mut pad = keypad(&matrix);

        matrix.pressed.set(Some((1, 1)));
        pad.poll_key();
        assert_eq!(pad.poll_key(), Some(Key::Digit(5)));

        matrix.pressed.set(Some((3, 1)));
        pad.poll_key();
        assert_eq!(pad.poll_key(), Some(Key::Digit(0)));
    }
}
