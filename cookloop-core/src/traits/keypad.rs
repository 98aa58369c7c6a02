//! Keypad trait and key symbols

use crate::config::Slot;

/// A key on the 4x4 matrix keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Numeric key `0`-`9`
    Digit(u8),
    /// Program key `A`-`D`
    Program(Slot),
    /// `*`, cancel
    Star,
    /// `#`, configure / confirm
    Hash,
}

impl Key {
    /// Map a keymap character to a key
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Key::Digit(c as u8 - b'0')),
            'A'..='D' => Slot::from_index(c as usize - 'A' as usize).map(Key::Program),
            '*' => Some(Key::Star),
            '#' => Some(Key::Hash),
            _ => None,
        }
    }

    /// Keymap character for this key
    pub fn as_char(self) -> char {
        match self {
            Key::Digit(d) => (b'0' + d.min(9)) as char,
            Key::Program(slot) => slot.letter(),
            Key::Star => '*',
            Key::Hash => '#',
        }
    }
}

/// Trait for the keypad
pub trait Keypad {
    /// Return the key pressed since the last poll, if any
    ///
    /// At most one key is reported per call.
    fn poll_key(&mut self) -> Option<Key>;
}
