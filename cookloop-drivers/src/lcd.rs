//! HD44780 16x2 LCD behind a PCF8574 I2C expander
//!
//! The common "I2C backpack" wiring puts the controller in 4-bit mode:
//! expander bits P4-P7 carry D4-D7 and the low bits carry RS, RW, EN
//! and the backlight.

use cookloop_core::traits::{CharDisplay, DISPLAY_COLS, DISPLAY_ROWS};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Usual backpack address
pub const LCD_ADDRESS: u8 = 0x27;

/// Expander bits
mod pin {
    pub const RS: u8 = 0x01;
    pub const EN: u8 = 0x04;
    pub const BACKLIGHT: u8 = 0x08;
}

/// HD44780 commands
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    pub const DISPLAY_ON: u8 = 0x0C;
    pub const FUNCTION_4BIT_2LINE: u8 = 0x28;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// DDRAM address of the first cell of each row
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// 16x2 character LCD driver
pub struct Lcd1602<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    backlight: bool,
}

impl<I2C, D> Lcd1602<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a new driver; call [`Lcd1602::init`] before use
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            backlight: true,
        }
    }

    /// Run the 4-bit initialization sequence
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        // Power-on settle
        self.delay.delay_ms(50);
        self.expander_write(0)?;

        // Force 8-bit mode three times, then switch to 4-bit
        self.write_nibble(0x03, 0)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x03, 0)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x03, 0)?;
        self.delay.delay_us(150);
        self.write_nibble(0x02, 0)?;

        self.command(cmd::FUNCTION_4BIT_2LINE)?;
        self.command(cmd::DISPLAY_ON)?;
        self.clear_screen()?;
        self.command(cmd::ENTRY_MODE_INCREMENT)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("LCD ready at {=u8:#x}", self.address);

        Ok(())
    }

    /// Clear the screen and home the cursor
    pub fn clear_screen(&mut self) -> Result<(), I2C::Error> {
        self.command(cmd::CLEAR)?;
        self.delay.delay_us(2000);
        Ok(())
    }

    /// Move the cursor; out-of-range positions are clamped
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), I2C::Error> {
        let row = row.min(DISPLAY_ROWS - 1) as usize;
        let col = col.min(DISPLAY_COLS - 1);
        self.command(cmd::SET_DDRAM_ADDR | (ROW_OFFSETS[row] + col))
    }

    /// Write text from the cursor, stopping at the end of the row
    pub fn write_str_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), I2C::Error> {
        if row >= DISPLAY_ROWS || col >= DISPLAY_COLS {
            return Ok(());
        }

        self.set_cursor(row, col)?;
        let room = (DISPLAY_COLS - col) as usize;
        for ch in text.chars().take(room) {
            let byte = if ch.is_ascii() { ch as u8 } else { b'?' };
            self.data(byte)?;
        }
        Ok(())
    }

    /// Switch the backlight
    pub fn set_backlight(&mut self, on: bool) -> Result<(), I2C::Error> {
        self.backlight = on;
        self.expander_write(0)
    }

    fn command(&mut self, value: u8) -> Result<(), I2C::Error> {
        self.send(value, 0)
    }

    fn data(&mut self, value: u8) -> Result<(), I2C::Error> {
        self.send(value, pin::RS)
    }

    fn send(&mut self, value: u8, mode: u8) -> Result<(), I2C::Error> {
        self.write_nibble(value >> 4, mode)?;
        self.write_nibble(value & 0x0F, mode)
    }

    /// Latch one nibble with an EN pulse
    fn write_nibble(&mut self, nibble: u8, mode: u8) -> Result<(), I2C::Error> {
        let bits = (nibble << 4) | mode;
        self.expander_write(bits | pin::EN)?;
        self.delay.delay_us(1);
        self.expander_write(bits)?;
        self.delay.delay_us(50);
        Ok(())
    }

    fn expander_write(&mut self, bits: u8) -> Result<(), I2C::Error> {
        let backlight = if self.backlight { pin::BACKLIGHT } else { 0 };
        self.i2c.write(self.address, &[bits | backlight])
    }
}

impl<I2C, D> CharDisplay for Lcd1602<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn clear(&mut self) {
        if self.clear_screen().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("LCD clear failed");
        }
    }

    fn write_at(&mut self, row: u8, col: u8, text: &str) {
        if self.write_str_at(row, col, text).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("LCD write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
    use heapless::Vec;

    /// I2C bus recording every byte written
    struct MockBus {
        address: Option<u8>,
        bytes: Vec<u8, 1024>,
        fail: bool,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                address: None,
                bytes: Vec::new(),
                fail: false,
            }
        }

        /// Nibbles latched on each EN falling edge, with the RS level
        fn nibbles(&self) -> Vec<(bool, u8), 512> {
            let mut nibbles = Vec::new();
            for pair in self.bytes.windows(2) {
                if pair[0] & pin::EN != 0 && pair[1] & pin::EN == 0 {
                    let _ = nibbles.push((pair[1] & pin::RS != 0, pair[1] >> 4));
                }
            }
            nibbles
        }

        /// Controller bytes rebuilt from nibble pairs after `skip` nibbles
        fn decoded(&self, skip: usize) -> Vec<(bool, u8), 256> {
            let mut out = Vec::new();
            for pair in self.nibbles()[skip..].chunks(2) {
                if let [(rs, hi), (_, lo)] = pair {
                    let _ = out.push((*rs, (hi << 4) | lo));
                }
            }
            out
        }
    }

    impl ErrorType for MockBus {
        type Error = ErrorKind;
    }

    impl I2c for MockBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            self.address = Some(address);
            for op in operations {
                if let Operation::Write(data) = op {
                    for b in data.iter() {
                        let _ = self.bytes.push(*b);
                    }
                }
            }
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn ready_lcd() -> Lcd1602<MockBus, NoDelay> {
        let mut lcd = Lcd1602::new(MockBus::new(), NoDelay, LCD_ADDRESS);
        lcd.init().unwrap();
        lcd
    }

    #[test]
    fn test_init_sequence() {
        let lcd = ready_lcd();
        assert_eq!(lcd.i2c.address, Some(LCD_ADDRESS));

        let nibbles = lcd.i2c.nibbles();
        assert_eq!(
            &nibbles[..4],
            &[(false, 0x3), (false, 0x3), (false, 0x3), (false, 0x2)]
        );

        let sent = lcd.i2c.decoded(4);
        assert_eq!(
            &sent[..],
            &[
                (false, cmd::FUNCTION_4BIT_2LINE),
                (false, cmd::DISPLAY_ON),
                (false, cmd::CLEAR),
                (false, cmd::ENTRY_MODE_INCREMENT),
            ]
        );
    }

    #[test]
    fn test_backlight_bit_on_every_write() {
        let lcd = ready_lcd();
        assert!(lcd.i2c.bytes.iter().all(|b| b & pin::BACKLIGHT != 0));
    }

    #[test]
    fn test_write_at_second_row() {
        let mut lcd = ready_lcd();
        lcd.i2c.bytes.clear();

        lcd.write_at(1, 3, "Hi");

        let sent = lcd.i2c.decoded(0);
        assert_eq!(
            &sent[..],
            &[(false, 0x80 | 0x43), (true, b'H'), (true, b'i')]
        );
    }

    #[test]
    fn test_text_clipped_at_row_end() {
        let mut lcd = ready_lcd();
        lcd.i2c.bytes.clear();

        lcd.write_at(0, 14, "abcd");

        let sent = lcd.i2c.decoded(0);
        assert_eq!(&sent[..], &[(false, 0x80 | 14), (true, b'a'), (true, b'b')]);
    }

    #[test]
    fn test_bus_errors_absorbed() {
        let mut lcd = ready_lcd();
        lcd.i2c.fail = true;

        assert_eq!(lcd.write_str_at(0, 0, "x"), Err(ErrorKind::Other));
        lcd.clear();
        lcd.write_at(0, 0, "still fine");
    }
}
