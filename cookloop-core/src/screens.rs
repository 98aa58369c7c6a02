//! Screen rendering
//!
//! Builds the text shown on the 16x2 display for each mode. Every
//! helper writes whole lines padded with spaces so stale characters
//! from a previous screen never survive.

use core::fmt::Write;

use heapless::String;

use crate::traits::{CharDisplay, DISPLAY_COLS};

/// One display line worth of text
pub type Line = String<{ DISPLAY_COLS as usize }>;

/// Cancellation message, also used when configuration is finalized
pub const CANCELLED: &str = "Cancelado";
/// Shown when an active cook is suspended
pub const PAUSED: &str = "Pausado p.abiert";
/// Shown while a paused cook resumes
pub const RESUMING: &str = "Reanudando";
/// Completion message when the last phase was heating
pub const COMPLETED: &str = "Completado";
/// Completion message when the last phase was cooling
pub const FINISHED: &str = "Terminado!";
/// Empty numeric entry
pub const ENTER_VALUE: &str = "Enter a value";
/// Zero cook time rejected
pub const MUST_BE_POSITIVE: &str = "Debe mas que 0";

/// Writer that drops everything past the display width
struct Truncating<'a>(&'a mut Line);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Build a line from format arguments, truncating at the display width
pub fn format_line(args: core::fmt::Arguments<'_>) -> Line {
    let mut line = Line::new();
    let _ = Truncating(&mut line).write_fmt(args);
    line
}

/// Write `text` at `col`, padding the rest of the row with spaces
pub fn write_padded<D: CharDisplay>(display: &mut D, row: u8, col: u8, text: &str) {
    let width = DISPLAY_COLS.saturating_sub(col) as usize;
    let mut line = Line::new();
    for c in text.chars().take(width) {
        let _ = line.push(c);
    }
    while line.len() < width {
        let _ = line.push(' ');
    }
    display.write_at(row, col, &line);
}

/// Home menu listing the four program keys
pub fn show_home<D: CharDisplay>(display: &mut D) {
    display.clear();
    display.write_at(0, 0, "A:Calen B:Descon");
    display.write_at(1, 0, "C:Recal D:Person");
}

/// Clear and show a one-line message
pub fn show_message<D: CharDisplay>(display: &mut D, text: &str) {
    display.clear();
    write_padded(display, 0, 0, text);
}

/// Clear and show a message on the second line only
pub fn show_message_below<D: CharDisplay>(display: &mut D, text: &str) {
    display.clear();
    write_padded(display, 1, 0, text);
}

/// Cook start banner
pub fn show_starting<D: CharDisplay>(display: &mut D) {
    display.clear();
    display.write_at(0, 0, "   Comenzando   ");
}

/// Close-the-door prompt
///
/// `resumable` selects the second line: an interrupted cook continues,
/// anything else starts fresh.
pub fn show_door_prompt<D: CharDisplay>(display: &mut D, resumable: bool) {
    write_padded(display, 0, 0, "Cierre la puerta");
    if resumable {
        write_padded(display, 1, 0, "Para continuar");
    } else {
        write_padded(display, 1, 0, "Para iniciar");
    }
}

/// Heating countdown line
pub fn heating_line(remaining_s: i32) -> Line {
    format_line(format_args!("Calentando:{} s  ", remaining_s))
}

/// Cooling countdown line
pub fn cooling_line(remaining_s: i32) -> Line {
    format_line(format_args!("Esperando: {} s  ", remaining_s))
}

/// Numeric entry echo for the configuration wizard
pub fn entry_line(digits: &str) -> Line {
    format_line(format_args!("-> {} seg", digits))
}
