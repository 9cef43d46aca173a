// src/terminal/mod.rs

//! ANSI terminal control over a serial device
//!
//! The byte sequences are fixed: `ESC[2J ESC[H` clears and homes,
//! `ESC[<code>m` selects a color and `ESC[<row>;<col>H` moves the cursor.

mod color;

pub use color::{ANSI_COLORS, TerminalColor};

use crate::convert::to_digits;
use crate::uart::{SerialIo, UartError};

/// Control sequence introducer
pub const CSI: &[u8] = b"\x1B[";
/// Clear screen, then cursor home
pub const CLEAR_AND_HOME: &[u8] = b"\x1B[2J\x1B[H";

pub fn clear_screen<D: SerialIo + ?Sized>(io: &mut D) {
    io.write_string(CLEAR_AND_HOME);
}

/// Select the color at `index` in [`ANSI_COLORS`].
///
/// An index past the table sends nothing and returns
/// [`UartError::ColorOutOfRange`].
pub fn set_color<D: SerialIo + ?Sized>(io: &mut D, index: u8) -> Result<(), UartError> {
    let color = TerminalColor::from_index(index).ok_or(UartError::ColorOutOfRange(index))?;
    set_terminal_color(io, color);
    Ok(())
}

pub fn set_terminal_color<D: SerialIo + ?Sized>(io: &mut D, color: TerminalColor) {
    io.write_string(CSI);
    io.write_string(to_digits(u16::from(color.ansi_code()), 10).as_bytes());
    io.write_byte(b'm');
}

/// Move the cursor to column `x`, row `y`.
pub fn gotoxy<D: SerialIo + ?Sized>(io: &mut D, x: u8, y: u8) {
    io.write_string(CSI);
    io.write_string(to_digits(u16::from(y), 10).as_bytes());
    io.write_byte(b';');
    io.write_string(to_digits(u16::from(x), 10).as_bytes());
    io.write_byte(b'H');
}
