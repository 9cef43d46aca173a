// src/uart/line.rs

//! Numeric line input with local echo and backspace editing

use super::constants::{
    ASCII_BACKSPACE, ASCII_CR, ASCII_DELETE, ASCII_LF, ERASE_SEQUENCE, LINE_CAPACITY,
    LINE_MAX_CHARS,
};
use super::io::SerialIo;
use crate::convert::parse_leading_number;

/// Caller-owned, NUL-terminated input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    bytes: [u8; LINE_CAPACITY],
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: [0; LINE_CAPACITY],
        }
    }

    /// Contents up to the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        let len = self.len();
        &self.bytes[..len]
    }

    /// Contents as text. Only digits and `.` are ever stored.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.bytes
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(LINE_CAPACITY)
    }

    pub fn is_empty(&self) -> bool {
        self.bytes[0] == 0
    }

    /// Raw storage including the terminator and any stale bytes after it.
    pub fn raw(&self) -> &[u8; LINE_CAPACITY] {
        &self.bytes
    }

    /// Integer part of the entered number.
    pub fn leading_number(&self) -> u16 {
        parse_leading_number(self.as_bytes())
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Read one line of digits and decimal points from `io`.
///
/// CR or LF ends the line and echoes CR LF. Backspace or DEL removes the
/// last character and echoes `"\b \b"`. Anything else that is not a digit
/// or `.`, and anything past 19 characters, is dropped without echo.
/// Returns the number of characters stored.
pub fn read_line<D: SerialIo + ?Sized>(io: &mut D, line: &mut LineBuffer) -> usize {
    let mut idx = 0usize;
    loop {
        let byte = io.read_byte();
        match byte {
            ASCII_CR | ASCII_LF => {
                line.bytes[idx] = 0;
                io.write_byte(ASCII_CR);
                io.write_byte(ASCII_LF);
                return idx;
            }
            ASCII_BACKSPACE | ASCII_DELETE if idx > 0 => {
                idx -= 1;
                line.bytes[idx] = 0;
                io.write_string(ERASE_SEQUENCE);
            }
            b'0'..=b'9' | b'.' if idx < LINE_MAX_CHARS => {
                line.bytes[idx] = byte;
                idx += 1;
                io.write_byte(byte);
            }
            _ => {}
        }
    }
}
