// src/uart/io.rs

//! Byte-level I/O seam shared by the line editor, terminal helpers and
//! console formatting.

use super::constants::{ASCII_CR, ASCII_LF};
use super::line::{self, LineBuffer};

/// Blocking character device.
///
/// `write_byte` and `read_byte` spin on hardware flags with no timeout.
pub trait SerialIo {
    /// Wait for the transmitter to accept a byte, then send it.
    fn write_byte(&mut self, byte: u8);

    /// `true` when a received byte is waiting.
    fn is_available(&mut self) -> bool;

    /// Wait for a received byte and return it.
    fn read_byte(&mut self) -> u8;

    /// Send `text` up to its first NUL, expanding every LF to CR LF.
    fn write_string(&mut self, text: &[u8]) {
        let end = text.iter().position(|&byte| byte == 0).unwrap_or(text.len());
        self.write_crlf(&text[..end]);
    }

    /// Send every byte of `bytes`, NUL included, expanding LF to CR LF.
    fn write_crlf(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if byte == ASCII_LF {
                self.write_byte(ASCII_CR);
            }
            self.write_byte(byte);
        }
    }

    /// Read an edited numeric line into `line`; returns its length.
    fn read_line(&mut self, line: &mut LineBuffer) -> usize
    where
        Self: Sized,
    {
        line::read_line(self, line)
    }
}

impl<T: SerialIo + ?Sized> SerialIo for &mut T {
    #[inline]
    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }

    #[inline]
    fn is_available(&mut self) -> bool {
        (**self).is_available()
    }

    #[inline]
    fn read_byte(&mut self) -> u8 {
        (**self).read_byte()
    }

    fn write_string(&mut self, text: &[u8]) {
        (**self).write_string(text)
    }

    fn write_crlf(&mut self, bytes: &[u8]) {
        (**self).write_crlf(bytes)
    }
}
