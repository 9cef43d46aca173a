// src/console.rs

//! Formatted output on top of any [`SerialIo`] device

use crate::uart::SerialIo;
use core::fmt;

/// `fmt::Write` adapter; newlines go out as CR LF, NUL is sent as-is.
pub struct Console<'a, D: ?Sized> {
    io: &'a mut D,
}

impl<'a, D: SerialIo + ?Sized> Console<'a, D> {
    pub fn new(io: &'a mut D) -> Self {
        Self { io }
    }
}

impl<D: ?Sized> fmt::Debug for Console<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

impl<D: SerialIo + ?Sized> fmt::Write for Console<'_, D> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.io.write_crlf(s.as_bytes());
        Ok(())
    }
}

#[doc(hidden)]
pub fn print_to<D: SerialIo + ?Sized>(io: &mut D, args: fmt::Arguments<'_>) {
    use fmt::Write;
    // Output cannot fail; only a user Display impl can return Err here
    let _ = Console::new(io).write_fmt(args);
}

/// Prints to a serial device.
///
/// ```ignore
/// uart_print!(ports.select(0), "T={}", reading);
/// ```
#[macro_export]
macro_rules! uart_print {
    ($io:expr, $($arg:tt)*) => {
        $crate::console::print_to(&mut $io, format_args!($($arg)*))
    };
}

/// Prints to a serial device, appending a newline (sent as CR LF).
#[macro_export]
macro_rules! uart_println {
    ($io:expr) => ($crate::uart_print!($io, "\n"));
    ($io:expr, $fmt:expr) => ($crate::uart_print!($io, concat!($fmt, "\n")));
    ($io:expr, $fmt:expr, $($arg:tt)*) => ($crate::uart_print!($io, concat!($fmt, "\n"), $($arg)*));
}
