// src/lib.rs
//! Tiny UART - polled serial driver for ATmega2560-class microcontrollers
//!
//! Blocking byte, string and numeric line I/O on USART0, USART2 and USART3,
//! ANSI cursor and color control, and small digit conversion helpers.
//! Everything is allocation free; port state lives in a [`UartPorts`]
//! value owned by the application.
//!
//! ```no_run
//! use tiny_uart::{LineBuffer, UartPorts};
//!
//! let mut ports = unsafe { UartPorts::atmega2560() };
//! ports.initialize(0, 9600, 8, 0, 1);
//! ports.clear_screen(0);
//! ports.gotoxy(0, 1, 1);
//! ports.write_string(0, "Setpoint: ");
//! let mut line = LineBuffer::new();
//! ports.read_line(0, &mut line);
//! let setpoint = line.leading_number();
//! tiny_uart::uart_println!(ports.select(0), "ok {}", setpoint);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod console;
pub mod convert;
pub mod logger;
pub mod mmio;
pub mod terminal;
pub mod uart;

pub use config::{DEFAULT_BAUD, F_CPU, LineConfig, Parity, StopBits};
pub use convert::{Digits, parse_leading_number, to_digits};
pub use logger::UartLogger;
pub use terminal::{TerminalColor, clear_screen, gotoxy, set_color, set_terminal_color};
pub use uart::{
    LineBuffer, PortId, SerialIo, SimulatedUsart, UartError, UartPorts, Usart, UsartHardware,
};
