// src/uart/mod.rs

//! Polled USART driver for USART0, USART2 and USART3
//!
//! Provides blocking byte and line I/O with:
//! - Baud divisor derived from a fixed clock (`clock / (16 * baud) - 1`)
//! - Configurable character size, parity and stop bits
//! - LF to CR LF translation on string output
//! - Numeric line input with local echo and backspace editing
//!
//! # Liveness
//!
//! Transmit and receive spin on the hardware status flags with no timeout.
//! A transmitter that never drains, or a read from the unsupported
//! selector 1, never returns.

pub mod backend;
pub mod constants;
mod error;
pub mod io;
pub mod line;
pub mod ports;
pub mod sim;

pub use backend::{DefaultBackend, MmioBackend, Register, UsartHardware};
pub use error::UartError;
pub use io::SerialIo;
pub use line::{LineBuffer, read_line};
pub use ports::{PortId, Selected, UartPorts, Usart, baud_divisor, frame_format};
pub use sim::SimulatedUsart;
