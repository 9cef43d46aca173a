// src/uart/error.rs

//! Error types for the USART driver
//!
//! Hardware paths never fail; these only surface from the typed entry
//! points that validate caller input.

/// Rejected caller input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartError {
    /// Selector does not name a supported USART instance
    UnsupportedPort(u8),
    /// Color index outside the terminal color table
    ColorOutOfRange(u8),
}

impl core::fmt::Display for UartError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UartError::UnsupportedPort(selector) => {
                write!(f, "USART selector {} is not supported", selector)
            }
            UartError::ColorOutOfRange(index) => {
                write!(f, "Terminal color index {} out of range", index)
            }
        }
    }
}
