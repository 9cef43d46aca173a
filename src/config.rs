// src/config.rs

//! Clock and line format configuration

/// System clock the baud divisor is derived from
pub const F_CPU: u32 = 16_000_000;

/// Baud rate used by [`LineConfig::default_8n1`]
pub const DEFAULT_BAUD: u32 = 9600;

/// Parity mode stored per port
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parity {
    #[default]
    None = 0,
    Odd = 1,
    Even = 2,
}

impl Parity {
    /// Decode a raw parity code (0 none, 1 odd, 2 even).
    ///
    /// Unknown codes program no parity bits, so they map to `None`.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Parity::Odd,
            2 => Parity::Even,
            _ => Parity::None,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}

/// Stop bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopBits {
    #[default]
    One,
    Two,
}

impl StopBits {
    /// Only a count of exactly 2 selects two stop bits.
    pub const fn from_raw(raw: u8) -> Self {
        if raw == 2 { StopBits::Two } else { StopBits::One }
    }
}

/// Line format for one USART
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineConfig {
    pub baud_rate: u32,
    /// Kept raw: only `== 8` and `>= 8` influence the size bits
    pub data_bits: u8,
    pub parity: Parity,
    pub stop_bits: StopBits,
}

impl LineConfig {
    pub const fn new(baud_rate: u32, data_bits: u8, parity: Parity, stop_bits: StopBits) -> Self {
        Self {
            baud_rate,
            data_bits,
            parity,
            stop_bits,
        }
    }

    /// 9600 baud, 8 data bits, no parity, 1 stop bit
    pub const fn default_8n1() -> Self {
        Self::new(DEFAULT_BAUD, 8, Parity::None, StopBits::One)
    }

    pub const fn with_baud_rate(self, baud_rate: u32) -> Self {
        Self { baud_rate, ..self }
    }

    pub const fn with_data_bits(self, data_bits: u8) -> Self {
        Self { data_bits, ..self }
    }

    pub const fn with_parity(self, parity: Parity) -> Self {
        Self { parity, ..self }
    }

    pub const fn with_stop_bits(self, stop_bits: StopBits) -> Self {
        Self { stop_bits, ..self }
    }
}

impl Default for LineConfig {
    fn default() -> Self {
        Self::default_8n1()
    }
}
