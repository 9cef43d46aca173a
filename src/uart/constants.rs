// src/uart/constants.rs

//! Register layout and bit definitions for the ATmega2560 USART blocks

/// Register offsets from an instance base address
pub mod register_offset {
    pub const STATUS_A: usize = 0;
    pub const CONTROL_B: usize = 1;
    pub const CONTROL_C: usize = 2;
    pub const BAUD_LOW: usize = 4;
    pub const BAUD_HIGH: usize = 5;
    pub const DATA: usize = 6;
}

/// Data-space base address of each supported instance
pub mod base_addr {
    pub const USART0: usize = 0xC0;
    pub const USART2: usize = 0xD0;
    pub const USART3: usize = 0x130;
}

/// UCSRnA: receive complete
pub const RXC: u32 = 7;
/// UCSRnA: data register empty
pub const UDRE: u32 = 5;

/// UCSRnB: receiver enable
pub const RXEN: u32 = 4;
/// UCSRnB: transmitter enable
pub const TXEN: u32 = 3;

/// UCSRnC: parity mode, high bit
pub const UPM1: u32 = 5;
/// UCSRnC: parity mode, low bit
pub const UPM0: u32 = 4;
/// UCSRnC: two stop bits
pub const USBS: u32 = 3;
/// UCSRnC: character size, bit 1
pub const UCSZ1: u32 = 2;
/// UCSRnC: character size, bit 0
pub const UCSZ0: u32 = 1;

/// Number of hardware instances reachable through a selector
pub const PORT_COUNT: usize = 3;

/// Line buffer size including the NUL terminator
pub const LINE_CAPACITY: usize = 20;
/// Characters a line may hold before input is discarded
pub const LINE_MAX_CHARS: usize = LINE_CAPACITY - 1;

pub const ASCII_BACKSPACE: u8 = 0x08;
pub const ASCII_DELETE: u8 = 0x7F;
pub const ASCII_CR: u8 = b'\r';
pub const ASCII_LF: u8 = b'\n';

/// Echo that visually removes the previous character
pub const ERASE_SEQUENCE: &[u8] = b"\x08 \x08";
