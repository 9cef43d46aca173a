// src/uart/backend.rs

//! Hardware abstraction for the USART driver.
//!
//! Register access is hidden behind a small trait so that the polling and
//! editing logic above it runs unchanged against real silicon or against
//! [`SimulatedUsart`](super::sim::SimulatedUsart) on a host.

use super::constants::{base_addr, register_offset};
use crate::mmio::MmioReg;

/// Registers that the USART driver interacts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// UCSRnA: status flags
    StatusA,
    /// UCSRnB: receiver/transmitter enables
    ControlB,
    /// UCSRnC: frame format
    ControlC,
    /// UBRRnL
    BaudLow,
    /// UBRRnH
    BaudHigh,
    /// UDRn
    Data,
}

/// Minimal abstraction over USART register access.
pub trait UsartHardware {
    /// Write a value to a USART register.
    fn write(&mut self, register: Register, value: u8);
    /// Read the current value of a USART register.
    fn read(&mut self, register: Register) -> u8;
}

/// Backend that drives the memory mapped registers of one instance.
#[derive(Debug)]
pub struct MmioBackend {
    status_a: MmioReg<u8>,
    control_b: MmioReg<u8>,
    control_c: MmioReg<u8>,
    baud_low: MmioReg<u8>,
    baud_high: MmioReg<u8>,
    data: MmioReg<u8>,
}

impl MmioBackend {
    /// Create a backend for the register block starting at `base`.
    ///
    /// # Safety
    ///
    /// `base` must be the base address of a USART register block with the
    /// ATmega2560 layout, and only one backend may exist per block.
    pub const unsafe fn at(base: usize) -> Self {
        unsafe {
            Self {
                status_a: MmioReg::new_unchecked(base + register_offset::STATUS_A),
                control_b: MmioReg::new_unchecked(base + register_offset::CONTROL_B),
                control_c: MmioReg::new_unchecked(base + register_offset::CONTROL_C),
                baud_low: MmioReg::new_unchecked(base + register_offset::BAUD_LOW),
                baud_high: MmioReg::new_unchecked(base + register_offset::BAUD_HIGH),
                data: MmioReg::new_unchecked(base + register_offset::DATA),
            }
        }
    }

    /// USART0 register block.
    ///
    /// # Safety
    ///
    /// See [`MmioBackend::at`].
    pub const unsafe fn usart0() -> Self {
        unsafe { Self::at(base_addr::USART0) }
    }

    /// USART2 register block.
    ///
    /// # Safety
    ///
    /// See [`MmioBackend::at`].
    pub const unsafe fn usart2() -> Self {
        unsafe { Self::at(base_addr::USART2) }
    }

    /// USART3 register block.
    ///
    /// # Safety
    ///
    /// See [`MmioBackend::at`].
    pub const unsafe fn usart3() -> Self {
        unsafe { Self::at(base_addr::USART3) }
    }

    /// Base address of the block this backend drives.
    pub const fn base(&self) -> usize {
        self.status_a.addr()
    }

    fn reg(&mut self, register: Register) -> &mut MmioReg<u8> {
        match register {
            Register::StatusA => &mut self.status_a,
            Register::ControlB => &mut self.control_b,
            Register::ControlC => &mut self.control_c,
            Register::BaudLow => &mut self.baud_low,
            Register::BaudHigh => &mut self.baud_high,
            Register::Data => &mut self.data,
        }
    }
}

impl UsartHardware for MmioBackend {
    #[inline]
    fn write(&mut self, register: Register, value: u8) {
        // SAFETY: the address was fixed by `MmioBackend::at`, whose caller
        // vouched for it being this instance's register block.
        unsafe { self.reg(register).write(value) }
    }

    #[inline]
    fn read(&mut self, register: Register) -> u8 {
        // SAFETY: see `write`.
        unsafe { self.reg(register).read() }
    }
}

/// Backend used on the target.
pub type DefaultBackend = MmioBackend;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_addresses() {
        let backend = unsafe { MmioBackend::usart3() };
        assert_eq!(backend.base(), 0x130);
        assert_eq!(backend.data.addr(), 0x136);
        assert_eq!(backend.baud_high.addr(), 0x135);
        assert_eq!(unsafe { MmioBackend::usart2() }.control_c.addr(), 0xD2);
    }

    #[test]
    fn test_backend_over_plain_memory() {
        let mut block = [0u8; 7];
        let mut backend = unsafe { MmioBackend::at(block.as_mut_ptr() as usize) };
        backend.write(Register::BaudLow, 103);
        backend.write(Register::ControlB, 0x18);
        assert_eq!(backend.read(Register::BaudLow), 103);
        assert_eq!(backend.read(Register::ControlB), 0x18);
        drop(backend);
        assert_eq!(block[4], 103);
        assert_eq!(block[1], 0x18);
    }
}
