// src/uart/sim.rs

//! In-memory USART model
//!
//! Behaves like one register block: writes to `Data` are captured,
//! queued input shows up through `RXC` and `Data` reads, and `UDRE` can be
//! held low for a number of polls to exercise the transmit wait. No
//! allocation, so it builds wherever the driver builds.

use super::backend::{Register, UsartHardware};
use super::constants::{RXC, UDRE};
use crate::mmio::BitField;

/// Bytes the model remembers as transmitted
pub const TX_CAPACITY: usize = 256;
/// Bytes that can be queued for reception
pub const RX_CAPACITY: usize = 64;

/// Simulated register block
#[derive(Debug, Clone)]
pub struct SimulatedUsart {
    control_b: u8,
    control_c: u8,
    baud_low: u8,
    baud_high: u8,
    tx: [u8; TX_CAPACITY],
    tx_len: usize,
    rx: [u8; RX_CAPACITY],
    rx_head: usize,
    rx_len: usize,
    stalled_polls: u32,
    status_polls: u32,
}

impl SimulatedUsart {
    pub const fn new() -> Self {
        Self {
            control_b: 0,
            control_c: 0,
            baud_low: 0,
            baud_high: 0,
            tx: [0; TX_CAPACITY],
            tx_len: 0,
            rx: [0; RX_CAPACITY],
            rx_head: 0,
            rx_len: 0,
            stalled_polls: 0,
            status_polls: 0,
        }
    }

    /// Queue bytes for the receiver. Bytes beyond the free capacity are
    /// dropped; the number accepted is returned.
    pub fn feed(&mut self, bytes: &[u8]) -> usize {
        let mut accepted = 0;
        for &byte in bytes {
            if self.rx_len == RX_CAPACITY {
                break;
            }
            let slot = (self.rx_head + self.rx_len) % RX_CAPACITY;
            self.rx[slot] = byte;
            self.rx_len += 1;
            accepted += 1;
        }
        accepted
    }

    /// Report the transmitter busy for the next `polls` status reads.
    pub fn stall_transmit(&mut self, polls: u32) {
        self.stalled_polls = polls;
    }

    /// Everything written to the data register so far (up to capacity).
    pub fn transmitted(&self) -> &[u8] {
        &self.tx[..self.tx_len]
    }

    pub fn clear_transmitted(&mut self) {
        self.tx_len = 0;
    }

    /// Bytes queued but not yet read.
    pub fn pending_rx(&self) -> usize {
        self.rx_len
    }

    /// Number of times `StatusA` has been read.
    pub fn status_polls(&self) -> u32 {
        self.status_polls
    }

    /// Current UBRR value.
    pub fn baud_divisor(&self) -> u16 {
        u16::from(self.baud_high) << 8 | u16::from(self.baud_low)
    }

    pub fn control_b(&self) -> u8 {
        self.control_b
    }

    pub fn control_c(&self) -> u8 {
        self.control_c
    }

    fn status(&mut self) -> u8 {
        self.status_polls = self.status_polls.wrapping_add(1);
        let mut status = 0u8;
        if self.stalled_polls > 0 {
            self.stalled_polls -= 1;
        } else {
            status.set_bit(UDRE);
        }
        status.set_bit_if(RXC, self.rx_len > 0);
        status
    }

    fn pop_rx(&mut self) -> u8 {
        if self.rx_len == 0 {
            return 0;
        }
        let byte = self.rx[self.rx_head];
        self.rx_head = (self.rx_head + 1) % RX_CAPACITY;
        self.rx_len -= 1;
        byte
    }
}

impl Default for SimulatedUsart {
    fn default() -> Self {
        Self::new()
    }
}

impl UsartHardware for SimulatedUsart {
    fn write(&mut self, register: Register, value: u8) {
        match register {
            // Status flags are hardware-owned in this model
            Register::StatusA => {}
            Register::ControlB => self.control_b = value,
            Register::ControlC => self.control_c = value,
            Register::BaudLow => self.baud_low = value,
            Register::BaudHigh => self.baud_high = value,
            Register::Data => {
                if self.tx_len < TX_CAPACITY {
                    self.tx[self.tx_len] = value;
                    self.tx_len += 1;
                }
            }
        }
    }

    fn read(&mut self, register: Register) -> u8 {
        match register {
            Register::StatusA => self.status(),
            Register::ControlB => self.control_b,
            Register::ControlC => self.control_c,
            Register::BaudLow => self.baud_low,
            Register::BaudHigh => self.baud_high,
            Register::Data => self.pop_rx(),
        }
    }
}
