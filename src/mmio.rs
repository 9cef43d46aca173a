// src/mmio.rs
//! Memory mapped I/O helpers
//!
//! AVR peripherals live in the data address space, so every USART register
//! is reached through a volatile byte access at a fixed address.

use core::marker::PhantomData;
use core::ptr;

/// Typed memory mapped register
#[repr(transparent)]
pub struct MmioReg<T> {
    addr: usize,
    _phantom: PhantomData<T>,
}

impl<T> core::fmt::Debug for MmioReg<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MmioReg")
            .field("addr", &format_args!("{:#06x}", self.addr))
            .finish()
    }
}

impl<T: Copy> MmioReg<T> {
    /// Create a register handle without validating the address
    ///
    /// # Safety
    ///
    /// `addr` must be a valid, suitably aligned register address for the
    /// lifetime of the handle, and no other code may assume exclusive
    /// ownership of it.
    pub const unsafe fn new_unchecked(addr: usize) -> Self {
        Self {
            addr,
            _phantom: PhantomData,
        }
    }

    /// Address this handle points at
    pub const fn addr(&self) -> usize {
        self.addr
    }

    /// Read the register
    ///
    /// # Safety
    ///
    /// The address given at construction must still refer to the register.
    pub unsafe fn read(&self) -> T {
        unsafe { ptr::read_volatile(self.addr as *const T) }
    }

    /// Write the register
    ///
    /// # Safety
    ///
    /// The address given at construction must still refer to the register.
    pub unsafe fn write(&mut self, value: T) {
        unsafe { ptr::write_volatile(self.addr as *mut T, value) }
    }
}

/// Single-bit helpers for register values
pub trait BitField: Sized + Copy {
    fn set_bit(&mut self, bit: u32);
    fn clear_bit(&mut self, bit: u32);
    fn is_set(&self, bit: u32) -> bool;
    /// Set `bit` when `condition` holds, leave the value unchanged otherwise
    fn set_bit_if(&mut self, bit: u32, condition: bool) {
        if condition {
            self.set_bit(bit);
        }
    }
}

macro_rules! impl_bitfield {
    ($($t:ty),*) => {
        $(
            impl BitField for $t {
                fn set_bit(&mut self, bit: u32) {
                    *self |= 1 << bit;
                }

                fn clear_bit(&mut self, bit: u32) {
                    *self &= !(1 << bit);
                }

                fn is_set(&self, bit: u32) -> bool {
                    (*self & (1 << bit)) != 0
                }
            }
        )*
    };
}

impl_bitfield!(u8, u16);
