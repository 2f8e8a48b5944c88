//! # Memory and Intercepts
//!
//! This module provides the 64KB backing store and the per-address intercept
//! table that lets peripherals claim individual addresses or ranges.
//!
//! Every address has an optional intercept slot. Binding a range clones the
//! same shared handler into each covered slot, so one peripheral object
//! services the whole range and can tell the addresses apart from the `addr`
//! argument. The CPU consults the table on every read and write it performs
//! on behalf of executing code; raw helpers (`load`/`store`,
//! [`BusView::peek`]/[`BusView::poke`], bulk copies) bypass it.
//!
//! ## Design Principles
//!
//! - No bus errors: reads and writes always succeed, as on hardware.
//! - An intercepted read is written through to the backing array before it is
//!   returned, so the array always reflects the last value the bus carried.
//! - A write intercept may report the write handled, in which case the
//!   backing array is left untouched (how ROM stays read-only).

use std::cell::RefCell;
use std::rc::Rc;

use crate::registers::Registers;

/// Size of the address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Shared, mutable handle to an intercept. Range bindings clone this handle
/// into every covered slot.
pub type SharedIntercept = Rc<RefCell<dyn MemoryIntercept>>;

/// A peripheral hook on one or more memory addresses.
///
/// Hooks run synchronously inside the CPU access that triggered them. They
/// get a [`BusView`] for register access and raw memory access, but they must
/// not try to re-enter the CPU (step it, deliver interrupts) from inside the
/// callback.
pub trait MemoryIntercept {
    /// Called when the CPU reads `addr`. The returned byte is stored into the
    /// backing array and becomes the value the CPU sees.
    fn read(&mut self, addr: u16, bus: &mut BusView<'_>) -> u8;

    /// Called when the CPU writes `value` to `addr`. Returning `true` marks
    /// the write handled and suppresses the store to the backing array.
    fn write(&mut self, value: u8, addr: u16, bus: &mut BusView<'_>) -> bool;
}

/// The narrow capability handed to intercepts while they run.
///
/// Exposes the register file and raw memory access. Peeks and pokes go
/// straight to the backing array and never recurse into other intercepts.
pub struct BusView<'a> {
    /// The CPU register file, mutable so a hook can model DMA-style effects.
    pub regs: &'a mut Registers,
    mem: &'a mut Memory,
}

impl<'a> BusView<'a> {
    pub(crate) fn new(regs: &'a mut Registers, mem: &'a mut Memory) -> Self {
        Self { regs, mem }
    }

    /// Reads a byte from the backing array, bypassing intercepts.
    pub fn peek(&self, addr: u16) -> u8 {
        self.mem.load(addr)
    }

    /// Writes a byte to the backing array, bypassing intercepts.
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.mem.store(addr, value);
    }
}

/// 64KB flat memory with a parallel intercept table.
pub struct Memory {
    bytes: Box<[u8; MEMORY_SIZE]>,
    intercepts: Vec<Option<SharedIntercept>>,
}

impl Memory {
    /// Creates a zero-filled memory with no intercepts bound.
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; MEMORY_SIZE]),
            intercepts: vec![None; MEMORY_SIZE],
        }
    }

    /// Raw read from the backing array.
    pub fn load(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    /// Raw write to the backing array.
    pub fn store(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }

    /// Returns the intercept bound at `addr`, if any. The handle is cloned so
    /// the caller can invoke it without holding a borrow of the table.
    pub fn intercept_at(&self, addr: u16) -> Option<SharedIntercept> {
        self.intercepts[addr as usize].clone()
    }

    /// Binds `intercept` to a single address, replacing any previous binding.
    pub fn bind(&mut self, addr: u16, intercept: SharedIntercept) {
        self.intercepts[addr as usize] = Some(intercept);
    }

    /// Binds the same handler to `length` consecutive addresses starting at
    /// `start`. Ranges running past the top of memory are clamped.
    pub fn bind_range(&mut self, start: u16, length: usize, intercept: SharedIntercept) {
        let start = start as usize;
        let end = (start + length).min(MEMORY_SIZE);
        for slot in &mut self.intercepts[start..end] {
            *slot = Some(intercept.clone());
        }
    }

    /// Removes any intercepts bound in the given range. Clamped like
    /// [`bind_range`](Self::bind_range).
    pub fn clear_range(&mut self, start: u16, length: usize) {
        let start = start as usize;
        let end = (start + length).min(MEMORY_SIZE);
        for slot in &mut self.intercepts[start..end] {
            *slot = None;
        }
    }

    /// Bulk-copies `data` into the backing array at `start`, bypassing
    /// intercepts. Data running past the top of memory is clamped.
    pub fn copy(&mut self, start: u16, data: &[u8]) {
        let start = start as usize;
        let end = (start + data.len()).min(MEMORY_SIZE);
        self.bytes[start..end].copy_from_slice(&data[..end - start]);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_store_round_trip() {
        let mut mem = Memory::new();
        assert_eq!(mem.load(0x0000), 0x00);
        assert_eq!(mem.load(0xFFFF), 0x00);

        mem.store(0x1234, 0x42);
        assert_eq!(mem.load(0x1234), 0x42);
        assert_eq!(mem.load(0x1233), 0x00);
        assert_eq!(mem.load(0x1235), 0x00);
    }

    #[test]
    fn test_copy_clamps_at_top_of_memory() {
        let mut mem = Memory::new();
        mem.copy(0xFFFE, &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(mem.load(0xFFFE), 0x01);
        assert_eq!(mem.load(0xFFFF), 0x02);
        // The rest fell off the end.
        assert_eq!(mem.load(0x0000), 0x00);
    }

    #[test]
    fn test_range_binding_shares_one_handler() {
        struct Counter {
            reads: u32,
        }
        impl MemoryIntercept for Counter {
            fn read(&mut self, _addr: u16, _bus: &mut BusView<'_>) -> u8 {
                self.reads += 1;
                0xAA
            }
            fn write(&mut self, _value: u8, _addr: u16, _bus: &mut BusView<'_>) -> bool {
                false
            }
        }

        let mut mem = Memory::new();
        let counter = Rc::new(RefCell::new(Counter { reads: 0 }));
        mem.bind_range(0xD000, 4, counter.clone());

        let mut regs = Registers::new();
        for addr in 0xD000..0xD004u16 {
            let hook = mem.intercept_at(addr).unwrap();
            let mut bus = BusView::new(&mut regs, &mut mem);
            hook.borrow_mut().read(addr, &mut bus);
        }
        assert_eq!(counter.borrow().reads, 4);
        assert!(mem.intercept_at(0xCFFF).is_none());
        assert!(mem.intercept_at(0xD004).is_none());
    }

    #[test]
    fn test_bind_range_clamps_at_top_of_memory() {
        struct Nop;
        impl MemoryIntercept for Nop {
            fn read(&mut self, _addr: u16, _bus: &mut BusView<'_>) -> u8 {
                0
            }
            fn write(&mut self, _value: u8, _addr: u16, _bus: &mut BusView<'_>) -> bool {
                true
            }
        }

        let mut mem = Memory::new();
        mem.bind_range(0xFFFC, 100, Rc::new(RefCell::new(Nop)));
        assert!(mem.intercept_at(0xFFFC).is_some());
        assert!(mem.intercept_at(0xFFFF).is_some());
        assert!(mem.intercept_at(0x0000).is_none());

        mem.clear_range(0xFFFC, 100);
        assert!(mem.intercept_at(0xFFFF).is_none());
    }
}
