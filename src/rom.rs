//! # ROM Regions
//!
//! A canned intercept that turns an address range into read-only memory.
//! Reads serve the backing image; writes report themselves handled so the
//! underlying RAM is never touched.

use crate::memory::{BusView, MemoryIntercept};

/// Read-only memory region backed by an owned image.
///
/// Bind one over its range with [`Cpu::map_rom`](crate::Cpu::map_rom), which
/// also copies the image into the backing array once so that raw peeks and
/// the trace module see the ROM contents.
pub struct RomIntercept {
    start: u16,
    data: Vec<u8>,
}

impl RomIntercept {
    pub fn new(start: u16, data: Vec<u8>) -> Self {
        Self { start, data }
    }

    /// First address the image covers.
    pub fn start(&self) -> u16 {
        self.start
    }

    /// Length of the image in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl MemoryIntercept for RomIntercept {
    fn read(&mut self, addr: u16, _bus: &mut BusView<'_>) -> u8 {
        match self.data.get(addr.wrapping_sub(self.start) as usize) {
            Some(&byte) => byte,
            None => 0,
        }
    }

    fn write(&mut self, _value: u8, _addr: u16, _bus: &mut BusView<'_>) -> bool {
        // Writes to ROM are swallowed.
        true
    }
}
