//! # CPU Core
//!
//! The execution engine. [`Cpu::step`] runs exactly one instruction through
//! a fixed pipeline and returns the cycles it consumed:
//!
//! 1. If stopped (STP), do nothing.
//! 2. If waiting (WAI), skip straight to interrupt delivery.
//! 3. Fetch and decode through the static dispatch table.
//! 4. Resolve the addressing mode, collecting page-crossing penalties, then
//!    advance the PC past the operand bytes.
//! 5. Execute the operation.
//! 6. Write `alu` back to the destination if either the table or the
//!    operation asked for it.
//! 7. Deliver a pending maskable interrupt if the I flag allows.
//! 8. Return and clear the cycle counter.
//!
//! All memory traffic on behalf of executing code goes through
//! [`Cpu::read_byte`] and [`Cpu::write_byte`], which consult the intercept
//! table, so peripherals observe every bus access the program makes,
//! including dummy reads.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::addressing::{self, AddressingMode};
use crate::memory::{BusView, Memory, SharedIntercept};
use crate::opcodes::OPCODE_TABLE;
use crate::registers::Registers;
use crate::rom::RomIntercept;

/// Base of the zero page.
pub const ZERO_PAGE: u16 = 0x0000;
/// Base of the stack page.
pub const STACK: u16 = 0x0100;
/// First byte of the vector table at the top of memory.
pub const VECTOR_TABLE: u16 = 0xFFF8;
/// Length of the vector table in bytes.
pub const VECTOR_TABLE_LENGTH: u16 = 8;
/// Non-maskable interrupt vector.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// Shared IRQ and BRK vector.
pub const IRQBRK_VECTOR: u16 = 0xFFFE;

/// Flat cost charged for entering an interrupt handler.
const INTERRUPT_CYCLES: u32 = 8;

/// A 65C02 with its 64KB of intercept-aware memory.
///
/// # Examples
///
/// ```
/// use lib65c02::{Cpu, RESET_VECTOR};
///
/// let mut cpu = Cpu::new();
/// // LDA #$42 / STA $10
/// cpu.copy_into_memory(0x8000, &[0xA9, 0x42, 0x85, 0x10]);
/// cpu.copy_into_memory(RESET_VECTOR, &[0x00, 0x80]);
/// cpu.reset();
///
/// assert_eq!(cpu.step(), 2);
/// assert_eq!(cpu.step(), 3);
/// assert_eq!(cpu.read_byte(0x0010), 0x42);
/// ```
pub struct Cpu {
    /// Register file and execution state.
    pub r: Registers,
    pub(crate) mem: Memory,
    /// Opcode value of the instruction in flight.
    pub(crate) opcode: u8,
    /// Working value: operand in, result out. Wider than a byte on purpose,
    /// so carries and borrows survive until the flag helpers look for them.
    pub(crate) alu: i32,
    /// `alu` as the resolver left it, kept for tracing.
    pub(crate) old_alu: i32,
    /// Effective address resolved for the instruction in flight.
    pub(crate) address: u16,
    irq_sources: HashSet<String>,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and memory. Call
    /// [`reset`](Self::reset) once the reset vector is in place.
    pub fn new() -> Self {
        Self {
            r: Registers::new(),
            mem: Memory::new(),
            opcode: 0,
            alu: 0,
            old_alu: 0,
            address: 0,
            irq_sources: HashSet::new(),
        }
    }

    /// Hardware reset: flags cleared except I, SP to 0xFD, registers
    /// zeroed, PC loaded from the reset vector. Also the only way out of an
    /// STP halt.
    pub fn reset(&mut self) {
        self.r.set_status_byte(0);
        self.r.flag_i = true;
        self.r.sp = 0xFD;
        self.r.a = 0;
        self.r.x = 0;
        self.r.y = 0;
        self.r.stopped = false;
        self.r.waiting = false;
        self.r.cycles = 0;
        let target = self.read_word(RESET_VECTOR);
        self.set_pc(target);
    }

    /// Executes one instruction and returns the cycles it took, including
    /// page-crossing, branch and interrupt-entry penalties. Returns 0 while
    /// stopped or waiting.
    pub fn step(&mut self) -> u32 {
        if self.r.stopped {
            return 0;
        }

        if !self.r.waiting {
            self.r.old_pc = self.r.pc;
            self.opcode = self.read_byte(self.r.pc);
            self.r.pc = self.r.pc.wrapping_add(1);

            let entry = &OPCODE_TABLE[self.opcode as usize];
            self.r.cycles += u32::from(entry.base_cycles);
            self.alu = 0;
            self.address = 0;

            self.r.cycles += addressing::resolve(self, entry.mode);
            self.old_alu = self.alu;
            self.r.pc = self.r.pc.wrapping_add(u16::from(entry.operand_bytes));

            let effect = (entry.op)(self);
            self.r.cycles += effect.extra_cycles;

            if entry.writes_back || effect.write_back {
                match entry.mode {
                    AddressingMode::Accumulator => self.r.a = (self.alu & 0xFF) as u8,
                    AddressingMode::Absolute
                    | AddressingMode::AbsoluteX
                    | AddressingMode::AbsoluteY
                    | AddressingMode::AbsoluteIndirectX
                    | AddressingMode::ZeroPage
                    | AddressingMode::ZeroPageX
                    | AddressingMode::ZeroPageY
                    | AddressingMode::ZeroPageIndirect
                    | AddressingMode::IndirectX
                    | AddressingMode::IndirectY => {
                        let address = self.address;
                        let value = (self.alu & 0xFF) as u8;
                        self.write_byte(address, value);
                    }
                    _ => {}
                }
            }
        }

        // A WAI instruction falls through to here, so a pending interrupt
        // both wakes the core and is taken in the same step.
        if !self.r.flag_i && self.r.irq_pending {
            let pc = self.r.pc;
            self.push_interrupt_frame(pc, false);
            let target = self.read_word(IRQBRK_VECTOR);
            self.set_pc(target);
            self.r.flag_d = false;
            self.r.flag_i = true;
            self.r.cycles += INTERRUPT_CYCLES;
        }

        let cycles = self.r.cycles;
        self.r.cycles = 0;
        cycles
    }

    /// Loads the PC.
    pub fn set_pc(&mut self, addr: u16) {
        self.r.pc = addr;
    }

    /// Reads a byte, consulting the intercept table. An intercepted read is
    /// stored through to the backing array before it is returned.
    pub fn read_byte(&mut self, addr: u16) -> u8 {
        if let Some(hook) = self.mem.intercept_at(addr) {
            let value = {
                let mut bus = BusView::new(&mut self.r, &mut self.mem);
                hook.borrow_mut().read(addr, &mut bus)
            };
            self.mem.store(addr, value);
        }
        self.mem.load(addr)
    }

    /// Reads a little-endian word through the byte path. The high byte is
    /// fetched first; intercepts can observe the order.
    pub fn read_word(&mut self, addr: u16) -> u16 {
        let hi = u16::from(self.read_byte(addr.wrapping_add(1))) << 8;
        hi | u16::from(self.read_byte(addr))
    }

    /// Writes a byte, consulting the intercept table. A handled write never
    /// reaches the backing array.
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        if let Some(hook) = self.mem.intercept_at(addr) {
            let handled = {
                let mut bus = BusView::new(&mut self.r, &mut self.mem);
                hook.borrow_mut().write(value, addr, &mut bus)
            };
            if handled {
                return;
            }
        }
        self.mem.store(addr, value);
    }

    /// Pushes a byte at the stack pointer, then decrements it with wrap.
    pub fn push_stack(&mut self, value: u8) {
        let addr = STACK + u16::from(self.r.sp);
        self.write_byte(addr, value);
        self.r.sp = self.r.sp.wrapping_sub(1);
    }

    /// Increments the stack pointer with wrap, then reads the byte there.
    pub fn pop_stack(&mut self) -> u8 {
        self.r.sp = self.r.sp.wrapping_add(1);
        self.read_byte(STACK + u16::from(self.r.sp))
    }

    /// Pushes an interrupt frame: PC high, PC low, then the status byte with
    /// the requested Break flavor.
    pub(crate) fn push_interrupt_frame(&mut self, pc: u16, brk: bool) {
        self.push_stack((pc >> 8) as u8);
        self.push_stack((pc & 0xFF) as u8);
        let sr = self.r.status_byte(brk);
        self.push_stack(sr);
    }

    /// Asserts a named maskable interrupt line. The aggregate IRQ stays
    /// pending until every named source is cleared. Wakes a WAI.
    pub fn maskable_interrupt(&mut self, source: &str) {
        self.irq_sources.insert(source.to_owned());
        self.r.irq_pending = true;
        self.r.waiting = false;
    }

    /// Releases a named maskable interrupt line.
    pub fn clear_maskable_interrupt(&mut self, source: &str) {
        self.irq_sources.remove(source);
        self.r.irq_pending = !self.irq_sources.is_empty();
    }

    /// Delivers a non-maskable interrupt immediately: pushes the frame with
    /// Break clear, vectors through 0xFFFA, wakes a WAI. The entry cost is
    /// charged to the next step. Unlike IRQ entry, the I and D flags are
    /// left alone.
    pub fn non_maskable_interrupt(&mut self) {
        let pc = self.r.pc;
        self.push_interrupt_frame(pc, false);
        let target = self.read_word(NMI_VECTOR);
        self.set_pc(target);
        self.r.waiting = false;
        self.r.cycles += INTERRUPT_CYCLES;
    }

    /// Binds an intercept to a single address.
    pub fn bind_intercept(&mut self, addr: u16, intercept: SharedIntercept) {
        self.mem.bind(addr, intercept);
    }

    /// Binds one shared intercept over a range of addresses. Ranges running
    /// past the top of memory are clamped.
    pub fn bind_intercept_range(&mut self, start: u16, length: usize, intercept: SharedIntercept) {
        self.mem.bind_range(start, length, intercept);
    }

    /// Removes intercepts over a range of addresses.
    pub fn clear_intercept_range(&mut self, start: u16, length: usize) {
        self.mem.clear_range(start, length);
    }

    /// Bulk-copies data into memory, bypassing intercepts. Handy for loading
    /// programs and vectors.
    pub fn copy_into_memory(&mut self, start: u16, data: &[u8]) {
        self.mem.copy(start, data);
    }

    /// Maps a ROM image: copies it into memory once so raw peeks see it,
    /// then binds a [`RomIntercept`] over the range so writes bounce.
    pub fn map_rom(&mut self, start: u16, data: &[u8]) {
        self.mem.copy(start, data);
        let rom = Rc::new(RefCell::new(RomIntercept::new(start, data.to_vec())));
        self.mem.bind_range(start, data.len(), rom);
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
