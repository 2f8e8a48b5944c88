//! # Addressing Modes
//!
//! This module defines the 16 addressing modes of the 65C02 and the resolver
//! that runs between opcode fetch and execution. The resolver computes the
//! effective address into `cpu.address`, preloads the operand into `cpu.alu`
//! for modes that read memory, and returns any page-crossing cycle penalty.
//!
//! Opcodes whose table entry is flagged write-back-only (the pure stores and
//! PLA) skip the operand preload so stores never issue a spurious read of
//! their target address.
//!
//! Several NMOS-era bus quirks are modelled on purpose because intercepts can
//! observe them: the absolute-indexed modes issue a dummy word read of the
//! un-indexed base address, and `JMP (abs)` with a pointer ending in 0xFF
//! fetches the high byte from the start of the same page.

use crate::cpu::Cpu;
use crate::opcodes::OPCODE_TABLE;

/// 65C02 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: None, Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, ZeroPageIndirect,
///   IndirectX, IndirectY, Relative
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect, AbsoluteIndirectX
///
/// The Rockwell bit-branches (BBR/BBS) are listed as ZeroPage with two
/// operand bytes; they re-run relative resolution themselves when taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// Used only by illegal opcodes, which resolve nothing.
    None,

    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: ASL A, ROR A, PLA (write-back target is A)
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// Full 16-bit address.
    ///
    /// Example: LDA $1234
    Absolute,

    /// 16-bit address indexed by X. +1 cycle when indexing crosses a page.
    AbsoluteX,

    /// 16-bit address indexed by Y. +1 cycle when indexing crosses a page.
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Carries the NMOS page-wrap bug: a pointer at $xxFF takes its high
    /// byte from $xx00.
    Indirect,

    /// Indirect jump through a 16-bit pointer pre-indexed by X.
    /// Only used by JMP.
    AbsoluteIndirectX,

    /// Indexed indirect: (ZP + X) then dereference. The pointer offset wraps
    /// within the zero page.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y. The pointer's high byte is
    /// fetched with zero-page wraparound. May cost +1 cycle on page cross.
    IndirectY,

    /// 8-bit address in the zero page.
    ZeroPage,

    /// Zero page address indexed by X, wrapping within the zero page.
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within the zero page.
    ZeroPageY,

    /// 65C02 indirect without index: (ZP) dereference.
    ZeroPageIndirect,

    /// Signed 8-bit offset for branch instructions, relative to the address
    /// after the operand.
    Relative,
}

/// Runs the addressing stage for the instruction in flight. Returns extra
/// cycles charged for page crossings.
pub(crate) fn resolve(cpu: &mut Cpu, mode: AddressingMode) -> u32 {
    match mode {
        AddressingMode::None => 0,
        AddressingMode::Implied => implied(cpu),
        AddressingMode::Accumulator => accumulator(cpu),
        AddressingMode::Immediate => immediate(cpu),
        AddressingMode::Absolute => absolute(cpu),
        AddressingMode::AbsoluteX => absolute_x(cpu),
        AddressingMode::AbsoluteY => absolute_y(cpu),
        AddressingMode::Indirect => indirect(cpu),
        AddressingMode::AbsoluteIndirectX => absolute_indirect_x(cpu),
        AddressingMode::IndirectX => indirect_x(cpu),
        AddressingMode::IndirectY => indirect_y(cpu),
        AddressingMode::ZeroPage => zero_page(cpu),
        AddressingMode::ZeroPageX => zero_page_x(cpu),
        AddressingMode::ZeroPageY => zero_page_y(cpu),
        AddressingMode::ZeroPageIndirect => zero_page_indirect(cpu),
        AddressingMode::Relative => relative(cpu),
    }
}

/// True when the current opcode only ever writes its target, so the operand
/// preload must be skipped.
fn write_only(cpu: &Cpu) -> bool {
    OPCODE_TABLE[cpu.opcode as usize].writes_back
}

fn implied(cpu: &mut Cpu) -> u32 {
    cpu.address = 0;
    0
}

fn accumulator(cpu: &mut Cpu) -> u32 {
    cpu.address = 0;
    if !write_only(cpu) {
        cpu.alu = i32::from(cpu.r.a);
    }
    0
}

fn immediate(cpu: &mut Cpu) -> u32 {
    cpu.address = 0;
    if !write_only(cpu) {
        cpu.alu = i32::from(cpu.read_byte(cpu.r.pc));
    }
    0
}

fn absolute(cpu: &mut Cpu) -> u32 {
    cpu.address = cpu.read_word(cpu.r.pc);
    if !write_only(cpu) {
        cpu.alu = i32::from(cpu.read_byte(cpu.address));
    }
    0
}

fn absolute_x(cpu: &mut Cpu) -> u32 {
    let base = cpu.read_word(cpu.r.pc);
    let page = base & 0xFF00;
    // The hardware reads the un-indexed address before adding the index.
    cpu.read_word(base);
    cpu.address = base.wrapping_add(u16::from(cpu.r.x));
    if !write_only(cpu) {
        cpu.alu = i32::from(cpu.read_byte(cpu.address));
    }
    u32::from((cpu.address & 0xFF00) > page)
}

fn absolute_y(cpu: &mut Cpu) -> u32 {
    let base = cpu.read_word(cpu.r.pc);
    let page = base & 0xFF00;
    cpu.read_word(base);
    cpu.address = base.wrapping_add(u16::from(cpu.r.y));
    if !write_only(cpu) {
        cpu.alu = i32::from(cpu.read_byte(cpu.address));
    }
    u32::from((cpu.address & 0xFF00) > page)
}

fn indirect(cpu: &mut Cpu) -> u32 {
    let ptr_lo = cpu.read_byte(cpu.r.pc);
    let ptr_hi = cpu.read_byte(cpu.r.pc.wrapping_add(1));
    let ptr = u16::from_le_bytes([ptr_lo, ptr_hi]);
    // NMOS page-wrap bug: a pointer ending in 0xFF takes its high byte from
    // the start of the same page.
    let lo = cpu.read_byte(ptr);
    let hi = cpu.read_byte((ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF));
    cpu.address = u16::from_le_bytes([lo, hi]);
    if !write_only(cpu) {
        cpu.alu = i32::from(cpu.read_byte(cpu.address));
    }
    0
}

fn absolute_indirect_x(cpu: &mut Cpu) -> u32 {
    // The index is added to the pointer's low byte with carry into the
    // pointer itself, not masked into the page.
    let mut o1 = u16::from(cpu.read_byte(cpu.r.pc));
    let o2 = u16::from(cpu.read_byte(cpu.r.pc.wrapping_add(1))) << 8;
    o1 += u16::from(cpu.r.x);
    cpu.address = u16::from(cpu.read_byte(o2.wrapping_add(o1)));
    o1 += 1;
    cpu.address |= u16::from(cpu.read_byte(o2.wrapping_add(o1))) << 8;
    0
}

fn indirect_x(cpu: &mut Cpu) -> u32 {
    // Pointer offset wraps within the zero page, and so does its second byte.
    let ptr = cpu.read_byte(cpu.r.pc).wrapping_add(cpu.r.x);
    let lo = cpu.read_byte(u16::from(ptr));
    let hi = cpu.read_byte(u16::from(ptr.wrapping_add(1)));
    cpu.address = u16::from_le_bytes([lo, hi]);
    if !write_only(cpu) {
        cpu.alu = i32::from(cpu.read_byte(cpu.address));
    }
    0
}

fn indirect_y(cpu: &mut Cpu) -> u32 {
    let zpage = cpu.read_byte(cpu.r.pc);
    // The pointer's high byte wraps if zpage is 0xFF.
    let o1 = i32::from(cpu.read_byte(u16::from(zpage))) + i32::from(cpu.r.y);
    let o2 = i32::from(cpu.read_byte(u16::from(zpage.wrapping_add(1)))) << 8;
    cpu.address = ((o2 + o1) & 0xFFFF) as u16;
    if !write_only(cpu) {
        cpu.alu = i32::from(cpu.read_byte(cpu.address));
    }
    // Strictly greater: a low-byte sum landing exactly on 0x100 is not
    // charged.
    u32::from(o1 > 0x0100)
}

fn zero_page(cpu: &mut Cpu) -> u32 {
    cpu.address = u16::from(cpu.read_byte(cpu.r.pc));
    if !write_only(cpu) {
        cpu.alu = i32::from(cpu.read_byte(cpu.address));
    }
    0
}

fn zero_page_x(cpu: &mut Cpu) -> u32 {
    let zpage = cpu.read_byte(cpu.r.pc);
    cpu.address = u16::from(zpage.wrapping_add(cpu.r.x));
    if !write_only(cpu) {
        cpu.alu = i32::from(cpu.read_byte(cpu.address));
    }
    0
}

fn zero_page_y(cpu: &mut Cpu) -> u32 {
    let zpage = cpu.read_byte(cpu.r.pc);
    cpu.address = u16::from(zpage.wrapping_add(cpu.r.y));
    if !write_only(cpu) {
        cpu.alu = i32::from(cpu.read_byte(cpu.address));
    }
    0
}

fn zero_page_indirect(cpu: &mut Cpu) -> u32 {
    let zpage = u16::from(cpu.read_byte(cpu.r.pc));
    // Unlike (zp,X) and (zp),Y the pointer read here does not wrap: a 0xFF
    // operand reads its high byte from 0x0100.
    let o1 = cpu.read_byte(zpage);
    let o2 = cpu.read_byte(zpage.wrapping_add(1));
    cpu.address = u16::from_le_bytes([o1, o2]);
    if !write_only(cpu) {
        cpu.alu = i32::from(cpu.read_byte(cpu.address));
    }
    0
}

/// Computes a branch target relative to the end of the instruction and
/// stages the taken-branch cycle bump in `cpu.alu`: 1 for a same-page
/// target, 2 when the target page differs from the operand's page.
///
/// Also re-entered by the Rockwell bit-branches after their zero-page test.
pub(crate) fn relative(cpu: &mut Cpu) -> u32 {
    let page = cpu.r.pc >> 8;
    let mut offset = i32::from(cpu.read_byte(cpu.r.pc));
    if offset >= 0x80 {
        offset -= 256;
    }
    let step = i32::from(OPCODE_TABLE[cpu.opcode as usize].operand_bytes);
    cpu.address = cpu.r.pc.wrapping_add((step + offset) as u16);
    cpu.alu = if cpu.address >> 8 != page { 2 } else { 1 };
    0
}
