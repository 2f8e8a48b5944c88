//! # Opcode Dispatch Table
//!
//! One static table entry per opcode value: mnemonic, handler, addressing
//! mode, operand byte count, base cycle cost, and the static write-back
//! flag. The table is built once at compile time and never mutated.
//!
//! The static write-back flag is set only for the pure stores (STA/STX/STY/
//! STZ) and PLA, where the destination is fixed by the opcode. Opcodes that
//! serve both accumulator and memory variants (shifts, INC/DEC, TRB/TSB,
//! RMB/SMB) instead request write-back dynamically through their returned
//! [`Effect`], because the addressing mode decides the destination.
//!
//! Illegal opcodes decode to a one-byte, zero-cycle no-op; even the ones
//! that did something dangerous on NMOS parts are skipped.

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode as Mode;
use crate::cpu::Cpu;
use crate::instructions::{
    alu, bits, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};

/// What an operation asks of the engine after it runs.
///
/// Replaces a mutable mid-pipeline toggle with a value the engine ORs into
/// the table's static write-back flag and adds to the cycle count.
#[derive(Debug, Clone, Copy)]
pub struct Effect {
    /// Cycles beyond the table's base cost, e.g. a taken branch.
    pub extra_cycles: u32,
    /// Request a write-back of `alu` to the resolved destination.
    pub write_back: bool,
}

impl Effect {
    /// No write-back, no extra cycles. What most operations return.
    pub const NONE: Effect = Effect {
        extra_cycles: 0,
        write_back: false,
    };

    /// Write `alu` back to the resolved destination.
    pub const WRITE_BACK: Effect = Effect {
        extra_cycles: 0,
        write_back: true,
    };

    /// Charge extra cycles without a write-back.
    pub const fn extra(cycles: u32) -> Effect {
        Effect {
            extra_cycles: cycles,
            write_back: false,
        }
    }
}

/// Operation handler. Runs after addressing resolution with the operand in
/// `cpu.alu` and the effective address in `cpu.address`.
pub type OpFn = fn(&mut Cpu) -> Effect;

/// One decoded opcode: everything the engine needs to execute it.
#[derive(Clone, Copy)]
pub struct Opcode {
    /// Assembler mnemonic, `"???"` for illegal values.
    pub mnemonic: &'static str,
    /// Handler run at the execute stage.
    pub op: OpFn,
    /// Addressing mode resolved before the handler runs.
    pub mode: AddressingMode,
    /// Operand bytes following the opcode; the PC advances past them.
    pub operand_bytes: u8,
    /// Base cycle cost before page-crossing and branch penalties.
    pub base_cycles: u8,
    /// Static write-back flag; also makes the resolver skip the operand
    /// preload.
    pub writes_back: bool,
}

const fn opcode(
    mnemonic: &'static str,
    op: OpFn,
    mode: AddressingMode,
    operand_bytes: u8,
    base_cycles: u8,
    writes_back: bool,
) -> Opcode {
    Opcode {
        mnemonic,
        op,
        mode,
        operand_bytes,
        base_cycles,
        writes_back,
    }
}

const fn illegal() -> Opcode {
    opcode("???", control::bad, Mode::None, 0, 0, false)
}

/// The 256-entry dispatch table, indexed by opcode value.
pub static OPCODE_TABLE: [Opcode; 256] = [
    opcode("BRK", control::brk, Mode::Implied, 1, 7, false), // 0x00
    opcode("ORA", alu::ora, Mode::IndirectX, 1, 6, false),   // 0x01
    illegal(),                                               // 0x02
    illegal(),                                               // 0x03
    opcode("TSB", bits::tsb, Mode::ZeroPage, 1, 5, false),   // 0x04
    opcode("ORA", alu::ora, Mode::ZeroPage, 1, 3, false),    // 0x05
    opcode("ASL", shifts::asl, Mode::ZeroPage, 1, 5, false), // 0x06
    opcode("RMB0", bits::rmb0, Mode::ZeroPage, 1, 5, false), // 0x07
    opcode("PHP", stack::php, Mode::Implied, 0, 3, false),   // 0x08
    opcode("ORA", alu::ora, Mode::Immediate, 1, 2, false),   // 0x09
    opcode("ASL", shifts::asl, Mode::Accumulator, 0, 2, false), // 0x0A
    illegal(),                                               // 0x0B
    opcode("TSB", bits::tsb, Mode::Absolute, 2, 6, false),   // 0x0C
    opcode("ORA", alu::ora, Mode::Absolute, 2, 4, false),    // 0x0D
    opcode("ASL", shifts::asl, Mode::Absolute, 2, 6, false), // 0x0E
    opcode("BBR0", branches::bbr0, Mode::ZeroPage, 2, 2, false), // 0x0F
    opcode("BPL", branches::bpl, Mode::Relative, 1, 2, false), // 0x10
    opcode("ORA", alu::ora, Mode::IndirectY, 1, 5, false),   // 0x11
    opcode("ORA", alu::ora, Mode::ZeroPageIndirect, 1, 5, false), // 0x12
    illegal(),                                               // 0x13
    opcode("TRB", bits::trb, Mode::ZeroPage, 1, 5, false),   // 0x14
    opcode("ORA", alu::ora, Mode::ZeroPageX, 1, 4, false),   // 0x15
    opcode("ASL", shifts::asl, Mode::ZeroPageX, 1, 6, false), // 0x16
    opcode("RMB1", bits::rmb1, Mode::ZeroPage, 1, 5, false), // 0x17
    opcode("CLC", flags::clc, Mode::Implied, 0, 2, false),   // 0x18
    opcode("ORA", alu::ora, Mode::AbsoluteY, 2, 4, false),   // 0x19
    opcode("INC", inc_dec::inc, Mode::Accumulator, 0, 2, false), // 0x1A
    illegal(),                                               // 0x1B
    opcode("TRB", bits::trb, Mode::Absolute, 2, 6, false),   // 0x1C
    opcode("ORA", alu::ora, Mode::AbsoluteX, 2, 4, false),   // 0x1D
    opcode("ASL", shifts::asl, Mode::AbsoluteX, 2, 6, false), // 0x1E
    opcode("BBR1", branches::bbr1, Mode::ZeroPage, 2, 2, false), // 0x1F
    opcode("JSR", control::jsr, Mode::Absolute, 2, 6, false), // 0x20
    opcode("AND", alu::and, Mode::IndirectX, 1, 6, false),   // 0x21
    illegal(),                                               // 0x22
    illegal(),                                               // 0x23
    opcode("BIT", alu::bit, Mode::ZeroPage, 1, 3, false),    // 0x24
    opcode("AND", alu::and, Mode::ZeroPage, 1, 3, false),    // 0x25
    opcode("ROL", shifts::rol, Mode::ZeroPage, 1, 5, false), // 0x26
    opcode("RMB2", bits::rmb2, Mode::ZeroPage, 1, 5, false), // 0x27
    opcode("PLP", stack::plp, Mode::Implied, 0, 4, false),   // 0x28
    opcode("AND", alu::and, Mode::Immediate, 1, 2, false),   // 0x29
    opcode("ROL", shifts::rol, Mode::Accumulator, 0, 2, false), // 0x2A
    illegal(),                                               // 0x2B
    opcode("BIT", alu::bit, Mode::Absolute, 2, 4, false),    // 0x2C
    opcode("AND", alu::and, Mode::Absolute, 2, 4, false),    // 0x2D
    opcode("ROL", shifts::rol, Mode::Absolute, 2, 6, false), // 0x2E
    opcode("BBR2", branches::bbr2, Mode::ZeroPage, 2, 2, false), // 0x2F
    opcode("BMI", branches::bmi, Mode::Relative, 1, 2, false), // 0x30
    opcode("AND", alu::and, Mode::IndirectY, 1, 5, false),   // 0x31
    opcode("AND", alu::and, Mode::ZeroPageIndirect, 1, 5, false), // 0x32
    illegal(),                                               // 0x33
    opcode("BIT", alu::bit, Mode::ZeroPageX, 1, 4, false),   // 0x34
    opcode("AND", alu::and, Mode::ZeroPageX, 1, 4, false),   // 0x35
    opcode("ROL", shifts::rol, Mode::ZeroPageX, 1, 6, false), // 0x36
    opcode("RMB3", bits::rmb3, Mode::ZeroPage, 1, 5, false), // 0x37
    opcode("SEC", flags::sec, Mode::Implied, 0, 2, false),   // 0x38
    opcode("AND", alu::and, Mode::AbsoluteY, 2, 4, false),   // 0x39
    opcode("DEC", inc_dec::dec, Mode::Accumulator, 0, 2, false), // 0x3A
    illegal(),                                               // 0x3B
    opcode("BIT", alu::bit, Mode::AbsoluteX, 2, 4, false),   // 0x3C
    opcode("AND", alu::and, Mode::AbsoluteX, 2, 4, false),   // 0x3D
    opcode("ROL", shifts::rol, Mode::AbsoluteX, 2, 6, false), // 0x3E
    opcode("BBR3", branches::bbr3, Mode::ZeroPage, 2, 2, false), // 0x3F
    opcode("RTI", control::rti, Mode::Implied, 0, 6, false), // 0x40
    opcode("EOR", alu::eor, Mode::IndirectX, 1, 6, false),   // 0x41
    illegal(),                                               // 0x42
    illegal(),                                               // 0x43
    illegal(),                                               // 0x44
    opcode("EOR", alu::eor, Mode::ZeroPage, 1, 3, false),    // 0x45
    opcode("LSR", shifts::lsr, Mode::ZeroPage, 1, 5, false), // 0x46
    opcode("RMB4", bits::rmb4, Mode::ZeroPage, 1, 5, false), // 0x47
    opcode("PHA", stack::pha, Mode::Implied, 0, 3, false),   // 0x48
    opcode("EOR", alu::eor, Mode::Immediate, 1, 2, false),   // 0x49
    opcode("LSR", shifts::lsr, Mode::Accumulator, 0, 2, false), // 0x4A
    illegal(),                                               // 0x4B
    opcode("JMP", control::jmp, Mode::Absolute, 2, 3, false), // 0x4C
    opcode("EOR", alu::eor, Mode::Absolute, 2, 4, false),    // 0x4D
    opcode("LSR", shifts::lsr, Mode::Absolute, 2, 6, false), // 0x4E
    opcode("BBR4", branches::bbr4, Mode::ZeroPage, 2, 2, false), // 0x4F
    opcode("BVC", branches::bvc, Mode::Relative, 1, 2, false), // 0x50
    opcode("EOR", alu::eor, Mode::IndirectY, 1, 5, false),   // 0x51
    opcode("EOR", alu::eor, Mode::ZeroPageIndirect, 1, 5, false), // 0x52
    illegal(),                                               // 0x53
    illegal(),                                               // 0x54
    opcode("EOR", alu::eor, Mode::ZeroPageX, 1, 4, false),   // 0x55
    opcode("LSR", shifts::lsr, Mode::ZeroPageX, 1, 6, false), // 0x56
    opcode("RMB5", bits::rmb5, Mode::ZeroPage, 1, 5, false), // 0x57
    opcode("CLI", flags::cli, Mode::Implied, 0, 2, false),   // 0x58
    opcode("EOR", alu::eor, Mode::AbsoluteY, 2, 4, false),   // 0x59
    opcode("PHY", stack::phy, Mode::Implied, 0, 3, false),   // 0x5A
    illegal(),                                               // 0x5B
    illegal(),                                               // 0x5C
    opcode("EOR", alu::eor, Mode::AbsoluteX, 2, 4, false),   // 0x5D
    opcode("LSR", shifts::lsr, Mode::AbsoluteX, 2, 6, false), // 0x5E
    opcode("BBR5", branches::bbr5, Mode::ZeroPage, 2, 2, false), // 0x5F
    opcode("RTS", control::rts, Mode::Implied, 0, 6, false), // 0x60
    opcode("ADC", alu::adc, Mode::IndirectX, 1, 6, false),   // 0x61
    illegal(),                                               // 0x62
    illegal(),                                               // 0x63
    opcode("STZ", load_store::stz, Mode::ZeroPage, 1, 3, true), // 0x64
    opcode("ADC", alu::adc, Mode::ZeroPage, 1, 3, false),    // 0x65
    opcode("ROR", shifts::ror, Mode::ZeroPage, 1, 5, false), // 0x66
    opcode("RMB6", bits::rmb6, Mode::ZeroPage, 1, 5, false), // 0x67
    opcode("PLA", stack::pla, Mode::Accumulator, 0, 4, true), // 0x68
    opcode("ADC", alu::adc, Mode::Immediate, 1, 2, false),   // 0x69
    opcode("ROR", shifts::ror, Mode::Accumulator, 0, 2, false), // 0x6A
    illegal(),                                               // 0x6B
    opcode("JMP", control::jmp, Mode::Indirect, 2, 5, false), // 0x6C
    opcode("ADC", alu::adc, Mode::Absolute, 2, 4, false),    // 0x6D
    opcode("ROR", shifts::ror, Mode::Absolute, 2, 6, false), // 0x6E
    opcode("BBR6", branches::bbr6, Mode::ZeroPage, 2, 2, false), // 0x6F
    opcode("BVS", branches::bvs, Mode::Relative, 1, 2, false), // 0x70
    opcode("ADC", alu::adc, Mode::IndirectY, 1, 5, false),   // 0x71
    opcode("ADC", alu::adc, Mode::ZeroPageIndirect, 1, 5, false), // 0x72
    illegal(),                                               // 0x73
    opcode("STZ", load_store::stz, Mode::ZeroPageX, 1, 4, true), // 0x74
    opcode("ADC", alu::adc, Mode::ZeroPageX, 1, 4, false),   // 0x75
    opcode("ROR", shifts::ror, Mode::ZeroPageX, 1, 6, false), // 0x76
    opcode("RMB7", bits::rmb7, Mode::ZeroPage, 1, 5, false), // 0x77
    opcode("SEI", flags::sei, Mode::Implied, 0, 2, false),   // 0x78
    opcode("ADC", alu::adc, Mode::AbsoluteY, 2, 4, false),   // 0x79
    opcode("PLY", stack::ply, Mode::Implied, 0, 4, false),   // 0x7A
    illegal(),                                               // 0x7B
    opcode("JMP", control::jmp, Mode::AbsoluteIndirectX, 2, 6, false), // 0x7C
    opcode("ADC", alu::adc, Mode::AbsoluteX, 2, 4, false),   // 0x7D
    opcode("ROR", shifts::ror, Mode::AbsoluteX, 2, 6, false), // 0x7E
    opcode("BBR7", branches::bbr7, Mode::ZeroPage, 2, 2, false), // 0x7F
    opcode("BRA", branches::bra, Mode::Relative, 1, 3, false), // 0x80
    opcode("STA", load_store::sta, Mode::IndirectX, 1, 6, true), // 0x81
    illegal(),                                               // 0x82
    illegal(),                                               // 0x83
    opcode("STY", load_store::sty, Mode::ZeroPage, 1, 3, true), // 0x84
    opcode("STA", load_store::sta, Mode::ZeroPage, 1, 3, true), // 0x85
    opcode("STX", load_store::stx, Mode::ZeroPage, 1, 3, true), // 0x86
    opcode("SMB0", bits::smb0, Mode::ZeroPage, 1, 5, false), // 0x87
    opcode("DEY", inc_dec::dey, Mode::Implied, 0, 2, false), // 0x88
    opcode("BIT", alu::bit, Mode::Immediate, 1, 2, false),   // 0x89
    opcode("TXA", transfer::txa, Mode::Implied, 0, 2, false), // 0x8A
    illegal(),                                               // 0x8B
    opcode("STY", load_store::sty, Mode::Absolute, 2, 4, true), // 0x8C
    opcode("STA", load_store::sta, Mode::Absolute, 2, 4, true), // 0x8D
    opcode("STX", load_store::stx, Mode::Absolute, 2, 4, true), // 0x8E
    opcode("BBS0", branches::bbs0, Mode::ZeroPage, 2, 2, false), // 0x8F
    opcode("BCC", branches::bcc, Mode::Relative, 1, 2, false), // 0x90
    opcode("STA", load_store::sta, Mode::IndirectY, 1, 6, true), // 0x91
    opcode("STA", load_store::sta, Mode::ZeroPageIndirect, 1, 5, true), // 0x92
    illegal(),                                               // 0x93
    opcode("STY", load_store::sty, Mode::ZeroPageX, 1, 4, true), // 0x94
    opcode("STA", load_store::sta, Mode::ZeroPageX, 1, 4, true), // 0x95
    opcode("STX", load_store::stx, Mode::ZeroPageY, 1, 4, true), // 0x96
    opcode("SMB1", bits::smb1, Mode::ZeroPage, 1, 5, false), // 0x97
    opcode("TYA", transfer::tya, Mode::Implied, 0, 2, false), // 0x98
    opcode("STA", load_store::sta, Mode::AbsoluteY, 2, 5, true), // 0x99
    opcode("TXS", transfer::txs, Mode::Implied, 0, 2, false), // 0x9A
    illegal(),                                               // 0x9B
    opcode("STZ", load_store::stz, Mode::Absolute, 2, 4, true), // 0x9C
    opcode("STA", load_store::sta, Mode::AbsoluteX, 2, 5, true), // 0x9D
    opcode("STZ", load_store::stz, Mode::AbsoluteX, 2, 5, true), // 0x9E
    opcode("BBS1", branches::bbs1, Mode::ZeroPage, 2, 2, false), // 0x9F
    opcode("LDY", load_store::ldy, Mode::Immediate, 1, 2, false), // 0xA0
    opcode("LDA", load_store::lda, Mode::IndirectX, 1, 6, false), // 0xA1
    opcode("LDX", load_store::ldx, Mode::Immediate, 1, 2, false), // 0xA2
    illegal(),                                               // 0xA3
    opcode("LDY", load_store::ldy, Mode::ZeroPage, 1, 3, false), // 0xA4
    opcode("LDA", load_store::lda, Mode::ZeroPage, 1, 3, false), // 0xA5
    opcode("LDX", load_store::ldx, Mode::ZeroPage, 1, 3, false), // 0xA6
    opcode("SMB2", bits::smb2, Mode::ZeroPage, 1, 5, false), // 0xA7
    opcode("TAY", transfer::tay, Mode::Implied, 0, 2, false), // 0xA8
    opcode("LDA", load_store::lda, Mode::Immediate, 1, 2, false), // 0xA9
    opcode("TAX", transfer::tax, Mode::Implied, 0, 2, false), // 0xAA
    illegal(),                                               // 0xAB
    opcode("LDY", load_store::ldy, Mode::Absolute, 2, 4, false), // 0xAC
    opcode("LDA", load_store::lda, Mode::Absolute, 2, 4, false), // 0xAD
    opcode("LDX", load_store::ldx, Mode::Absolute, 2, 4, false), // 0xAE
    opcode("BBS2", branches::bbs2, Mode::ZeroPage, 2, 2, false), // 0xAF
    opcode("BCS", branches::bcs, Mode::Relative, 1, 2, false), // 0xB0
    opcode("LDA", load_store::lda, Mode::IndirectY, 1, 5, false), // 0xB1
    opcode("LDA", load_store::lda, Mode::ZeroPageIndirect, 1, 5, false), // 0xB2
    illegal(),                                               // 0xB3
    opcode("LDY", load_store::ldy, Mode::ZeroPageX, 1, 4, false), // 0xB4
    opcode("LDA", load_store::lda, Mode::ZeroPageX, 1, 4, false), // 0xB5
    opcode("LDX", load_store::ldx, Mode::ZeroPageY, 1, 4, false), // 0xB6
    opcode("SMB3", bits::smb3, Mode::ZeroPage, 1, 5, false), // 0xB7
    opcode("CLV", flags::clv, Mode::Implied, 0, 2, false),   // 0xB8
    opcode("LDA", load_store::lda, Mode::AbsoluteY, 2, 4, false), // 0xB9
    opcode("TSX", transfer::tsx, Mode::Implied, 0, 2, false), // 0xBA
    illegal(),                                               // 0xBB
    opcode("LDY", load_store::ldy, Mode::AbsoluteX, 2, 4, false), // 0xBC
    opcode("LDA", load_store::lda, Mode::AbsoluteX, 2, 4, false), // 0xBD
    opcode("LDX", load_store::ldx, Mode::AbsoluteY, 2, 4, false), // 0xBE
    opcode("BBS3", branches::bbs3, Mode::ZeroPage, 2, 2, false), // 0xBF
    opcode("CPY", alu::cpy, Mode::Immediate, 1, 2, false),   // 0xC0
    opcode("CMP", alu::cmp, Mode::IndirectX, 1, 6, false),   // 0xC1
    illegal(),                                               // 0xC2
    illegal(),                                               // 0xC3
    opcode("CPY", alu::cpy, Mode::ZeroPage, 1, 3, false),    // 0xC4
    opcode("CMP", alu::cmp, Mode::ZeroPage, 1, 3, false),    // 0xC5
    opcode("DEC", inc_dec::dec, Mode::ZeroPage, 1, 5, false), // 0xC6
    opcode("SMB4", bits::smb4, Mode::ZeroPage, 1, 5, false), // 0xC7
    opcode("INY", inc_dec::iny, Mode::Implied, 0, 2, false), // 0xC8
    opcode("CMP", alu::cmp, Mode::Immediate, 1, 2, false),   // 0xC9
    opcode("DEX", inc_dec::dex, Mode::Implied, 0, 2, false), // 0xCA
    opcode("WAI", control::wai, Mode::Implied, 0, 3, false), // 0xCB
    opcode("CPY", alu::cpy, Mode::Absolute, 2, 4, false),    // 0xCC
    opcode("CMP", alu::cmp, Mode::Absolute, 2, 4, false),    // 0xCD
    opcode("DEC", inc_dec::dec, Mode::Absolute, 2, 6, false), // 0xCE
    opcode("BBS4", branches::bbs4, Mode::ZeroPage, 2, 2, false), // 0xCF
    opcode("BNE", branches::bne, Mode::Relative, 1, 2, false), // 0xD0
    opcode("CMP", alu::cmp, Mode::IndirectY, 1, 5, false),   // 0xD1
    opcode("CMP", alu::cmp, Mode::ZeroPageIndirect, 1, 5, false), // 0xD2
    illegal(),                                               // 0xD3
    illegal(),                                               // 0xD4
    opcode("CMP", alu::cmp, Mode::ZeroPageX, 1, 4, false),   // 0xD5
    opcode("DEC", inc_dec::dec, Mode::ZeroPageX, 1, 6, false), // 0xD6
    opcode("SMB5", bits::smb5, Mode::ZeroPage, 1, 5, false), // 0xD7
    opcode("CLD", flags::cld, Mode::Implied, 0, 2, false),   // 0xD8
    opcode("CMP", alu::cmp, Mode::AbsoluteY, 2, 4, false),   // 0xD9
    opcode("PHX", stack::phx, Mode::Implied, 0, 3, false),   // 0xDA
    opcode("STP", control::stp, Mode::Implied, 0, 3, false), // 0xDB
    illegal(),                                               // 0xDC
    opcode("CMP", alu::cmp, Mode::AbsoluteX, 2, 4, false),   // 0xDD
    opcode("DEC", inc_dec::dec, Mode::AbsoluteX, 2, 7, false), // 0xDE
    opcode("BBS5", branches::bbs5, Mode::ZeroPage, 2, 2, false), // 0xDF
    opcode("CPX", alu::cpx, Mode::Immediate, 1, 2, false),   // 0xE0
    opcode("SBC", alu::sbc, Mode::IndirectX, 1, 6, false),   // 0xE1
    illegal(),                                               // 0xE2
    illegal(),                                               // 0xE3
    opcode("CPX", alu::cpx, Mode::ZeroPage, 1, 3, false),    // 0xE4
    opcode("SBC", alu::sbc, Mode::ZeroPage, 1, 3, false),    // 0xE5
    opcode("INC", inc_dec::inc, Mode::ZeroPage, 1, 5, false), // 0xE6
    opcode("SMB6", bits::smb6, Mode::ZeroPage, 1, 5, false), // 0xE7
    opcode("INX", inc_dec::inx, Mode::Implied, 0, 2, false), // 0xE8
    opcode("SBC", alu::sbc, Mode::Immediate, 1, 2, false),   // 0xE9
    opcode("NOP", control::nop, Mode::Implied, 0, 2, false), // 0xEA
    illegal(),                                               // 0xEB
    opcode("CPX", alu::cpx, Mode::Absolute, 2, 4, false),    // 0xEC
    opcode("SBC", alu::sbc, Mode::Absolute, 2, 4, false),    // 0xED
    opcode("INC", inc_dec::inc, Mode::Absolute, 2, 6, false), // 0xEE
    opcode("BBS6", branches::bbs6, Mode::ZeroPage, 2, 2, false), // 0xEF
    opcode("BEQ", branches::beq, Mode::Relative, 1, 2, false), // 0xF0
    opcode("SBC", alu::sbc, Mode::IndirectY, 1, 5, false),   // 0xF1
    opcode("SBC", alu::sbc, Mode::ZeroPageIndirect, 1, 5, false), // 0xF2
    illegal(),                                               // 0xF3
    illegal(),                                               // 0xF4
    opcode("SBC", alu::sbc, Mode::ZeroPageX, 1, 4, false),   // 0xF5
    opcode("INC", inc_dec::inc, Mode::ZeroPageX, 1, 6, false), // 0xF6
    opcode("SMB7", bits::smb7, Mode::ZeroPage, 1, 5, false), // 0xF7
    opcode("SED", flags::sed, Mode::Implied, 0, 2, false),   // 0xF8
    opcode("SBC", alu::sbc, Mode::AbsoluteY, 2, 4, false),   // 0xF9
    opcode("PLX", stack::plx, Mode::Implied, 0, 4, false),   // 0xFA
    illegal(),                                               // 0xFB
    illegal(),                                               // 0xFC
    opcode("SBC", alu::sbc, Mode::AbsoluteX, 2, 4, false),   // 0xFD
    opcode("INC", inc_dec::inc, Mode::AbsoluteX, 2, 7, false), // 0xFE
    opcode("BBS7", branches::bbs7, Mode::ZeroPage, 2, 2, false), // 0xFF
];
