//! # Execution Tracing
//!
//! One-line, fixed-width dumps of the last executed instruction, meant to be
//! printed after each [`Cpu::step`] while chasing a misbehaving program.
//! Shows the fetch address, registers, the ALU value before and after
//! execution, the resolved address, flags, the raw instruction bytes, and
//! the decoded mnemonic with its addressing mode.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::opcodes::OPCODE_TABLE;

/// Column names for [`cpu_state`] lines.
pub fn cpu_state_header() -> &'static str {
    "PC     A  X  Y SP  mem  alu addr flags         OP data  OPR  MODE"
}

/// Formats the state left behind by the last step as one line.
pub fn cpu_state(cpu: &Cpu) -> String {
    let entry = &OPCODE_TABLE[cpu.opcode as usize];

    let mut s = format!(
        "{:04x}: {:02x} {:02x} {:02x} {:02x} {:04x} {:04x} {:04x} ({:02x})",
        cpu.r.old_pc,
        cpu.r.a,
        cpu.r.x,
        cpu.r.y,
        cpu.r.sp,
        cpu.old_alu & 0xFFFF,
        cpu.alu & 0xFFFF,
        cpu.address,
        cpu.r.status_byte(false),
    );

    for (set, ch) in [
        (cpu.r.flag_n, 'N'),
        (cpu.r.flag_v, 'V'),
        (cpu.r.flag_d, 'D'),
        (cpu.r.flag_i, 'I'),
        (cpu.r.flag_z, 'Z'),
        (cpu.r.flag_c, 'C'),
    ] {
        s.push(if set { ch } else { ' ' });
    }

    // Raw instruction bytes, re-read from where the opcode was fetched.
    let mut bytes = format!("{:02x}", cpu.opcode);
    for i in 1..=u16::from(entry.operand_bytes) {
        bytes.push_str(&format!(" {:02x}", cpu.mem.load(cpu.r.old_pc.wrapping_add(i))));
    }
    s.push_str(&format!(" {:<8} ", bytes));

    s.push_str(&format!("{:<4} {}", entry.mnemonic, mode_name(entry.mode)));
    s
}

/// Short fixed-width addressing mode tag.
fn mode_name(mode: AddressingMode) -> &'static str {
    match mode {
        AddressingMode::None => "NONE ",
        AddressingMode::Implied => "IMPL ",
        AddressingMode::Accumulator => "A    ",
        AddressingMode::Immediate => "IMM  ",
        AddressingMode::Absolute => "ABS  ",
        AddressingMode::AbsoluteX => "ABS,X",
        AddressingMode::AbsoluteY => "ABS,Y",
        AddressingMode::Indirect => "IND  ",
        AddressingMode::AbsoluteIndirectX => "AB,IX",
        AddressingMode::IndirectX => "X,IND",
        AddressingMode::IndirectY => "IND,Y",
        AddressingMode::ZeroPage => "ZPG  ",
        AddressingMode::ZeroPageX => "ZPG,X",
        AddressingMode::ZeroPageY => "ZPG,Y",
        AddressingMode::ZeroPageIndirect => "ZPG,I",
        AddressingMode::Relative => "REL  ",
    }
}
