//! Shift and rotate operations.
//!
//! These serve both accumulator and memory variants of the same opcode, so
//! they request write-back dynamically and let the addressing mode decide
//! the destination.
//!
//! The shifted value is left unmasked in `alu`: the write-back stage masks
//! it to a byte, but Z is judged on the wide value, so ASL of 0x80 leaves Z
//! clear even though the stored byte is zero.

use crate::cpu::Cpu;
use crate::opcodes::Effect;

/// ASL: arithmetic shift left, bit 7 into carry.
pub(crate) fn asl(cpu: &mut Cpu) -> Effect {
    cpu.r.flag_c = cpu.alu & 0x80 != 0;
    cpu.alu <<= 1;
    cpu.r.set_nz(cpu.alu);
    Effect::WRITE_BACK
}

/// LSR: logical shift right, bit 0 into carry.
pub(crate) fn lsr(cpu: &mut Cpu) -> Effect {
    cpu.r.flag_c = cpu.alu & 0x01 != 0;
    cpu.alu >>= 1;
    cpu.r.set_nz(cpu.alu);
    Effect::WRITE_BACK
}

/// ROL: rotate left through carry.
pub(crate) fn rol(cpu: &mut Cpu) -> Effect {
    let carry_out = cpu.alu & 0x80;
    cpu.alu <<= 1;
    if cpu.r.flag_c {
        cpu.alu |= 0x01;
    }
    cpu.r.flag_c = carry_out != 0;
    cpu.r.set_nz(cpu.alu);
    Effect::WRITE_BACK
}

/// ROR: rotate right through carry.
pub(crate) fn ror(cpu: &mut Cpu) -> Effect {
    let carry_out = cpu.alu & 0x01;
    cpu.alu >>= 1;
    if cpu.r.flag_c {
        cpu.alu |= 0x80;
    }
    cpu.r.flag_c = carry_out == 0x01;
    cpu.r.set_nz(cpu.alu);
    Effect::WRITE_BACK
}
