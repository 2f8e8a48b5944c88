//! Load and store operations.
//!
//! The stores never touch flags; they just stage the register in `alu` and
//! rely on the table's static write-back flag, which also keeps the resolver
//! from issuing a read of the target address.

use crate::cpu::Cpu;
use crate::opcodes::Effect;

/// LDA: load the accumulator.
pub(crate) fn lda(cpu: &mut Cpu) -> Effect {
    cpu.r.set_nz(cpu.alu);
    cpu.r.a = (cpu.alu & 0xFF) as u8;
    Effect::NONE
}

/// LDX: load X.
pub(crate) fn ldx(cpu: &mut Cpu) -> Effect {
    cpu.r.set_nz(cpu.alu);
    cpu.r.x = (cpu.alu & 0xFF) as u8;
    Effect::NONE
}

/// LDY: load Y.
pub(crate) fn ldy(cpu: &mut Cpu) -> Effect {
    cpu.r.set_nz(cpu.alu);
    cpu.r.y = (cpu.alu & 0xFF) as u8;
    Effect::NONE
}

/// STA: store the accumulator.
pub(crate) fn sta(cpu: &mut Cpu) -> Effect {
    cpu.alu = i32::from(cpu.r.a);
    Effect::NONE
}

/// STX: store X.
pub(crate) fn stx(cpu: &mut Cpu) -> Effect {
    cpu.alu = i32::from(cpu.r.x);
    Effect::NONE
}

/// STY: store Y.
pub(crate) fn sty(cpu: &mut Cpu) -> Effect {
    cpu.alu = i32::from(cpu.r.y);
    Effect::NONE
}

/// STZ: store zero.
pub(crate) fn stz(cpu: &mut Cpu) -> Effect {
    cpu.alu = 0;
    Effect::NONE
}
