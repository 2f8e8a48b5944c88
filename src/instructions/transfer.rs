//! Register transfer operations. TXS is the only one that leaves the flags
//! alone.

use crate::cpu::Cpu;
use crate::opcodes::Effect;

/// TAX: transfer the accumulator to X.
pub(crate) fn tax(cpu: &mut Cpu) -> Effect {
    cpu.r.x = cpu.r.a;
    cpu.r.set_nz(i32::from(cpu.r.x));
    Effect::NONE
}

/// TAY: transfer the accumulator to Y.
pub(crate) fn tay(cpu: &mut Cpu) -> Effect {
    cpu.r.y = cpu.r.a;
    cpu.r.set_nz(i32::from(cpu.r.y));
    Effect::NONE
}

/// TXA: transfer X to the accumulator.
pub(crate) fn txa(cpu: &mut Cpu) -> Effect {
    cpu.r.a = cpu.r.x;
    cpu.r.set_nz(i32::from(cpu.r.a));
    Effect::NONE
}

/// TYA: transfer Y to the accumulator.
pub(crate) fn tya(cpu: &mut Cpu) -> Effect {
    cpu.r.a = cpu.r.y;
    cpu.r.set_nz(i32::from(cpu.r.a));
    Effect::NONE
}

/// TSX: transfer the stack pointer to X.
pub(crate) fn tsx(cpu: &mut Cpu) -> Effect {
    cpu.r.x = cpu.r.sp;
    cpu.r.set_nz(i32::from(cpu.r.x));
    Effect::NONE
}

/// TXS: transfer X to the stack pointer. No flags.
pub(crate) fn txs(cpu: &mut Cpu) -> Effect {
    cpu.r.sp = cpu.r.x;
    Effect::NONE
}
