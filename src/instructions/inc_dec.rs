//! Increment and decrement operations.

use crate::cpu::Cpu;
use crate::opcodes::Effect;

/// INC: increment memory or the accumulator, depending on the mode.
pub(crate) fn inc(cpu: &mut Cpu) -> Effect {
    cpu.alu = (cpu.alu + 1) & 0xFF;
    cpu.r.set_nz(cpu.alu);
    Effect::WRITE_BACK
}

/// DEC: decrement memory or the accumulator, depending on the mode.
pub(crate) fn dec(cpu: &mut Cpu) -> Effect {
    cpu.alu = (cpu.alu - 1) & 0xFF;
    cpu.r.set_nz(cpu.alu);
    Effect::WRITE_BACK
}

/// INX: increment X.
pub(crate) fn inx(cpu: &mut Cpu) -> Effect {
    cpu.r.x = cpu.r.x.wrapping_add(1);
    cpu.r.set_nz(i32::from(cpu.r.x));
    Effect::NONE
}

/// INY: increment Y.
pub(crate) fn iny(cpu: &mut Cpu) -> Effect {
    cpu.r.y = cpu.r.y.wrapping_add(1);
    cpu.r.set_nz(i32::from(cpu.r.y));
    Effect::NONE
}

/// DEX: decrement X.
pub(crate) fn dex(cpu: &mut Cpu) -> Effect {
    cpu.r.x = cpu.r.x.wrapping_sub(1);
    cpu.r.set_nz(i32::from(cpu.r.x));
    Effect::NONE
}

/// DEY: decrement Y.
pub(crate) fn dey(cpu: &mut Cpu) -> Effect {
    cpu.r.y = cpu.r.y.wrapping_sub(1);
    cpu.r.set_nz(i32::from(cpu.r.y));
    Effect::NONE
}
