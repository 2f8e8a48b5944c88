//! Push and pull operations.

use crate::cpu::Cpu;
use crate::opcodes::Effect;

/// PHA: push the accumulator.
pub(crate) fn pha(cpu: &mut Cpu) -> Effect {
    let a = cpu.r.a;
    cpu.push_stack(a);
    Effect::NONE
}

/// PLA: pull the accumulator.
///
/// Listed as accumulator mode with the static write-back flag, so the
/// write-back stage moves `alu` into A after the flags are set here.
pub(crate) fn pla(cpu: &mut Cpu) -> Effect {
    cpu.alu = i32::from(cpu.pop_stack());
    cpu.r.set_nz(cpu.alu);
    Effect::NONE
}

/// PHX: push X.
pub(crate) fn phx(cpu: &mut Cpu) -> Effect {
    let x = cpu.r.x;
    cpu.push_stack(x);
    Effect::NONE
}

/// PLX: pull X.
pub(crate) fn plx(cpu: &mut Cpu) -> Effect {
    cpu.alu = i32::from(cpu.pop_stack());
    cpu.r.set_nz(cpu.alu);
    cpu.r.x = (cpu.alu & 0xFF) as u8;
    Effect::NONE
}

/// PHY: push Y.
pub(crate) fn phy(cpu: &mut Cpu) -> Effect {
    let y = cpu.r.y;
    cpu.push_stack(y);
    Effect::NONE
}

/// PLY: pull Y.
pub(crate) fn ply(cpu: &mut Cpu) -> Effect {
    cpu.alu = i32::from(cpu.pop_stack());
    cpu.r.set_nz(cpu.alu);
    cpu.r.y = (cpu.alu & 0xFF) as u8;
    Effect::NONE
}

/// PHP: push the status byte with Break set.
pub(crate) fn php(cpu: &mut Cpu) -> Effect {
    let sr = cpu.r.status_byte(true);
    cpu.push_stack(sr);
    Effect::NONE
}

/// PLP: pull the status byte.
pub(crate) fn plp(cpu: &mut Cpu) -> Effect {
    let sr = cpu.pop_stack();
    cpu.r.set_status_byte(sr);
    Effect::NONE
}
