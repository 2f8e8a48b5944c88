//! Flag set and clear operations. There is no SEV; overflow can only be
//! cleared.

use crate::cpu::Cpu;
use crate::opcodes::Effect;

/// CLC: clear carry.
pub(crate) fn clc(cpu: &mut Cpu) -> Effect {
    cpu.r.flag_c = false;
    Effect::NONE
}

/// SEC: set carry.
pub(crate) fn sec(cpu: &mut Cpu) -> Effect {
    cpu.r.flag_c = true;
    Effect::NONE
}

/// CLD: clear decimal mode.
pub(crate) fn cld(cpu: &mut Cpu) -> Effect {
    cpu.r.flag_d = false;
    Effect::NONE
}

/// SED: set decimal mode.
pub(crate) fn sed(cpu: &mut Cpu) -> Effect {
    cpu.r.flag_d = true;
    Effect::NONE
}

/// CLI: clear interrupt disable.
pub(crate) fn cli(cpu: &mut Cpu) -> Effect {
    cpu.r.flag_i = false;
    Effect::NONE
}

/// SEI: set interrupt disable.
pub(crate) fn sei(cpu: &mut Cpu) -> Effect {
    cpu.r.flag_i = true;
    Effect::NONE
}

/// CLV: clear overflow.
pub(crate) fn clv(cpu: &mut Cpu) -> Effect {
    cpu.r.flag_v = false;
    Effect::NONE
}
