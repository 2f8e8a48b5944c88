//! Flow control: jumps, subroutine linkage, software interrupts, and the
//! 65C02 power-control instructions STP and WAI.

use crate::cpu::{Cpu, IRQBRK_VECTOR};
use crate::opcodes::Effect;

/// Illegal opcode: decoded as a one-byte no-op. Even the NMOS killer
/// opcodes are skipped rather than modelled.
pub(crate) fn bad(_cpu: &mut Cpu) -> Effect {
    Effect::NONE
}

/// NOP: no operation.
pub(crate) fn nop(_cpu: &mut Cpu) -> Effect {
    Effect::NONE
}

/// JMP: load the PC with the resolved address.
pub(crate) fn jmp(cpu: &mut Cpu) -> Effect {
    cpu.set_pc(cpu.address);
    Effect::NONE
}

/// JSR: push the address of the last byte of this instruction, then jump.
/// RTS undoes the off-by-one.
pub(crate) fn jsr(cpu: &mut Cpu) -> Effect {
    let ret = cpu.r.pc.wrapping_sub(1);
    cpu.push_stack((ret >> 8) as u8);
    cpu.push_stack((ret & 0xFF) as u8);
    cpu.set_pc(cpu.address);
    Effect::NONE
}

/// RTS: pop the return address and resume one byte past it.
pub(crate) fn rts(cpu: &mut Cpu) -> Effect {
    let lo = cpu.pop_stack();
    let hi = cpu.pop_stack();
    cpu.address = u16::from_le_bytes([lo, hi]).wrapping_add(1);
    cpu.set_pc(cpu.address);
    Effect::NONE
}

/// BRK: software interrupt.
///
/// The PC has already advanced past the padding byte, so the pushed return
/// address skips it. The status byte goes up with Break set, then decimal
/// mode is cleared and interrupts are masked, as on the 65C02.
pub(crate) fn brk(cpu: &mut Cpu) -> Effect {
    let pc = cpu.r.pc;
    cpu.push_interrupt_frame(pc, true);
    let target = cpu.read_word(IRQBRK_VECTOR);
    cpu.set_pc(target);
    cpu.r.flag_d = false;
    cpu.r.flag_i = true;
    Effect::NONE
}

/// RTI: pop the status byte, then the return address. Unlike RTS there is
/// no off-by-one to undo.
pub(crate) fn rti(cpu: &mut Cpu) -> Effect {
    let sr = cpu.pop_stack();
    cpu.r.set_status_byte(sr);
    let lo = cpu.pop_stack();
    let hi = cpu.pop_stack();
    cpu.address = u16::from_le_bytes([lo, hi]);
    cpu.set_pc(cpu.address);
    Effect::NONE
}

/// STP: stop the clock until an external reset.
pub(crate) fn stp(cpu: &mut Cpu) -> Effect {
    cpu.r.stopped = true;
    Effect::NONE
}

/// WAI: idle until the next interrupt.
pub(crate) fn wai(cpu: &mut Cpu) -> Effect {
    cpu.r.waiting = true;
    Effect::NONE
}
