//! Arithmetic, logic, compare and bit-test operations.
//!
//! ADC and SBC implement both binary and BCD mode; the decimal paths follow
//! Marko Makela's derivation of the 6502 decimal circuit, so invalid BCD
//! inputs produce the same garbage the silicon does.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::opcodes::{Effect, OPCODE_TABLE};

/// ADC: add memory and carry to the accumulator.
pub(crate) fn adc(cpu: &mut Cpu) -> Effect {
    let o1 = i32::from(cpu.r.a);
    let o2 = cpu.alu;
    let carry = i32::from(cpu.r.flag_c);

    if cpu.r.flag_d {
        // Z reflects the binary sum even in decimal mode.
        cpu.r.flag_z = (o1 + o2 + carry) & 0xFF == 0;

        // Add the low nibbles with carry and apply the +6 fixup.
        let low = (o1 & 0x0F) + (o2 & 0x0F) + carry;
        let low = if low < 0x0A { low } else { low + 6 };

        // High nibbles plus the carry-out of the corrected low sum.
        let high = (o1 & 0xF0) + (o2 & 0xF0) + (low & 0xF0);

        // N and V look at bit 7 of the uncorrected high sum.
        cpu.r.flag_n = high & 0x80 != 0;
        cpu.r.flag_v = (o1 & 0x80) == (o2 & 0x80) && (o1 & 0x80) != (high & 0x80);

        // Merge nibbles, applying the +0x60 fixup on decimal overflow.
        cpu.alu = (low & 0x0F) | if high < 0xA0 { high } else { high + 0x60 };
        cpu.r.set_carry_add(cpu.alu);
        cpu.r.a = (cpu.alu & 0xFF) as u8;
    } else {
        cpu.alu = o1 + o2 + carry;
        cpu.r.set_carry_add(cpu.alu);
        cpu.r.flag_v = (o1 & 0x80) == (o2 & 0x80) && (o1 & 0x80) != (cpu.alu & 0x80);
        cpu.r.a = (cpu.alu & 0xFF) as u8;
        cpu.r.set_nz(i32::from(cpu.r.a));
    }
    Effect::NONE
}

/// SBC: subtract memory and borrow from the accumulator.
pub(crate) fn sbc(cpu: &mut Cpu) -> Effect {
    let o1 = i32::from(cpu.r.a);
    let o2 = cpu.alu;
    let borrow = i32::from(!cpu.r.flag_c);

    if cpu.r.flag_d {
        let low = (o1 & 0x0F) - (o2 & 0x0F) - borrow;
        let low = if low & 0x10 == 0 { low } else { low - 6 };
        let high = (o1 & 0xF0) - (o2 & 0xF0) - (low & 0x10);
        let merged = (low & 0x0F) | if high & 0x100 == 0 { high } else { high - 0x60 };

        // Flags come from the binary difference, N/Z from the merged result
        // before masking.
        cpu.alu = o1 - o2 - borrow;
        cpu.r.set_nz(merged);
        cpu.r.set_carry_sub(cpu.alu);
        cpu.r.a = (merged & 0xFF) as u8;
    } else {
        cpu.alu = o1 - o2 - borrow;
        cpu.r.a = (cpu.alu & 0xFF) as u8;
        cpu.r.flag_v = (o1 ^ o2) & (o1 ^ i32::from(cpu.r.a)) & 0x80 != 0;
        cpu.r.set_nz(i32::from(cpu.r.a));
        cpu.r.set_carry_sub(cpu.alu);
    }
    Effect::NONE
}

/// CMP: compare memory with the accumulator.
pub(crate) fn cmp(cpu: &mut Cpu) -> Effect {
    cpu.alu = i32::from(cpu.r.a) - cpu.alu;
    cpu.r.set_carry_sub(cpu.alu);
    cpu.r.set_nz(cpu.alu);
    Effect::NONE
}

/// CPX: compare memory with X.
pub(crate) fn cpx(cpu: &mut Cpu) -> Effect {
    cpu.alu = i32::from(cpu.r.x) - cpu.alu;
    cpu.r.set_carry_sub(cpu.alu);
    cpu.r.set_nz(cpu.alu);
    Effect::NONE
}

/// CPY: compare memory with Y.
pub(crate) fn cpy(cpu: &mut Cpu) -> Effect {
    cpu.alu = i32::from(cpu.r.y) - cpu.alu;
    cpu.r.set_carry_sub(cpu.alu);
    cpu.r.set_nz(cpu.alu);
    Effect::NONE
}

/// AND: bitwise and with the accumulator.
pub(crate) fn and(cpu: &mut Cpu) -> Effect {
    cpu.r.a &= (cpu.alu & 0xFF) as u8;
    cpu.r.set_nz(i32::from(cpu.r.a));
    Effect::NONE
}

/// ORA: bitwise or with the accumulator.
pub(crate) fn ora(cpu: &mut Cpu) -> Effect {
    cpu.r.a |= (cpu.alu & 0xFF) as u8;
    cpu.r.set_nz(i32::from(cpu.r.a));
    Effect::NONE
}

/// EOR: bitwise exclusive-or with the accumulator.
pub(crate) fn eor(cpu: &mut Cpu) -> Effect {
    cpu.r.a ^= (cpu.alu & 0xFF) as u8;
    cpu.r.set_nz(i32::from(cpu.r.a));
    Effect::NONE
}

/// BIT: non-destructive test of memory against the accumulator.
///
/// Z is set when `A & M` has no bits in common; N and V load bits 7 and 6 of
/// the operand. The immediate form leaves V untouched.
pub(crate) fn bit(cpu: &mut Cpu) -> Effect {
    if OPCODE_TABLE[cpu.opcode as usize].mode != AddressingMode::Immediate {
        cpu.r.flag_v = cpu.alu & 0x40 != 0;
    }
    cpu.r.flag_n = cpu.alu & 0x80 != 0;
    cpu.r.flag_z = cpu.alu & i32::from(cpu.r.a) == 0;
    Effect::NONE
}
