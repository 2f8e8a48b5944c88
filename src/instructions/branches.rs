//! Branch operations: the eight conditional branches, BRA, and the Rockwell
//! bit-branches BBR/BBS.
//!
//! For relative-mode opcodes the resolver has already computed the target
//! into `cpu.address` and staged the taken-branch cycle bump in `cpu.alu`
//! (1, or 2 when the target page differs), so taking a branch is just a PC
//! load plus the staged cycles.

use crate::addressing;
use crate::cpu::Cpu;
use crate::opcodes::Effect;

fn branch_if(cpu: &mut Cpu, taken: bool) -> Effect {
    if taken {
        cpu.set_pc(cpu.address);
        Effect::extra(cpu.alu as u32)
    } else {
        Effect::NONE
    }
}

/// BCS: branch on carry set.
pub(crate) fn bcs(cpu: &mut Cpu) -> Effect {
    let taken = cpu.r.flag_c;
    branch_if(cpu, taken)
}

/// BCC: branch on carry clear.
pub(crate) fn bcc(cpu: &mut Cpu) -> Effect {
    let taken = !cpu.r.flag_c;
    branch_if(cpu, taken)
}

/// BEQ: branch on zero set.
pub(crate) fn beq(cpu: &mut Cpu) -> Effect {
    let taken = cpu.r.flag_z;
    branch_if(cpu, taken)
}

/// BNE: branch on zero clear.
pub(crate) fn bne(cpu: &mut Cpu) -> Effect {
    let taken = !cpu.r.flag_z;
    branch_if(cpu, taken)
}

/// BMI: branch on negative set.
pub(crate) fn bmi(cpu: &mut Cpu) -> Effect {
    let taken = cpu.r.flag_n;
    branch_if(cpu, taken)
}

/// BPL: branch on negative clear.
pub(crate) fn bpl(cpu: &mut Cpu) -> Effect {
    let taken = !cpu.r.flag_n;
    branch_if(cpu, taken)
}

/// BVS: branch on overflow set.
pub(crate) fn bvs(cpu: &mut Cpu) -> Effect {
    let taken = cpu.r.flag_v;
    branch_if(cpu, taken)
}

/// BVC: branch on overflow clear.
pub(crate) fn bvc(cpu: &mut Cpu) -> Effect {
    let taken = !cpu.r.flag_v;
    branch_if(cpu, taken)
}

/// BRA: branch always.
pub(crate) fn bra(cpu: &mut Cpu) -> Effect {
    branch_if(cpu, true)
}

/// Shared body of BBR/BBS. The zero-page operand has already been tested
/// into `cpu.alu`; when the branch is taken, relative resolution is re-run
/// against the second operand byte. The PC has advanced past both operands
/// by now, so it is backed up by one to sit on the offset byte first.
fn branch_on_bit(cpu: &mut Cpu, bit: i32, wanted_set: bool) -> Effect {
    if (cpu.alu & bit != 0) != wanted_set {
        return Effect::NONE;
    }
    cpu.r.pc = cpu.r.pc.wrapping_sub(1);
    let extra = addressing::relative(cpu);
    cpu.r.pc = cpu.address;
    Effect::extra(extra + cpu.alu as u32)
}

/// BBR0: branch if bit 0 of the zero-page operand is clear.
pub(crate) fn bbr0(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x01, false)
}

/// BBR1: branch if bit 1 clear.
pub(crate) fn bbr1(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x02, false)
}

/// BBR2: branch if bit 2 clear.
pub(crate) fn bbr2(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x04, false)
}

/// BBR3: branch if bit 3 clear.
pub(crate) fn bbr3(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x08, false)
}

/// BBR4: branch if bit 4 clear.
pub(crate) fn bbr4(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x10, false)
}

/// BBR5: branch if bit 5 clear.
pub(crate) fn bbr5(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x20, false)
}

/// BBR6: branch if bit 6 clear.
pub(crate) fn bbr6(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x40, false)
}

/// BBR7: branch if bit 7 clear.
pub(crate) fn bbr7(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x80, false)
}

/// BBS0: branch if bit 0 of the zero-page operand is set.
pub(crate) fn bbs0(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x01, true)
}

/// BBS1: branch if bit 1 set.
pub(crate) fn bbs1(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x02, true)
}

/// BBS2: branch if bit 2 set.
pub(crate) fn bbs2(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x04, true)
}

/// BBS3: branch if bit 3 set.
pub(crate) fn bbs3(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x08, true)
}

/// BBS4: branch if bit 4 set.
pub(crate) fn bbs4(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x10, true)
}

/// BBS5: branch if bit 5 set.
pub(crate) fn bbs5(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x20, true)
}

/// BBS6: branch if bit 6 set.
pub(crate) fn bbs6(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x40, true)
}

/// BBS7: branch if bit 7 set.
pub(crate) fn bbs7(cpu: &mut Cpu) -> Effect {
    branch_on_bit(cpu, 0x80, true)
}
