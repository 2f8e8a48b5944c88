//! Bit manipulation in memory: TSB/TRB and the Rockwell RMB/SMB families.
//! All of these are read-modify-write, so they request write-back.

use crate::cpu::Cpu;
use crate::opcodes::Effect;

/// TSB: test bits against A, then set them in memory.
pub(crate) fn tsb(cpu: &mut Cpu) -> Effect {
    cpu.r.flag_z = cpu.alu & i32::from(cpu.r.a) == 0;
    cpu.alu |= i32::from(cpu.r.a);
    Effect::WRITE_BACK
}

/// TRB: test bits against A, then reset them in memory.
pub(crate) fn trb(cpu: &mut Cpu) -> Effect {
    cpu.r.flag_z = cpu.alu & i32::from(cpu.r.a) == 0;
    cpu.alu &= !i32::from(cpu.r.a);
    Effect::WRITE_BACK
}

fn rmb(cpu: &mut Cpu, bit: i32) -> Effect {
    cpu.alu &= !bit;
    Effect::WRITE_BACK
}

fn smb(cpu: &mut Cpu, bit: i32) -> Effect {
    cpu.alu |= bit;
    Effect::WRITE_BACK
}

/// RMB0: reset bit 0 of a zero-page byte. No flags.
pub(crate) fn rmb0(cpu: &mut Cpu) -> Effect {
    rmb(cpu, 0x01)
}

/// RMB1: reset bit 1.
pub(crate) fn rmb1(cpu: &mut Cpu) -> Effect {
    rmb(cpu, 0x02)
}

/// RMB2: reset bit 2.
pub(crate) fn rmb2(cpu: &mut Cpu) -> Effect {
    rmb(cpu, 0x04)
}

/// RMB3: reset bit 3.
pub(crate) fn rmb3(cpu: &mut Cpu) -> Effect {
    rmb(cpu, 0x08)
}

/// RMB4: reset bit 4.
pub(crate) fn rmb4(cpu: &mut Cpu) -> Effect {
    rmb(cpu, 0x10)
}

/// RMB5: reset bit 5.
pub(crate) fn rmb5(cpu: &mut Cpu) -> Effect {
    rmb(cpu, 0x20)
}

/// RMB6: reset bit 6.
pub(crate) fn rmb6(cpu: &mut Cpu) -> Effect {
    rmb(cpu, 0x40)
}

/// RMB7: reset bit 7.
pub(crate) fn rmb7(cpu: &mut Cpu) -> Effect {
    rmb(cpu, 0x80)
}

/// SMB0: set bit 0 of a zero-page byte. No flags.
pub(crate) fn smb0(cpu: &mut Cpu) -> Effect {
    smb(cpu, 0x01)
}

/// SMB1: set bit 1.
pub(crate) fn smb1(cpu: &mut Cpu) -> Effect {
    smb(cpu, 0x02)
}

/// SMB2: set bit 2.
pub(crate) fn smb2(cpu: &mut Cpu) -> Effect {
    smb(cpu, 0x04)
}

/// SMB3: set bit 3.
pub(crate) fn smb3(cpu: &mut Cpu) -> Effect {
    smb(cpu, 0x08)
}

/// SMB4: set bit 4.
pub(crate) fn smb4(cpu: &mut Cpu) -> Effect {
    smb(cpu, 0x10)
}

/// SMB5: set bit 5.
pub(crate) fn smb5(cpu: &mut Cpu) -> Effect {
    smb(cpu, 0x20)
}

/// SMB6: set bit 6.
pub(crate) fn smb6(cpu: &mut Cpu) -> Effect {
    smb(cpu, 0x40)
}

/// SMB7: set bit 7.
pub(crate) fn smb7(cpu: &mut Cpu) -> Effect {
    smb(cpu, 0x80)
}
