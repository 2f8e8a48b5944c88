//! JMP in its three modes, including the indirect page-wrap bug.

use lib65c02::{Cpu, RESET_VECTOR};

fn setup_cpu(program: &[u8]) -> Cpu {
    let mut cpu = Cpu::new();
    cpu.copy_into_memory(0x8000, program);
    cpu.copy_into_memory(RESET_VECTOR, &[0x00, 0x80]);
    cpu.reset();
    cpu
}

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu(&[0x4C, 0x34, 0x12]);
    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.r.pc, 0x1234);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu(&[0x6C, 0x00, 0x30]);
    cpu.copy_into_memory(0x3000, &[0x78, 0x56]);
    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.r.pc, 0x5678);
}

#[test]
fn test_jmp_indirect_page_wrap_bug() {
    // Pointer at $30FF: the high byte comes from $3000, not $3100.
    let mut cpu = setup_cpu(&[0x6C, 0xFF, 0x30]);
    cpu.copy_into_memory(0x30FF, &[0x78]);
    cpu.copy_into_memory(0x3000, &[0x40]);
    cpu.copy_into_memory(0x3100, &[0x99]); // the byte a fixed part would use
    cpu.step();
    assert_eq!(cpu.r.pc, 0x4078);
}

#[test]
fn test_jmp_absolute_indexed_indirect() {
    // LDX #$04 / JMP ($3000,X) -> pointer read from $3004
    let mut cpu = setup_cpu(&[0xA2, 0x04, 0x7C, 0x00, 0x30]);
    cpu.copy_into_memory(0x3004, &[0xCD, 0xAB]);
    cpu.step();
    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.r.pc, 0xABCD);
}

#[test]
fn test_jmp_indexed_indirect_carries_into_page() {
    // LDX #$02 / JMP ($30FF,X): the index carries into the pointer page,
    // so the pointer is read from $3101.
    let mut cpu = setup_cpu(&[0xA2, 0x02, 0x7C, 0xFF, 0x30]);
    cpu.copy_into_memory(0x3101, &[0x21, 0x43]);
    cpu.step();
    cpu.step();
    assert_eq!(cpu.r.pc, 0x4321);
}
