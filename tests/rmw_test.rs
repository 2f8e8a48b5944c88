//! Read-modify-write opcodes: one opcode value serving both accumulator and
//! memory destinations, plus TSB/TRB and the Rockwell zero-page bit ops.

use lib65c02::{Cpu, RESET_VECTOR};

fn setup_cpu(program: &[u8]) -> Cpu {
    let mut cpu = Cpu::new();
    cpu.copy_into_memory(0x8000, program);
    cpu.copy_into_memory(RESET_VECTOR, &[0x00, 0x80]);
    cpu.reset();
    cpu
}

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu(&[0xA9, 0x41, 0x0A]); // LDA #$41 / ASL A
    cpu.step();
    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.r.a, 0x82);
    assert!(!cpu.r.flag_c);
    assert!(cpu.r.flag_n);
}

#[test]
fn test_asl_memory() {
    let mut cpu = setup_cpu(&[0x06, 0x40]); // ASL $40
    cpu.copy_into_memory(0x0040, &[0x81]);
    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.read_byte(0x0040), 0x02);
    assert!(cpu.r.flag_c);
    // The accumulator is untouched by the memory variant.
    assert_eq!(cpu.r.a, 0x00);
}

#[test]
fn test_asl_of_0x80_keeps_zero_clear() {
    // The shifted-out bit lives on in the wide ALU value, so Z stays clear
    // even though the stored byte is zero.
    let mut cpu = setup_cpu(&[0xA9, 0x80, 0x0A]);
    cpu.step();
    cpu.step();
    assert_eq!(cpu.r.a, 0x00);
    assert!(cpu.r.flag_c);
    assert!(!cpu.r.flag_z);
}

#[test]
fn test_lsr_shifts_into_carry() {
    let mut cpu = setup_cpu(&[0xA9, 0x03, 0x4A]); // LDA #$03 / LSR A
    cpu.step();
    cpu.step();
    assert_eq!(cpu.r.a, 0x01);
    assert!(cpu.r.flag_c);
    assert!(!cpu.r.flag_n);
}

#[test]
fn test_rol_and_ror_move_carry_through() {
    // SEC / LDA #$40 / ROL A -> 0x81, carry clear
    let mut cpu = setup_cpu(&[0x38, 0xA9, 0x40, 0x2A]);
    for _ in 0..3 {
        cpu.step();
    }
    assert_eq!(cpu.r.a, 0x81);
    assert!(!cpu.r.flag_c);

    // SEC / LDA #$02 / ROR A -> 0x81, carry clear
    let mut cpu = setup_cpu(&[0x38, 0xA9, 0x02, 0x6A]);
    for _ in 0..3 {
        cpu.step();
    }
    assert_eq!(cpu.r.a, 0x81);
    assert!(!cpu.r.flag_c);
}

#[test]
fn test_inc_dec_accumulator() {
    // INC A / INC A / DEC A
    let mut cpu = setup_cpu(&[0x1A, 0x1A, 0x3A]);
    assert_eq!(cpu.step(), 2);
    cpu.step();
    assert_eq!(cpu.r.a, 0x02);
    cpu.step();
    assert_eq!(cpu.r.a, 0x01);
}

#[test]
fn test_inc_dec_memory_wraps() {
    let mut cpu = setup_cpu(&[0xE6, 0x40, 0xC6, 0x41]); // INC $40 / DEC $41
    cpu.copy_into_memory(0x0040, &[0xFF]);
    cpu.copy_into_memory(0x0041, &[0x00]);
    cpu.step();
    assert_eq!(cpu.read_byte(0x0040), 0x00);
    assert!(cpu.r.flag_z);
    cpu.step();
    assert_eq!(cpu.read_byte(0x0041), 0xFF);
    assert!(cpu.r.flag_n);
}

#[test]
fn test_inc_absolute_x_cycle_count() {
    // LDX #$01 / INC $1234,X is a flat 7 cycles
    let mut cpu = setup_cpu(&[0xA2, 0x01, 0xFE, 0x34, 0x12]);
    cpu.step();
    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.read_byte(0x1235), 0x01);
}

#[test]
fn test_tsb_sets_bits_and_tests() {
    let mut cpu = setup_cpu(&[0xA9, 0x03, 0x04, 0x40]); // LDA #$03 / TSB $40
    cpu.copy_into_memory(0x0040, &[0x41]);
    cpu.step();
    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.read_byte(0x0040), 0x43);
    // A & old memory = 0x01, so Z is clear.
    assert!(!cpu.r.flag_z);
}

#[test]
fn test_trb_clears_bits_and_tests() {
    let mut cpu = setup_cpu(&[0xA9, 0x0C, 0x14, 0x40]); // LDA #$0C / TRB $40
    cpu.copy_into_memory(0x0040, &[0x43]);
    cpu.step();
    cpu.step();
    assert_eq!(cpu.read_byte(0x0040), 0x43);
    // No common bits: Z set, memory unchanged by the clear.
    assert!(cpu.r.flag_z);
}

#[test]
fn test_rmb_and_smb() {
    // RMB1 $40 / SMB7 $40
    let mut cpu = setup_cpu(&[0x17, 0x40, 0xF7, 0x40]);
    cpu.copy_into_memory(0x0040, &[0x03]);
    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.read_byte(0x0040), 0x01);
    cpu.step();
    assert_eq!(cpu.read_byte(0x0040), 0x81);
    // Neither touches flags.
    assert!(!cpu.r.flag_z);
    assert!(!cpu.r.flag_n);
}
