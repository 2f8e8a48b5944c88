//! Loads, stores and STZ across the common addressing modes, plus the
//! store-path guarantee that the target is never read first.

use lib65c02::{BusView, Cpu, MemoryIntercept, RESET_VECTOR};
use std::cell::RefCell;
use std::rc::Rc;

fn setup_cpu(program: &[u8]) -> Cpu {
    let mut cpu = Cpu::new();
    cpu.copy_into_memory(0x8000, program);
    cpu.copy_into_memory(RESET_VECTOR, &[0x00, 0x80]);
    cpu.reset();
    cpu
}

#[test]
fn test_lda_immediate_sets_flags() {
    let mut cpu = setup_cpu(&[0xA9, 0x00, 0xA9, 0x80]);
    cpu.step();
    assert!(cpu.r.flag_z);
    cpu.step();
    assert_eq!(cpu.r.a, 0x80);
    assert!(cpu.r.flag_n);
    assert!(!cpu.r.flag_z);
}

#[test]
fn test_lda_zero_page_and_absolute() {
    let mut cpu = setup_cpu(&[0xA5, 0x40, 0xAD, 0x00, 0x30]);
    cpu.copy_into_memory(0x0040, &[0x11]);
    cpu.copy_into_memory(0x3000, &[0x22]);
    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.r.a, 0x11);
    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.r.a, 0x22);
}

#[test]
fn test_ldx_ldy() {
    // LDX $40 / LDY $41 / LDX $40,Y / LDY $41,X
    let mut cpu = setup_cpu(&[0xA6, 0x40, 0xA4, 0x41, 0xB6, 0x3F, 0xB4, 0x40]);
    cpu.copy_into_memory(0x0040, &[0x07, 0x01]);
    cpu.step();
    cpu.step();
    assert_eq!(cpu.r.x, 0x07);
    assert_eq!(cpu.r.y, 0x01);
    cpu.step(); // $3F + Y(1) = $40
    assert_eq!(cpu.r.x, 0x07);
    cpu.step(); // $40 + X(7) = $47, zeroed memory
    assert_eq!(cpu.r.y, 0x00);
    assert!(cpu.r.flag_z);
}

#[test]
fn test_sta_modes() {
    // LDA #$5A / STA $40 / STA $3000 / LDX #$02 / STA $3000,X
    let mut cpu = setup_cpu(&[
        0xA9, 0x5A, 0x85, 0x40, 0x8D, 0x00, 0x30, 0xA2, 0x02, 0x9D, 0x00, 0x30,
    ]);
    cpu.step();
    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.read_byte(0x0040), 0x5A);
    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.read_byte(0x3000), 0x5A);
    cpu.step();
    // Indexed stores always pay for the fixup cycle.
    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.read_byte(0x3002), 0x5A);
}

#[test]
fn test_sta_indirect_modes() {
    // LDA #$77 / LDY #$10 / STA ($40),Y / STA ($42)
    let mut cpu = setup_cpu(&[0xA9, 0x77, 0xA0, 0x10, 0x91, 0x40, 0x92, 0x42]);
    cpu.copy_into_memory(0x0040, &[0x00, 0x30, 0x00, 0x31]);
    cpu.step();
    cpu.step();
    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.read_byte(0x3010), 0x77);
    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.read_byte(0x3100), 0x77);
}

#[test]
fn test_stx_sty() {
    let mut cpu = setup_cpu(&[0xA2, 0x33, 0xA0, 0x44, 0x86, 0x40, 0x84, 0x41]);
    for _ in 0..4 {
        cpu.step();
    }
    assert_eq!(cpu.read_byte(0x0040), 0x33);
    assert_eq!(cpu.read_byte(0x0041), 0x44);
}

#[test]
fn test_stz_clears_memory() {
    let mut cpu = setup_cpu(&[0x64, 0x40, 0x9C, 0x00, 0x30]); // STZ $40 / STZ $3000
    cpu.copy_into_memory(0x0040, &[0xFF]);
    cpu.copy_into_memory(0x3000, &[0xFF]);
    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.read_byte(0x0040), 0x00);
    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.read_byte(0x3000), 0x00);
}

#[test]
fn test_load_increment_store_program() {
    // LDA #$41 / STA $0200 / LDX $0200 / INX / STX $0201
    let mut cpu = setup_cpu(&[
        0xA9, 0x41, 0x8D, 0x00, 0x02, 0xAE, 0x00, 0x02, 0xE8, 0x8E, 0x01, 0x02,
    ]);
    for _ in 0..5 {
        cpu.step();
    }
    assert_eq!(cpu.r.a, 0x41);
    assert_eq!(cpu.r.x, 0x42);
    assert_eq!(cpu.read_byte(0x0200), 0x41);
    assert_eq!(cpu.read_byte(0x0201), 0x42);
}

#[test]
fn test_stores_touch_no_flags() {
    let mut cpu = setup_cpu(&[0xA9, 0x80, 0x85, 0x40, 0x64, 0x41]);
    cpu.step();
    assert!(cpu.r.flag_n);
    cpu.step(); // STA
    cpu.step(); // STZ
    assert!(cpu.r.flag_n);
    assert!(!cpu.r.flag_z);
}

struct ReadLogger {
    reads: Vec<u16>,
}

impl MemoryIntercept for ReadLogger {
    fn read(&mut self, address: u16, bus: &mut BusView<'_>) -> u8 {
        self.reads.push(address);
        bus.peek(address)
    }

    fn write(&mut self, _value: u8, _address: u16, _bus: &mut BusView<'_>) -> bool {
        false
    }
}

#[test]
fn test_store_does_not_read_target_first() {
    // A store target may be a write-sensitive device register, so the
    // operand fetch is skipped for store opcodes.
    let logger = Rc::new(RefCell::new(ReadLogger { reads: Vec::new() }));
    let mut cpu = setup_cpu(&[0xA9, 0x5A, 0x8D, 0x00, 0xD0]); // LDA / STA $D000
    cpu.bind_intercept(0xD000, logger.clone());
    cpu.step();
    cpu.step();
    assert!(logger.borrow().reads.is_empty());
    assert_eq!(cpu.read_byte(0xD000), 0x5A);
}
