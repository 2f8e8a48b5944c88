//! Spot checks on the dispatch table layout.

use lib65c02::{AddressingMode, OPCODE_TABLE};

#[test]
fn test_table_covers_every_opcode() {
    assert_eq!(OPCODE_TABLE.len(), 256);
}

#[test]
fn test_well_known_entries() {
    let checks: &[(usize, &str, AddressingMode, u8, u8)] = &[
        (0x00, "BRK", AddressingMode::Implied, 1, 7),
        (0x20, "JSR", AddressingMode::Absolute, 2, 6),
        (0x4C, "JMP", AddressingMode::Absolute, 2, 3),
        (0x60, "RTS", AddressingMode::Implied, 0, 6),
        (0x6C, "JMP", AddressingMode::Indirect, 2, 5),
        (0x7C, "JMP", AddressingMode::AbsoluteIndirectX, 2, 6),
        (0x80, "BRA", AddressingMode::Relative, 1, 3),
        (0x8D, "STA", AddressingMode::Absolute, 2, 4),
        (0xA9, "LDA", AddressingMode::Immediate, 1, 2),
        (0xCB, "WAI", AddressingMode::Implied, 0, 3),
        (0xDB, "STP", AddressingMode::Implied, 0, 3),
        (0xEA, "NOP", AddressingMode::Implied, 0, 2),
    ];
    for &(code, mnemonic, mode, bytes, cycles) in checks {
        let entry = &OPCODE_TABLE[code];
        assert_eq!(entry.mnemonic, mnemonic, "opcode {:#04X}", code);
        assert_eq!(entry.mode, mode, "opcode {:#04X}", code);
        assert_eq!(entry.operand_bytes, bytes, "opcode {:#04X}", code);
        assert_eq!(entry.base_cycles, cycles, "opcode {:#04X}", code);
    }
}

#[test]
fn test_rockwell_columns() {
    // Columns 7 and F of the low rows are RMB/SMB and BBR/BBS.
    for bit in 0..8u8 {
        let rmb = &OPCODE_TABLE[usize::from(bit) * 0x10 + 0x07];
        let smb = &OPCODE_TABLE[usize::from(bit) * 0x10 + 0x87];
        let bbr = &OPCODE_TABLE[usize::from(bit) * 0x10 + 0x0F];
        let bbs = &OPCODE_TABLE[usize::from(bit) * 0x10 + 0x8F];
        assert_eq!(rmb.mnemonic, format!("RMB{}", bit));
        assert_eq!(smb.mnemonic, format!("SMB{}", bit));
        assert_eq!(bbr.mnemonic, format!("BBR{}", bit));
        assert_eq!(bbs.mnemonic, format!("BBS{}", bit));
        assert_eq!(bbr.operand_bytes, 2);
        assert_eq!(bbs.operand_bytes, 2);
    }
}

#[test]
fn test_inc_dec_accumulator_slots() {
    assert_eq!(OPCODE_TABLE[0x1A].mnemonic, "INC");
    assert_eq!(OPCODE_TABLE[0x1A].mode, AddressingMode::Accumulator);
    assert_eq!(OPCODE_TABLE[0x3A].mnemonic, "DEC");
    assert_eq!(OPCODE_TABLE[0x3A].mode, AddressingMode::Accumulator);
}

#[test]
fn test_every_mnemonic_is_three_or_four_chars() {
    for entry in OPCODE_TABLE.iter() {
        assert!(entry.mnemonic.len() == 3 || entry.mnemonic.len() == 4);
    }
}
