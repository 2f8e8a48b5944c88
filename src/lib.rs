//! # lib65c02
//!
//! A cycle-accurate WDC 65C02 emulator library, including the Rockwell bit
//! instructions (BBR/BBS, RMB/SMB) and the power-control pair STP/WAI.
//!
//! The core is a per-instruction engine: a static 256-entry dispatch table
//! drives fetch, addressing resolution, execution and write-back, and
//! [`Cpu::step`] returns the cycles each instruction consumed, including
//! page-crossing and branch penalties and the NMOS-era dummy-read quirks
//! that memory-mapped hardware can observe.
//!
//! Peripherals attach through per-address [`MemoryIntercept`] hooks rather
//! than a trait-object bus: any address or range can be claimed, reads are
//! served by the hook and written through to the backing RAM, and writes can
//! be swallowed (which is all a ROM is; see [`Cpu::map_rom`]).
//!
//! # Quick Start
//!
//! ```
//! use lib65c02::{Cpu, RESET_VECTOR};
//!
//! let mut cpu = Cpu::new();
//!
//! // A tiny program at 0x8000: LDX #$08 / DEX / BNE -3 / STP
//! cpu.copy_into_memory(0x8000, &[0xA2, 0x08, 0xCA, 0xD0, 0xFD, 0xDB]);
//! cpu.copy_into_memory(RESET_VECTOR, &[0x00, 0x80]);
//! cpu.reset();
//!
//! let mut total = 0;
//! while !cpu.r.stopped {
//!     total += cpu.step();
//! }
//! assert_eq!(cpu.r.x, 0);
//! assert!(total > 0);
//! ```
//!
//! # Modules
//!
//! - [`cpu`]: the execution engine, vectors and the public bus API
//! - [`registers`]: register file and flag helpers
//! - [`memory`]: 64KB backing store and the intercept table
//! - [`rom`]: a canned read-only intercept
//! - [`addressing`]: the 16 addressing modes and their resolver
//! - [`opcodes`]: the static dispatch table
//! - [`trace`]: one-line execution dumps for debugging

pub mod addressing;
pub mod cpu;
mod instructions;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod rom;
pub mod trace;

pub use addressing::AddressingMode;
pub use cpu::{
    Cpu, IRQBRK_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK, VECTOR_TABLE, VECTOR_TABLE_LENGTH,
    ZERO_PAGE,
};
pub use memory::{BusView, Memory, MemoryIntercept, SharedIntercept, MEMORY_SIZE};
pub use opcodes::{Effect, OpFn, Opcode, OPCODE_TABLE};
pub use registers::Registers;
pub use rom::RomIntercept;
