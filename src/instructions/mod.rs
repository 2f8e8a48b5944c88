//! # Instruction Implementations
//!
//! Handlers for the execute stage, grouped by instruction family. Each
//! handler runs after addressing resolution with the operand preloaded into
//! `cpu.alu` and the effective address in `cpu.address`, and returns an
//! [`Effect`](crate::opcodes::Effect) describing extra cycles and whether
//! `alu` should be written back to the resolved destination.

pub(crate) mod alu;
pub(crate) mod bits;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;
