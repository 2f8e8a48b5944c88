//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents, then
//! executes a handful of instructions to find edge cases and crashes.

#![no_main]

use arbitrary::Arbitrary;
use lib65c02::Cpu;
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    /// Accumulator register
    a: u8,
    /// X index register
    x: u8,
    /// Y index register
    y: u8,
    /// Stack pointer
    sp: u8,
    /// Status register, unpacked into the six stored flags
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instructions + operands)
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    raise_irq: bool,
    raise_nmi: bool,
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = Cpu::new();

    cpu.copy_into_memory(0xFFFC, &[0x00, 0x80]); // reset -> 0x8000
    cpu.copy_into_memory(0xFFFE, &[0x00, 0x90]); // IRQ/BRK -> 0x9000
    cpu.copy_into_memory(0xFFFA, &[0x00, 0xA0]); // NMI -> 0xA000

    cpu.copy_into_memory(0x8000, &input.memory.program);
    cpu.copy_into_memory(0x0000, &input.memory.zero_page);
    cpu.copy_into_memory(0x0100, &input.memory.stack_page);
    cpu.copy_into_memory(0x4000, &input.memory.main_memory);

    cpu.reset();
    cpu.r.a = input.cpu_state.a;
    cpu.r.x = input.cpu_state.x;
    cpu.r.y = input.cpu_state.y;
    cpu.r.sp = input.cpu_state.sp;
    cpu.r.set_status_byte(input.cpu_state.status);

    if input.raise_irq {
        cpu.maskable_interrupt("fuzz");
    }
    if input.raise_nmi {
        cpu.non_maskable_interrupt();
    }

    // Execute a few instructions. Illegal opcodes and halts are fine,
    // we only care that nothing panics.
    for _ in 0..8 {
        cpu.step();
        if cpu.r.stopped {
            // A stopped CPU must stay inert.
            assert_eq!(cpu.step(), 0);
            break;
        }
    }
});
