//! Assembles and runs a program to completion, then hands back the
//! resulting CPU and memory for assertions.

use super::Cpu;
use crate::memory::AddressSpace;

pub const N: u8 = crate::alu::FLAG_N;
pub const Z: u8 = crate::alu::FLAG_Z;
pub const C: u8 = crate::alu::FLAG_C;
pub const V: u8 = crate::alu::FLAG_V;

pub fn run_program(source: &str) -> (Cpu, AddressSpace) {
    let image = crate::asm::assemble(source).expect("test program must assemble cleanly");
    let mut mem = AddressSpace::new();
    mem.load_program(crate::memory::PROGRAM_ORIGIN, &image)
        .expect("test program must fit in memory");
    let mut cpu = Cpu::new();
    cpu.run(&mut mem).expect("test program must run to HALT without a runtime error");
    (cpu, mem)
}

#[macro_export]
macro_rules! assert_register {
    ($cpu:expr, $index:expr, $value:expr) => {
        assert_eq!(
            $cpu.reg($index),
            $value,
            "R{} was {:#04x}, expected {:#04x}",
            $index,
            $cpu.reg($index),
            $value
        );
    };
}

#[macro_export]
macro_rules! assert_status {
    ($cpu:expr, $mask:expr) => {
        assert_eq!(
            $cpu.flags & ($crate::cpu::test_helpers::N
                | $crate::cpu::test_helpers::Z
                | $crate::cpu::test_helpers::C
                | $crate::cpu::test_helpers::V),
            $mask,
            "flags were {:#010b}, expected {:#010b}",
            $cpu.flags,
            $mask
        );
    };
}
