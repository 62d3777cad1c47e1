//! Bundles a `Cpu` with its `AddressSpace` behind the two operations
//! both binaries need: load an image and run it.

use crate::cpu::{Cpu, RuntimeError};
use crate::memory::{AddressSpace, LoadError};

pub struct Machine {
    pub cpu: Cpu,
    pub memory: AddressSpace,
    last_error: Option<RuntimeError>,
}

impl Machine {
    pub fn new() -> Self {
        Machine { cpu: Cpu::new(), memory: AddressSpace::new(), last_error: None }
    }

    /// Reset both halves, load `image` at `start`, and set the program
    /// counter there too — the same address the assembler's own
    /// address cursor assumed the image would begin at when it resolved
    /// labels, unless the caller deliberately relocates it.
    pub fn load_image(&mut self, image: &[u8], start: u16) -> Result<(), LoadError> {
        self.cpu.reset();
        self.memory.reset();
        self.last_error = None;
        self.memory.load_program(start, image)?;
        self.cpu.pc = start;
        Ok(())
    }

    /// Execute a single instruction. Returns `true` if the machine is
    /// still running afterward, `false` once it has halted — either via
    /// `HALT` or a runtime error, distinguishable through `last_error`.
    pub fn step(&mut self) -> bool {
        if self.cpu.halted {
            return false;
        }
        if let Err(err) = self.cpu.step(&mut self.memory) {
            self.last_error = Some(err);
            self.cpu.halted = true;
        }
        !self.cpu.halted
    }

    /// Run to completion. Returns `false` if a runtime error stopped it
    /// early rather than a guest `HALT`.
    pub fn run(&mut self) -> bool {
        while self.step() {}
        self.last_error.is_none()
    }

    pub fn halted(&self) -> bool {
        self.cpu.halted
    }

    pub fn last_error(&self) -> Option<&RuntimeError> {
        self.last_error.as_ref()
    }
}
