//! `LOAD`/`STORE`/`LOADI` — the only instructions that touch the
//! address space outside of the stack ops.

use super::{Cpu, RuntimeError};
use crate::isa::{DecodedInstruction, Mnemonic};
use crate::memory::AddressSpace;

pub fn execute(
    cpu: &mut Cpu,
    mem: &mut AddressSpace,
    instr: DecodedInstruction,
) -> Result<bool, RuntimeError> {
    match instr {
        DecodedInstruction::RegAddr { op: Mnemonic::Load, rd, addr16 } => {
            cpu.set_reg(rd, mem.read(addr16));
        }
        DecodedInstruction::RegAddr { op: Mnemonic::Store, rd, addr16 } => {
            mem.write(addr16, cpu.reg(rd));
        }
        DecodedInstruction::RegImm { op: Mnemonic::Loadi, rd, imm8 } => {
            cpu.set_reg(rd, imm8);
        }
        other => unreachable!("ops_memory dispatched non-memory instruction {other:?}"),
    }
    Ok(false)
}
