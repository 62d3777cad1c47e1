//! `PUSH`/`POP`. `CALL`/`RET` reuse the same `push_u16`/`pop_u16` helpers
//! on `Cpu` but live in `ops_control` since they also touch `pc`.

use super::{Cpu, RuntimeError};
use crate::isa::{DecodedInstruction, Mnemonic};
use crate::memory::AddressSpace;

pub fn execute(
    cpu: &mut Cpu,
    mem: &mut AddressSpace,
    instr: DecodedInstruction,
) -> Result<bool, RuntimeError> {
    match instr {
        DecodedInstruction::UnaryReg { op: Mnemonic::Push, rd } => {
            cpu.push_u8(mem, cpu.reg(rd))?;
        }
        DecodedInstruction::UnaryReg { op: Mnemonic::Pop, rd } => {
            let value = cpu.pop_u8(mem)?;
            cpu.set_reg(rd, value);
        }
        other => unreachable!("ops_stack dispatched non-stack instruction {other:?}"),
    }
    Ok(false)
}
