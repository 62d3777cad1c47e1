//! `JMP`/`J??`/`CALL`/`RET`/`HALT`/`NOP` — everything that can redirect
//! `pc` itself. Returns `true` when it has already set `pc`, so `step`
//! knows not to also advance past the instruction's own bytes.

use super::{Cpu, RuntimeError};
use crate::alu::{FLAG_C, FLAG_Z};
use crate::isa::{DecodedInstruction, Mnemonic};
use crate::memory::AddressSpace;

/// `CALL`/`JMP`/conditional jumps are all 3 bytes wide.
const CONTROL_INSTR_SIZE: u16 = 3;

pub fn execute(
    cpu: &mut Cpu,
    mem: &mut AddressSpace,
    instr: DecodedInstruction,
) -> Result<bool, RuntimeError> {
    match instr {
        DecodedInstruction::Addr { op: Mnemonic::Jmp, addr16 } => {
            cpu.pc = addr16;
            Ok(true)
        }
        DecodedInstruction::Addr { op: Mnemonic::Jz, addr16 } => {
            Ok(take_branch(cpu, addr16, cpu.flags & FLAG_Z != 0))
        }
        DecodedInstruction::Addr { op: Mnemonic::Jnz, addr16 } => {
            Ok(take_branch(cpu, addr16, cpu.flags & FLAG_Z == 0))
        }
        DecodedInstruction::Addr { op: Mnemonic::Jc, addr16 } => {
            Ok(take_branch(cpu, addr16, cpu.flags & FLAG_C != 0))
        }
        DecodedInstruction::Addr { op: Mnemonic::Jnc, addr16 } => {
            Ok(take_branch(cpu, addr16, cpu.flags & FLAG_C == 0))
        }
        DecodedInstruction::Addr { op: Mnemonic::Call, addr16 } => {
            let return_addr = cpu.pc.wrapping_add(CONTROL_INSTR_SIZE);
            cpu.push_u16(mem, return_addr)?;
            cpu.pc = addr16;
            Ok(true)
        }
        DecodedInstruction::Nullary { op: Mnemonic::Ret } => {
            cpu.pc = cpu.pop_u16(mem)?;
            Ok(true)
        }
        DecodedInstruction::Nullary { op: Mnemonic::Halt } => {
            cpu.halted = true;
            Ok(false)
        }
        DecodedInstruction::Nullary { op: Mnemonic::Nop } => Ok(false),
        other => unreachable!("ops_control dispatched non-control instruction {other:?}"),
    }
}

fn take_branch(cpu: &mut Cpu, addr16: u16, condition: bool) -> bool {
    if condition {
        cpu.pc = addr16;
        true
    } else {
        false
    }
}
