//! `AND`/`OR`/`XOR`/`NOT`/`SHL`/`SHR` and their immediate forms.

use super::{Cpu, RuntimeError};
use crate::alu;
use crate::isa::{DecodedInstruction, Mnemonic};

pub fn execute(cpu: &mut Cpu, instr: DecodedInstruction) -> Result<bool, RuntimeError> {
    match instr {
        DecodedInstruction::RegRegReg { op: Mnemonic::And, rd, rs1, rs2 } => {
            let (result, flags) = alu::and(cpu.reg(rs1), cpu.reg(rs2));
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        DecodedInstruction::RegImm { op: Mnemonic::Andi, rd, imm8 } => {
            let (result, flags) = alu::and(cpu.reg(rd), imm8);
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        DecodedInstruction::RegRegReg { op: Mnemonic::Or, rd, rs1, rs2 } => {
            let (result, flags) = alu::or(cpu.reg(rs1), cpu.reg(rs2));
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        DecodedInstruction::RegImm { op: Mnemonic::Ori, rd, imm8 } => {
            let (result, flags) = alu::or(cpu.reg(rd), imm8);
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        DecodedInstruction::RegRegReg { op: Mnemonic::Xor, rd, rs1, rs2 } => {
            let (result, flags) = alu::xor(cpu.reg(rs1), cpu.reg(rs2));
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        DecodedInstruction::RegReg { op: Mnemonic::Not, rd, rs } => {
            let (result, flags) = alu::not(cpu.reg(rs));
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        DecodedInstruction::RegRegReg { op: Mnemonic::Shl, rd, rs1, rs2 } => {
            let (result, flags) = alu::shl(cpu.reg(rs1), cpu.reg(rs2), cpu.flags);
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        DecodedInstruction::RegRegReg { op: Mnemonic::Shr, rd, rs1, rs2 } => {
            let (result, flags) = alu::shr(cpu.reg(rs1), cpu.reg(rs2), cpu.flags);
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        other => unreachable!("ops_logical dispatched non-logical instruction {other:?}"),
    }
    Ok(false)
}
