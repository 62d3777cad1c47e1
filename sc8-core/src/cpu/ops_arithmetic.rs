//! `ADD`/`SUB`/`MUL`/`INC`/`DEC`/`CMP` and their immediate forms.

use super::{Cpu, RuntimeError};
use crate::alu;
use crate::isa::{DecodedInstruction, Mnemonic};

pub fn execute(cpu: &mut Cpu, instr: DecodedInstruction) -> Result<bool, RuntimeError> {
    match instr {
        DecodedInstruction::RegRegReg { op: Mnemonic::Add, rd, rs1, rs2 } => {
            let (result, flags) = alu::add(cpu.reg(rs1), cpu.reg(rs2));
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        DecodedInstruction::RegImm { op: Mnemonic::Addi, rd, imm8 } => {
            let (result, flags) = alu::add(cpu.reg(rd), imm8);
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        DecodedInstruction::RegRegReg { op: Mnemonic::Sub, rd, rs1, rs2 } => {
            let (result, flags) = alu::sub(cpu.reg(rs1), cpu.reg(rs2));
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        DecodedInstruction::RegImm { op: Mnemonic::Subi, rd, imm8 } => {
            let (result, flags) = alu::sub(cpu.reg(rd), imm8);
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        DecodedInstruction::RegRegReg { op: Mnemonic::Mul, rd, rs1, rs2 } => {
            let (result, flags) = alu::mul(cpu.reg(rs1), cpu.reg(rs2));
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        DecodedInstruction::UnaryReg { op: Mnemonic::Inc, rd } => {
            let (result, flags) = alu::add(cpu.reg(rd), 1);
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        DecodedInstruction::UnaryReg { op: Mnemonic::Dec, rd } => {
            let (result, flags) = alu::sub(cpu.reg(rd), 1);
            cpu.set_reg(rd, result);
            cpu.flags = flags;
        }
        // `CMP`'s third register field is reserved and always zero; the
        // comparison itself is between `rd` and `rs1`.
        DecodedInstruction::RegRegReg { op: Mnemonic::Cmp, rd, rs1, .. } => {
            cpu.flags = alu::compare(cpu.reg(rd), cpu.reg(rs1));
        }
        DecodedInstruction::RegImm { op: Mnemonic::Cmpi, rd, imm8 } => {
            cpu.flags = alu::compare(cpu.reg(rd), imm8);
        }
        other => unreachable!("ops_arithmetic dispatched non-arithmetic instruction {other:?}"),
    }
    Ok(false)
}
