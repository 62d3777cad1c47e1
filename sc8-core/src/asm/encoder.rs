//! Second pass: resolves every operand (registers, immediates, label
//! references) against the symbol table and turns each parsed
//! instruction into bytes via `isa::encode`. An instruction that fails
//! to resolve still emits a zero-filled placeholder of its correct
//! size, so a later instruction's address is never thrown off by an
//! earlier error — the same report-and-continue policy the parser
//! uses, carried through to this pass.

use super::parser::{Diagnostic, Operand, ParseOutput, ParsedInstruction, SymbolTable};
use crate::isa::{self, DecodedInstruction, Mnemonic, OperandShape};

pub struct EncodeOutput {
    pub bytes: Vec<u8>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn encode(parsed: &ParseOutput) -> EncodeOutput {
    let mut bytes = Vec::new();
    let mut diagnostics = Vec::new();

    for instr in &parsed.instructions {
        match resolve(instr, &parsed.symbols) {
            Ok(decoded) => bytes.extend(isa::encode(&decoded)),
            Err(message) => {
                diagnostics.push(Diagnostic { line: instr.line, col: 1, message });
                bytes.extend(std::iter::repeat(0).take(isa::size_of(instr.mnemonic) as usize));
            }
        }
    }

    EncodeOutput { bytes, diagnostics }
}

fn resolve(instr: &ParsedInstruction, symbols: &SymbolTable) -> Result<DecodedInstruction, String> {
    let op = instr.mnemonic;
    if op == Mnemonic::Nop {
        expect_operand_count(instr, 0)?;
        return Ok(DecodedInstruction::Nullary { op });
    }

    let info = isa::info(op).expect("every non-NOP mnemonic has a table entry");
    match info.shape {
        OperandShape::Nullary => {
            expect_operand_count(instr, 0)?;
            Ok(DecodedInstruction::Nullary { op })
        }
        OperandShape::UnaryReg => {
            expect_operand_count(instr, 1)?;
            let rd = register_operand(instr, 0)?;
            Ok(DecodedInstruction::UnaryReg { op, rd })
        }
        OperandShape::RegImm => {
            expect_operand_count(instr, 2)?;
            let rd = register_operand(instr, 0)?;
            let imm8 = immediate_operand(instr, 1)?;
            Ok(DecodedInstruction::RegImm { op, rd, imm8 })
        }
        OperandShape::RegReg => {
            expect_operand_count(instr, 2)?;
            let rd = register_operand(instr, 0)?;
            let rs = register_operand(instr, 1)?;
            Ok(DecodedInstruction::RegReg { op, rd, rs })
        }
        OperandShape::RegRegReg if op == Mnemonic::Cmp => {
            expect_operand_count(instr, 2)?;
            let rd = register_operand(instr, 0)?;
            let rs1 = register_operand(instr, 1)?;
            Ok(DecodedInstruction::RegRegReg { op, rd, rs1, rs2: 0 })
        }
        OperandShape::RegRegReg => {
            expect_operand_count(instr, 3)?;
            let rd = register_operand(instr, 0)?;
            let rs1 = register_operand(instr, 1)?;
            let rs2 = register_operand(instr, 2)?;
            Ok(DecodedInstruction::RegRegReg { op, rd, rs1, rs2 })
        }
        OperandShape::RegAddr => {
            expect_operand_count(instr, 2)?;
            let rd = register_operand(instr, 0)?;
            let addr16 = address_operand(instr, 1, symbols)?;
            Ok(DecodedInstruction::RegAddr { op, rd, addr16 })
        }
        OperandShape::Addr => {
            expect_operand_count(instr, 1)?;
            let addr16 = address_operand(instr, 0, symbols)?;
            Ok(DecodedInstruction::Addr { op, addr16 })
        }
    }
}

fn expect_operand_count(instr: &ParsedInstruction, want: usize) -> Result<(), String> {
    if instr.operands.len() != want {
        return Err(format!(
            "{:?} takes {want} operand(s), found {}",
            instr.mnemonic,
            instr.operands.len()
        ));
    }
    Ok(())
}

fn register_operand(instr: &ParsedInstruction, index: usize) -> Result<u8, String> {
    match instr.operands.get(index) {
        Some(Operand::Register(r)) => Ok(*r),
        Some(other) => Err(format!("expected a register operand, found {other:?}")),
        None => Err("missing register operand".to_string()),
    }
}

fn immediate_operand(instr: &ParsedInstruction, index: usize) -> Result<u8, String> {
    match instr.operands.get(index) {
        Some(Operand::Number(n)) => {
            if !(-128..=255).contains(n) {
                return Err(format!("immediate {n} does not fit in a byte"));
            }
            Ok((*n as i32 & 0xFF) as u8)
        }
        Some(other) => Err(format!("expected an immediate value, found {other:?}")),
        None => Err("missing immediate operand".to_string()),
    }
}

fn address_operand(
    instr: &ParsedInstruction,
    index: usize,
    symbols: &SymbolTable,
) -> Result<u16, String> {
    match instr.operands.get(index) {
        Some(Operand::Address(n)) | Some(Operand::Number(n)) => {
            if !(0..=0xFFFF).contains(n) {
                return Err(format!("address {n} does not fit in 16 bits"));
            }
            Ok(*n as u16)
        }
        Some(Operand::LabelRef(name)) => symbols
            .resolve(name)
            .ok_or_else(|| format!("undefined label `{name}`")),
        Some(other) => Err(format!("expected an address or label, found {other:?}")),
        None => Err("missing address operand".to_string()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::asm::{lexer::tokenize, parser::parse};

    fn encode_source(source: &str) -> EncodeOutput {
        let tokens = tokenize(source);
        let parsed = parse(&tokens);
        encode(&parsed)
    }

    #[test]
    fn undefined_label_emits_a_placeholder_of_the_right_size() {
        let out = encode_source("JMP nowhere");
        assert_eq!(out.bytes.len(), 3);
        assert_eq!(out.bytes, vec![0, 0, 0]);
        assert_eq!(out.diagnostics.len(), 1);
    }

    #[test]
    fn an_error_does_not_shift_later_instruction_addresses() {
        let out = encode_source(
            "
            JMP nowhere
            HALT
            ",
        );
        assert_eq!(out.bytes.len(), 4);
        assert_eq!(out.bytes[3], isa::info(Mnemonic::Halt).unwrap().opcode << 3);
    }

    #[test]
    fn bracketed_address_literals_resolve_like_bare_numbers() {
        let out = encode_source("STORE R0, [0x1000]");
        assert!(out.diagnostics.is_empty());
        assert_eq!(out.bytes.len(), 3);
    }

    #[test]
    fn cmp_takes_two_registers_and_zeroes_the_third_field() {
        let out = encode_source("CMP R1, R2");
        assert!(out.diagnostics.is_empty());
        assert_eq!(out.bytes.len(), 2);
        assert_eq!(out.bytes[1] & 0x03, 0);
    }
}
