//! Orchestrates the two-pass assembler: lex, then parse (assign
//! addresses and symbols), then encode (resolve operands and emit
//! bytes). Each stage lives in its own file and collects its own
//! diagnostics rather than stopping at the first error.

pub mod encoder;
pub mod lexer;
pub mod parser;

use colored::Colorize;

use parser::Diagnostic;

#[derive(Debug)]
pub struct AssembleError {
    pub diagnostics: Vec<Diagnostic>,
    source: String,
}

impl AssembleError {
    /// Render every diagnostic with a colored, caret-pointed excerpt of
    /// the offending line.
    pub fn render(&self) -> String {
        let lines: Vec<&str> = self.source.lines().collect();
        let mut out = String::new();
        for diag in &self.diagnostics {
            out.push_str(&format!(
                "{} {}\n",
                format!("line {}:", diag.line).bold().red(),
                diag.message
            ));
            if let Some(text) = lines.get(diag.line.saturating_sub(1)) {
                out.push_str(&format!("  {text}\n"));
                out.push_str(&format!(
                    "  {}{}\n",
                    " ".repeat(diag.col.saturating_sub(1)),
                    "^".yellow()
                ));
            }
        }
        out
    }
}

impl std::fmt::Display for AssembleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error(s) assembling program", self.diagnostics.len())
    }
}

impl std::error::Error for AssembleError {}

/// Assemble source text into a flat byte image ready to load at
/// `memory::PROGRAM_ORIGIN` (`0x0100`), the address the address cursor
/// itself starts counting from. Every diagnostic from every stage is
/// collected before returning, rather than stopping at the first one.
pub fn assemble(source: &str) -> Result<Vec<u8>, AssembleError> {
    let tokens = lexer::tokenize(source);
    let parsed = parser::parse(&tokens);
    let encoded = encoder::encode(&parsed);

    let mut diagnostics = parsed.diagnostics;
    diagnostics.extend(encoded.diagnostics);

    if diagnostics.is_empty() {
        Ok(encoded.bytes)
    } else {
        diagnostics.sort_by_key(|d| (d.line, d.col));
        Err(AssembleError { diagnostics, source: source.to_string() })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn a_clean_program_assembles_with_no_diagnostics() {
        let bytes = assemble(
            "
            LOADI R0, 1
            HALT
            ",
        )
        .unwrap();
        assert_eq!(bytes.len(), 3);
    }

    #[test]
    fn diagnostics_from_every_stage_are_collected_together() {
        let err = assemble(
            "
            BOGUS R0
            JMP nowhere
            ",
        )
        .unwrap_err();
        assert_eq!(err.diagnostics.len(), 2);
        let rendered = err.render();
        assert!(rendered.contains("unknown mnemonic"));
        assert!(rendered.contains("undefined label"));
    }
}
