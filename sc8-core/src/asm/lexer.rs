//! Turns assembly source into a flat token stream. Lexing never fails:
//! a character that matches nothing becomes `Token::Unknown` and
//! scanning continues, so a single typo does not swallow diagnostics
//! for the rest of the file.

use crate::isa::{self, Mnemonic};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Mnemonic(Mnemonic),
    Register(u8),
    Number(i64),
    /// A bracketed address literal, e.g. `[0x1000]`, already stripped
    /// of its brackets.
    Address(i64),
    Identifier(String),
    Comma,
    Colon,
    Unknown(char),
}

#[derive(Debug, Clone)]
pub struct LexedToken {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

pub fn tokenize(source: &str) -> Vec<LexedToken> {
    let mut tokens = Vec::new();
    for (line_no, line) in source.lines().enumerate() {
        let line_no = line_no + 1;
        tokenize_line(line, line_no, &mut tokens);
    }
    tokens
}

fn tokenize_line(line: &str, line_no: usize, out: &mut Vec<LexedToken>) {
    let bytes: Vec<char> = line.chars().collect();
    let mut i = 0;
    while i < bytes.len() {
        let col = i + 1;
        let c = bytes[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if c == ';' {
            break; // rest of the line is a comment
        }
        if c == ',' {
            out.push(LexedToken { token: Token::Comma, line: line_no, col });
            i += 1;
            continue;
        }
        if c == ':' {
            out.push(LexedToken { token: Token::Colon, line: line_no, col });
            i += 1;
            continue;
        }
        if c == '[' {
            let close = bytes[i + 1..].iter().position(|&ch| ch == ']').map(|p| i + 1 + p);
            match close {
                Some(end) => {
                    let inner = &bytes[i + 1..end];
                    let (negative, digits) = match inner.first() {
                        Some('-') => (true, &inner[1..]),
                        _ => (false, inner),
                    };
                    let (value, _) = scan_number(digits);
                    let value = if negative { -value } else { value };
                    out.push(LexedToken { token: Token::Address(value), line: line_no, col });
                    i = end + 1;
                }
                None => {
                    out.push(LexedToken { token: Token::Unknown('['), line: line_no, col });
                    i += 1;
                }
            }
            continue;
        }
        if c == '-' && i + 1 < bytes.len() && bytes[i + 1].is_ascii_digit() {
            let (value, consumed) = scan_number(&bytes[i + 1..]);
            out.push(LexedToken { token: Token::Number(-value), line: line_no, col });
            i += consumed + 1;
            continue;
        }
        if c.is_ascii_digit() {
            let (value, consumed) = scan_number(&bytes[i..]);
            out.push(LexedToken { token: Token::Number(value), line: line_no, col });
            i += consumed;
            continue;
        }
        if c.is_alphabetic() || c == '_' {
            let start = i;
            while i < bytes.len() && (bytes[i].is_alphanumeric() || bytes[i] == '_') {
                i += 1;
            }
            let word: String = bytes[start..i].iter().collect();
            out.push(LexedToken { token: classify_word(&word), line: line_no, col });
            continue;
        }

        out.push(LexedToken { token: Token::Unknown(c), line: line_no, col });
        i += 1;
    }
}

/// `0x` hex, `0b` binary, or plain decimal. Returns the parsed value and
/// how many characters it consumed.
fn scan_number(chars: &[char]) -> (i64, usize) {
    if chars.len() >= 2 && chars[0] == '0' && (chars[1] == 'x' || chars[1] == 'X') {
        let mut end = 2;
        while end < chars.len() && chars[end].is_ascii_hexdigit() {
            end += 1;
        }
        let text: String = chars[2..end].iter().collect();
        let value = i64::from_str_radix(&text, 16).unwrap_or(0);
        return (value, end);
    }
    if chars.len() >= 2 && chars[0] == '0' && (chars[1] == 'b' || chars[1] == 'B') {
        let mut end = 2;
        while end < chars.len() && (chars[end] == '0' || chars[end] == '1') {
            end += 1;
        }
        let text: String = chars[2..end].iter().collect();
        let value = i64::from_str_radix(&text, 2).unwrap_or(0);
        return (value, end);
    }
    let mut end = 0;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    let text: String = chars[..end].iter().collect();
    (text.parse().unwrap_or(0), end)
}

fn classify_word(word: &str) -> Token {
    if word == "SP" {
        return Token::Register(7);
    }
    if word.len() >= 2 && word.starts_with('R') {
        if let Ok(index) = word[1..].parse::<u8>() {
            if index <= 7 {
                return Token::Register(index);
            }
        }
    }
    if let Some(mnemonic) = isa::match_mnemonic(word) {
        return Token::Mnemonic(mnemonic);
    }
    Token::Identifier(word.to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn registers_and_sp_alias() {
        let tokens = tokenize("ADD R0, R1, SP");
        let kinds: Vec<_> = tokens.into_iter().map(|t| t.token).collect();
        assert_eq!(
            kinds,
            vec![
                Token::Mnemonic(Mnemonic::Add),
                Token::Register(0),
                Token::Comma,
                Token::Register(1),
                Token::Comma,
                Token::Register(7),
            ]
        );
    }

    #[test]
    fn hex_and_binary_and_negative_numbers() {
        let tokens = tokenize("LOADI R0, 0xFF");
        assert!(tokens.iter().any(|t| t.token == Token::Number(0xFF)));
        let tokens = tokenize("LOADI R0, 0b101");
        assert!(tokens.iter().any(|t| t.token == Token::Number(0b101)));
        let tokens = tokenize("SUBI R0, -5");
        assert!(tokens.iter().any(|t| t.token == Token::Number(-5)));
    }

    #[test]
    fn comments_are_stripped() {
        let tokens = tokenize("HALT ; stop the machine");
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn unknown_characters_do_not_abort_the_line() {
        let tokens = tokenize("ADD R0 @ R1");
        assert!(tokens.iter().any(|t| matches!(t.token, Token::Unknown('@'))));
        assert!(tokens.iter().any(|t| t.token == Token::Register(1)));
    }

    #[test]
    fn labels_lex_as_identifier_then_colon() {
        let tokens = tokenize("loop: INC R0");
        assert_eq!(tokens[0].token, Token::Identifier("loop".to_string()));
        assert_eq!(tokens[1].token, Token::Colon);
    }

    #[test]
    fn brackets_capture_an_address_literal_stripped_of_the_brackets() {
        let tokens = tokenize("STORE R0, [0x1000]");
        let kinds: Vec<_> = tokens.into_iter().map(|t| t.token).collect();
        assert_eq!(
            kinds,
            vec![
                Token::Mnemonic(Mnemonic::Store),
                Token::Register(0),
                Token::Comma,
                Token::Address(0x1000),
            ]
        );
    }

    #[test]
    fn an_unterminated_bracket_is_reported_as_unknown_rather_than_panicking() {
        let tokens = tokenize("STORE R0, [0x1000");
        assert!(tokens.iter().any(|t| t.token == Token::Unknown('[')));
    }
}
