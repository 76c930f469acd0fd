//! Query tokenizer
//!
//! Splits query text into tokens. Keywords are not distinguished here;
//! the parser matches identifiers case-insensitively where the grammar
//! expects a keyword.

use super::errors::{ParseError, ParseResult};

/// A single token with its byte position in the query text
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Token kinds
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Identifier or keyword
    Ident(String),
    /// Integer literal
    Number(i64),
    /// Quoted string literal (quotes removed)
    Str(String),
    Comma,
    LParen,
    RParen,
    Star,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl TokenKind {
    /// Token text for error messages
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(s) => s.clone(),
            TokenKind::Number(n) => n.to_string(),
            TokenKind::Str(s) => format!("'{}'", s),
            TokenKind::Comma => ",".to_string(),
            TokenKind::LParen => "(".to_string(),
            TokenKind::RParen => ")".to_string(),
            TokenKind::Star => "*".to_string(),
            TokenKind::Eq => "=".to_string(),
            TokenKind::Ne => "!=".to_string(),
            TokenKind::Lt => "<".to_string(),
            TokenKind::Le => "<=".to_string(),
            TokenKind::Gt => ">".to_string(),
            TokenKind::Ge => ">=".to_string(),
        }
    }
}

/// Tokenize a query string
pub fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let ch = bytes[pos] as char;
        match ch {
            c if c.is_ascii_whitespace() => {
                pos += 1;
            }
            ',' => {
                tokens.push(Token {
                    kind: TokenKind::Comma,
                    position: pos,
                });
                pos += 1;
            }
            '(' => {
                tokens.push(Token {
                    kind: TokenKind::LParen,
                    position: pos,
                });
                pos += 1;
            }
            ')' => {
                tokens.push(Token {
                    kind: TokenKind::RParen,
                    position: pos,
                });
                pos += 1;
            }
            '*' => {
                tokens.push(Token {
                    kind: TokenKind::Star,
                    position: pos,
                });
                pos += 1;
            }
            '=' => {
                tokens.push(Token {
                    kind: TokenKind::Eq,
                    position: pos,
                });
                pos += 1;
            }
            '!' => {
                if bytes.get(pos + 1) == Some(&b'=') {
                    tokens.push(Token {
                        kind: TokenKind::Ne,
                        position: pos,
                    });
                    pos += 2;
                } else {
                    return Err(ParseError::UnexpectedChar { ch, position: pos });
                }
            }
            '<' => {
                if bytes.get(pos + 1) == Some(&b'=') {
                    tokens.push(Token {
                        kind: TokenKind::Le,
                        position: pos,
                    });
                    pos += 2;
                } else if bytes.get(pos + 1) == Some(&b'>') {
                    tokens.push(Token {
                        kind: TokenKind::Ne,
                        position: pos,
                    });
                    pos += 2;
                } else {
                    tokens.push(Token {
                        kind: TokenKind::Lt,
                        position: pos,
                    });
                    pos += 1;
                }
            }
            '>' => {
                if bytes.get(pos + 1) == Some(&b'=') {
                    tokens.push(Token {
                        kind: TokenKind::Ge,
                        position: pos,
                    });
                    pos += 2;
                } else {
                    tokens.push(Token {
                        kind: TokenKind::Gt,
                        position: pos,
                    });
                    pos += 1;
                }
            }
            '\'' | '"' => {
                let quote = ch;
                let start = pos;
                pos += 1;
                let content_start = pos;
                while pos < bytes.len() && bytes[pos] as char != quote {
                    pos += 1;
                }
                if pos >= bytes.len() {
                    return Err(ParseError::UnterminatedString(start));
                }
                let text = input[content_start..pos].to_string();
                tokens.push(Token {
                    kind: TokenKind::Str(text),
                    position: start,
                });
                pos += 1;
            }
            c if c.is_ascii_digit() => {
                let start = pos;
                while pos < bytes.len() && (bytes[pos] as char).is_ascii_digit() {
                    pos += 1;
                }
                let text = &input[start..pos];
                let value = text
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidNumber(text.to_string()))?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    position: start,
                });
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let start = pos;
                while pos < bytes.len() {
                    let c = bytes[pos] as char;
                    if c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-' {
                        pos += 1;
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(input[start..pos].to_string()),
                    position: start,
                });
            }
            _ => {
                return Err(ParseError::UnexpectedChar { ch, position: pos });
            }
        }
    }

    Ok(tokens)
}
