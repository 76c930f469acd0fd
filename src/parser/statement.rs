//! Recursive-descent query parser
//!
//! Grammar (keywords case-insensitive):
//!
//! ```text
//! statement  := SELECT select_list FROM ident [WHERE or_expr] [window]
//! select_list:= '*' | select_col (',' select_col)*
//! select_col := ident ['(' ident ')'] [AS ident]
//! or_expr    := and_expr (OR and_expr)*
//! and_expr   := predicate (AND predicate)*
//! predicate  := '(' or_expr ')'
//!             | ident '(' ident ',' literal ')'
//!             | ident compare_op literal
//!             | ident LIKE string
//! window     := (LIMIT number | OFFSET number)*
//! ```
//!
//! A statement whose leading keyword is not SELECT is returned as
//! [`Statement::Other`] without parsing the remainder; the engine rejects
//! it with a typed error.

use super::ast::*;
use super::errors::{ParseError, ParseResult};
use super::lexer::{tokenize, Token, TokenKind};

/// Parse a query string into a statement
pub fn parse(input: &str) -> ParseResult<Statement> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser::new(tokens);
    let keyword = match parser.peek() {
        Some(TokenKind::Ident(word)) => word.clone(),
        Some(other) => {
            return Err(ParseError::UnexpectedToken {
                found: other.describe(),
                expected: "statement keyword".to_string(),
            })
        }
        None => return Err(ParseError::Empty),
    };

    if !keyword.eq_ignore_ascii_case("select") {
        return Ok(Statement::Other(keyword.to_uppercase()));
    }
    parser.advance();

    let query = parser.parse_select()?;
    parser.expect_end()?;
    Ok(Statement::Select(query))
}

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    fn peek(&self) -> Option<&TokenKind> {
        self.tokens.get(self.cursor).map(|t| &t.kind)
    }

    fn advance(&mut self) -> Option<&TokenKind> {
        let token = self.tokens.get(self.cursor).map(|t| &t.kind);
        self.cursor += 1;
        token
    }

    /// True (and consumes) if the next token is the given keyword
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        if let Some(TokenKind::Ident(word)) = self.peek() {
            if word.eq_ignore_ascii_case(keyword) {
                self.cursor += 1;
                return true;
            }
        }
        false
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek(), Some(TokenKind::Ident(word)) if word.eq_ignore_ascii_case(keyword))
    }

    fn expect_ident(&mut self, expected: &str) -> ParseResult<String> {
        match self.advance() {
            Some(TokenKind::Ident(word)) => Ok(word.clone()),
            Some(other) => Err(ParseError::UnexpectedToken {
                found: other.describe(),
                expected: expected.to_string(),
            }),
            None => Err(ParseError::UnexpectedEof(expected.to_string())),
        }
    }

    fn expect_kind(&mut self, kind: TokenKind, expected: &str) -> ParseResult<()> {
        match self.advance() {
            Some(found) if *found == kind => Ok(()),
            Some(other) => Err(ParseError::UnexpectedToken {
                found: other.describe(),
                expected: expected.to_string(),
            }),
            None => Err(ParseError::UnexpectedEof(expected.to_string())),
        }
    }

    fn expect_number(&mut self, expected: &str) -> ParseResult<i64> {
        match self.advance() {
            Some(TokenKind::Number(n)) => Ok(*n),
            Some(other) => Err(ParseError::UnexpectedToken {
                found: other.describe(),
                expected: expected.to_string(),
            }),
            None => Err(ParseError::UnexpectedEof(expected.to_string())),
        }
    }

    fn expect_end(&mut self) -> ParseResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(ParseError::UnexpectedToken {
                found: token.describe(),
                expected: "end of query".to_string(),
            }),
        }
    }

    fn parse_select(&mut self) -> ParseResult<SelectQuery> {
        let columns = self.parse_select_list()?;

        if !self.eat_keyword("from") {
            return Err(match self.peek() {
                Some(token) => ParseError::UnexpectedToken {
                    found: token.describe(),
                    expected: "FROM".to_string(),
                },
                None => ParseError::UnexpectedEof("FROM".to_string()),
            });
        }
        let table = self.expect_ident("table name")?;

        let where_clause = if self.eat_keyword("where") {
            Some(self.parse_or()?)
        } else {
            None
        };

        let limit = self.parse_window()?;

        Ok(SelectQuery {
            columns,
            table,
            where_clause,
            limit,
        })
    }

    fn parse_select_list(&mut self) -> ParseResult<Option<Vec<SelectColumn>>> {
        if matches!(self.peek(), Some(TokenKind::Star)) {
            self.advance();
            return Ok(None);
        }

        let mut columns = Vec::new();
        loop {
            columns.push(self.parse_select_column()?);
            if matches!(self.peek(), Some(TokenKind::Comma)) {
                self.advance();
            } else {
                break;
            }
        }
        Ok(Some(columns))
    }

    fn parse_select_column(&mut self) -> ParseResult<SelectColumn> {
        let name = self.expect_ident("column name")?;

        let column = if matches!(self.peek(), Some(TokenKind::LParen)) {
            self.advance();
            let argument = self.expect_ident("function argument column")?;
            self.expect_kind(TokenKind::RParen, ")")?;
            ColumnRef::Call {
                function: name.to_lowercase(),
                argument,
            }
        } else {
            ColumnRef::Name(name)
        };

        let alias = if self.eat_keyword("as") {
            Some(self.expect_ident("alias")?)
        } else {
            None
        };

        Ok(SelectColumn { column, alias })
    }

    fn parse_or(&mut self) -> ParseResult<Expression> {
        let mut expr = self.parse_and()?;
        while self.eat_keyword("or") {
            let right = self.parse_and()?;
            expr = Expression::or(expr, right);
        }
        Ok(expr)
    }

    fn parse_and(&mut self) -> ParseResult<Expression> {
        let mut expr = self.parse_predicate()?;
        while self.eat_keyword("and") {
            let right = self.parse_predicate()?;
            expr = Expression::and(expr, right);
        }
        Ok(expr)
    }

    fn parse_predicate(&mut self) -> ParseResult<Expression> {
        if matches!(self.peek(), Some(TokenKind::LParen)) {
            self.advance();
            let expr = self.parse_or()?;
            self.expect_kind(TokenKind::RParen, ")")?;
            return Ok(expr);
        }

        let column = self.expect_ident("column name")?;

        // Function-call predicate: name(column, literal)
        if matches!(self.peek(), Some(TokenKind::LParen)) {
            let function = column.to_lowercase();
            self.advance();
            let inner = self.expect_ident("column name")?;
            self.expect_kind(TokenKind::Comma, ",")?;
            let value = self.parse_literal()?;
            self.expect_kind(TokenKind::RParen, ")")?;
            return Ok(Expression::Call {
                function,
                column: inner,
                value,
            });
        }

        if self.eat_keyword("like") {
            let pattern = match self.advance() {
                Some(TokenKind::Str(text)) => text.clone(),
                Some(other) => {
                    return Err(ParseError::UnexpectedToken {
                        found: other.describe(),
                        expected: "pattern string".to_string(),
                    })
                }
                None => return Err(ParseError::UnexpectedEof("pattern string".to_string())),
            };
            return Ok(Expression::Compare {
                column,
                op: CompareOp::Like,
                value: Literal::String(pattern),
            });
        }

        let op = match self.advance() {
            Some(TokenKind::Eq) => CompareOp::Eq,
            Some(TokenKind::Ne) => CompareOp::Ne,
            Some(TokenKind::Lt) => CompareOp::Lt,
            Some(TokenKind::Le) => CompareOp::Le,
            Some(TokenKind::Gt) => CompareOp::Gt,
            Some(TokenKind::Ge) => CompareOp::Ge,
            Some(other) => {
                return Err(ParseError::UnexpectedToken {
                    found: other.describe(),
                    expected: "comparison operator".to_string(),
                })
            }
            None => return Err(ParseError::UnexpectedEof("comparison operator".to_string())),
        };
        let value = self.parse_literal()?;
        Ok(Expression::Compare { column, op, value })
    }

    fn parse_literal(&mut self) -> ParseResult<Literal> {
        match self.advance() {
            Some(TokenKind::Str(text)) => Ok(Literal::String(text.clone())),
            Some(TokenKind::Number(n)) => Ok(Literal::Number(*n)),
            Some(TokenKind::Ident(word)) if word.eq_ignore_ascii_case("true") => {
                Ok(Literal::Boolean(true))
            }
            Some(TokenKind::Ident(word)) if word.eq_ignore_ascii_case("false") => {
                Ok(Literal::Boolean(false))
            }
            Some(other) => Err(ParseError::UnexpectedToken {
                found: other.describe(),
                expected: "literal value".to_string(),
            }),
            None => Err(ParseError::UnexpectedEof("literal value".to_string())),
        }
    }

    /// LIMIT and OFFSET, in either order, both optional
    fn parse_window(&mut self) -> ParseResult<LimitClause> {
        let mut window = LimitClause::default();
        loop {
            if self.peek_keyword("limit") {
                self.advance();
                window.limit = self.expect_number("limit value")?.max(0) as usize;
            } else if self.peek_keyword("offset") {
                self.advance();
                window.offset = self.expect_number("offset value")?.max(0) as usize;
            } else {
                break;
            }
        }
        Ok(window)
    }
}
