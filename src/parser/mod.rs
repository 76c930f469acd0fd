//! SQL text parser
//!
//! Turns a query string into the expression tree the engine consumes:
//! select list (with aliasing and function-call selections), FROM table,
//! WHERE predicate tree, LIMIT/OFFSET window.

mod ast;
mod errors;
mod lexer;
mod statement;

pub use ast::{
    ColumnRef, CompareOp, Expression, Literal, LimitClause, LogicalOp, SelectColumn, SelectQuery,
    Statement,
};
pub use errors::{ParseError, ParseResult};
pub use statement::parse;
