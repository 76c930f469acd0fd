//! Parsed query representation
//!
//! The expression tree consumed by the engine. The comparison operator set
//! is deliberately wider than what the engine evaluates: unsupported
//! operators parse cleanly and are rejected later with a typed error.

use std::fmt;

/// Top-level statement classification
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A SELECT statement with its full expression tree
    Select(SelectQuery),
    /// Any other statement kind, identified by its leading keyword
    Other(String),
}

/// A parsed SELECT query
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    /// Selected columns; `None` means `*` (all source columns)
    pub columns: Option<Vec<SelectColumn>>,
    /// Source table name from the FROM clause
    pub table: String,
    /// Optional WHERE predicate tree
    pub where_clause: Option<Expression>,
    /// LIMIT/OFFSET window (defaults applied when absent)
    pub limit: LimitClause,
}

/// A single entry in the select list
#[derive(Debug, Clone, PartialEq)]
pub struct SelectColumn {
    /// Source column reference (plain name or function call)
    pub column: ColumnRef,
    /// Optional AS alias for the output header
    pub alias: Option<String>,
}

impl SelectColumn {
    /// Plain column selection
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            column: ColumnRef::Name(name.into()),
            alias: None,
        }
    }

    /// Column selection with an alias
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            column: ColumnRef::Name(name.into()),
            alias: Some(alias.into()),
        }
    }

    /// The name shown in the output header: alias if present, else the
    /// derived column name.
    pub fn display_name(&self) -> String {
        match &self.alias {
            Some(alias) => alias.clone(),
            None => self.column.derived_name(),
        }
    }
}

/// A reference to a source column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnRef {
    /// Plain column name
    Name(String),
    /// Single-argument function call over a column, e.g. `count(id)`.
    /// Rendered as `func(col)` for header purposes only; never evaluated.
    Call { function: String, argument: String },
}

impl ColumnRef {
    /// Derived column key: the column name itself, or the literal text
    /// `func(col)` for a function-call selection.
    pub fn derived_name(&self) -> String {
        match self {
            ColumnRef::Name(name) => name.clone(),
            ColumnRef::Call { function, argument } => format!("{}({})", function, argument),
        }
    }
}

/// WHERE predicate tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Comparison: `column <op> literal`
    Compare {
        column: String,
        op: CompareOp,
        value: Literal,
    },
    /// Function-call predicate: `name(column, literal)`
    Call {
        function: String,
        column: String,
        value: Literal,
    },
    /// AND/OR combinator over two sub-expressions
    Logical {
        op: LogicalOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    /// Equality comparison
    pub fn eq(column: impl Into<String>, value: Literal) -> Self {
        Expression::Compare {
            column: column.into(),
            op: CompareOp::Eq,
            value,
        }
    }

    /// LIKE pattern comparison
    pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Expression::Compare {
            column: column.into(),
            op: CompareOp::Like,
            value: Literal::String(pattern.into()),
        }
    }

    /// AND combinator
    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::Logical {
            op: LogicalOp::And,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// OR combinator
    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Logical {
            op: LogicalOp::Or,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
}

impl CompareOp {
    /// Operator text as written in a query
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Like => "LIKE",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Logical combinators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

/// Literal values in predicates
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Number(i64),
    Boolean(bool),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "'{}'", s),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// LIMIT/OFFSET window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitClause {
    /// Page index, 0-based
    pub offset: usize,
    /// Page size
    pub limit: usize,
}

impl Default for LimitClause {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_name_plain() {
        let col = ColumnRef::Name("version".to_string());
        assert_eq!(col.derived_name(), "version");
    }

    #[test]
    fn test_derived_name_call() {
        let col = ColumnRef::Call {
            function: "count".to_string(),
            argument: "id".to_string(),
        };
        assert_eq!(col.derived_name(), "count(id)");
    }

    #[test]
    fn test_display_name_prefers_alias() {
        let plain = SelectColumn::name("name");
        assert_eq!(plain.display_name(), "name");

        let aliased = SelectColumn::aliased("name", "package");
        assert_eq!(aliased.display_name(), "package");
    }

    #[test]
    fn test_limit_defaults() {
        let limit = LimitClause::default();
        assert_eq!(limit.offset, 0);
        assert_eq!(limit.limit, 10);
    }
}
