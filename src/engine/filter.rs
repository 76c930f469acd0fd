//! Predicate evaluation
//!
//! A [`Filter`] is the evaluable form of a WHERE tree. Evaluation either
//! accepts a row (returning it unchanged) or rejects it; no operator ever
//! rewrites field values. The supported operator set is matched
//! exhaustively when the filter is built, so an operator the engine does
//! not evaluate fails the whole query up front rather than per row.

use regex::Regex;
use semver::{Version, VersionReq};

use super::errors::{EngineError, EngineResult};
use crate::parser::{CompareOp, Expression, Literal, LogicalOp};

/// Comparison operators the engine evaluates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Type-coerced equality
    Equals,
    /// `%`-anchored pattern match
    Like,
    /// Semantic-version range match
    VersionMatch,
}

/// Evaluable predicate tree
#[derive(Debug, Clone)]
pub enum Filter {
    /// Absent WHERE clause: accepts every row
    All,
    /// Single comparison against one column
    Compare {
        op: Comparison,
        column: String,
        value: Literal,
    },
    /// Both branches must accept; the left branch's accepted row is fed
    /// into the right branch
    And(Box<Filter>, Box<Filter>),
    /// Left branch checked first and short-circuits on acceptance
    Or(Box<Filter>, Box<Filter>),
}

impl Filter {
    /// Build a filter from an optional WHERE tree
    pub fn from_where(clause: Option<&Expression>) -> EngineResult<Self> {
        match clause {
            None => Ok(Filter::All),
            Some(expr) => Self::from_expression(expr),
        }
    }

    fn from_expression(expr: &Expression) -> EngineResult<Self> {
        match expr {
            Expression::Compare { column, op, value } => {
                let op = match op {
                    CompareOp::Eq => Comparison::Equals,
                    CompareOp::Like => Comparison::Like,
                    other => {
                        return Err(EngineError::UnsupportedOperator(other.as_str().to_string()))
                    }
                };
                Ok(Filter::Compare {
                    op,
                    column: column.clone(),
                    value: value.clone(),
                })
            }
            Expression::Call {
                function,
                column,
                value,
            } => match function.as_str() {
                "version_match" => Ok(Filter::Compare {
                    op: Comparison::VersionMatch,
                    column: column.clone(),
                    value: value.clone(),
                }),
                other => Err(EngineError::UnsupportedOperator(other.to_string())),
            },
            Expression::Logical { op, left, right } => {
                let left = Box::new(Self::from_expression(left)?);
                let right = Box::new(Self::from_expression(right)?);
                Ok(match op {
                    LogicalOp::And => Filter::And(left, right),
                    LogicalOp::Or => Filter::Or(left, right),
                })
            }
        }
    }

    /// Evaluate against one row. `Some` carries the accepted row, `None`
    /// signals a silent exclusion. Errors are fatal to the whole query.
    pub fn eval<'a>(
        &self,
        row: &'a [String],
        header: &[String],
    ) -> EngineResult<Option<&'a [String]>> {
        match self {
            Filter::All => Ok(Some(row)),
            Filter::Compare { op, column, value } => {
                let field = resolve_field(row, header, column);
                let matched = match op {
                    Comparison::Equals => equals(field, value),
                    Comparison::Like => like(field, value)?,
                    Comparison::VersionMatch => version_match(field, value)?,
                };
                Ok(if matched { Some(row) } else { None })
            }
            Filter::And(left, right) => match left.eval(row, header)? {
                None => Ok(None),
                // The row accepted by the left branch is what the right
                // branch sees. Operators never rewrite fields, so this is
                // equivalent to evaluating both against the input row, but
                // the threading is part of the contract.
                Some(carried) => right.eval(carried, header),
            },
            Filter::Or(left, right) => match left.eval(row, header)? {
                Some(matched) => Ok(Some(matched)),
                None => right.eval(row, header),
            },
        }
    }
}

/// Look up the row field for a column name. An unknown column resolves to
/// no field, which every comparison treats as a non-match.
fn resolve_field<'a>(row: &'a [String], header: &[String], column: &str) -> Option<&'a str> {
    header
        .iter()
        .position(|name| name == column)
        .and_then(|index| row.get(index))
        .map(String::as_str)
}

/// Equality with coercion to the literal's type: integer parse for numeric
/// literals, the text `"true"` for booleans, raw comparison for strings.
fn equals(field: Option<&str>, value: &Literal) -> bool {
    let Some(field) = field else {
        return false;
    };
    match value {
        Literal::Number(expected) => field
            .parse::<i64>()
            .map(|parsed| parsed == *expected)
            .unwrap_or(false),
        Literal::Boolean(expected) => (field == "true") == *expected,
        Literal::String(expected) => field == expected,
    }
}

/// `%`-anchored pattern match. A leading and trailing `%` selects a
/// substring search, a trailing `%` a prefix search, a leading `%` a
/// suffix search. A pattern with no `%` anchor never matches.
fn like(field: Option<&str>, value: &Literal) -> EngineResult<bool> {
    let Some(field) = field else {
        return Ok(false);
    };
    let Literal::String(pattern) = value else {
        return Ok(false);
    };

    let body = pattern.replace('.', "\\.").replace('%', "");
    let expression = if pattern.starts_with('%') && pattern.ends_with('%') {
        format!("^.*{}.*$", body)
    } else if pattern.ends_with('%') {
        format!("^{}.*$", body)
    } else if pattern.starts_with('%') {
        format!("^.*{}$", body)
    } else {
        return Ok(false);
    };

    let regex =
        Regex::new(&expression).map_err(|e| EngineError::InvalidPattern(e.to_string()))?;
    Ok(regex.is_match(field))
}

/// Version-range match. The field is checked first: a field that is not a
/// parseable semantic version is a silent exclusion. Only then is the
/// operand validated; an operand that is neither a valid range string nor
/// a coercible number aborts the query.
fn version_match(field: Option<&str>, value: &Literal) -> EngineResult<bool> {
    let Some(field) = field else {
        return Ok(false);
    };
    let Ok(version) = Version::parse(field) else {
        return Ok(false);
    };

    let requirement = match value {
        Literal::String(range) => VersionReq::parse(&normalize_range(range))
            .map_err(|_| EngineError::InvalidVersionOperand(range.clone()))?,
        Literal::Number(number) => VersionReq::parse(&number.to_string())
            .map_err(|_| EngineError::InvalidVersionOperand(number.to_string()))?,
        Literal::Boolean(flag) => {
            return Err(EngineError::InvalidVersionOperand(flag.to_string()))
        }
    };

    Ok(requirement.matches(&version))
}

/// Rewrite space-separated range comparators (`">=1.0.0 <2.0.0"`) into the
/// comma-separated form `VersionReq` parses.
fn normalize_range(range: &str) -> String {
    range.split_whitespace().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<String> {
        vec!["id".to_string(), "name".to_string(), "version".to_string()]
    }

    fn row(id: &str, name: &str, version: &str) -> Vec<String> {
        vec![id.to_string(), name.to_string(), version.to_string()]
    }

    fn accepts(filter: &Filter, row: &[String]) -> bool {
        filter.eval(row, &header()).unwrap().is_some()
    }

    #[test]
    fn test_all_accepts_everything() {
        let filter = Filter::from_where(None).unwrap();
        assert!(accepts(&filter, &row("1", "alpha", "1.0.0")));
    }

    #[test]
    fn test_numeric_equality_parses_field() {
        let expr = Expression::eq("id", Literal::Number(5));
        let filter = Filter::from_where(Some(&expr)).unwrap();

        assert!(accepts(&filter, &row("5", "alpha", "1.0.0")));
        // "05" parses to 5 and matches
        assert!(accepts(&filter, &row("05", "alpha", "1.0.0")));
        assert!(!accepts(&filter, &row("6", "alpha", "1.0.0")));
        assert!(!accepts(&filter, &row("five", "alpha", "1.0.0")));
    }

    #[test]
    fn test_boolean_equality_exact_true_text() {
        let expr = Expression::eq("name", Literal::Boolean(true));
        let filter = Filter::from_where(Some(&expr)).unwrap();

        assert!(accepts(&filter, &row("1", "true", "1.0.0")));
        assert!(!accepts(&filter, &row("1", "True", "1.0.0")));
        assert!(!accepts(&filter, &row("1", "1", "1.0.0")));
    }

    #[test]
    fn test_boolean_false_matches_anything_not_true() {
        let expr = Expression::eq("name", Literal::Boolean(false));
        let filter = Filter::from_where(Some(&expr)).unwrap();

        assert!(accepts(&filter, &row("1", "false", "1.0.0")));
        assert!(accepts(&filter, &row("1", "True", "1.0.0")));
        assert!(!accepts(&filter, &row("1", "true", "1.0.0")));
    }

    #[test]
    fn test_string_equality_raw() {
        let expr = Expression::eq("name", Literal::String("alpha".to_string()));
        let filter = Filter::from_where(Some(&expr)).unwrap();

        assert!(accepts(&filter, &row("1", "alpha", "1.0.0")));
        assert!(!accepts(&filter, &row("1", "Alpha", "1.0.0")));
    }

    #[test]
    fn test_unknown_column_never_matches() {
        let expr = Expression::eq("missing", Literal::String("x".to_string()));
        let filter = Filter::from_where(Some(&expr)).unwrap();
        assert!(!accepts(&filter, &row("1", "alpha", "1.0.0")));
    }

    #[test]
    fn test_like_substring() {
        let filter = Filter::from_where(Some(&Expression::like("name", "%lph%"))).unwrap();
        assert!(accepts(&filter, &row("1", "alpha", "1.0.0")));
        assert!(!accepts(&filter, &row("1", "beta", "1.0.0")));
    }

    #[test]
    fn test_like_prefix() {
        let filter = Filter::from_where(Some(&Expression::like("name", "al%"))).unwrap();
        assert!(accepts(&filter, &row("1", "alpha", "1.0.0")));
        assert!(!accepts(&filter, &row("1", "gamma-al", "1.0.0")));
    }

    #[test]
    fn test_like_suffix() {
        let filter = Filter::from_where(Some(&Expression::like("name", "%ha"))).unwrap();
        assert!(accepts(&filter, &row("1", "alpha", "1.0.0")));
        assert!(!accepts(&filter, &row("1", "hanna", "1.0.0")));
    }

    #[test]
    fn test_like_without_wildcard_matches_nothing() {
        // Known quirk, kept on purpose: an unanchored pattern never matches,
        // not even its own literal text.
        let filter = Filter::from_where(Some(&Expression::like("name", "alpha"))).unwrap();
        assert!(!accepts(&filter, &row("1", "alpha", "1.0.0")));
    }

    #[test]
    fn test_like_case_sensitive() {
        let filter = Filter::from_where(Some(&Expression::like("name", "%Alpha%"))).unwrap();
        assert!(!accepts(&filter, &row("1", "alpha", "1.0.0")));
    }

    #[test]
    fn test_like_escapes_literal_dots() {
        let filter = Filter::from_where(Some(&Expression::like("version", "%1.0%"))).unwrap();
        assert!(accepts(&filter, &row("1", "alpha", "1.0.0")));
        // An unescaped dot would let "1x0" through
        assert!(!accepts(&filter, &row("1", "alpha", "1x0")));
    }

    fn version_filter(range: &str) -> Filter {
        let expr = Expression::Call {
            function: "version_match".to_string(),
            column: "version".to_string(),
            value: Literal::String(range.to_string()),
        };
        Filter::from_where(Some(&expr)).unwrap()
    }

    #[test]
    fn test_version_match_in_range() {
        let filter = version_filter(">=1.0.0 <2.0.0");
        assert!(accepts(&filter, &row("1", "alpha", "1.2.3")));
        assert!(!accepts(&filter, &row("1", "alpha", "2.0.0")));
    }

    #[test]
    fn test_version_match_invalid_field_is_silent() {
        let filter = version_filter(">=1.0.0");
        let row = row("1", "alpha", "not-a-version");
        let result = filter.eval(&row, &header());
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_version_match_invalid_operand_is_fatal() {
        let filter = version_filter("not-a-range");
        let err = filter
            .eval(&row("1", "alpha", "1.0.0"), &header())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidVersionOperand(_)));
    }

    #[test]
    fn test_version_operand_checked_after_field() {
        // The field check comes first: a bad operand over a row whose field
        // is not a valid version is still a silent exclusion.
        let filter = version_filter("not-a-range");
        let row = row("1", "alpha", "garbage");
        let result = filter.eval(&row, &header());
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_version_match_numeric_operand() {
        let expr = Expression::Call {
            function: "version_match".to_string(),
            column: "version".to_string(),
            value: Literal::Number(1),
        };
        let filter = Filter::from_where(Some(&expr)).unwrap();
        assert!(accepts(&filter, &row("1", "alpha", "1.2.3")));
        assert!(!accepts(&filter, &row("1", "alpha", "2.0.0")));
    }

    #[test]
    fn test_and_requires_both() {
        let expr = Expression::and(
            Expression::eq("name", Literal::String("alpha".to_string())),
            Expression::eq("id", Literal::Number(1)),
        );
        let filter = Filter::from_where(Some(&expr)).unwrap();

        assert!(accepts(&filter, &row("1", "alpha", "1.0.0")));
        assert!(!accepts(&filter, &row("2", "alpha", "1.0.0")));
        assert!(!accepts(&filter, &row("1", "beta", "1.0.0")));
    }

    #[test]
    fn test_or_short_circuits() {
        // Right branch has a fatal operand; a left-branch match must win
        // before the right branch ever runs.
        let expr = Expression::or(
            Expression::eq("name", Literal::String("alpha".to_string())),
            Expression::Call {
                function: "version_match".to_string(),
                column: "version".to_string(),
                value: Literal::String("not-a-range".to_string()),
            },
        );
        let filter = Filter::from_where(Some(&expr)).unwrap();

        assert!(accepts(&filter, &row("1", "alpha", "1.0.0")));
        let err = filter
            .eval(&row("1", "beta", "1.0.0"), &header())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidVersionOperand(_)));
    }

    #[test]
    fn test_and_threads_row_identically() {
        // AND(p1, p2) must behave the same as evaluating p1 and p2
        // independently against the same row.
        let p1 = Expression::eq("id", Literal::Number(1));
        let p2 = Expression::like("name", "%lph%");
        let combined = Filter::from_where(Some(&Expression::and(p1.clone(), p2.clone()))).unwrap();
        let f1 = Filter::from_where(Some(&p1)).unwrap();
        let f2 = Filter::from_where(Some(&p2)).unwrap();

        for r in [
            row("1", "alpha", "1.0.0"),
            row("1", "beta", "1.0.0"),
            row("2", "alpha", "1.0.0"),
        ] {
            let independent = accepts(&f1, &r) && accepts(&f2, &r);
            assert_eq!(accepts(&combined, &r), independent);
        }
    }

    #[test]
    fn test_unsupported_comparison_operator() {
        let expr = Expression::Compare {
            column: "id".to_string(),
            op: CompareOp::Ge,
            value: Literal::Number(1),
        };
        let err = Filter::from_where(Some(&expr)).unwrap_err();
        match err {
            EngineError::UnsupportedOperator(op) => assert_eq!(op, ">="),
            other => panic!("expected UnsupportedOperator, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_function_predicate() {
        let expr = Expression::Call {
            function: "regexp_match".to_string(),
            column: "name".to_string(),
            value: Literal::String("x".to_string()),
        };
        let err = Filter::from_where(Some(&expr)).unwrap_err();
        match err {
            EngineError::UnsupportedOperator(op) => assert_eq!(op, "regexp_match"),
            other => panic!("expected UnsupportedOperator, got {:?}", other),
        }
    }
}
