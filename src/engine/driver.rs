//! Query driver
//!
//! Orchestrates one query: parse, reject non-SELECT statements, resolve
//! the table to a file path, build the predicate, stream rows through
//! shape validation / filtering / pagination, project the retained page,
//! and assemble the envelope.
//!
//! The stream is always scanned to exhaustion, even once the page buffer
//! is full: the envelope's total must reflect the whole file.

use std::path::Path;

use tracing::debug;

use super::errors::{EngineError, EngineResult};
use super::filter::Filter;
use super::pagination::PageAccumulator;
use super::projection::Projection;
use super::response::QueryResponse;
use crate::parser::{self, Statement};
use crate::reader::DelimitedReader;

/// File extension appended to the FROM table name
pub const SOURCE_EXTENSION: &str = "csv";

/// Field delimiter of source files
pub const DELIMITER: char = ',';

/// Evaluate one query against the files under `base_dir`
pub fn run_query(query: &str, base_dir: &Path) -> EngineResult<QueryResponse> {
    let select = match parser::parse(query)? {
        Statement::Select(select) => select,
        Statement::Other(kind) => return Err(EngineError::UnsupportedQuery(kind)),
    };

    let filter = Filter::from_where(select.where_clause.as_ref())?;

    let path = base_dir.join(format!("{}.{}", select.table, SOURCE_EXTENSION));
    debug!(source = %path.display(), table = %select.table, "resolved query source");

    let mut records = DelimitedReader::open(&path, DELIMITER)?;
    let header = match records.next() {
        Some(record) => record?,
        None => return Err(EngineError::MissingHeader(path)),
    };

    let projection = Projection::new(select.columns.as_deref(), &header);
    let mut accumulator = PageAccumulator::new(select.limit);

    for record in records {
        let row = record?;
        let line = accumulator.begin_row();
        if row.len() != header.len() {
            return Err(EngineError::RowShapeMismatch {
                line,
                expected: header.len(),
                found: row.len(),
            });
        }
        if let Some(matched) = filter.eval(&row, &header)? {
            accumulator.accept(matched.to_vec());
        }
    }

    let page = accumulator.finish();
    debug!(
        total = page.total,
        page = page.page,
        pages = page.pages,
        "scan complete"
    );

    let result = page
        .rows
        .iter()
        .map(|row| projection.project(&header, row))
        .collect();

    Ok(QueryResponse {
        source: path.display().to_string(),
        total: page.total,
        page: page.page,
        pages: page.pages,
        header: projection.header().to_vec(),
        result,
    })
}
