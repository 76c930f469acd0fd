//! Streaming pagination
//!
//! Walks the filtered stream in emission order, counts every match, and
//! retains only the rows inside the requested window. The whole stream is
//! always consumed so that the total reflects the entire file.
//!
//! The discard policy uses the exact historical boundaries: the window is
//! `start = offset * limit`, `end = start + limit`, and a match is dropped
//! when the buffer is full, when `start != 0` and the pre-increment count
//! is below `start`, or when the pre-increment count exceeds `end`. The
//! strict inequalities are intentional; boundary tests pin them down.

use tracing::trace;

use crate::parser::LimitClause;

/// Accumulates the requested page while counting all matches
#[derive(Debug)]
pub struct PageAccumulator {
    limit: usize,
    offset: usize,
    /// 1-based line number, counting the header as line 1
    line_number: usize,
    /// Matches across the whole stream, not just the page
    total: usize,
    /// Rows belonging to the requested page
    rows: Vec<Vec<String>>,
}

/// Final pagination state after stream exhaustion
#[derive(Debug)]
pub struct Page {
    /// Total matches across the stream
    pub total: usize,
    /// 1-based page number (offset + 1)
    pub page: usize,
    /// Total page count, at least 1
    pub pages: usize,
    /// Rows of the requested page, in stream order
    pub rows: Vec<Vec<String>>,
}

impl PageAccumulator {
    /// New accumulator for one query's window
    pub fn new(window: LimitClause) -> Self {
        Self {
            limit: window.limit,
            offset: window.offset,
            line_number: 1,
            total: 0,
            rows: Vec::new(),
        }
    }

    /// Advance to the next data row, returning its 1-based line number.
    /// Call once per record before any validation or filtering.
    pub fn begin_row(&mut self) -> usize {
        self.line_number += 1;
        self.line_number
    }

    /// Record a row the predicate accepted
    pub fn accept(&mut self, row: Vec<String>) {
        let start = self.offset * self.limit;
        let end = start + self.limit;

        let discard = self.rows.len() == self.limit
            || (start != 0 && self.total < start)
            || self.total > end;
        self.total += 1;

        if discard {
            trace!(line = self.line_number, "match outside requested page");
        } else {
            self.rows.push(row);
        }
    }

    /// Consume the accumulator after stream exhaustion
    pub fn finish(self) -> Page {
        let pages = if self.limit == 0 {
            1
        } else {
            (self.total.div_ceil(self.limit)).max(1)
        };

        Page {
            total: self.total,
            page: self.offset + 1,
            pages,
            rows: self.rows,
        }
    }
}
