//! Result envelope

use serde::Serialize;

/// The complete result of one query
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    /// Resolved source file path
    pub source: String,
    /// Total matches across the whole file
    pub total: usize,
    /// 1-based page number
    pub page: usize,
    /// Total page count, at least 1
    pub pages: usize,
    /// Output header in projection order
    pub header: Vec<String>,
    /// Rows of the requested page, projected
    pub result: Vec<Vec<String>>,
}

impl QueryResponse {
    /// True if the page holds no rows
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    /// Number of rows on this page
    pub fn len(&self) -> usize {
        self.result.len()
    }
}
