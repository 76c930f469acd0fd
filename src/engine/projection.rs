//! Column projection
//!
//! Derives the output header from the select list and remaps matched rows
//! from source column order into output order. Projection always allocates
//! a fresh output row; source rows are never edited in place.

use std::collections::HashMap;

use crate::parser::SelectColumn;

/// Precomputed projection for one query
#[derive(Debug)]
pub struct Projection {
    /// Output header in selection order
    header: Vec<String>,
    /// Derived source column key -> display name
    display_names: HashMap<String, String>,
    /// Derived source column key -> output position
    positions: HashMap<String, usize>,
    /// True when no select list was given: rows pass through whole
    passthrough: bool,
}

impl Projection {
    /// Build the projection from the select list (or its absence) and the
    /// source header.
    pub fn new(columns: Option<&[SelectColumn]>, source_header: &[String]) -> Self {
        let Some(columns) = columns else {
            return Self {
                header: source_header.to_vec(),
                display_names: HashMap::new(),
                positions: HashMap::new(),
                passthrough: true,
            };
        };

        let mut header = Vec::with_capacity(columns.len());
        let mut display_names = HashMap::new();
        let mut positions = HashMap::new();

        for (position, column) in columns.iter().enumerate() {
            let key = column.column.derived_name();
            let display = column.display_name();
            header.push(display.clone());
            display_names.insert(key.clone(), display);
            positions.insert(key, position);
        }

        Self {
            header,
            display_names,
            positions,
            passthrough: false,
        }
    }

    /// The output header row
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Display name for a derived source column key, if selected
    pub fn display_name(&self, key: &str) -> Option<&str> {
        self.display_names.get(key).map(String::as_str)
    }

    /// Number of output columns
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Remap one matched row into output order. Source fields whose column
    /// was not selected are dropped; output positions no source field maps
    /// to stay empty.
    pub fn project(&self, source_header: &[String], row: &[String]) -> Vec<String> {
        if self.passthrough {
            return row.to_vec();
        }

        let mut output = vec![String::new(); self.width()];
        for (index, field) in row.iter().enumerate() {
            let Some(name) = source_header.get(index) else {
                continue;
            };
            if let Some(&position) = self.positions.get(name) {
                output[position] = field.clone();
            }
        }
        output
    }
}
