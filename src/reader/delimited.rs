//! Lazy line-oriented row source
//!
//! Yields one record per line of a delimited text file, splitting fields on
//! a fixed delimiter. No quoting or escape dialect: the format is plain
//! delimited text, and every delimiter occurrence is a field boundary.
//! The first yielded record is the header row.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::errors::{ReaderError, ReaderResult};

/// Streaming reader over the records of one delimited file
#[derive(Debug)]
pub struct DelimitedReader {
    lines: Lines<BufReader<File>>,
    delimiter: char,
}

impl DelimitedReader {
    /// Open a source file for record-at-a-time reading
    pub fn open(path: &Path, delimiter: char) -> ReaderResult<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ReaderError::NotFound(PathBuf::from(path)),
            _ => ReaderError::Io(e),
        })?;
        debug!(path = %path.display(), "opened source file");

        Ok(Self {
            lines: BufReader::new(file).lines(),
            delimiter,
        })
    }

    fn split(&self, line: &str) -> Vec<String> {
        line.split(self.delimiter).map(str::to_string).collect()
    }
}

impl Iterator for DelimitedReader {
    type Item = ReaderResult<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lines.next()? {
            Ok(line) => Some(Ok(self.split(&line))),
            Err(e) => Some(Err(ReaderError::Io(e))),
        }
    }
}
