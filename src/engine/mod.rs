//! Query-evaluation engine
//!
//! Translates a parsed query into a streaming row filter, applies
//! projection and aliasing, and computes stable pagination over the full
//! stream.
//!
//! # Evaluation order (strict)
//!
//! 1. Parse the query text; reject non-SELECT statements
//! 2. Build the predicate; reject unsupported operators
//! 3. Resolve the FROM table to a file path and read the header
//! 4. For every data row: validate shape, filter, paginate
//! 5. Project the retained page and assemble the envelope
//!
//! A full scan is always performed so the reported total covers the whole
//! file; every query reads the entire source regardless of page size.

mod driver;
mod errors;
mod filter;
mod pagination;
mod projection;
mod response;

pub use driver::{run_query, DELIMITER, SOURCE_EXTENSION};
pub use errors::{EngineError, EngineResult};
pub use filter::{Comparison, Filter};
pub use pagination::{Page, PageAccumulator};
pub use projection::Projection;
pub use response::QueryResponse;
