//! CLI command implementations
//!
//! Dispatches parsed arguments to the engine and renders the result
//! envelope, either as a padded text table or as JSON.

use std::io::Write;
use std::path::Path;

use super::args::{Cli, Command};
use super::errors::CliResult;
use crate::engine::{run_query, QueryResponse};
use crate::logging;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Query {
            query,
            dir,
            json,
            verbose,
        } => {
            logging::init(if verbose { "debug" } else { "warn" });
            run_query_command(&query, &dir, json)
        }
    }
}

fn run_query_command(query: &str, dir: &Path, json: bool) -> CliResult<()> {
    let response = run_query(query, dir)?;

    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer(&mut stdout, &response)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", render_table(&response))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Render the envelope as a padded text table with a summary line
fn render_table(response: &QueryResponse) -> String {
    let widths = column_widths(response);
    let mut out = String::new();

    push_row(&mut out, &response.header, &widths);
    push_separator(&mut out, &widths);
    for row in &response.result {
        push_row(&mut out, row, &widths);
    }

    out.push_str(&format!(
        "{} match(es) | page {} of {} | source: {}\n",
        response.total, response.page, response.pages, response.source
    ));
    out
}

fn column_widths(response: &QueryResponse) -> Vec<usize> {
    let mut widths: Vec<usize> = response.header.iter().map(String::len).collect();
    for row in &response.result {
        for (i, field) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(field.len());
            }
        }
    }
    widths
}

fn push_row(out: &mut String, fields: &[String], widths: &[usize]) {
    let cells: Vec<String> = fields
        .iter()
        .zip(widths)
        .map(|(field, width)| format!("{:<width$}", field, width = width))
        .collect();
    out.push_str(cells.join(" | ").trim_end());
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize]) {
    let cells: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&cells.join("-+-"));
    out.push('\n');
}
