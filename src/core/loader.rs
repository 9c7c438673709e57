//! Tab-separated text loader
//!
//! Splits raw text into records, drops blank rows, and conforms every data
//! row to the header's width.

use tracing::{debug, trace};

use super::structure::Grid;
use crate::utils::error::{TableError, TableResult};

/// Parse tab-separated text into a rectangular [`Grid`]
///
/// The first non-blank row is the header. Data rows are truncated or
/// right-padded with empty strings to the header width; rows that are empty
/// after conforming are dropped. Fields are trimmed of surrounding
/// whitespace.
pub fn load(text: &str) -> TableResult<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        if is_blank(&fields) {
            continue;
        }
        records.push(fields);
    }

    let mut records = records.into_iter();
    let header = records.next().ok_or(TableError::EmptyInput)?;
    let width = header.len();

    let mut padded = 0usize;
    let mut truncated = 0usize;
    let mut dropped = 0usize;
    let mut rows = Vec::new();

    for mut row in records {
        if row.len() < width {
            row.resize(width, String::new());
            padded += 1;
        } else if row.len() > width {
            row.truncate(width);
            truncated += 1;
        }

        if is_blank(&row) {
            dropped += 1;
            continue;
        }
        trace!(row = rows.len(), cells = ?row, "loaded row");
        rows.push(row);
    }

    debug!(
        columns = width,
        rows = rows.len(),
        padded,
        truncated,
        dropped,
        "loaded table"
    );

    Ok(Grid { header, rows })
}

fn is_blank(fields: &[String]) -> bool {
    fields.iter().all(|f| f.is_empty())
}
