//! Structure validator
//!
//! Re-derives column coverage from a built [`TableStructure`] alone, without
//! looking at the span map that produced it. Every row must resolve to the
//! header's column count once the columns still owned by spans from earlier
//! rows are credited.

use tracing::debug;

use super::structure::{ActiveSpanTracker, CellSlot, TableRow, TableStructure};
use crate::utils::error::{TableError, TableResult};

/// Check that every row of `structure` covers exactly `structure.columns`
///
/// Row indices in errors count the header as row 0.
pub fn validate(structure: &TableStructure) -> TableResult<()> {
    let expected = structure.columns;
    let mut tracker = ActiveSpanTracker::new();

    for (index, row) in structure.rows.iter().enumerate() {
        let actual = effective_columns(row, expected, &mut tracker);
        if actual != expected {
            return Err(TableError::mismatch(index, expected, actual));
        }
    }

    if let Some(&(column, remaining)) = tracker.outstanding().first() {
        return Err(TableError::SpanOverrun { column, remaining });
    }

    debug!(rows = structure.rows.len(), columns = expected, "validated table structure");
    Ok(())
}

/// Columns one row resolves to, advancing `tracker` past it
fn effective_columns(row: &TableRow, width: usize, tracker: &mut ActiveSpanTracker) -> usize {
    match row {
        TableRow::Header(cells) => cells.len() + credit_from(tracker, 0),
        TableRow::Title(_) | TableRow::Section(_) => width + credit_from(tracker, 0),
        TableRow::Body(slots) => {
            let mut count = 0;
            for (column, slot) in slots.iter().enumerate() {
                // Credit the open span first, then consume whatever the row holds here
                if tracker.consume(column) {
                    count += 1;
                }
                if let CellSlot::Visible { rowspan, .. } = slot {
                    count += 1;
                    tracker.open(column, rowspan.saturating_sub(1));
                }
            }
            count + credit_from(tracker, slots.len())
        }
    }
}

/// Consume and count open spans at columns `from..`
fn credit_from(tracker: &mut ActiveSpanTracker, from: usize) -> usize {
    let columns = tracker.active_from(from);
    for &column in &columns {
        tracker.consume(column);
    }
    columns.len()
}
