//! Row-span calculation
//!
//! Each merge column is scanned top to bottom on its own. A non-empty value
//! opens a run; repeats of that value and blank cells extend it; a different
//! non-empty value closes it and opens the next. Runs covering a single row
//! are not recorded.

use tracing::debug;

use super::structure::{MergeColumnSet, Span, SpanMap};

/// Run under construction while scanning one column
struct OpenRun<'a> {
    start: usize,
    length: usize,
    value: &'a str,
}

impl OpenRun<'_> {
    fn close(self, spans: &mut Vec<Span>) {
        if self.length >= 2 {
            spans.push(Span::new(self.start, self.length, self.value));
        }
    }
}

/// Compute merged runs for every column in `merge_columns`
///
/// Every requested column gets an entry, possibly empty. Columns beyond a
/// row's width read as blank.
pub fn calculate(rows: &[Vec<String>], merge_columns: &MergeColumnSet) -> SpanMap {
    let mut map = SpanMap::new();

    for &column in merge_columns {
        let spans = column_spans(rows, column);
        debug!(column, spans = spans.len(), "computed row spans");
        map.insert(column, spans);
    }

    map
}

/// Merged runs for a single column, ordered by start row
pub fn column_spans(rows: &[Vec<String>], column: usize) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut open: Option<OpenRun<'_>> = None;

    for (index, row) in rows.iter().enumerate() {
        let cell = row.get(column).map(String::as_str).unwrap_or("");

        if cell.is_empty() {
            // Blank cells inherit the anchor above; no-op when nothing is open
            if let Some(run) = open.as_mut() {
                run.length += 1;
            }
            continue;
        }

        match open.as_mut() {
            Some(run) if run.value == cell => run.length += 1,
            _ => {
                if let Some(run) = open.take() {
                    run.close(&mut spans);
                }
                open = Some(OpenRun {
                    start: index,
                    length: 1,
                    value: cell,
                });
            }
        }
    }

    if let Some(run) = open {
        run.close(&mut spans);
    }

    spans
}
