//! Shared table types: grid, spans and the built structure

use std::collections::BTreeSet;

use fxhash::FxHashMap;
use indexmap::IndexMap;

/// Zero-based column indices that participate in vertical merging
pub type MergeColumnSet = BTreeSet<usize>;

/// Per-column span lists, keyed by column index in ascending order
pub type SpanMap = IndexMap<usize, Vec<Span>>;

/// Rectangular table data: one header row plus data rows of equal width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Header fields
    pub header: Vec<String>,
    /// Data rows, each exactly `header.len()` cells wide
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    /// Number of columns, as fixed by the header
    pub fn width(&self) -> usize {
        self.header.len()
    }
}

/// One merged run of rows within a single column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Data row index where the run begins
    pub start_index: usize,
    /// Number of rows covered (always >= 2)
    pub length: usize,
    /// Display value anchoring the run
    pub value: String,
}

impl Span {
    pub fn new(start_index: usize, length: usize, value: impl Into<String>) -> Self {
        Span {
            start_index,
            length,
            value: value.into(),
        }
    }

    /// First row index after the run
    pub fn end_index(&self) -> usize {
        self.start_index + self.length
    }
}

/// A column position within a body row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellSlot {
    /// A cell that is drawn, occupying `rowspan` rows
    Visible { value: String, rowspan: usize },
    /// A slot covered by a span opened on an earlier row
    Suppressed,
}

impl CellSlot {
    pub fn single(value: impl Into<String>) -> Self {
        CellSlot::Visible {
            value: value.into(),
            rowspan: 1,
        }
    }

    pub fn spanning(value: impl Into<String>, rowspan: usize) -> Self {
        CellSlot::Visible {
            value: value.into(),
            rowspan,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, CellSlot::Visible { .. })
    }
}

/// A row of the built table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Column labels, one visible cell per field
    Header(Vec<String>),
    /// Header collapsed into a single full-width title cell
    Title(String),
    /// Ordinary data row, one slot per column
    Body(Vec<CellSlot>),
    /// Full-width section marker, never merged
    Section(String),
}

/// Built table: the header (or title) row followed by data rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStructure {
    /// Column count every row must resolve to
    pub columns: usize,
    /// Rows in display order; `rows[0]` is the header or title row
    pub rows: Vec<TableRow>,
}

impl TableStructure {
    /// The header or title row
    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first()
    }

    /// Rows after the header
    pub fn body(&self) -> &[TableRow] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

/// Remaining rows to suppress, per column, for the span currently open there
///
/// Created empty for each pass over a table and threaded row by row.
#[derive(Debug, Clone, Default)]
pub struct ActiveSpanTracker {
    remaining: FxHashMap<usize, usize>,
}

impl ActiveSpanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a span from an earlier row still covers `column`
    pub fn is_active(&self, column: usize) -> bool {
        self.remaining.contains_key(&column)
    }

    /// Take one row of credit from the span covering `column`
    ///
    /// Returns `false` when no span is active there.
    pub fn consume(&mut self, column: usize) -> bool {
        match self.remaining.get_mut(&column) {
            Some(left) => {
                *left -= 1;
                if *left == 0 {
                    self.remaining.remove(&column);
                }
                true
            }
            None => false,
        }
    }

    /// Register a span at `column` that still covers `rows` later rows
    pub fn open(&mut self, column: usize, rows: usize) {
        if rows > 0 {
            self.remaining.insert(column, rows);
        }
    }

    /// Number of columns currently owned by open spans
    pub fn active_columns(&self) -> usize {
        self.remaining.len()
    }

    /// Active columns at or beyond `from`, in ascending order
    pub fn active_from(&self, from: usize) -> Vec<usize> {
        let mut columns: Vec<usize> = self
            .remaining
            .keys()
            .copied()
            .filter(|&c| c >= from)
            .collect();
        columns.sort_unstable();
        columns
    }

    /// Open spans as `(column, remaining)`, in ascending column order
    pub fn outstanding(&self) -> Vec<(usize, usize)> {
        let mut open: Vec<(usize, usize)> =
            self.remaining.iter().map(|(&c, &r)| (c, r)).collect();
        open.sort_unstable();
        open
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}
