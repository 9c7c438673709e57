//! Cell types and alignment for Typst table generation

use crate::core::CellSlot;
use crate::data::escape::escape_typst;

/// Cell alignment options
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellAlign {
    Left,
    Center,
    Right,
}

impl CellAlign {
    /// Convert to Typst alignment string
    pub fn to_typst(&self) -> &'static str {
        match self {
            CellAlign::Left => "left",
            CellAlign::Center => "center",
            CellAlign::Right => "right",
        }
    }
}

/// Represents a single table cell with span and alignment info
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    /// Cell content (escaped Typst markup, without table.cell wrapper)
    pub content: String,
    /// Number of rows this cell spans
    pub rowspan: usize,
    /// Number of columns this cell spans
    pub colspan: usize,
    /// Optional cell-specific alignment
    pub align: Option<CellAlign>,
    /// Whether the content is set in bold
    pub strong: bool,
}

impl GridCell {
    /// Create a new cell from raw text
    pub fn new(text: &str) -> Self {
        GridCell {
            content: escape_typst(text),
            rowspan: 1,
            colspan: 1,
            align: None,
            strong: false,
        }
    }

    /// Create a bold header cell
    pub fn header(text: &str) -> Self {
        GridCell {
            strong: true,
            ..GridCell::new(text)
        }
    }

    /// Create a bold cell spanning the whole table width
    pub fn full_width(text: &str, col_count: usize, align: CellAlign) -> Self {
        GridCell {
            colspan: col_count,
            align: Some(align),
            strong: true,
            ..GridCell::new(text)
        }
    }

    /// Convert a body slot; suppressed slots produce no cell
    ///
    /// Typst places cells around an active rowspan on its own.
    pub fn from_slot(slot: &CellSlot) -> Option<Self> {
        match slot {
            CellSlot::Visible { value, rowspan } => Some(GridCell {
                rowspan: *rowspan,
                ..GridCell::new(value)
            }),
            CellSlot::Suppressed => None,
        }
    }

    /// Generate Typst code for this cell
    pub fn to_typst(&self) -> String {
        let clean_content = self.content.trim();
        let content_expr = if clean_content.is_empty() {
            "[]".to_string()
        } else if self.strong {
            format!("[*{}*]", clean_content)
        } else {
            format!("[{}]", clean_content)
        };

        let mut attrs = Vec::new();
        if self.rowspan > 1 {
            attrs.push(format!("rowspan: {}", self.rowspan));
        }
        if self.colspan > 1 {
            attrs.push(format!("colspan: {}", self.colspan));
        }
        if let Some(align) = self.align {
            attrs.push(format!("align: {}", align.to_typst()));
        }

        if attrs.is_empty() {
            content_expr
        } else {
            // table.cell(attr1: val, attr2: val)[content]
            format!("table.cell({}){}", attrs.join(", "), content_expr)
        }
    }
}
