//! Cell types and alignment for LaTeX table generation

use crate::core::CellSlot;
use crate::data::escape::escape_latex;

/// LaTeX cell alignment options
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LatexCellAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl LatexCellAlign {
    /// Convert to LaTeX column specification character
    pub fn to_char(&self) -> char {
        match self {
            LatexCellAlign::Left => 'l',
            LatexCellAlign::Center => 'c',
            LatexCellAlign::Right => 'r',
        }
    }
}

/// Represents a single table cell with span and alignment info
#[derive(Debug, Clone, PartialEq)]
pub struct LatexCell {
    /// Cell content (already escaped LaTeX)
    pub content: String,
    /// Number of rows this cell spans
    pub rowspan: usize,
    /// Number of columns this cell spans
    pub colspan: usize,
    /// Optional cell-specific alignment
    pub align: Option<LatexCellAlign>,
    /// Whether the content is set in bold
    pub bold: bool,
    /// Whether this is an empty placeholder (for rowspan coverage)
    pub is_placeholder: bool,
}

impl LatexCell {
    /// Create a new cell from raw text
    pub fn new(text: &str) -> Self {
        LatexCell {
            content: escape_latex(text),
            rowspan: 1,
            colspan: 1,
            align: None,
            bold: false,
            is_placeholder: false,
        }
    }

    /// Create an empty placeholder cell (for rowspan coverage)
    pub fn placeholder() -> Self {
        LatexCell {
            is_placeholder: true,
            ..LatexCell::new("")
        }
    }

    /// Create a bold header cell
    pub fn header(text: &str) -> Self {
        LatexCell {
            bold: true,
            ..LatexCell::new(text)
        }
    }

    /// Create a bold cell spanning the whole table width
    pub fn full_width(text: &str, col_count: usize, align: LatexCellAlign) -> Self {
        LatexCell {
            colspan: col_count,
            align: Some(align),
            bold: true,
            ..LatexCell::new(text)
        }
    }

    /// Convert a body slot
    pub fn from_slot(slot: &CellSlot) -> Self {
        match slot {
            CellSlot::Visible { value, rowspan } => LatexCell {
                rowspan: *rowspan,
                ..LatexCell::new(value)
            },
            CellSlot::Suppressed => LatexCell::placeholder(),
        }
    }

    /// Generate LaTeX code for this cell
    pub fn to_latex(&self, default_align: LatexCellAlign) -> String {
        if self.is_placeholder {
            return String::new();
        }

        let content = self.content.trim();
        let content = if self.bold && !content.is_empty() {
            format!("\\textbf{{{}}}", content)
        } else {
            content.to_string()
        };

        // Build the inner content (potentially wrapped in \multirow)
        let inner = if self.rowspan > 1 {
            format!("\\multirow{{{}}}{{*}}{{{}}}", self.rowspan, content)
        } else {
            content
        };

        // Wrap in \multicolumn if needed
        if self.colspan > 1 {
            let align_char = self.align.unwrap_or(default_align).to_char();
            format!(
                "\\multicolumn{{{}}}{{|{}|}}{{{}}}",
                self.colspan, align_char, inner
            )
        } else {
            inner
        }
    }
}
