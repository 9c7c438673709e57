//! Typst document generator

use std::fmt::Write;

use super::cell::{CellAlign, GridCell};
use crate::config::RenderOptions;
use crate::core::{TableRow, TableStructure};
use crate::data::escape::escape_typst;

/// Represents an emitted table row
#[derive(Debug, Clone)]
pub struct GridRow {
    /// Cells drawn in this row (covered positions omitted)
    pub cells: Vec<GridCell>,
    /// Whether this row goes into `table.header`
    pub is_header: bool,
}

/// Typst table generator
pub struct TypstTableGenerator<'a> {
    /// Number of columns
    pub col_count: usize,
    /// Processed rows
    pub rows: Vec<GridRow>,
    options: &'a RenderOptions,
}

impl<'a> TypstTableGenerator<'a> {
    /// Create a new generator with the given column count
    pub fn new(col_count: usize, options: &'a RenderOptions) -> Self {
        TypstTableGenerator {
            col_count,
            rows: Vec::new(),
            options,
        }
    }

    /// Process every row of a validated structure
    pub fn process_structure(&mut self, structure: &TableStructure) {
        for row in &structure.rows {
            self.process_row(row);
        }
    }

    /// Process a single structural row
    pub fn process_row(&mut self, row: &TableRow) {
        let grid_row = match row {
            TableRow::Header(labels) => GridRow {
                cells: labels.iter().map(|l| GridCell::header(l)).collect(),
                is_header: true,
            },
            TableRow::Title(title) => GridRow {
                cells: vec![GridCell::full_width(title, self.col_count, CellAlign::Center)],
                is_header: true,
            },
            TableRow::Section(label) => GridRow {
                cells: vec![GridCell::full_width(label, self.col_count, CellAlign::Left)],
                is_header: false,
            },
            TableRow::Body(slots) => GridRow {
                cells: slots.iter().filter_map(GridCell::from_slot).collect(),
                is_header: false,
            },
        };
        self.rows.push(grid_row);
    }

    /// Generate the `#table(...)` call
    pub fn generate_table(&self) -> String {
        let mut output = String::new();

        let col_tuple: Vec<&str> = vec!["auto"; self.col_count.max(1)];
        let _ = writeln!(output, "#table(");
        let _ = writeln!(output, "    columns: ({}),", col_tuple.join(", "));
        if self.options.header_fill {
            let _ = writeln!(output, "    fill: (_, y) => if y == 0 {{ luma(230) }},");
        }

        for row in &self.rows {
            if row.cells.is_empty() {
                continue;
            }
            let cells_str: Vec<String> = row.cells.iter().map(|c| c.to_typst()).collect();
            if row.is_header {
                let _ = writeln!(output, "    table.header({}),", cells_str.join(", "));
            } else {
                let _ = writeln!(output, "    {},", cells_str.join(", "));
            }
        }

        output.push_str(")\n");
        output
    }

    /// Generate a complete, compilable document around the table
    pub fn generate_document(&self) -> String {
        let mut output = String::new();
        let page_width = if self.options.wide { "29.7cm" } else { "21cm" };

        let _ = writeln!(
            output,
            "#set page(width: {}, height: auto, margin: 1cm)",
            page_width
        );
        let _ = writeln!(output, "#set text(size: {}pt)", self.options.font_size_pt);

        if let Some(title) = &self.options.title {
            let _ = writeln!(
                output,
                "#align(center, text(weight: \"bold\", size: 1.2em)[{}])",
                escape_typst(title)
            );
        }

        output.push_str(&self.generate_table());
        output
    }
}
