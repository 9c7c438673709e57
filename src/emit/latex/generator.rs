//! State-aware LaTeX document generator

use std::fmt::Write;

use super::cell::{LatexCell, LatexCellAlign};
use super::hline::LatexHLine;
use crate::config::RenderOptions;
use crate::core::{TableRow, TableStructure};
use crate::data::escape::escape_latex;

/// Represents an emitted table row
#[derive(Debug, Clone)]
pub struct LatexRow {
    /// Cells in this row, one per column position
    pub cells: Vec<LatexCell>,
    /// Horizontal lines after this row
    pub hlines_after: Vec<LatexHLine>,
    /// Whether this is the header row
    pub is_header: bool,
}

/// State-aware LaTeX table generator
///
/// Keeps per-column rowspan coverage so rules under a row skip the columns
/// a `\multirow` cell still occupies.
pub struct LatexTableGenerator<'a> {
    /// Number of columns
    pub col_count: usize,
    /// Column alignments
    pub col_aligns: Vec<LatexCellAlign>,
    /// Column coverage tracking: remaining rows each column is covered by a rowspan
    col_coverage: Vec<usize>,
    /// Processed rows
    pub rows: Vec<LatexRow>,
    options: &'a RenderOptions,
}

impl<'a> LatexTableGenerator<'a> {
    /// Create a new generator with the given column count
    pub fn new(col_count: usize, options: &'a RenderOptions) -> Self {
        LatexTableGenerator {
            col_count,
            col_aligns: vec![LatexCellAlign::Left; col_count],
            col_coverage: vec![0; col_count],
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
    ///
    /// Suppressed slots become empty placeholders: LaTeX needs every column
    /// position filled even under a `\multirow`.
    pub fn process_row(&mut self, row: &TableRow) {
        let (cells, is_header): (Vec<LatexCell>, bool) = match row {
            TableRow::Header(labels) => (
                labels.iter().map(|l| LatexCell::header(l)).collect(),
                true,
            ),
            TableRow::Title(title) => (
                vec![LatexCell::full_width(title, self.col_count, LatexCellAlign::Center)],
                true,
            ),
            TableRow::Section(label) => (
                vec![LatexCell::full_width(label, self.col_count, LatexCellAlign::Left)],
                false,
            ),
            TableRow::Body(slots) => (slots.iter().map(LatexCell::from_slot).collect(), false),
        };

        self.advance_coverage(&cells);

        self.rows.push(LatexRow {
            hlines_after: LatexHLine::between_rows(&self.col_coverage),
            cells,
            is_header,
        });
    }

    /// Update coverage with the cells of the row just processed
    fn advance_coverage(&mut self, cells: &[LatexCell]) {
        let mut col = 0;
        for cell in cells {
            if col >= self.col_coverage.len() {
                break;
            }
            if cell.is_placeholder {
                self.col_coverage[col] = self.col_coverage[col].saturating_sub(1);
            } else {
                for i in col..(col + cell.colspan).min(self.col_coverage.len()) {
                    self.col_coverage[i] = cell.rowspan.saturating_sub(1);
                }
            }
            col += cell.colspan;
        }
    }

    /// Generate the `longtable` environment
    pub fn generate_table(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "\\begin{{longtable}}{{{}}}", self.build_column_spec());
        let _ = writeln!(output, "\\hline");

        for row in &self.rows {
            if row.is_header && self.options.header_fill {
                output.push_str("\\rowcolor{gray!20}\n");
            }

            output.push_str("  ");
            let cells: Vec<String> = row
                .cells
                .iter()
                .enumerate()
                .map(|(col_idx, cell)| {
                    let default_align = self
                        .col_aligns
                        .get(col_idx)
                        .copied()
                        .unwrap_or_default();
                    cell.to_latex(default_align)
                })
                .collect();
            output.push_str(&cells.join(" & "));
            let _ = writeln!(output, " \\\\");

            for hline in &row.hlines_after {
                let _ = writeln!(output, "{}", hline.to_latex_with_cols(self.col_count));
            }

            // Repeat the header on every page
            if row.is_header {
                let _ = writeln!(output, "\\endhead");
            }
        }

        let _ = write!(output, "\\end{{longtable}}");
        output
    }

    /// Generate a complete, compilable document around the table
    pub fn generate_document(&self) -> String {
        let mut output = String::new();
        let size = self.options.font_size_pt;
        let geometry = if self.options.wide {
            "landscape,margin=1cm"
        } else {
            "margin=1.5cm"
        };

        let _ = writeln!(output, "\\documentclass{{article}}");
        let _ = writeln!(output, "\\usepackage[T1]{{fontenc}}");
        let _ = writeln!(output, "\\usepackage[utf8]{{inputenc}}");
        let _ = writeln!(output, "\\usepackage[{}]{{geometry}}", geometry);
        let _ = writeln!(output, "\\usepackage{{longtable}}");
        let _ = writeln!(output, "\\usepackage{{multirow}}");
        let _ = writeln!(output, "\\usepackage{{array}}");
        if self.options.header_fill {
            let _ = writeln!(output, "\\usepackage[table]{{xcolor}}");
        }
        let _ = writeln!(output, "\\pagestyle{{empty}}");
        let _ = writeln!(output, "\\begin{{document}}");
        let _ = writeln!(
            output,
            "\\fontsize{{{}}}{{{}}}\\selectfont",
            size,
            u32::from(size) * 6 / 5
        );

        if let Some(title) = &self.options.title {
            let _ = writeln!(
                output,
                "\\begin{{center}}{{\\large\\bfseries {}}}\\end{{center}}",
                escape_latex(title)
            );
        }

        let _ = writeln!(output, "{}", self.generate_table());
        let _ = write!(output, "\\end{{document}}");
        output
    }

    /// Build the column specification string (e.g., "|l|l|l|")
    fn build_column_spec(&self) -> String {
        let mut spec = String::from("|");

        for align in &self.col_aligns {
            spec.push(align.to_char());
            spec.push('|');
        }

        spec
    }
}
