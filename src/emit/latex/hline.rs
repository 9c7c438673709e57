//! Horizontal rules between LaTeX table rows

/// Represents a horizontal line in a LaTeX table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatexHLine {
    /// Start column (0-indexed, None = from beginning)
    pub start: Option<usize>,
    /// End column (0-indexed exclusive, None = to end)
    pub end: Option<usize>,
}

impl LatexHLine {
    /// Create a full-width horizontal line
    pub fn full() -> Self {
        LatexHLine {
            start: None,
            end: None,
        }
    }

    /// Create a partial horizontal line (cline)
    pub fn partial(start: usize, end: usize) -> Self {
        LatexHLine {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Rules to draw under a row, skipping columns still covered below it
    ///
    /// `coverage[c]` is the number of rows column `c` stays covered by a
    /// row span after the current row. With no coverage the rule is a
    /// single `\hline`; otherwise one `\cline` per run of open columns.
    pub fn between_rows(coverage: &[usize]) -> Vec<LatexHLine> {
        if coverage.iter().all(|&c| c == 0) {
            return vec![LatexHLine::full()];
        }

        let mut lines = Vec::new();
        let mut run_start: Option<usize> = None;

        for (col, &covered) in coverage.iter().enumerate() {
            match (covered == 0, run_start) {
                (true, None) => run_start = Some(col),
                (false, Some(start)) => {
                    lines.push(LatexHLine::partial(start, col));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            lines.push(LatexHLine::partial(start, coverage.len()));
        }

        lines
    }

    /// Generate LaTeX code with known column count (for partial lines without explicit end)
    pub fn to_latex_with_cols(&self, col_count: usize) -> String {
        match (self.start, self.end) {
            (Some(s), Some(e)) => format!("\\cline{{{}-{}}}", s + 1, e),
            (Some(s), None) => format!("\\cline{{{}-{}}}", s + 1, col_count),
            (None, Some(e)) => format!("\\cline{{1-{}}}", e),
            (None, None) => "\\hline".to_string(),
        }
    }
}
