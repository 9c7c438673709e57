//! Tests for LaTeX table emission

use super::*;
use crate::core::{CellSlot, TableRow, TableStructure};
use pretty_assertions::assert_eq;

fn header(labels: &[&str]) -> TableRow {
    TableRow::Header(labels.iter().map(|l| l.to_string()).collect())
}

fn spanning_structure() -> TableStructure {
    TableStructure {
        columns: 3,
        rows: vec![
            header(&["GENE", "LOCATION", "INTERPRETATION"]),
            TableRow::Body(vec![
                CellSlot::single("gene1"),
                CellSlot::single("loc1"),
                CellSlot::spanning("benign", 2),
            ]),
            TableRow::Body(vec![
                CellSlot::single("gene2"),
                CellSlot::single("loc2"),
                CellSlot::Suppressed,
            ]),
        ],
    }
}

#[test]
fn test_basic_table() {
    let structure = TableStructure {
        columns: 2,
        rows: vec![
            header(&["A", "B"]),
            TableRow::Body(vec![CellSlot::single("1"), CellSlot::single("2")]),
        ],
    };
    let options = RenderOptions::default();
    let latex = emit_latex(&structure, &options);

    assert!(latex.contains("\\begin{longtable}{|l|l|}"));
    assert!(latex.contains("\\textbf{A} & \\textbf{B} \\\\"));
    assert!(latex.contains("1 & 2 \\\\"));
    assert!(latex.contains("\\endhead"));
    assert!(latex.contains("\\end{longtable}"));
    assert!(latex.trim_end().ends_with("\\end{document}"));
}

#[test]
fn test_rowspan_with_placeholder() {
    let options = RenderOptions::default();
    let latex = emit_latex(&spanning_structure(), &options);

    assert!(latex.contains("gene1 & loc1 & \\multirow{2}{*}{benign} \\\\"));
    // Covered column keeps its slot but stays empty
    assert!(latex.contains("gene2 & loc2 &  \\\\"));
}

#[test]
fn test_rules_skip_covered_columns() {
    let options = RenderOptions::default();
    let mut gen = LatexTableGenerator::new(3, &options);
    gen.process_structure(&spanning_structure());

    assert_eq!(gen.rows[0].hlines_after, vec![LatexHLine::full()]);
    assert_eq!(gen.rows[1].hlines_after, vec![LatexHLine::partial(0, 2)]);
    assert_eq!(gen.rows[2].hlines_after, vec![LatexHLine::full()]);

    let table = gen.generate_table();
    assert!(table.contains("\\cline{1-2}"));
}

#[test]
fn test_between_rows_middle_column() {
    let lines = LatexHLine::between_rows(&[0, 2, 0, 0]);
    assert_eq!(
        lines,
        vec![LatexHLine::partial(0, 1), LatexHLine::partial(2, 4)]
    );
    assert_eq!(lines[1].to_latex_with_cols(4), "\\cline{3-4}");
}

#[test]
fn test_title_and_section_rows() {
    let structure = TableStructure {
        columns: 3,
        rows: vec![
            TableRow::Title("Report".into()),
            TableRow::Section("Chromosome 1".into()),
            TableRow::Body(vec![
                CellSlot::single("a"),
                CellSlot::single("b"),
                CellSlot::single("c"),
            ]),
        ],
    };
    let latex = emit_latex(&structure, &RenderOptions::default());

    assert!(latex.contains("\\multicolumn{3}{|c|}{\\textbf{Report}}"));
    assert!(latex.contains("\\multicolumn{3}{|l|}{\\textbf{Chromosome 1}}"));
}

#[test]
fn test_escaping_in_cells() {
    let structure = TableStructure {
        columns: 1,
        rows: vec![
            header(&["R&D"]),
            TableRow::Body(vec![CellSlot::single("50%")]),
        ],
    };
    let latex = emit_latex(&structure, &RenderOptions::default());
    assert!(latex.contains("\\textbf{R\\&D}"));
    assert!(latex.contains("50\\%"));
}

#[test]
fn test_wide_and_fill_options() {
    let structure = spanning_structure();

    let wide = emit_latex(&structure, &RenderOptions::wide());
    assert!(wide.contains("\\usepackage[landscape,margin=1cm]{geometry}"));
    assert!(wide.contains("\\rowcolor{gray!20}"));

    let compact = emit_latex(&structure, &RenderOptions::compact());
    assert!(!compact.contains("\\rowcolor"));
    assert!(!compact.contains("xcolor"));
    assert!(compact.contains("\\fontsize{8}{9}\\selectfont"));
}

#[test]
fn test_document_title_option() {
    let options = RenderOptions {
        title: Some("Variants #1".into()),
        ..RenderOptions::default()
    };
    let latex = emit_latex(&spanning_structure(), &options);
    assert!(latex.contains("\\large\\bfseries Variants \\#1"));
}

#[test]
fn test_cell_to_latex() {
    assert_eq!(LatexCell::placeholder().to_latex(LatexCellAlign::Left), "");
    assert_eq!(
        LatexCell::from_slot(&CellSlot::spanning("x", 3)).to_latex(LatexCellAlign::Left),
        "\\multirow{3}{*}{x}"
    );
    assert_eq!(LatexCell::header("").to_latex(LatexCellAlign::Left), "");
}
