//! Structural table builder
//!
//! Combines the loaded grid with the computed spans into a [`TableStructure`].
//! Column coverage is tracked row by row: a column covered by a span opened
//! above is emitted as [`CellSlot::Suppressed`] and its credit is consumed.

use tracing::debug;

use super::structure::{
    ActiveSpanTracker, CellSlot, Grid, MergeColumnSet, Span, SpanMap, TableRow, TableStructure,
};

/// Build the table structure for `grid`
///
/// Spans are only honoured for columns listed in `merge_columns`.
pub fn build(grid: &Grid, spans: &SpanMap, merge_columns: &MergeColumnSet) -> TableStructure {
    let columns = grid.width();
    let mut rows = Vec::with_capacity(grid.rows.len() + 1);
    rows.push(header_row(&grid.header));

    let mut tracker = ActiveSpanTracker::new();
    let mut sections = 0usize;
    let mut spanning = 0usize;

    for (index, raw) in grid.rows.iter().enumerate() {
        if is_section_row(raw, index, &tracker, spans, merge_columns) {
            sections += 1;
            rows.push(TableRow::Section(raw[0].clone()));
            continue;
        }

        let mut slots = Vec::with_capacity(columns);
        for (column, value) in raw.iter().enumerate() {
            if tracker.consume(column) {
                slots.push(CellSlot::Suppressed);
                continue;
            }

            match span_starting_at(spans, merge_columns, column, index) {
                Some(span) => {
                    spanning += 1;
                    tracker.open(column, span.length - 1);
                    slots.push(CellSlot::spanning(span.value.clone(), span.length));
                }
                None => slots.push(CellSlot::single(value.clone())),
            }
        }
        rows.push(TableRow::Body(slots));
    }

    debug!(
        columns,
        rows = rows.len() - 1,
        sections,
        spanning,
        "built table structure"
    );

    TableStructure { columns, rows }
}

/// Header row, collapsed to a title when only the first field is set
fn header_row(header: &[String]) -> TableRow {
    if only_first_filled(header) {
        TableRow::Title(header[0].clone())
    } else {
        TableRow::Header(header.to_vec())
    }
}

/// True when a row has more than one field, the first set and the rest blank
fn only_first_filled(fields: &[String]) -> bool {
    match fields.split_first() {
        Some((first, rest)) => {
            !first.is_empty() && !rest.is_empty() && rest.iter().all(String::is_empty)
        }
        None => false,
    }
}

/// Section markers never sit inside or open a merged run
fn is_section_row(
    raw: &[String],
    index: usize,
    tracker: &ActiveSpanTracker,
    spans: &SpanMap,
    merge_columns: &MergeColumnSet,
) -> bool {
    only_first_filled(raw)
        && tracker.is_empty()
        && (0..raw.len()).all(|c| span_starting_at(spans, merge_columns, c, index).is_none())
}

/// The span of `column` that begins exactly at `row`, if any
fn span_starting_at<'a>(
    spans: &'a SpanMap,
    merge_columns: &MergeColumnSet,
    column: usize,
    row: usize,
) -> Option<&'a Span> {
    if !merge_columns.contains(&column) {
        return None;
    }
    let list = spans.get(&column)?;
    list.binary_search_by_key(&row, |s| s.start_index)
        .ok()
        .map(|i| &list[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::spans::calculate;
    use pretty_assertions::assert_eq;

    fn grid(header: &[&str], data: &[&[&str]]) -> Grid {
        Grid {
            header: header.iter().map(|c| c.to_string()).collect(),
            rows: data
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    fn build_with(grid: &Grid, cols: &[usize]) -> TableStructure {
        let merge: MergeColumnSet = cols.iter().copied().collect();
        let spans = calculate(&grid.rows, &merge);
        build(grid, &spans, &merge)
    }

    #[test]
    fn test_plain_table() {
        let g = grid(
            &["GENE", "LOCATION", "INTERPRETATION"],
            &[&["gene1", "loc1", "benign"]],
        );
        let table = build_with(&g, &[]);
        assert_eq!(table.columns, 3);
        assert_eq!(
            table.rows,
            vec![
                TableRow::Header(vec!["GENE".into(), "LOCATION".into(), "INTERPRETATION".into()]),
                TableRow::Body(vec![
                    CellSlot::single("gene1"),
                    CellSlot::single("loc1"),
                    CellSlot::single("benign"),
                ]),
            ]
        );
    }

    #[test]
    fn test_span_suppresses_cells_below() {
        let g = grid(
            &["G", "L", "I"],
            &[
                &["gene1", "loc1", "benign"],
                &["gene2", "loc2", ""],
                &["gene3", "loc3", ""],
                &["gene4", "loc4", "pathogenic"],
            ],
        );
        let table = build_with(&g, &[2]);
        let body = table.body();
        assert_eq!(
            body[0],
            TableRow::Body(vec![
                CellSlot::single("gene1"),
                CellSlot::single("loc1"),
                CellSlot::spanning("benign", 3),
            ])
        );
        assert_eq!(
            body[1],
            TableRow::Body(vec![
                CellSlot::single("gene2"),
                CellSlot::single("loc2"),
                CellSlot::Suppressed,
            ])
        );
        assert_eq!(
            body[2],
            TableRow::Body(vec![
                CellSlot::single("gene3"),
                CellSlot::single("loc3"),
                CellSlot::Suppressed,
            ])
        );
        assert_eq!(
            body[3],
            TableRow::Body(vec![
                CellSlot::single("gene4"),
                CellSlot::single("loc4"),
                CellSlot::single("pathogenic"),
            ])
        );
    }

    #[test]
    fn test_title_header() {
        let g = grid(&["Variant report", "", ""], &[&["a", "b", "c"]]);
        let table = build_with(&g, &[]);
        assert_eq!(table.rows[0], TableRow::Title("Variant report".into()));
        assert_eq!(table.columns, 3);
    }

    #[test]
    fn test_single_column_header_is_not_title() {
        let g = grid(&["Only"], &[&["a"]]);
        let table = build_with(&g, &[]);
        assert_eq!(table.rows[0], TableRow::Header(vec!["Only".into()]));
    }

    #[test]
    fn test_section_row_without_spans() {
        let g = grid(
            &["G", "L", "I"],
            &[&["Chromosome 1", "", ""], &["gene1", "loc1", "benign"]],
        );
        let table = build_with(&g, &[2]);
        assert_eq!(table.body()[0], TableRow::Section("Chromosome 1".into()));
        assert!(matches!(table.body()[1], TableRow::Body(_)));
    }

    #[test]
    fn test_first_only_row_inside_run_is_body() {
        let g = grid(
            &["G", "L", "I"],
            &[
                &["gene1", "loc1", "benign"],
                &["gene2", "", ""],
                &["gene3", "loc2", "pathogenic"],
                &["gene4", "", ""],
            ],
        );
        let table = build_with(&g, &[1, 2]);
        assert_eq!(
            table.body()[1],
            TableRow::Body(vec![
                CellSlot::single("gene2"),
                CellSlot::Suppressed,
                CellSlot::Suppressed,
            ])
        );
        assert_eq!(
            table.body()[2],
            TableRow::Body(vec![
                CellSlot::single("gene3"),
                CellSlot::spanning("loc2", 2),
                CellSlot::spanning("pathogenic", 2),
            ])
        );
    }

    #[test]
    fn test_spans_ignored_for_unlisted_columns() {
        let g = grid(&["A", "B"], &[&["x", "1"], &["x", "2"]]);
        let merge: MergeColumnSet = [0].into_iter().collect();
        let spans = calculate(&g.rows, &merge);
        let table = build(&g, &spans, &MergeColumnSet::new());
        assert_eq!(
            table.body()[1],
            TableRow::Body(vec![CellSlot::single("x"), CellSlot::single("2")])
        );
    }
}
