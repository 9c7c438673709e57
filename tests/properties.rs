//! Property tests for span calculation and structure invariants

use proptest::prelude::*;
use tabspan::{build, calculate, validate, CellSlot, Grid, MergeColumnSet, TableRow};

const WIDTH: usize = 4;

/// Small value alphabet so runs and repeats are common
fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => Just(String::new()),
        2 => Just("a".to_string()),
        2 => Just("b".to_string()),
        1 => Just("c".to_string()),
    ]
}

fn grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec(prop::collection::vec(cell(), WIDTH), 0..24).prop_map(|rows| Grid {
        header: (0..WIDTH).map(|i| format!("H{}", i)).collect(),
        rows,
    })
}

fn merge_columns() -> impl Strategy<Value = MergeColumnSet> {
    prop::collection::vec(any::<bool>(), WIDTH).prop_map(|picked| {
        picked
            .iter()
            .enumerate()
            .filter(|(_, &on)| on)
            .map(|(col, _)| col)
            .collect()
    })
}

proptest! {
    #[test]
    fn spans_are_idempotent(g in grid(), cols in merge_columns()) {
        prop_assert_eq!(calculate(&g.rows, &cols), calculate(&g.rows, &cols));
    }

    #[test]
    fn spans_never_overlap_and_are_never_single(g in grid(), cols in merge_columns()) {
        let map = calculate(&g.rows, &cols);
        for spans in map.values() {
            for span in spans {
                prop_assert!(span.length >= 2);
                prop_assert!(span.end_index() <= g.rows.len());
            }
            for pair in spans.windows(2) {
                prop_assert!(pair[0].end_index() <= pair[1].start_index);
            }
        }
    }

    #[test]
    fn built_structure_always_validates(g in grid(), cols in merge_columns()) {
        let spans = calculate(&g.rows, &cols);
        let table = build(&g, &spans, &cols);
        prop_assert!(validate(&table).is_ok());
    }

    #[test]
    fn every_body_row_covers_each_column_once(g in grid(), cols in merge_columns()) {
        let spans = calculate(&g.rows, &cols);
        let table = build(&g, &spans, &cols);
        let mut open = [0usize; WIDTH];

        for row in table.body() {
            match row {
                TableRow::Body(slots) => {
                    prop_assert_eq!(slots.len(), WIDTH);
                    for (col, slot) in slots.iter().enumerate() {
                        match slot {
                            CellSlot::Suppressed => {
                                prop_assert!(open[col] > 0);
                                open[col] -= 1;
                            }
                            CellSlot::Visible { rowspan, .. } => {
                                prop_assert_eq!(open[col], 0);
                                open[col] = rowspan - 1;
                            }
                        }
                    }
                }
                TableRow::Section(_) => prop_assert!(open.iter().all(|&o| o == 0)),
                other => prop_assert!(false, "unexpected row {:?}", other),
            }
        }
        prop_assert!(open.iter().all(|&o| o == 0));
    }
}
