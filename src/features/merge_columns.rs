//! Merge-column selection
//!
//! Turns a user-facing list such as `"4,5"` into a [`MergeColumnSet`].
//! Tokens that are not non-negative integers are dropped with a warning.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::core::MergeColumnSet;
use crate::utils::error::{TableError, TableResult};

lazy_static! {
    /// Separators between column tokens: commas and/or whitespace
    static ref SEPARATOR: Regex = Regex::new(r"[,\s]+").unwrap();
}

/// Parse a comma-separated list of zero-based column indices
pub fn parse_merge_columns(spec: &str) -> MergeColumnSet {
    let mut columns = MergeColumnSet::new();

    for token in SEPARATOR.split(spec.trim()) {
        if token.is_empty() {
            continue;
        }
        match token.parse::<usize>() {
            Ok(column) => {
                columns.insert(column);
            }
            Err(_) => warn!(token, "ignoring non-numeric merge column"),
        }
    }

    columns
}

/// Reject merge columns that do not exist in a table `width` columns wide
pub fn check_merge_columns(columns: &MergeColumnSet, width: usize) -> TableResult<()> {
    match columns.iter().find(|&&c| c >= width) {
        Some(&column) => Err(TableError::MergeColumnOutOfRange { column, width }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cols: &[usize]) -> MergeColumnSet {
        cols.iter().copied().collect()
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_merge_columns("4,5"), set(&[4, 5]));
    }

    #[test]
    fn test_parse_spaces_and_duplicates() {
        assert_eq!(parse_merge_columns(" 2, 0 ,2  1"), set(&[0, 1, 2]));
    }

    #[test]
    fn test_parse_drops_bad_tokens() {
        assert_eq!(parse_merge_columns("1,x,-3,2.5,3"), set(&[1, 3]));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_merge_columns("").is_empty());
        assert!(parse_merge_columns(" , ,").is_empty());
    }

    #[test]
    fn test_check_range() {
        assert!(check_merge_columns(&set(&[0, 2]), 3).is_ok());
        assert!(matches!(
            check_merge_columns(&set(&[1, 3]), 3),
            Err(TableError::MergeColumnOutOfRange {
                column: 3,
                width: 3
            })
        ));
    }
}
