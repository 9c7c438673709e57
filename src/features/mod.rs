//! Feature modules - boundary helpers around the core
//!
//! - Merge-column selection parsing

pub mod merge_columns;

// Re-export commonly used items
pub use merge_columns::{check_merge_columns, parse_merge_columns};
