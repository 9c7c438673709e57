//! Core table modules
//!
//! The pure, synchronous part of a render pass:
//! - `loader`: tab-separated text into a rectangular grid
//! - `spans`: merged runs per merge column
//! - `builder`: grid + spans into a table structure
//! - `validator`: column-count check over the built structure

pub mod builder;
pub mod loader;
pub mod spans;
pub mod structure;
pub mod validator;

// Re-export the pass entry points and shared types
pub use builder::build;
pub use loader::load;
pub use spans::{calculate, column_spans};
pub use structure::{
    ActiveSpanTracker, CellSlot, Grid, MergeColumnSet, Span, SpanMap, TableRow, TableStructure,
};
pub use validator::validate;
