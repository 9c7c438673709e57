//! # tabspan
//!
//! Render tab-separated tables as images, collapsing runs of repeated or
//! blank values in selected columns into merged, row-spanning cells.
//!
//! ## Pipeline
//!
//! ```text
//! text -> load -> Grid -> calculate -> SpanMap -> build -> TableStructure
//!      -> validate -> emit (LaTeX | Typst) -> external renderer -> image
//! ```
//!
//! ## Usage Examples
//!
//! ```rust
//! use tabspan::{build_table, render_table_document, MergeColumnSet, RenderOptions};
//!
//! let text = "GENE\tINTERPRETATION\ngene1\tbenign\ngene2\t\ngene3\tpathogenic\n";
//! let merge: MergeColumnSet = [1].into_iter().collect();
//!
//! let table = build_table(text, &merge).unwrap();
//! assert_eq!(table.columns, 2);
//!
//! let latex = render_table_document(text, &merge, &RenderOptions::default()).unwrap();
//! assert!(latex.contains("\\multirow{2}{*}{benign}"));
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

/// Render options and backend selection
pub mod config;

/// Core table modules
pub mod core;

/// Data layer - static escaping tables
pub mod data;

/// Document emitters
pub mod emit;

/// Feature modules - boundary helpers
pub mod features;

/// External renderer hand-off
pub mod render;

/// Utility modules
pub mod utils;

// Re-export core types and pass stages
pub use crate::core::{
    build, calculate, load, validate, ActiveSpanTracker, CellSlot, Grid, MergeColumnSet, Span,
    SpanMap, TableRow, TableStructure,
};

pub use config::{Backend, RenderOptions};
pub use emit::{emit_document, emit_latex, emit_typst};
pub use features::merge_columns::{check_merge_columns, parse_merge_columns};
pub use render::{
    render_steps, DocumentRenderer, ProcessRenderer, RecordingRenderer, RenderStep, RenderedImages,
};
pub use utils::error::{TableError, TableResult};

/// Load, span, build and validate a table
///
/// # Arguments
/// * `text` - tab-separated table text, header first
/// * `merge_columns` - zero-based columns whose runs are merged
///
/// # Returns
/// The validated table structure, or the first error of the pass
pub fn build_table(text: &str, merge_columns: &MergeColumnSet) -> TableResult<TableStructure> {
    let grid = load(text)?;
    check_merge_columns(merge_columns, grid.width())?;

    let spans = calculate(&grid.rows, merge_columns);
    let structure = build(&grid, &spans, merge_columns);
    validate(&structure)?;

    Ok(structure)
}

/// Build a table and emit it as a complete document
pub fn render_table_document(
    text: &str,
    merge_columns: &MergeColumnSet,
    options: &RenderOptions,
) -> TableResult<String> {
    let structure = build_table(text, merge_columns)?;
    let document = emit_document(&structure, options);
    debug!(
        backend = ?options.backend,
        bytes = document.len(),
        "emitted document"
    );
    Ok(document)
}

/// Build, emit and hand the document to `renderer` in one go
///
/// Nothing reaches the renderer unless the whole pass succeeds.
pub fn render_table_image(
    text: &str,
    merge_columns: &MergeColumnSet,
    options: &RenderOptions,
    renderer: &dyn DocumentRenderer,
    output: &Path,
) -> TableResult<Vec<PathBuf>> {
    let document = render_table_document(text, merge_columns, options)?;
    renderer.render(&document, output)
}
