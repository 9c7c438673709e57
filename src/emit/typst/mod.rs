//! Typst Table Emission
//!
//! Turns a validated table structure into a Typst document using
//! `table.cell(rowspan: N)` for merged runs. Covered positions are left out
//! entirely; Typst's grid layout flows the remaining cells around them.

mod cell;
mod generator;


use crate::config::RenderOptions;
use crate::core::TableStructure;

// Re-export public API
pub use cell::{CellAlign, GridCell};
pub use generator::{GridRow, TypstTableGenerator};

/// Emit a complete Typst document for `structure`
pub fn emit_typst(structure: &TableStructure, options: &RenderOptions) -> String {
    let mut gen = TypstTableGenerator::new(structure.columns, options);
    gen.process_structure(structure);
    gen.generate_document()
}
