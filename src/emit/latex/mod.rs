//! LaTeX Table Emission
//!
//! Turns a validated table structure into a standalone LaTeX document built
//! on `longtable` and `\multirow`.
//!
//! # Architecture
//!
//! ```text
//! TableStructure -> LatexCell/Coverage State -> Rules -> LaTeX Document
//! ```
//!
//! # Example
//!
//! ```ignore
//! let mut gen = LatexTableGenerator::new(structure.columns, &options);
//! gen.process_structure(&structure);
//! let latex = gen.generate_document();
//! ```

mod cell;
mod generator;
mod hline;

#[cfg(test)]
mod tests;

use crate::config::RenderOptions;
use crate::core::TableStructure;

// Re-export public API
pub use cell::{LatexCell, LatexCellAlign};
pub use generator::{LatexRow, LatexTableGenerator};
pub use hline::LatexHLine;

/// Emit a complete LaTeX document for `structure`
pub fn emit_latex(structure: &TableStructure, options: &RenderOptions) -> String {
    let mut gen = LatexTableGenerator::new(structure.columns, options);
    gen.process_structure(structure);
    gen.generate_document()
}
