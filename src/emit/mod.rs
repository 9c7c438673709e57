//! Document emitters
//!
//! Each emitter takes a whole, validated [`TableStructure`] and returns one
//! document string for the external renderer.

pub mod latex;
pub mod typst;

use crate::config::{Backend, RenderOptions};
use crate::core::TableStructure;

pub use latex::emit_latex;
pub use typst::emit_typst;

/// Emit `structure` with the backend chosen in `options`
pub fn emit_document(structure: &TableStructure, options: &RenderOptions) -> String {
    match options.backend {
        Backend::Latex => emit_latex(structure, options),
        Backend::Typst => emit_typst(structure, options),
    }
}
