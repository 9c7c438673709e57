//! Data layer - static mapping tables
//!
//! - `escape`: special-character escapes for LaTeX and Typst output

pub mod escape;

pub use escape::{escape_latex, escape_typst, LATEX_ESCAPES, TYPST_ESCAPES};
