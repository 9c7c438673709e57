//! Render options
//!
//! Options only affect how the validated structure is presented; the core
//! span algorithm never reads them.

use std::path::Path;

use serde::Deserialize;

use crate::utils::error::{TableError, TableResult};

/// Document backend used for emission and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// LaTeX `longtable`, rendered with pdflatex + pdftoppm
    #[default]
    Latex,
    /// Typst `#table`, rendered with `typst compile`
    Typst,
}

impl Backend {
    /// File extension of the emitted document
    pub fn extension(&self) -> &'static str {
        match self {
            Backend::Latex => "tex",
            Backend::Typst => "typ",
        }
    }
}

/// Presentation options for one render
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Document backend
    /// Default: latex
    pub backend: Backend,

    /// Landscape page for tables with many columns
    /// Default: false
    pub wide: bool,

    /// Optional heading printed above the table
    pub title: Option<String>,

    /// Base font size in points
    /// Default: 10
    pub font_size_pt: u8,

    /// Resolution of the produced image
    /// Default: 150
    pub dpi: u32,

    /// Keep the working directory with the document and PDF
    /// Default: false
    pub keep_intermediates: bool,

    /// Shade the header row
    /// Default: true
    pub header_fill: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            backend: Backend::Latex,
            wide: false,
            title: None,
            font_size_pt: 10,
            dpi: 150,
            keep_intermediates: false,
            header_fill: true,
        }
    }
}

impl RenderOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Landscape layout for wide tables
    pub fn wide() -> Self {
        Self {
            wide: true,
            font_size_pt: 9,
            ..Self::default()
        }
    }

    /// Small, unshaded output
    pub fn compact() -> Self {
        Self {
            font_size_pt: 8,
            dpi: 110,
            header_fill: false,
            ..Self::default()
        }
    }

    /// Parse options from TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> TableResult<Self> {
        let options: RenderOptions = toml::from_str(text)?;
        options.check()?;
        Ok(options)
    }

    /// Load options from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> TableResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| TableError::io(format!("reading {}", path.display()), e))?;
        Self::from_toml_str(&text)
    }

    fn check(&self) -> TableResult<()> {
        if self.font_size_pt == 0 {
            return Err(TableError::config("font_size_pt must be positive"));
        }
        if self.dpi == 0 {
            return Err(TableError::config("dpi must be positive"));
        }
        Ok(())
    }
}
