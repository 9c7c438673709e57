//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Logging setup for binaries

pub mod error;
#[cfg(feature = "cli")]
pub mod logging;

// Re-export commonly used items
pub use error::{TableError, TableResult};
