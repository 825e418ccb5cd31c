//! Forms crate error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing validators (not validation failures).
///
/// Invalid user input is reported as [`common::ValidationErrors`], never
/// through this type.
#[derive(Debug, Error)]
pub enum FormsError {
    /// The message catalog file could not be read.
    #[error("Failed to read message catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The message catalog is not valid JSON for [`crate::Messages`].
    #[error("Invalid message catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),
}
