/// Errors from loading, presenting, and exporting a tier table.
use std::path::PathBuf;

use thiserror::Error;

use crate::export::ExportError;

/// Errors surfaced to the user by any command.
#[derive(Debug, Error)]
pub enum TierError {
    /// The input file does not exist.
    #[error("File '{}' not found!", path.display())]
    InputNotFound {
        /// The path that was tried.
        path: PathBuf,
    },

    /// The input file exists but could not be read.
    #[error("Could not read '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the output file failed.
    #[error("Could not write '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No tier matched the requested identifier.
    #[error("Tier '{name}' not found!")]
    TierNotFound {
        /// The requested identifier, lower-cased.
        name: String,
        /// Closest identifiers, best first. May be empty.
        candidates: Vec<String>,
    },

    /// The export format name is not one we render.
    #[error("Unsupported export format: '{name}'.")]
    UnsupportedFormat {
        /// The name as given on the command line.
        name: String,
    },

    /// The currency marker could not be turned into a price pattern.
    #[error("Invalid currency marker: {0}")]
    Marker(#[from] regex::Error),

    /// Rendering an export failed.
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

impl TierError {
    /// Return the CLI exit code for this error.
    ///
    /// Unknown tiers and formats are reported but do not fail the process.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TierNotFound { .. } | Self::UnsupportedFormat { .. } => 0,
            Self::InputNotFound { .. }
            | Self::ReadInput { .. }
            | Self::WriteOutput { .. }
            | Self::Export(_) => 1,
            Self::Marker(_) => 2,
        }
    }
}
