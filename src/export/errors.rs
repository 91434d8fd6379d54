/// Errors from the export encoders.
use thiserror::Error;

/// A format encoder failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML encoding failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML encoding failed: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("ODT packaging failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error while rendering: {0}")]
    Io(#[from] std::io::Error),
}
