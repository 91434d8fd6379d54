/// Exporters: render a whole tier table into a document format.
///
/// Each format is a unit type implementing [`Exporter`]; [`ExportFormat`]
/// selects one by name.
pub mod data;
pub mod delimited;
pub mod errors;
pub mod markup;
pub mod odt;

use std::fmt;
use std::str::FromStr;

pub use errors::ExportError;

use crate::tiers::TierTable;

/// Renders a tier table as the bytes of one document format.
pub trait Exporter {
    /// File extension without the dot, used for the default output name.
    fn extension(&self) -> &'static str;

    /// Render the full table.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` when the underlying encoder fails.
    fn render(&self, table: &TierTable) -> Result<Vec<u8>, ExportError>;
}

/// Every supported export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
    Html,
    Xml,
    Yaml,
    Toml,
    Latex,
    Rss,
    AsciiDoc,
    Odt,
    Turtle,
}

impl ExportFormat {
    /// All formats, in the order shown in help text.
    pub const ALL: [Self; 12] = [
        Self::Json,
        Self::Csv,
        Self::Markdown,
        Self::Html,
        Self::Xml,
        Self::Yaml,
        Self::Toml,
        Self::Turtle,
        Self::Latex,
        Self::Rss,
        Self::AsciiDoc,
        Self::Odt,
    ];

    /// Canonical lower-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Xml => "xml",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Latex => "latex",
            Self::Rss => "rss",
            Self::AsciiDoc => "asciidoc",
            Self::Odt => "odt",
            Self::Turtle => "turtle",
        }
    }

    /// The exporter implementing this format.
    #[must_use]
    pub fn exporter(self) -> &'static dyn Exporter {
        match self {
            Self::Json => &data::Json,
            Self::Yaml => &data::Yaml,
            Self::Toml => &data::Toml,
            Self::Csv => &delimited::Csv,
            Self::Markdown => &markup::Markdown,
            Self::Html => &markup::Html,
            Self::Xml => &markup::Xml,
            Self::Latex => &markup::Latex,
            Self::Rss => &markup::Rss,
            Self::AsciiDoc => &markup::AsciiDoc,
            Self::Turtle => &markup::Turtle,
            Self::Odt => &odt::Odt,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a format name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let alias = match lower.as_str() {
            "md" => Some(Self::Markdown),
            "yml" => Some(Self::Yaml),
            "ttl" => Some(Self::Turtle),
            "adoc" => Some(Self::AsciiDoc),
            "tex" => Some(Self::Latex),
            _ => None,
        };
        alias
            .or_else(|| Self::ALL.into_iter().find(|f| f.name() == lower))
            .ok_or_else(|| UnknownFormat(s.to_owned()))
    }
}
