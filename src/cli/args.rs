/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::tiers::{CascadeMode, DEFAULT_MARKER, ListingStyle};

/// tierdesc — describe membership tiers and export them.
#[derive(Debug, Parser)]
#[command(
    name = "tierdesc",
    about = "Print and export tiered membership descriptions",
    version,
    arg_required_else_help = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Tier to show (case-insensitive).
    #[arg(value_name = "TIER_NAME")]
    pub tier: Option<String>,

    /// Input file with tier headers and benefit lines.
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "TIERDESC_INPUT",
        default_value = "tiers.txt"
    )]
    pub input: PathBuf,

    /// List available tiers and prices.
    #[arg(short, long)]
    pub tiers: bool,

    /// List all unique benefits across tiers.
    #[arg(short, long)]
    pub benefits: bool,

    /// Output all tiers with benefits.
    #[arg(short, long)]
    pub all: bool,

    /// Higher tiers list their own benefits first, then inherited ones.
    #[arg(short, long)]
    pub reverse: bool,

    /// Do not inherit benefits from lower tiers.
    #[arg(long, conflicts_with = "reverse")]
    pub no_cascade: bool,

    /// Copy output to the clipboard.
    #[arg(short, long)]
    pub copy: bool,

    /// Write output to FILE instead of stdout. Exports default to output.<ext>.
    #[arg(short, long, value_name = "FILE", env = "TIERDESC_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Export all tiers to a document format
    /// (json, csv, markdown, html, xml, yaml, toml, turtle, latex, rss, asciidoc, odt).
    #[arg(short, long, value_name = "FORMAT")]
    pub export: Option<String>,

    /// Currency marker that identifies tier header lines.
    #[arg(long, value_name = "CHAR", env = "TIERDESC_CURRENCY", default_value_t = DEFAULT_MARKER)]
    pub currency: char,

    /// Layout of the tier listing.
    #[arg(long, value_enum, default_value_t = ListingStyle::Plain)]
    pub style: ListingStyle,

    /// Color output control.
    #[arg(long, value_enum, env = "TIERDESC_COLOR", default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the logo and exit.
    #[arg(long, hide = true)]
    pub logo: bool,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// The single view a run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Tiers,
    Benefits,
    All,
    Export(String),
    Logo,
    Tier(String),
}

impl Cli {
    /// Pick the view. Flags win over a bare tier name, checked in a fixed
    /// order: tiers, benefits, all, export, logo, then the tier name.
    #[must_use]
    pub fn view(&self) -> Option<View> {
        if self.tiers {
            Some(View::Tiers)
        } else if self.benefits {
            Some(View::Benefits)
        } else if self.all {
            Some(View::All)
        } else if let Some(format) = &self.export {
            Some(View::Export(format.clone()))
        } else if self.logo {
            Some(View::Logo)
        } else {
            self.tier.clone().map(View::Tier)
        }
    }

    /// Cascade requested by the flags, if any.
    #[must_use]
    pub fn cascade_mode(&self) -> Option<CascadeMode> {
        if self.no_cascade {
            None
        } else if self.reverse {
            Some(CascadeMode::Reverse)
        } else {
            Some(CascadeMode::Forward)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tierdesc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_bare_tier_name() {
        let cli = parse(&["Pro"]);
        assert_eq!(cli.view(), Some(View::Tier("Pro".to_owned())));
        assert_eq!(cli.cascade_mode(), Some(CascadeMode::Forward));
    }

    #[test]
    fn test_flags_beat_tier_name() {
        assert_eq!(parse(&["pro", "-a"]).view(), Some(View::All));
        assert_eq!(parse(&["pro", "-e", "csv", "-b"]).view(), Some(View::Benefits));
        assert_eq!(parse(&["-a", "-t"]).view(), Some(View::Tiers));
        assert_eq!(
            parse(&["pro", "--export", "json"]).view(),
            Some(View::Export("json".to_owned()))
        );
    }

    #[test]
    fn test_no_view() {
        assert_eq!(parse(&["-r"]).view(), None);
    }

    #[test]
    fn test_cascade_flags() {
        assert_eq!(parse(&["-r", "pro"]).cascade_mode(), Some(CascadeMode::Reverse));
        assert_eq!(parse(&["--no-cascade", "pro"]).cascade_mode(), None);
        assert!(Cli::try_parse_from(["tierdesc", "-r", "--no-cascade"]).is_err());
    }

    #[test]
    fn test_missing_flag_value_is_usage_error() {
        assert!(Cli::try_parse_from(["tierdesc", "pro", "-i"]).is_err());
        assert!(Cli::try_parse_from(["tierdesc", "-e"]).is_err());
    }

    #[test]
    fn test_input_and_output_paths() {
        let cli = parse(&["-i", "my.txt", "-o", "out.md", "-c", "gold"]);
        assert_eq!(cli.input, PathBuf::from("my.txt"));
        assert_eq!(cli.output, Some(PathBuf::from("out.md")));
        assert!(cli.copy);
    }

    #[test]
    fn test_currency_marker() {
        assert_eq!(parse(&["--currency", "€", "-t"]).currency, '€');
    }
}
