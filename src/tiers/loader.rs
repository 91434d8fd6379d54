/// Line-oriented parser for tier description files.
///
/// A line containing the currency marker is a tier header: its first token is
/// the tier identifier and the amount next to the marker is the price. Every
/// following non-blank line, up to the next header, is a benefit.
///
/// ```text
/// Basic 5$
/// Discord role
/// Pro 10$
/// Early access
/// ```
use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use super::errors::TierError;
use super::{Tier, TierTable};

/// Default currency marker.
pub const DEFAULT_MARKER: char = '$';

/// Digits with optional thousands separators and an optional decimal part.
const AMOUNT: &str = r"\d[\d,]*(?:\.\d+)?";

/// Parses tier headers for a single currency marker.
#[derive(Debug, Clone)]
pub struct TierParser {
    marker: char,
    /// `<amount> <marker>`, e.g. `1,000.50 $`.
    trailing: Regex,
    /// `<marker> <amount>`, e.g. `$5`.
    leading: Regex,
}

impl TierParser {
    /// Build the price patterns for `marker`.
    ///
    /// # Errors
    ///
    /// Returns `regex::Error` if the patterns exceed the regex size limits.
    pub fn new(marker: char) -> Result<Self, regex::Error> {
        let m = regex::escape(&marker.to_string());
        Ok(Self {
            marker,
            trailing: Regex::new(&format!(r"{AMOUNT}\s*{m}"))?,
            leading: Regex::new(&format!(r"{m}\s*{AMOUNT}"))?,
        })
    }

    /// Whether `line` starts a new tier.
    #[must_use]
    pub fn is_header(&self, line: &str) -> bool {
        line.contains(self.marker)
    }

    /// Extract the price text from a header line, preferring the
    /// amount-then-marker form.
    #[must_use]
    pub fn price<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.trailing
            .find(line)
            .or_else(|| self.leading.find(line))
            .map(|m| m.as_str())
    }

    /// Parse a whole document into a table.
    #[must_use]
    pub fn parse(&self, text: &str) -> TierTable {
        let mut table = TierTable::new();
        let mut current: Option<Tier> = None;

        for (lineno, line) in text.lines().map(str::trim).enumerate() {
            if line.is_empty() {
                continue;
            }
            if self.is_header(line) {
                if let Some(done) = current.take() {
                    push(&mut table, done);
                }
                current = Some(self.header(line, lineno + 1));
            } else if let Some(tier) = current.as_mut() {
                tier.benefits.push(line.to_owned());
            } else {
                debug!(line = lineno + 1, "dropping line before first tier header");
            }
        }
        if let Some(done) = current {
            push(&mut table, done);
        }

        table
    }

    fn header(&self, line: &str, lineno: usize) -> Tier {
        // A header contains the marker, so it always has at least one token.
        let id = line.split_whitespace().next().unwrap_or_default();
        let price = self.price(line).unwrap_or_else(|| {
            warn!(line = lineno, "tier header '{line}' has no amount next to '{}'", self.marker);
            ""
        });
        Tier::new(id, price)
    }
}

fn push(table: &mut TierTable, tier: Tier) {
    let id = tier.id.clone();
    if table.insert(tier).is_some() {
        warn!(tier = %id, "duplicate tier replaces earlier definition");
    }
}

/// Parse `text` using `marker` as the currency marker.
///
/// # Errors
///
/// Returns `TierError::Marker` if no price pattern can be built for `marker`.
pub fn parse_tiers(text: &str, marker: char) -> Result<TierTable, TierError> {
    Ok(TierParser::new(marker)?.parse(text))
}

/// Read and parse the file at `path`.
///
/// # Errors
///
/// - `TierError::InputNotFound` — the file does not exist
/// - `TierError::ReadInput` — any other read failure
/// - `TierError::Marker` — `marker` cannot form a price pattern
pub fn load_tiers(path: &Path, marker: char) -> Result<TierTable, TierError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            TierError::InputNotFound {
                path: path.to_owned(),
            }
        } else {
            TierError::ReadInput {
                path: path.to_owned(),
                source,
            }
        }
    })?;
    let table = parse_tiers(&text, marker)?;
    debug!(path = %path.display(), tiers = table.len(), "loaded tier table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = "\
Basic 5$
  Discord role

Shout-out
Pro 10$
Early access
Elite 1,250.50 $
Signed print
";

    #[test]
    fn test_parse_headers_and_benefits() {
        let table = parse_tiers(SAMPLE, '$').unwrap();
        assert_eq!(table.ids().collect::<Vec<_>>(), ["basic", "pro", "elite"]);

        let basic = table.get("basic").unwrap();
        assert_eq!(basic.price, "5$");
        assert_eq!(basic.benefits, ["Discord role", "Shout-out"]);

        let elite = table.get("elite").unwrap();
        assert_eq!(elite.price, "1,250.50 $");
        assert_eq!(elite.benefits, ["Signed print"]);
    }

    #[test]
    fn test_leading_marker_price() {
        let table = parse_tiers("basic $5\nA\npro $1,000\nB\n", '$').unwrap();
        assert_eq!(table.get("basic").unwrap().price, "$5");
        assert_eq!(table.get("pro").unwrap().price, "$1,000");
    }

    #[test]
    fn test_orphan_lines_dropped() {
        let table = parse_tiers("intro text\nmore\nBasic 5$\nperk\n", '$').unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("basic").unwrap().benefits, ["perk"]);
    }

    #[test]
    fn test_duplicate_tier_overwrites() {
        let table = parse_tiers("Basic 5$\nold\nPro 9$\nx\nbasic 6$\nnew\n", '$').unwrap();
        assert_eq!(table.ids().collect::<Vec<_>>(), ["basic", "pro"]);
        let basic = table.get("basic").unwrap();
        assert_eq!(basic.price, "6$");
        assert_eq!(basic.benefits, ["new"]);
    }

    #[test]
    fn test_header_without_amount() {
        let table = parse_tiers("Free $\nnewsletter\n", '$').unwrap();
        let free = table.get("free").unwrap();
        assert_eq!(free.price, "");
        assert_eq!(free.benefits, ["newsletter"]);
    }

    #[test]
    fn test_custom_marker() {
        let table = parse_tiers("Bronze 3€\nsticker\nSilver 8 €\nmug\n", '€').unwrap();
        assert_eq!(table.get("bronze").unwrap().price, "3€");
        assert_eq!(table.get("silver").unwrap().price, "8 €");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_tiers(&dir.path().join("nope.txt"), '$');
        assert!(matches!(result, Err(TierError::InputNotFound { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let table = load_tiers(file.path(), '$').unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.benefit_count(), 4);
    }
}
