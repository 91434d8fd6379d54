/// Plain-text views of a tier table.
///
/// Every function returns the text to emit; writing it anywhere is the
/// caller's job.
use std::collections::HashSet;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};

use super::{Tier, TierTable};

/// Width of the name column in the plain tier listing.
const NAME_WIDTH: usize = 15;
/// Width of the price column in the plain tier listing.
const PRICE_WIDTH: usize = 10;

/// Layout of the tier listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ListingStyle {
    /// Fixed-width name and price columns.
    #[default]
    Plain,
    /// Bordered table with headers.
    Table,
}

/// One benefit per line.
#[must_use]
pub fn tier_benefits(tier: &Tier) -> String {
    tier.benefits.join("\n")
}

/// Name and price of every tier, in rank order.
#[must_use]
pub fn tier_listing(table: &TierTable, style: ListingStyle) -> String {
    match style {
        ListingStyle::Plain => table
            .iter()
            .map(|t| {
                format!(
                    "{:<name_w$} {:<price_w$}\n",
                    t.display_name(),
                    t.price,
                    name_w = NAME_WIDTH,
                    price_w = PRICE_WIDTH,
                )
            })
            .collect(),
        ListingStyle::Table => {
            let mut out = Table::new();
            out.load_preset(UTF8_BORDERS_ONLY);
            out.set_header(["TIER", "PRICE", "BENEFITS"]);
            for t in table {
                out.add_row([
                    t.display_name(),
                    t.price.clone(),
                    t.benefits.len().to_string(),
                ]);
            }
            format!("{out}\n")
        }
    }
}

/// Every distinct benefit, in order of first appearance.
#[must_use]
pub fn benefit_set(table: &TierTable) -> String {
    let mut seen = HashSet::new();
    table
        .iter()
        .flat_map(|t| t.benefits.iter().map(String::as_str))
        .filter(|b| seen.insert(*b))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Heading, benefits, and a blank separator line for each tier.
#[must_use]
pub fn all_tiers(table: &TierTable) -> String {
    let mut out = String::new();
    for tier in table {
        out.push_str(&tier.heading());
        out.push('\n');
        for benefit in &tier.benefits {
            out.push_str(benefit);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
