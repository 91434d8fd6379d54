/// Tier listing: name and price of every tier.
use owo_colors::Style;

use crate::cli::OutputCtx;
use crate::tiers::render::tier_listing;
use crate::tiers::{TierError, TierTable};

/// Print the tier/price table, cyan on a colour terminal.
///
/// # Errors
///
/// Returns `TierError::WriteOutput` if the output file cannot be written.
pub fn run(table: &TierTable, ctx: &OutputCtx) -> Result<(), TierError> {
    ctx.emit(&tier_listing(table, ctx.style), Some(Style::new().cyan()))
}
