/// All-tiers view: every tier with its heading and benefits.
use crate::cli::OutputCtx;
use crate::tiers::render::all_tiers;
use crate::tiers::{TierError, TierTable};

/// Print every tier in rank order.
///
/// # Errors
///
/// Returns `TierError::WriteOutput` if the output file cannot be written.
pub fn run(table: &TierTable, ctx: &OutputCtx) -> Result<(), TierError> {
    ctx.emit(&all_tiers(table), None)
}
