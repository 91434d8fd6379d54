/// Benefit set: every distinct benefit across all tiers.
use crate::cli::OutputCtx;
use crate::tiers::render::benefit_set;
use crate::tiers::{TierError, TierTable};

/// Print each distinct benefit once.
///
/// # Errors
///
/// Returns `TierError::WriteOutput` if the output file cannot be written.
pub fn run(table: &TierTable, ctx: &OutputCtx) -> Result<(), TierError> {
    ctx.emit(&benefit_set(table), None)
}
