/// Single-tier view: the benefit list of one tier.
use crate::cli::OutputCtx;
use crate::tiers::render::tier_benefits;
use crate::tiers::{TierError, TierTable, suggest};

/// Show the benefits of `name` (case-insensitive).
///
/// # Errors
///
/// - `TierError::TierNotFound` — no such tier; nothing is written anywhere
/// - `TierError::WriteOutput` — the output file could not be written
pub fn run(table: &TierTable, name: &str, ctx: &OutputCtx) -> Result<(), TierError> {
    let Some(tier) = table.get(name) else {
        return Err(TierError::TierNotFound {
            name: name.to_lowercase(),
            candidates: suggest(table, name),
        });
    };
    ctx.emit(&tier_benefits(tier), None)
}
