/// Benefit inheritance between ranked tiers.
use super::table::TierTable;

/// How benefits propagate between tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeMode {
    /// Each tier is prefixed with everything the tier below it has, so tier
    /// *k* lists tiers `0..=k` lowest first.
    Forward,
    /// Each tier keeps its own benefits first, followed by those of every
    /// lower tier from nearest to farthest.
    Reverse,
}

/// Rewrite every tier's benefit list in place.
///
/// Prices and identifiers are untouched. Benefits are never deduplicated, and
/// running a cascade twice inherits twice.
pub fn cascade(table: &mut TierTable, mode: CascadeMode) {
    match mode {
        CascadeMode::Forward => cascade_forward(table),
        CascadeMode::Reverse => cascade_reverse(table),
    }
}

fn cascade_forward(table: &mut TierTable) {
    let tiers = table.tiers_mut();
    for i in 1..tiers.len() {
        let mut merged = tiers[i - 1].benefits.clone();
        merged.append(&mut tiers[i].benefits);
        tiers[i].benefits = merged;
    }
}

fn cascade_reverse(table: &mut TierTable) {
    let tiers = table.tiers_mut();
    let original: Vec<Vec<String>> = tiers.iter().map(|t| t.benefits.clone()).collect();
    for (i, tier) in tiers.iter_mut().enumerate() {
        for lower in original[..i].iter().rev() {
            tier.benefits.extend(lower.iter().cloned());
        }
    }
}
