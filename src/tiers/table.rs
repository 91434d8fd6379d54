/// The ordered tier table built by the loader.
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A named membership level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    /// Lower-cased identifier (first token of the header line).
    pub id: String,
    /// Price exactly as matched in the input, currency marker included.
    pub price: String,
    /// Benefit lines in input order. Duplicates are kept.
    pub benefits: Vec<String>,
}

impl Tier {
    #[must_use]
    pub fn new(id: &str, price: &str) -> Self {
        Self {
            id: id.to_lowercase(),
            price: price.to_owned(),
            benefits: Vec::new(),
        }
    }

    /// Identifier with the first letter upper-cased and the rest lower-cased.
    #[must_use]
    pub fn display_name(&self) -> String {
        capitalize(&self.id)
    }

    /// `"<Name> <price>"`, the heading used by most views and exporters.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} {}", self.display_name(), self.price)
    }
}

/// Tiers keyed by identifier, in order of first appearance.
///
/// Position in the table is the tier's rank: index 0 is the lowest tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierTable {
    tiers: Vec<Tier>,
}

impl TierTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tier. An existing tier with the same identifier is replaced
    /// in place, keeping its original rank, and returned.
    pub fn insert(&mut self, tier: Tier) -> Option<Tier> {
        match self.tiers.iter_mut().find(|t| t.id == tier.id) {
            Some(slot) => Some(std::mem::replace(slot, tier)),
            None => {
                self.tiers.push(tier);
                None
            }
        }
    }

    /// Case-insensitive lookup.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Tier> {
        let id = id.to_lowercase();
        self.tiers.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tier> {
        self.tiers.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tiers.iter().map(|t| t.id.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Total number of benefit entries across all tiers.
    #[must_use]
    pub fn benefit_count(&self) -> usize {
        self.tiers.iter().map(|t| t.benefits.len()).sum()
    }

    pub(super) fn tiers_mut(&mut self) -> &mut [Tier] {
        &mut self.tiers
    }
}

impl<'a> IntoIterator for &'a TierTable {
    type Item = &'a Tier;
    type IntoIter = std::slice::Iter<'a, Tier>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes as an ordered map `id -> [benefits, price]`.
impl Serialize for TierTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tiers.len()))?;
        for tier in &self.tiers {
            map.serialize_entry(&tier.id, &(&tier.benefits, &tier.price))?;
        }
        map.end()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(id: &str, price: &str, benefits: &[&str]) -> Tier {
        Tier {
            id: id.to_owned(),
            price: price.to_owned(),
            benefits: benefits.iter().map(|b| (*b).to_owned()).collect(),
        }
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut table = TierTable::new();
        table.insert(tier("basic", "5$", &[]));
        table.insert(tier("pro", "10$", &[]));
        table.insert(tier("elite", "20$", &[]));
        assert_eq!(table.ids().collect::<Vec<_>>(), ["basic", "pro", "elite"]);
    }

    #[test]
    fn test_duplicate_overwrites_in_place() {
        let mut table = TierTable::new();
        table.insert(tier("basic", "5$", &["old"]));
        table.insert(tier("pro", "10$", &[]));
        let replaced = table.insert(tier("basic", "6$", &["new"]));

        assert_eq!(replaced.map(|t| t.benefits), Some(vec!["old".to_owned()]));
        assert_eq!(table.len(), 2);
        let first = table.iter().next().unwrap();
        assert_eq!(first.price, "6$");
        assert_eq!(first.benefits, ["new"]);
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let mut table = TierTable::new();
        table.insert(Tier::new("Gold", "50$"));
        assert!(table.get("GOLD").is_some());
        assert!(table.get("gold").is_some());
        assert!(table.get("silver").is_none());
    }

    #[test]
    fn test_heading_capitalizes() {
        let t = tier("platinum", "1,000$", &[]);
        assert_eq!(t.heading(), "Platinum 1,000$");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_serialize_shape() {
        let mut table = TierTable::new();
        table.insert(tier("basic", "5$", &["a", "b"]));
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"basic":[["a","b"],"5$"]}"#);
    }
}
