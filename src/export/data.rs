/// Data serialisation formats: the table as `tier -> [benefits, price]`.
use serde::Serialize;

use super::{ExportError, Exporter};
use crate::tiers::TierTable;

/// Pretty-printed JSON with four-space indentation.
pub struct Json;

impl Exporter for Json {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, table: &TierTable) -> Result<Vec<u8>, ExportError> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        table.serialize(&mut ser)?;
        out.push(b'\n');
        Ok(out)
    }
}

pub struct Yaml;

impl Exporter for Yaml {
    fn extension(&self) -> &'static str {
        "yaml"
    }

    fn render(&self, table: &TierTable) -> Result<Vec<u8>, ExportError> {
        Ok(serde_yaml::to_string(table)?.into_bytes())
    }
}

pub struct Toml;

impl Exporter for Toml {
    fn extension(&self) -> &'static str {
        "toml"
    }

    fn render(&self, table: &TierTable) -> Result<Vec<u8>, ExportError> {
        Ok(toml::to_string(table)?.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiers::Tier;

    fn table() -> TierTable {
        let mut table = TierTable::new();
        let mut basic = Tier::new("basic", "5$");
        basic.benefits = vec!["Discord role".to_owned()];
        table.insert(basic);
        let mut pro = Tier::new("pro", "10$");
        pro.benefits = vec!["Discord role".to_owned(), "Early access".to_owned()];
        table.insert(pro);
        table
    }

    #[test]
    fn test_json_preserves_order_and_shape() {
        let out = String::from_utf8(Json.render(&table()).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["pro"][0][1], "Early access");
        assert_eq!(value["pro"][1], "10$");
        assert!(out.find("\"basic\"").unwrap() < out.find("\"pro\"").unwrap());
        assert!(out.contains("\n    \"basic\""));
    }

    #[test]
    fn test_yaml_shape() {
        let out = String::from_utf8(Yaml.render(&table()).unwrap()).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(value["basic"][1].as_str(), Some("5$"));
        assert_eq!(value["basic"][0][0].as_str(), Some("Discord role"));
    }

    #[test]
    fn test_toml_shape() {
        let out = String::from_utf8(Toml.render(&table()).unwrap()).unwrap();
        let value: toml::Value = toml::from_str(&out).unwrap();
        assert_eq!(value["pro"][1].as_str(), Some("10$"));
        assert_eq!(
            value["pro"][0].as_array().map(Vec::len),
            Some(2)
        );
    }
}
