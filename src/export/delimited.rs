/// CSV export: one row per (tier, benefit) pair.
use super::{ExportError, Exporter};
use crate::tiers::TierTable;

const HEADER: [&str; 3] = ["Tier", "Price", "Benefit"];

pub struct Csv;

impl Exporter for Csv {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, table: &TierTable) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADER)?;
        for tier in table {
            let name = tier.display_name();
            for benefit in &tier.benefits {
                writer.write_record([name.as_str(), tier.price.as_str(), benefit.as_str()])?;
            }
        }
        writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }
}
