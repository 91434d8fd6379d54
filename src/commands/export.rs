/// Export: render the whole table into a named document format.
use std::path::PathBuf;

use tracing::debug;

use crate::cli::OutputCtx;
use crate::cli::output::write_file;
use crate::export::{ExportFormat, UnknownFormat};
use crate::tiers::{TierError, TierTable};

/// Stem of the default export file name.
const DEFAULT_STEM: &str = "output";

/// Export `table` as `format`, to `-o` or `output.<ext>`.
///
/// # Errors
///
/// - `TierError::UnsupportedFormat` — unknown format name; nothing is written
/// - `TierError::Export` — the encoder failed
/// - `TierError::WriteOutput` — the file could not be written
pub fn run(table: &TierTable, format: &str, ctx: &OutputCtx) -> Result<(), TierError> {
    let format: ExportFormat = format
        .parse()
        .map_err(|UnknownFormat(name)| TierError::UnsupportedFormat { name })?;
    let exporter = format.exporter();

    let path = ctx
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{DEFAULT_STEM}.{}", exporter.extension())));

    let bytes = exporter.render(table)?;
    debug!(%format, bytes = bytes.len(), "rendered export");
    write_file(&path, &bytes)?;

    ctx.success(&format!(
        "Exported to '{}' in {} format.",
        path.display(),
        format.name().to_uppercase()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{ctx, table};

    #[test]
    fn test_csv_row_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiers.csv");
        let t = table();
        run(&t, "csv", &ctx(path.clone())).unwrap();

        let out = std::fs::read_to_string(path).unwrap();
        assert_eq!(out.lines().count(), 1 + t.benefit_count());
    }

    #[test]
    fn test_unsupported_format_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiers.pdf");
        let err = run(&table(), "pdf", &ctx(path.clone())).unwrap_err();

        assert!(matches!(err, TierError::UnsupportedFormat { ref name } if name == "pdf"));
        assert_eq!(err.exit_code(), 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_every_format_writes_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let t = table();
        for format in ExportFormat::ALL {
            let path = dir.path().join(format!("out.{}", format.exporter().extension()));
            run(&t, format.name(), &ctx(path.clone())).unwrap();
            assert!(std::fs::metadata(&path).unwrap().len() > 0, "{format} wrote nothing");
        }
    }
}
