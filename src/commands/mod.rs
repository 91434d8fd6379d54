/// Command dispatch: load the table once, then route the selected view.
pub mod all;
pub mod benefits;
pub mod export;
pub mod list;
pub mod logo;
pub mod tier;

use std::path::Path;

use tracing::{debug, warn};

use crate::cli::{Cli, OutputCtx, View};
use crate::tiers::{CascadeMode, TierError, TierTable, cascade, load_tiers};

/// Run the view selected on the command line.
///
/// # Errors
///
/// Returns `TierError` on any command failure.
pub fn run(cli: &Cli, view: &View, ctx: &OutputCtx) -> Result<(), TierError> {
    if *view == View::Logo {
        logo::run();
        return Ok(());
    }
    let table = prepare(&cli.input, cli.currency, cli.cascade_mode(), ctx)?;
    dispatch(view, &table, ctx)
}

/// Load the input file and apply the requested cascade.
///
/// # Errors
///
/// Returns `TierError` if the input file is missing or unreadable.
pub fn prepare(
    input: &Path,
    marker: char,
    mode: Option<CascadeMode>,
    ctx: &OutputCtx,
) -> Result<TierTable, TierError> {
    let t_load = ctx.timer("load");
    let mut table = load_tiers(input, marker)?;
    drop(t_load);
    if table.is_empty() {
        warn!(input = %input.display(), "no tier headers found");
    }

    if let Some(mode) = mode {
        let _t_cascade = ctx.timer("cascade");
        debug!(?mode, "cascading benefits");
        cascade(&mut table, mode);
    }
    Ok(table)
}

/// Dispatch a view over an already prepared table.
///
/// # Errors
///
/// Returns `TierError` on any command failure.
pub fn dispatch(view: &View, table: &TierTable, ctx: &OutputCtx) -> Result<(), TierError> {
    let _t_render = ctx.timer("render");
    match view {
        View::Tiers => list::run(table, ctx),
        View::Benefits => benefits::run(table, ctx),
        View::All => all::run(table, ctx),
        View::Export(format) => export::run(table, format, ctx),
        View::Logo => {
            logo::run();
            Ok(())
        }
        View::Tier(name) => tier::run(table, name, ctx),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::path::PathBuf;

    use crate::cli::OutputCtx;
    use crate::tiers::{TierTable, loader::parse_tiers};

    pub const SAMPLE: &str = "\
basic $5
Discord role
Thanks
pro $10
Early access
Thanks
elite $20
Signed print
";

    pub fn table() -> TierTable {
        parse_tiers(SAMPLE, '$').unwrap()
    }

    /// A context that writes to `output` and never touches the clipboard.
    pub fn ctx(output: PathBuf) -> OutputCtx {
        OutputCtx::for_test(Some(output))
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{SAMPLE, ctx};
    use super::*;

    #[test]
    fn test_prepare_forward_cascade() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tiers.txt");
        std::fs::write(&input, SAMPLE).unwrap();

        let out = ctx(dir.path().join("out.txt"));
        let table = prepare(&input, '$', Some(CascadeMode::Forward), &out).unwrap();
        assert_eq!(
            table.get("elite").unwrap().benefits,
            ["Discord role", "Thanks", "Early access", "Thanks", "Signed print"]
        );
    }

    #[test]
    fn test_prepare_reverse_cascade() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tiers.txt");
        std::fs::write(&input, SAMPLE).unwrap();

        let out = ctx(dir.path().join("out.txt"));
        let table = prepare(&input, '$', Some(CascadeMode::Reverse), &out).unwrap();
        assert_eq!(table.get("basic").unwrap().benefits, ["Discord role", "Thanks"]);
        assert_eq!(
            table.get("elite").unwrap().benefits,
            ["Signed print", "Early access", "Thanks", "Discord role", "Thanks"]
        );
    }

    #[test]
    fn test_prepare_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let out = ctx(dir.path().join("out.txt"));
        let err = prepare(&dir.path().join("missing.txt"), '$', None, &out).unwrap_err();
        assert!(matches!(err, TierError::InputNotFound { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
