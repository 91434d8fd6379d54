#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! tierdesc — print and export tiered membership descriptions.

mod cli;
mod commands;
mod export;
mod logging;
mod tiers;

use clap::{CommandFactory, Parser};
use tracing::debug;

use cli::{Cli, OutputCtx};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let ctx = OutputCtx::new(&cli);

    let Some(view) = cli.view() else {
        // Only modifiers were given; nothing to show.
        let _ = Cli::command().print_help();
        return;
    };
    debug!(?view, input = %cli.input.display(), "selected view");

    if let Err(err) = commands::run(&cli, &view, &ctx) {
        ctx.write_error(&err);
        std::process::exit(err.exit_code());
    }
}
