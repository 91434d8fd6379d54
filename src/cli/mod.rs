/// CLI layer: argument parsing, output context, clipboard, logo.
pub mod args;
pub mod clipboard;
pub mod logo;
pub mod output;

pub use args::{Cli, View};
pub use output::OutputCtx;
