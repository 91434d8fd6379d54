/// Output context: where primary output goes, colour decisions, status lines.
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use owo_colors::{OwoColorize, Style};
use tracing::{debug, warn};

use super::args::{Cli, ColorWhen};
use super::clipboard;
use crate::tiers::{ListingStyle, TierError};

/// Resolve whether a stream gets ANSI colour.
///
/// `auto` colours terminals unless `NO_COLOR` is set to a non-empty value.
#[must_use]
pub fn resolve_color(when: ColorWhen, is_terminal: bool) -> bool {
    match when {
        ColorWhen::Always => true,
        ColorWhen::Never => false,
        ColorWhen::Auto => {
            is_terminal && std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
        }
    }
}

/// Output context passed to all commands.
#[derive(Debug, Clone)]
pub struct OutputCtx {
    /// Primary output file; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Also copy primary output to the clipboard.
    pub copy: bool,
    /// Layout of the tier listing.
    pub style: ListingStyle,
    color_stdout: bool,
    color_stderr: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(cli: &Cli) -> Self {
        Self {
            output: cli.output.clone(),
            copy: cli.copy,
            style: cli.style,
            color_stdout: resolve_color(cli.color, std::io::stdout().is_terminal()),
            color_stderr: resolve_color(cli.color, std::io::stderr().is_terminal()),
        }
    }

    /// Uncoloured context writing to `output`, without the clipboard.
    #[cfg(test)]
    pub(crate) fn for_test(output: Option<PathBuf>) -> Self {
        Self {
            output,
            copy: false,
            style: ListingStyle::Plain,
            color_stdout: false,
            color_stderr: false,
        }
    }

    /// Start a named debug timer that logs elapsed time on drop.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label)
    }

    /// Emit primary output: to the output file if set, otherwise stdout.
    /// `accent` colours terminal output only.
    ///
    /// # Errors
    ///
    /// Returns `TierError::WriteOutput` if the output file cannot be written.
    pub fn emit(&self, text: &str, accent: Option<Style>) -> Result<(), TierError> {
        if let Some(path) = &self.output {
            write_file(path, text.as_bytes())?;
            self.success(&format!("Output written to '{}'.", path.display()));
        } else {
            let shown = match accent {
                Some(style) if self.color_stdout => text.style(style).to_string(),
                _ => text.to_owned(),
            };
            if shown.ends_with('\n') {
                print!("{shown}");
            } else {
                println!("{shown}");
            }
        }

        if self.copy {
            self.copy_to_clipboard(text);
        }
        Ok(())
    }

    /// Replace the clipboard contents. Failures are reported, never fatal.
    pub fn copy_to_clipboard(&self, text: &str) {
        match clipboard::copy(text) {
            Ok(()) => self.success("Content copied to clipboard."),
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                self.warning(&format!("Could not copy to clipboard: {e}"));
            }
        }
    }

    /// Green status line on stderr.
    pub fn success(&self, message: &str) {
        eprintln!("{}", self.paint_stderr(message, Style::new().green()));
    }

    /// Yellow status line on stderr.
    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.paint_stderr(message, Style::new().yellow()));
    }

    /// Write a user-facing error to stderr.
    pub fn write_error(&self, err: &TierError) {
        eprintln!("{}", self.paint_stderr(&err.to_string(), Style::new().red()));
        if let TierError::TierNotFound { candidates, .. } = err {
            if !candidates.is_empty() {
                eprintln!("  Did you mean: {}?", candidates.join(", "));
            }
        }
    }

    fn paint_stderr(&self, text: &str, style: Style) -> String {
        if self.color_stderr {
            text.style(style).to_string()
        } else {
            text.to_owned()
        }
    }
}

/// Create or truncate `path` and write `bytes`.
///
/// # Errors
///
/// Returns `TierError::WriteOutput` on any I/O failure.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<(), TierError> {
    std::fs::write(path, bytes).map_err(|source| TierError::WriteOutput {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote output file");
    Ok(())
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds at debug level on drop.
///
/// Created via [`OutputCtx::timer`].
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        debug!(stage = self.label, "{ms:.2}ms");
    }
}
