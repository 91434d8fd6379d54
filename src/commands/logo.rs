/// `--logo`: print the ASCII logo.
use crate::cli::logo::LOGO;

/// Print the logo to stdout.
pub fn run() {
    println!("{LOGO}");
}
