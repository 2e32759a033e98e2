//! Command-line surface. Every argument is accepted and ignored.

use clap::Parser;
use std::ffi::OsString;
use tracing::debug;

/// Parsed command line
#[derive(Debug, Default, Parser)]
#[command(
    name = "hello-world",
    about = "Prints a fixed greeting.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Arguments accepted for compatibility and otherwise unused
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..,
        value_parser = clap::value_parser!(OsString)
    )]
    pub ignored: Vec<OsString>,
}

impl Cli {
    /// Parse `args` (program name first). Never fails.
    pub fn from_args_lossy<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) => {
                debug!("Ignoring unparseable arguments: {}", e.kind());
                Cli::default()
            }
        }
    }
}
