//! hello-world - prints a fixed greeting line to standard output.
//!
//! The binary is a thin wrapper over [`run`], which takes the argument list
//! and the output sink explicitly so the behavior can be captured in tests.
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod greeting;

// Re-export commonly used items for convenience
pub use crate::core::{Config, Error, Result};
pub use greeting::{GREETING, LINE_SEPARATOR};

use std::ffi::OsString;
use std::io::Write;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Load configuration and install the log subscriber.
///
/// Neither step can fail the program: bad configuration falls back to
/// defaults and a subscriber that is already installed is kept.
pub fn init() -> Config {
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Err(e) = crate::core::logging::init(&config.logging) {
        eprintln!("{}", e);
    }
    if let Some(e) = load_error {
        tracing::warn!("{}. Using defaults.", e);
    }

    tracing::debug!("Initialized {} v{}", NAME, VERSION);
    config
}

/// Print the greeting to `out`. `args` are parsed and then ignored.
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = cli::Cli::from_args_lossy(args);
    tracing::debug!(ignored = cli.ignored.len(), "Parsed command line");

    greeting::write_greeting(out)?;
    Ok(())
}
