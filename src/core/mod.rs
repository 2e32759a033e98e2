//! Ambient plumbing: errors, configuration and logging.

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used items
pub use config::Config;
pub use error::{Error, Result};
