use color_eyre::eyre::{eyre, Report, Result};
use std::str::FromStr;

/// Default logging level, used when RUST_LOG is unset.
#[derive(Clone, Copy, Debug, Default)]
pub enum Verbosity {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl std::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        // Convert to lowercase for RUST_LOG env var compatibility
        let lowercase = format!("{:?}", self).to_lowercase();
        write!(f, "{lowercase}")
    }
}

impl FromStr for Verbosity {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "error" => Ok(Verbosity::Error),
            "warn" => Ok(Verbosity::Warn),
            "info" => Ok(Verbosity::Info),
            "debug" => Ok(Verbosity::Debug),
            _ => Err(eyre!("Unknown verbosity level: {input}")),
        }
    }
}
