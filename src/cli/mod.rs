pub mod verbosity;

use clap::Parser;
use color_eyre::eyre::{eyre, Report, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Download reference databases and update config settings.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[clap(verbatim_doc_comment)]
pub struct Cli {
    /// Print the available databases.
    #[clap(long)]
    pub available: bool,

    /// Download the selected database build to the install location.
    #[clap(long, num_args = 3, value_names = ["DATABASE", "BUILD", "INSTALL_LOCATION"])]
    pub download: Option<Vec<String>>,

    /// Update the config file to set the new database as the default.
    #[clap(long, default_value_t = UpdateConfig::Yes)]
    pub update_config: UpdateConfig,

    /// Location (local or remote) to pull the database from.
    ///
    /// Overrides the catalog url. The archive file name must match the
    /// one the catalog expects for the selected build.
    #[clap(long)]
    pub database_location: Option<String>,

    /// Path to the shared config file.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

// ----------------------------------------------------------------------------
// Update Config Choice
// ----------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub enum UpdateConfig {
    #[default]
    Yes,
    No,
}

impl fmt::Display for UpdateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let choice = match self {
            UpdateConfig::Yes => "yes",
            UpdateConfig::No => "no",
        };

        write!(f, "{}", choice)
    }
}

impl FromStr for UpdateConfig {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self, Report> {
        match input {
            "yes" => Ok(UpdateConfig::Yes),
            "no" => Ok(UpdateConfig::No),
            _ => Err(eyre!("Unknown update-config choice: {input}. Options are yes or no.")),
        }
    }
}
