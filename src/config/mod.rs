use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Config section that records where each database was installed.
pub const DATABASE_FOLDERS_SECTION: &str = "database_folders";

/// Default location of the shared config file.
pub fn default_path() -> PathBuf {
    let home = std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    home.join(".refdb").join("config.json")
}

// ----------------------------------------------------------------------------
// Config
// ----------------------------------------------------------------------------

/// User-editable settings, grouped into named sections of key/value pairs.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    pub sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl Config {
    pub fn new() -> Self {
        Config {
            sections: BTreeMap::new(),
        }
    }

    /// Read config from file.
    pub fn read(path: &Path) -> Result<Config, Report> {
        let config = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read file: {path:?}."))?;
        let config = serde_json::from_str(&config)
            .wrap_err_with(|| format!("Failed to parse file: {path:?}"))?;

        Ok(config)
    }

    /// Write config to file, creating parent directories as needed.
    pub fn write(&self, path: &Path) -> Result<(), Report> {
        if let Some(parent) = path.parent() {
            create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create directory: {parent:?}"))?;
        }

        let mut file = File::create(path)
            .wrap_err_with(|| format!("Failed to create file: {path:?}"))?;

        let output = serde_json::to_string_pretty(self)
            .wrap_err_with(|| format!("Failed to parse: {self:?}"))?;

        file.write_all(format!("{}\n", output).as_bytes())
            .wrap_err_with(|| format!("Failed to write file: {path:?}"))?;

        Ok(())
    }

    /// Set one key in one section, creating the section as needed.
    pub fn update_single_item(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }
}

/// Update one key in the shared config file, creating the file if absent.
///
/// Unrelated sections and keys are carried through untouched.
pub fn update_single_item(
    path: &Path,
    section: &str,
    key: &str,
    value: &str,
) -> Result<(), Report> {
    let mut config = if path.is_file() {
        Config::read(path)?
    } else {
        Config::new()
    };

    config.update_single_item(section, key, value);
    config
        .write(path)
        .wrap_err_with(|| eyre!("Failed to update config: {path:?}"))?;

    Ok(())
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
