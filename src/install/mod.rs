use crate::catalog::Catalog;
use crate::error::Error;
use crate::utils;
use color_eyre::eyre::{Report, Result};
use color_eyre::Help;
use itertools::Itertools;
use log::{info, warn};
use std::fs::{create_dir_all, remove_file};
use std::path::{Path, PathBuf};

/// Download and extract a database build into a subdirectory of the target root.
///
/// The extracted contents land in target_root/database, which is created if
/// absent. With a source override, the override is fetched instead of the
/// catalog url, but only if its archive file name matches the expected one.
/// Returns the install path.
pub async fn install(
    catalog: &Catalog,
    database: &str,
    build: &str,
    target_root: &Path,
    source_override: Option<&str>,
) -> Result<PathBuf, Report> {
    // Resolve the selection before touching the filesystem.
    let url = catalog.lookup(database, build).suggestion(format!(
        "Known databases: {}. Run with --available to list all builds.",
        catalog.databases.keys().join(", ")
    ))?;

    // subdirectory that holds the extracted contents
    let install_path = target_root.join(database);
    if !install_path.is_dir() {
        info!("Creating subdirectory to install database: {install_path:?}");
        create_dir_all(&install_path).map_err(|source| Error::DirectoryCreate {
            path: install_path.clone(),
            source,
        })?;
    }

    // the archive is downloaded next to the subdirectory, named after the url
    let downloaded_file = target_root.join(utils::file_name(url));

    let source = match source_override {
        Some(source) => {
            check_source_version(url, source)?;
            source
        }
        None => url,
    };

    // A pre-existing local archive is user-owned and must survive the install.
    let user_owned = Path::new(source).is_file();

    utils::download_and_extract(source, &downloaded_file, &install_path).await?;

    if !user_owned {
        // cleanup is best-effort, the install itself is already complete
        if let Err(e) = remove_file(&downloaded_file) {
            warn!("Unable to remove file {downloaded_file:?}: {e}");
        }
    }

    info!("Database installed: {install_path:?}");
    Ok(install_path)
}

/// Check that an override source carries the expected archive version.
///
/// Versions are compared by archive file name only, matching how the
/// catalog urls are laid out upstream.
fn check_source_version(url: &str, source: &str) -> Result<(), Error> {
    let expected = utils::file_name(url);
    let actual = utils::file_name(source);

    if expected != actual {
        return Err(Error::VersionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }

    Ok(())
}
