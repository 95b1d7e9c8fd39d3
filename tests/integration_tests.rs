use refdb::catalog::{Catalog, Database};
use refdb::config;
use refdb::error::Error;
use refdb::install;

use color_eyre::eyre::{Report, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

/// Catalog with a single toy database whose archive is built locally.
fn toy_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.databases.insert(
        "toy".to_string(),
        Database {
            label: "toy".to_string(),
            builds: BTreeMap::from([(
                "v1".to_string(),
                "https://example.com/downloads/toy-v1.tar.gz".to_string(),
            )]),
        },
    );

    catalog
}

/// Write a single-member tar.gz archive to path.
fn write_archive(path: &Path) -> Result<(), Report> {
    let content = b">toy\nACGTACGT\n";
    let encoder = GzEncoder::new(File::create(path)?, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    let mut header = tar::Header::new_gnu();
    header.set_size(content.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder.append_data(&mut header, "toy.fasta", content.as_slice())?;
    builder.into_inner()?.finish()?;

    Ok(())
}

#[tokio::test]
async fn install_from_local_archive() -> Result<(), Report> {
    let tmp_dir = tempfile::tempdir()?;
    let catalog = toy_catalog();

    // the override archive lives outside the target root, as a user copy would
    let archive = tmp_dir.path().join("toy-v1.tar.gz");
    write_archive(&archive)?;

    let target_root = tmp_dir.path().join("databases");
    let install_path = install::install(
        &catalog,
        "toy",
        "v1",
        &target_root,
        Some(archive.to_str().unwrap()),
    )
    .await?;

    assert_eq!(install_path, target_root.join("toy"));
    assert!(install_path.join("toy.fasta").is_file());

    // the user-owned archive survives, and nothing was downloaded next to it
    assert!(archive.is_file());
    assert!(!target_root.join("toy-v1.tar.gz").exists());

    // reinstalling into the same root is fine
    let reinstall_path = install::install(
        &catalog,
        "toy",
        "v1",
        &target_root,
        Some(archive.to_str().unwrap()),
    )
    .await?;
    assert_eq!(reinstall_path, install_path);

    Ok(())
}

#[tokio::test]
async fn install_unknown_database() -> Result<(), Report> {
    let tmp_dir = tempfile::tempdir()?;
    let target_root = tmp_dir.path().join("databases");

    let result = install::install(
        &Catalog::builtin(),
        "plasmid",
        "plasmidBowtie2Index",
        &target_root,
        None,
    )
    .await;

    let report = result.unwrap_err();
    assert!(matches!(
        report.downcast_ref::<Error>(),
        Some(Error::UnknownDatabase { .. })
    ));

    // nothing was created
    assert!(!target_root.exists());

    Ok(())
}

#[tokio::test]
async fn install_unknown_build() -> Result<(), Report> {
    let tmp_dir = tempfile::tempdir()?;
    let target_root = tmp_dir.path().join("databases");

    let result =
        install::install(&Catalog::builtin(), "human", "GRCh37Bt2", &target_root, None)
            .await;

    let report = result.unwrap_err();
    assert!(matches!(
        report.downcast_ref::<Error>(),
        Some(Error::UnknownBuild { .. })
    ));
    assert!(!target_root.exists());

    Ok(())
}

#[tokio::test]
async fn install_placeholder_build() -> Result<(), Report> {
    let tmp_dir = tempfile::tempdir()?;
    let target_root = tmp_dir.path().join("databases");

    // listed in the catalog, but with no downloadable source yet
    let result = install::install(
        &Catalog::builtin(),
        "human",
        "T2T-CHM13Bt2",
        &target_root,
        None,
    )
    .await;

    let report = result.unwrap_err();
    assert!(matches!(
        report.downcast_ref::<Error>(),
        Some(Error::UnknownBuild { .. })
    ));
    assert!(!target_root.exists());

    Ok(())
}

#[tokio::test]
async fn install_version_mismatch() -> Result<(), Report> {
    let tmp_dir = tempfile::tempdir()?;
    let catalog = toy_catalog();

    let archive = tmp_dir.path().join("toy-v2.tar.gz");
    write_archive(&archive)?;

    let target_root = tmp_dir.path().join("databases");
    let result = install::install(
        &catalog,
        "toy",
        "v1",
        &target_root,
        Some(archive.to_str().unwrap()),
    )
    .await;

    let report = result.unwrap_err();
    assert!(matches!(
        report.downcast_ref::<Error>(),
        Some(Error::VersionMismatch { .. })
    ));

    // the mismatch was caught before any fetch or extraction
    assert!(!target_root.join("toy").join("toy.fasta").exists());
    assert!(!target_root.join("toy-v1.tar.gz").exists());

    Ok(())
}

#[tokio::test]
async fn install_records_config_location() -> Result<(), Report> {
    let tmp_dir = tempfile::tempdir()?;
    let catalog = toy_catalog();

    let archive = tmp_dir.path().join("toy-v1.tar.gz");
    write_archive(&archive)?;

    let target_root = tmp_dir.path().join("databases");
    let install_path = install::install(
        &catalog,
        "toy",
        "v1",
        &target_root,
        Some(archive.to_str().unwrap()),
    )
    .await?;

    // record the install location, as the binary does with --update-config yes
    let config_path = tmp_dir.path().join("config.json");
    let label = catalog.label("toy")?;
    config::update_single_item(
        &config_path,
        config::DATABASE_FOLDERS_SECTION,
        label,
        &install_path.to_string_lossy(),
    )?;

    let config = config::Config::read(&config_path)?;
    assert_eq!(
        config.get(config::DATABASE_FOLDERS_SECTION, "toy"),
        Some(install_path.to_string_lossy().as_ref())
    );

    Ok(())
}
