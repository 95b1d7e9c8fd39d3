use clap::Parser;
use color_eyre::eyre::{Report, Result};
use log::{debug, info};
use refdb::catalog::Catalog;
use refdb::cli::verbosity::Verbosity;
use refdb::cli::{Cli, UpdateConfig};
use refdb::{config, install};
use std::env;

fn setup() -> Result<(), Report> {
    color_eyre::install()?;

    // Set default logging level if RUST_LOG is not set.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", Verbosity::default().to_string())
    }

    env_logger::init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Misc setup actions like logging
    setup()?;

    // Parse CLI parameters
    let args = Cli::parse();

    let catalog = Catalog::builtin();

    // ------------------------------------------------------------------------
    // Download

    if let Some(download) = &args.download {
        let database = &download[0];
        let build = &download[1];
        let target_root = std::path::absolute(&download[2])?;
        debug!("Requested install: {database} {build} to {target_root:?}");

        let install_path = install::install(
            &catalog,
            database,
            build,
            &target_root,
            args.database_location.as_deref(),
        )
        .await?;

        if args.update_config == UpdateConfig::Yes {
            let label = catalog.label(database)?;
            let config_path = args.config.clone().unwrap_or_else(config::default_path);
            info!("Recording install location in config: {config_path:?}");
            config::update_single_item(
                &config_path,
                config::DATABASE_FOLDERS_SECTION,
                label,
                &install_path.to_string_lossy(),
            )?;
        }
    }

    // ------------------------------------------------------------------------
    // Available Databases

    if args.available || args.download.is_none() {
        println!("Available databases ( database : build = url )");
        for (database, entry) in &catalog.databases {
            for (build, url) in &entry.builds {
                println!("{database} : {build} = {url}");
            }
        }
    }

    Ok(())
}
