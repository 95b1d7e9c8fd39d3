use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use flate2::read::GzDecoder;
use indicatif::{style::ProgressStyle, ProgressBar};
use log::{debug, info};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tar::Archive;

/// Last path segment of a url or filesystem path.
pub fn file_name(source: &str) -> &str {
    source.rsplit('/').next().unwrap_or(source)
}

/// Download file from url to path, with a byte progress bar.
pub async fn download_file(url: &str, output_path: &Path) -> Result<(), Report> {
    debug!("Downloading file: {url} to {output_path:?}");

    let mut response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(eyre!(
            "Unable to download file: {url}\nStatus code {}.",
            response.status()
        ));
    }

    let progress_bar_style =
        ProgressStyle::with_template("{bar:40} {bytes}/{total_bytes} ({bytes_per_sec}) | Elapsed: {elapsed_precise}")
            .wrap_err("Failed to create progress bar from template.")?;
    let progress_bar = ProgressBar::new(response.content_length().unwrap_or(0));
    progress_bar.set_style(progress_bar_style);

    let mut file = File::create(output_path)
        .wrap_err_with(|| eyre!("Unable to create file: {output_path:?}"))?;

    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk)
            .wrap_err_with(|| eyre!("Unable to write file: {output_path:?}"))?;
        progress_bar.inc(chunk.len() as u64);
    }
    progress_bar.finish_and_clear();

    Ok(())
}

/// Unpack a gzip compressed tar archive into the output directory.
pub fn extract_archive(archive_path: &Path, output_dir: &Path) -> Result<(), Report> {
    info!("Extracting archive: {archive_path:?} to {output_dir:?}");

    let file = File::open(archive_path)
        .wrap_err_with(|| eyre!("Unable to open archive: {archive_path:?}"))?;
    let mut archive = Archive::new(GzDecoder::new(file));
    archive
        .unpack(output_dir)
        .wrap_err_with(|| eyre!("Unable to extract archive: {archive_path:?}"))?;

    Ok(())
}

/// Fetch a database archive from a local path or remote url and extract it.
///
/// A source that exists on the local filesystem is extracted in place and
/// never copied to downloaded_file. Anything else is treated as a url and
/// downloaded to downloaded_file first.
pub async fn download_and_extract(
    source: &str,
    downloaded_file: &Path,
    output_dir: &Path,
) -> Result<(), Report> {
    let local_source = Path::new(source);

    if local_source.is_file() {
        info!("Using local archive: {source}");
        extract_archive(local_source, output_dir)?;
    } else {
        info!("Downloading archive: {source}");
        download_file(source, downloaded_file).await?;
        extract_archive(downloaded_file, output_dir)?;
    }

    Ok(())
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
