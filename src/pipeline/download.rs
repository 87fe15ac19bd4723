use crate::error::{CloneError, Result};
use crate::results::DownloadSummary;
use crate::utils::file_name_from_url;
use reqwest::{Client, StatusCode};
use std::fs;
use std::path::{Path, PathBuf};

/// Creates the output directory and any missing parents
pub fn prepare_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|source| CloneError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })
}

/// Outcome of a single resource download
enum Outcome {
    Saved(PathBuf),
    /// Server answered with something other than 200
    Rejected(StatusCode),
}

/// Downloads each resource in order and saves it under its file name.
///
/// Only a 200 response is saved. Files with the same name overwrite each
/// other, so the last resource in the list wins. A transport error skips
/// just that resource unless `abort_on_transport_error` is set, in which
/// case the rest of the batch is abandoned.
pub async fn download_resources(
    client: &Client,
    resource_urls: &[String],
    output_dir: &Path,
    abort_on_transport_error: bool,
) -> Result<DownloadSummary> {
    prepare_output_dir(output_dir)?;

    let mut summary = DownloadSummary::default();
    ::log::info!(
        "Downloading {} resources into {}",
        resource_urls.len(),
        output_dir.display()
    );

    for url in resource_urls {
        match download_one(client, url, output_dir).await {
            Ok(Outcome::Saved(path)) => {
                println!("Resource saved: {}", path.display());
                summary.saved.push(path);
            }
            Ok(Outcome::Rejected(status)) => {
                ::log::warn!("Resource {} returned {}", url, status);
                println!("Failed to download resource: {}", url);
                summary.fail(url, format!("HTTP {}", status));
            }
            Err(e @ CloneError::Fetch { .. }) => {
                ::log::error!("Transport error for {}: {}", url, e);
                println!("Error fetching resource: {}", e);
                summary.fail(url, e.to_string());
                if abort_on_transport_error {
                    ::log::warn!("Abandoning remaining resources after transport error");
                    summary.aborted = true;
                    break;
                }
            }
            Err(e) => {
                ::log::error!("Could not save {}: {}", url, e);
                println!("Failed to save resource {}: {}", url, e);
                summary.fail(url, e.to_string());
            }
        }
    }

    ::log::info!(
        "Saved {} resources, {} failed",
        summary.saved.len(),
        summary.failed.len()
    );
    Ok(summary)
}

async fn download_one(client: &Client, url: &str, output_dir: &Path) -> Result<Outcome> {
    let path = output_dir.join(file_name_from_url(url)?);

    ::log::debug!("GET {}", url);
    let fetch_err = |source| CloneError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(fetch_err)?;
    let status = response.status();
    if status != StatusCode::OK {
        return Ok(Outcome::Rejected(status));
    }

    let bytes = response.bytes().await.map_err(fetch_err)?;

    fs::write(&path, &bytes).map_err(|source| CloneError::Write {
        path: path.clone(),
        source,
    })?;
    ::log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());

    Ok(Outcome::Saved(path))
}
