// Re-export modules
pub mod config;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod pipeline;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::CloneConfig;
pub use error::{CloneError, Result};
pub use parsers::{Extractor, Resource, ResourceKind, extract_resources};
pub use results::{DownloadSummary, FailedResource, Page, RunReport};

use filter::{ResourceFilter, ResourceFilterConfig};
use std::path::{Path, PathBuf};

/// Builder for cloning one page and its assets into a directory
pub struct PageClone {
    url: String,
    output_dir: PathBuf,
    config: CloneConfig,
}

impl PageClone {
    /// Create a new PageClone for the given page and output directory
    pub fn new(url: impl Into<String>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            url: url.into(),
            output_dir: output_dir.as_ref().to_path_buf(),
            config: CloneConfig::default(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: CloneConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let config = CloneConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self> {
        let config = CloneConfig::from_json(json)?;
        Ok(self.with_config(config))
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_secs = timeout_seconds;
        self
    }

    /// Stop the resource batch at the first transport error
    pub fn with_abort_on_transport_error(mut self, abort: bool) -> Self {
        self.config.abort_on_transport_error = abort;
        self
    }

    /// Enable or disable the font rule
    pub fn with_font_rule(mut self, enabled: bool) -> Self {
        self.config.include_font_rule = enabled;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &CloneConfig {
        &self.config
    }

    /// Fetch the page, download its resources, then save the page.
    ///
    /// Fetch, download and write failures are reported and recorded in the
    /// returned report. Only setup problems (bad pattern, client or output
    /// directory) are returned as errors.
    pub async fn run(self) -> Result<RunReport> {
        let filter = ResourceFilter::new(ResourceFilterConfig {
            exclude_patterns: self.config.exclude_patterns.clone(),
        })?;
        let extractor = Extractor::new(filter, self.config.include_font_rule);
        let client = utils::build_client(&self.config)?;

        let Some(page) = pipeline::fetch_page(&client, &self.url).await else {
            ::log::warn!("Nothing fetched from {}, no files written", self.url);
            return Ok(RunReport::not_fetched(&self.url));
        };
        let base = utils::base_url(&page.url)?;

        let resource_urls: Vec<String> = extractor
            .extract(&page.html(), &base)
            .into_iter()
            .map(|resource| {
                ::log::trace!("{} resource: {}", resource.kind, resource.url);
                resource.url
            })
            .collect();

        let resources = pipeline::download_resources(
            &client,
            &resource_urls,
            &self.output_dir,
            self.config.abort_on_transport_error,
        )
        .await?;

        let index_path = pipeline::save_page(&page, &self.output_dir);

        Ok(RunReport {
            url: self.url,
            fetched: true,
            resources,
            index_path,
        })
    }
}
