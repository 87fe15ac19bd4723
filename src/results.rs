use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::PathBuf;

/// A fetched page with its URL and raw HTML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// URL the page was fetched from
    pub url: String,

    /// Raw body bytes, exactly as received
    pub body: Vec<u8>,
}

impl Page {
    /// Create a new page instance
    pub fn new(url: String, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url,
            body: body.into(),
        }
    }

    /// Body as text for parsing. Invalid UTF-8 becomes U+FFFD here only;
    /// `body` keeps the original bytes.
    pub fn html(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// A resource that was not saved, with the reason
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedResource {
    pub url: String,
    pub reason: String,
}

/// Outcome of downloading a batch of resources
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadSummary {
    /// Files written, in download order (a path repeats if it was overwritten)
    pub saved: Vec<PathBuf>,

    /// Resources that were attempted and not saved
    pub failed: Vec<FailedResource>,

    /// True when a transport error stopped the batch early
    pub aborted: bool,
}

impl DownloadSummary {
    pub(crate) fn fail(&mut self, url: &str, reason: impl Into<String>) {
        self.failed.push(FailedResource {
            url: url.to_string(),
            reason: reason.into(),
        });
    }
}

/// Summary of one full run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// URL of the page being cloned
    pub url: String,

    /// Whether the page itself was fetched
    pub fetched: bool,

    /// Resource download outcome (empty when the fetch failed)
    pub resources: DownloadSummary,

    /// Path of index.html if it was written
    pub index_path: Option<PathBuf>,
}

impl RunReport {
    /// Report for a run whose page fetch failed
    pub fn not_fetched(url: &str) -> Self {
        Self {
            url: url.to_string(),
            fetched: false,
            resources: DownloadSummary::default(),
            index_path: None,
        }
    }
}
