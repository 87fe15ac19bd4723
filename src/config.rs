use crate::error::{CloneError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Configuration for a single clone run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloneConfig {
    /// Timeout in seconds applied to every request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request (client default when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Stop the resource batch at the first transport error instead of
    /// moving on to the next resource
    #[serde(default)]
    pub abort_on_transport_error: bool,

    /// Whether the font rule runs after the stylesheet rule.
    /// Font stylesheets are listed twice when enabled.
    #[serde(default = "default_include_font_rule")]
    pub include_font_rule: bool,

    /// Regex patterns for resource URLs to skip
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            abort_on_transport_error: false,
            include_font_rule: default_include_font_rule(),
            exclude_patterns: Vec::new(),
        }
    }
}

/// Default value for timeout_secs
fn default_timeout_secs() -> u64 {
    30
}

/// Default value for include_font_rule
fn default_include_font_rule() -> bool {
    true
}

impl CloneConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let read_err = |source| CloneError::ConfigRead {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(read_err)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(read_err)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
