use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for page-clone operations
pub type Result<T> = std::result::Result<T, CloneError>;

/// Errors raised while cloning a page
#[derive(Debug, Error)]
pub enum CloneError {
    /// The page or a resource could not be fetched (transport error or HTTP status)
    #[error("{url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The URL given on the command line could not be parsed
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The output directory could not be created
    #[error("could not create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page or resource file could not be written
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource URL has no final path segment to name a file after
    #[error("no file name in resource URL {0}")]
    EmptyFileName(String),

    /// The HTTP client could not be built
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The configuration file could not be read
    #[error("could not read configuration {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration could not be parsed
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// An exclude pattern is not a valid regular expression
    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] regex::Error),
}
