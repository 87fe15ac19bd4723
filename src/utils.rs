use crate::config::CloneConfig;
use crate::error::{CloneError, Result};
use url::{Position, Url};

/// Scheme and authority of a page URL, e.g. `https://example.com:8080`
pub fn base_url(page_url: &str) -> Result<Url> {
    let parsed = Url::parse(page_url).map_err(|source| CloneError::InvalidUrl {
        url: page_url.to_string(),
        source,
    })?;

    // Dropping the path means relative references resolve from the site root
    let origin = &parsed[..Position::BeforePath];
    Url::parse(origin).map_err(|source| CloneError::InvalidUrl {
        url: page_url.to_string(),
        source,
    })
}

/// Resolve a reference found in the page against the base URL.
///
/// References that are already absolute are returned verbatim.
pub fn resolve_reference(base: &Url, reference: &str) -> Option<String> {
    if Url::parse(reference).is_ok() {
        return Some(reference.to_string());
    }

    match base.join(reference) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(e) => {
            ::log::debug!("Could not resolve {:?} against {}: {}", reference, base, e);
            None
        }
    }
}

/// Final segment of the URL path, without query or fragment
pub fn file_name_from_url(resource_url: &str) -> Result<String> {
    let name = match Url::parse(resource_url) {
        Ok(url) => url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string(),
        Err(_) => {
            // Fall back to plain string handling for URLs the parser rejects
            let path = resource_url
                .split(['?', '#'])
                .next()
                .unwrap_or_default();
            path.rsplit('/').next().unwrap_or_default().to_string()
        }
    };

    if name.is_empty() {
        return Err(CloneError::EmptyFileName(resource_url.to_string()));
    }
    Ok(name)
}

/// Build the HTTP client shared by every request of a run
pub fn build_client(config: &CloneConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().timeout(config.timeout());
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }
    builder.build().map_err(CloneError::Client)
}
