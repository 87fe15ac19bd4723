use crate::error::{CloneError, Result};
use crate::results::Page;
use reqwest::Client;

/// Fetches the page to clone.
///
/// Returns `None` after reporting the error when the request fails or the
/// server answers with a 4xx/5xx status. An empty body also yields `None`.
/// Callers abort the run in either case.
pub async fn fetch_page(client: &Client, url: &str) -> Option<Page> {
    ::log::info!("Fetching page: {}", url);
    let start = std::time::Instant::now();

    match get_body(client, url).await {
        Ok(body) if body.is_empty() => {
            ::log::warn!("Page {} has an empty body", url);
            None
        }
        Ok(body) => {
            ::log::debug!(
                "Fetched {} bytes from {} in {:.2} seconds",
                body.len(),
                url,
                start.elapsed().as_secs_f64()
            );
            Some(Page::new(url.to_string(), body))
        }
        Err(e) => {
            ::log::error!("Failed to fetch {}: {}", url, e);
            println!("Error fetching website content: {}", e);
            None
        }
    }
}

async fn get_body(client: &Client, url: &str) -> Result<Vec<u8>> {
    let fetch_err = |source| CloneError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(fetch_err)?;

    let bytes = response.bytes().await.map_err(fetch_err)?;
    Ok(bytes.to_vec())
}
