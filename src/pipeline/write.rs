use crate::error::{CloneError, Result};
use crate::results::Page;
use std::fs;
use std::path::{Path, PathBuf};

/// File name the fetched page is saved under
pub const INDEX_FILE: &str = "index.html";

/// Writes the page body byte for byte to `<output_dir>/index.html`.
///
/// A failed write is reported and returns `None`; the run carries on.
pub fn save_page(page: &Page, output_dir: &Path) -> Option<PathBuf> {
    let path = output_dir.join(INDEX_FILE);
    match write_body(&page.body, &path) {
        Ok(()) => {
            ::log::info!(
                "Saved {} ({} bytes) to {}",
                page.url,
                page.body.len(),
                path.display()
            );
            println!("Content saved to {}", path.display());
            Some(path)
        }
        Err(e) => {
            ::log::error!("Failed to save {}: {}", page.url, e);
            println!("Error saving content: {}", e);
            None
        }
    }
}

fn write_body(body: &[u8], path: &Path) -> Result<()> {
    fs::write(path, body).map_err(|source| CloneError::Write {
        path: path.to_path_buf(),
        source,
    })
}
