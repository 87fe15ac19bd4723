pub mod download;
pub mod fetch;
pub mod write;


pub use download::{download_resources, prepare_output_dir};
pub use fetch::fetch_page;
pub use write::save_page;
