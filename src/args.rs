use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: page-clone <website_url> <output_directory>";

#[derive(Parser, Debug)]
#[command(name = "page-clone")]
#[command(about = "Saves a web page and its stylesheets, scripts, images and fonts to a directory")]
#[command(version)]
pub struct Args {
    /// URL of the page to copy
    pub website_url: String,

    /// Directory the page and its resources are written to
    pub output_directory: PathBuf,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (overrides the configuration file)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Stop downloading resources after the first network error
    #[arg(long)]
    pub abort_on_transport_error: bool,

    /// Do not list font stylesheets a second time
    #[arg(long)]
    pub no_font_rule: bool,
}

/// Parse the command line, exiting with status 1 and the usage line on
/// any argument error. Help and version requests exit normally.
pub fn parse_or_exit() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            ::log::debug!("Argument error: {}", e);
            println!("{}", USAGE);
            std::process::exit(1);
        }
    }
}
