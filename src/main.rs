use page_clone::PageClone;

mod args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = args::parse_or_exit();

    ::log::info!(
        "Cloning {} into {}",
        args.website_url,
        args.output_directory.display()
    );

    let mut clone = PageClone::new(&args.website_url, &args.output_directory);

    if let Some(path) = &args.config {
        clone = match clone.with_config_file(path) {
            Ok(clone) => clone,
            Err(e) => {
                ::log::error!("Failed to load configuration: {}", e);
                println!("Error loading configuration: {}", e);
                std::process::exit(1);
            }
        };
    }

    // Command-line flags override the configuration file
    if let Some(timeout) = args.timeout {
        clone = clone.with_timeout(timeout);
    }
    if args.abort_on_transport_error {
        clone = clone.with_abort_on_transport_error(true);
    }
    if args.no_font_rule {
        clone = clone.with_font_rule(false);
    }

    let start_time = std::time::Instant::now();
    match clone.run().await {
        Ok(report) => {
            ::log::info!(
                "Run complete in {:.2} seconds: fetched={}, saved={}, failed={}, index={}",
                start_time.elapsed().as_secs_f64(),
                report.fetched,
                report.resources.saved.len(),
                report.resources.failed.len(),
                report.index_path.is_some()
            );
        }
        Err(e) => {
            ::log::error!("Run failed: {}", e);
            println!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
