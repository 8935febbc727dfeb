use clap::Parser;
use distill_page::report::ScrapeReport;
use distill_page::{Scrape, persistence};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting scrape of: {}", args.url);

    // Build the scrape from the arguments
    let mut scrape = Scrape::new(&args.url);
    if let Some(config_path) = &args.config {
        scrape = match scrape.with_config_file(config_path) {
            Ok(scrape) => scrape,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", config_path.display(), e);
                std::process::exit(1);
            }
        };
    }
    if let Some(timeout) = args.timeout {
        scrape = scrape.with_timeout(timeout);
    }

    // Run it
    let start_time = std::time::Instant::now();
    let report = match scrape.run().await {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Scrape failed: {}", e);
            std::process::exit(1);
        }
    };

    ::log::info!(
        "Successfully scraped {} in {:.2} seconds",
        args.url,
        start_time.elapsed().as_secs_f64()
    );
    ::log::info!(
        "Found: {} headings, {} paragraphs, {} links",
        report.statistics.total_headings,
        report.statistics.total_paragraphs,
        report.statistics.total_links
    );

    // Persist copies if requested
    if let Some(dir) = &args.out_dir {
        if let Err(e) = persistence::save_report(&report, dir) {
            ::log::error!("Failed to save report: {}", e);
            std::process::exit(1);
        }
    }
    if let Some(path) = &args.latest {
        if let Err(e) = persistence::save_latest(&report, path) {
            ::log::error!("Failed to update latest report: {}", e);
            std::process::exit(1);
        }
    }

    print_report(&report, args.pretty);
}

/// Write the report JSON to stdout
fn print_report(report: &ScrapeReport, pretty: bool) {
    let serialized = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };

    match serialized {
        Ok(json) => println!("{}", json),
        Err(e) => {
            ::log::error!("Failed to serialize report: {}", e);
            std::process::exit(1);
        }
    }
}
