use chrono::Local;
use clap::Parser;
use infobox::{info_time, process::scrape_countries, resolve::StaticResolver, Result};

/// Reads population, GDP, HDI, currency, capital and languages from Wikipedia infoboxes.
#[derive(Debug, Parser)]
#[command(name = "infobox", version, about)]
struct Args {
    /// Country names, official or common ("Russian Federation", "France").
    #[arg(required = true)]
    countries: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let start_time = Local::now();

    let resolver = StaticResolver::default();
    for facts in scrape_countries(&args.countries, &resolver).await? {
        println!("{facts}");
    }
    info_time!(start_time, "Full program time:");

    Ok(())
}
