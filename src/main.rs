use clap::Parser;
use log::info;
use menu_recipes::{export_to_json, export_to_spreadsheet, CatalogScraper, ScraperConfig};

#[derive(Parser)]
#[command(name = "menu-recipes")]
#[command(about = "Collect recipes from a 1000.menu catalog into a spreadsheet", long_about = None)]
struct Cli {
    /// Catalog page listing the recipes
    #[arg(long)]
    catalog_url: Option<String>,

    /// Maximum number of recipes to collect
    #[arg(short, long)]
    limit: Option<usize>,

    /// Spreadsheet output path
    #[arg(short, long)]
    output: Option<String>,

    /// Also dump the recipes as JSON to this path
    #[arg(long)]
    json: Option<String>,

    /// Delay between recipe fetches in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Skip recipes that fail to fetch instead of aborting
    #[arg(long)]
    skip_failed: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = ScraperConfig::load()?;
    if let Some(catalog_url) = cli.catalog_url {
        config.catalog_url = catalog_url;
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(json) = cli.json {
        config.json_output = Some(json);
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.delay_ms = delay_ms;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = timeout;
    }
    config.skip_failed |= cli.skip_failed;

    let scraper = CatalogScraper::builder()
        .config(&config)
        .build()?;

    // Nothing is written unless the whole collection succeeded
    let recipes = scraper.collect()?;
    info!("Collected {} recipes", recipes.len());

    export_to_spreadsheet(&recipes, &config.output)?;
    if let Some(json_output) = &config.json_output {
        export_to_json(&recipes, json_output)?;
    }

    Ok(())
}
