pub mod builder;
pub mod config;
pub mod error;
pub mod exporters;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod pipelines;

pub use builder::CatalogScraperBuilder;
pub use config::{load_config, ScraperConfig};
pub use error::ScrapeError;
pub use exporters::{export_to_json, export_to_spreadsheet, ExportRow};
pub use fetchers::{Fetcher, RequestFetcher};
pub use model::{Amount, Ingredient, Recipe, RecipeLink};
pub use pipelines::{CatalogScraper, FailurePolicy, Pacer, ThreadSleep};

/// Fetch up to `limit` recipe links from a catalog page
///
/// # Example
/// ```no_run
/// let links = menu_recipes::fetch_recipe_links(
///     "https://1000.menu/catalog/gruzinskaya-kuxnya",
///     3,
/// )?;
/// # Ok::<(), menu_recipes::ScrapeError>(())
/// ```
pub fn fetch_recipe_links(catalog_url: &str, limit: usize) -> Result<Vec<RecipeLink>, ScrapeError> {
    CatalogScraper::builder()
        .catalog_url(catalog_url)
        .limit(limit)
        .build()?
        .fetch_recipe_links()
}

/// Fetch and parse a single recipe page from the default site
pub fn parse_recipe(link: &RecipeLink) -> Result<Recipe, ScrapeError> {
    CatalogScraper::builder().build()?.parse_recipe(link)
}

/// Collect up to `limit` recipes from a catalog page with the default courtesy delay
pub fn collect_recipes(catalog_url: &str, limit: usize) -> Result<Vec<Recipe>, ScrapeError> {
    CatalogScraper::builder()
        .catalog_url(catalog_url)
        .limit(limit)
        .build()?
        .collect()
}
