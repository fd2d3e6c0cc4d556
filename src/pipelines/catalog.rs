use super::CatalogScraper;
use crate::error::ScrapeError;
use crate::extractors::extract_recipe_links;
use crate::model::RecipeLink;
use log::info;
use scraper::Html;

impl CatalogScraper {
    /// Fetch the catalog page and return at most `limit` recipe links in document order
    ///
    /// # Errors
    /// Returns `ScrapeError` if the request fails, the server answers with a
    /// non-success status, or a retained link has no title or href.
    pub fn fetch_recipe_links(&self) -> Result<Vec<RecipeLink>, ScrapeError> {
        info!("Fetching catalog {}", self.catalog_url);
        let html = self.fetcher.fetch(&self.catalog_url)?;
        let document = Html::parse_document(&html);

        extract_recipe_links(&document, self.limit)
    }
}
