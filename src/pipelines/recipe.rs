use super::CatalogScraper;
use crate::error::ScrapeError;
use crate::extractors::parse_recipe_page;
use crate::model::{Recipe, RecipeLink};
use log::debug;
use reqwest::Url;
use scraper::Html;

impl CatalogScraper {
    /// Fetch one recipe page and extract its calories and ingredients
    ///
    /// Missing ingredient fields and a missing calorie element are not
    /// errors; only network and status failures are.
    pub fn parse_recipe(&self, link: &RecipeLink) -> Result<Recipe, ScrapeError> {
        let url = resolve_recipe_url(&self.site_origin, &link.href)?;
        let html = self.fetcher.fetch(&url)?;
        let document = Html::parse_document(&html);
        let page = parse_recipe_page(&document);

        debug!("Parsed recipe '{}' from {}", link.title, url);

        Ok(Recipe {
            title: link.title.clone(),
            url,
            calories: page.calories,
            ingredients: page.ingredients,
        })
    }
}

/// Resolve a catalog href against the site origin
///
/// Root-relative paths produce `origin + href` for a bare origin; any path
/// on the origin is replaced. Absolute hrefs are kept.
pub fn resolve_recipe_url(origin: &Url, href: &str) -> Result<String, ScrapeError> {
    origin
        .join(href)
        .map(String::from)
        .map_err(|e| ScrapeError::InvalidUrl(format!("{href}: {e}")))
}
