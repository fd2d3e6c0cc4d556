//! The three sequential stages of a run: catalog links, recipe pages,
//! and the paced collection loop driving both.

use crate::builder::CatalogScraperBuilder;
use crate::fetchers::Fetcher;
use reqwest::Url;
use std::time::Duration;

pub mod catalog;
pub mod collect;
pub mod recipe;

pub use collect::{FailurePolicy, Pacer, ThreadSleep};
pub use recipe::resolve_recipe_url;

/// A configured scraper for one catalog page.
///
/// Built through [`CatalogScraper::builder`].
pub struct CatalogScraper {
    pub(crate) catalog_url: String,
    pub(crate) site_origin: Url,
    pub(crate) limit: usize,
    pub(crate) delay: Duration,
    pub(crate) failure_policy: FailurePolicy,
    pub(crate) fetcher: Box<dyn Fetcher>,
}

impl CatalogScraper {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use menu_recipes::CatalogScraper;
    ///
    /// let builder = CatalogScraper::builder()
    ///     .catalog_url("https://1000.menu/catalog/gruzinskaya-kuxnya")
    ///     .limit(3);
    /// ```
    pub fn builder() -> CatalogScraperBuilder {
        CatalogScraperBuilder::default()
    }

    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    pub fn site_origin(&self) -> &Url {
        &self.site_origin
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }
}
