use std::time::Duration;

use reqwest::Url;

use crate::config::ScraperConfig;
use crate::fetchers::{Fetcher, RequestFetcher};
use crate::pipelines::{CatalogScraper, FailurePolicy};
use crate::ScrapeError;

/// Builder for configuring a [`CatalogScraper`]
///
/// Unset options fall back to [`ScraperConfig::default`].
#[derive(Default)]
pub struct CatalogScraperBuilder {
    catalog_url: Option<String>,
    site_origin: Option<String>,
    limit: Option<usize>,
    delay: Option<Duration>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    failure_policy: Option<FailurePolicy>,
    fetcher: Option<Box<dyn Fetcher>>,
}

impl CatalogScraperBuilder {
    /// Take every setting from a loaded configuration
    ///
    /// Options set afterwards override the configuration values.
    pub fn config(mut self, config: &ScraperConfig) -> Self {
        self.catalog_url = Some(config.catalog_url.clone());
        self.site_origin = Some(config.site_origin.clone());
        self.limit = Some(config.limit);
        self.delay = Some(Duration::from_millis(config.delay_ms));
        self.timeout = Some(Duration::from_secs(config.timeout));
        self.user_agent = config.user_agent.clone();
        self.failure_policy = Some(if config.skip_failed {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        });
        self
    }

    /// Set the catalog page to scrape
    pub fn catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = Some(url.into());
        self
    }

    /// Set the origin recipe hrefs are resolved against
    ///
    /// # Example
    /// ```
    /// use menu_recipes::CatalogScraper;
    ///
    /// let builder = CatalogScraper::builder()
    ///     .site_origin("https://1000.menu");
    /// ```
    pub fn site_origin(mut self, origin: impl Into<String>) -> Self {
        self.site_origin = Some(origin.into());
        self
    }

    /// Set the maximum number of recipes to collect
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the courtesy delay between recipe fetches
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// Ignored when a custom fetcher is supplied.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Send a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = Some(policy);
        self
    }

    /// Replace the HTTP fetcher, e.g. with canned pages in tests
    pub fn fetcher(mut self, fetcher: impl Fetcher + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Validate the settings and build the scraper
    ///
    /// # Errors
    /// Returns `ScrapeError` if:
    /// - the catalog URL or site origin cannot be parsed
    /// - the site origin cannot serve as a base for relative links
    /// - the HTTP client cannot be created
    pub fn build(self) -> Result<CatalogScraper, ScrapeError> {
        let defaults = ScraperConfig::default();

        let catalog_url = self.catalog_url.unwrap_or(defaults.catalog_url);
        Url::parse(&catalog_url)
            .map_err(|e| ScrapeError::InvalidUrl(format!("{catalog_url}: {e}")))?;

        let site_origin = self.site_origin.unwrap_or(defaults.site_origin);
        let site_origin = Url::parse(&site_origin)
            .map_err(|e| ScrapeError::InvalidUrl(format!("{site_origin}: {e}")))?;
        if site_origin.cannot_be_a_base() {
            return Err(ScrapeError::BuilderError(format!(
                "Site origin {site_origin} cannot resolve relative links"
            )));
        }

        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Box::new(RequestFetcher::new(
                self.timeout,
                self.user_agent.as_deref(),
            )?),
        };

        Ok(CatalogScraper {
            catalog_url,
            site_origin,
            limit: self.limit.unwrap_or(defaults.limit),
            delay: self
                .delay
                .unwrap_or(Duration::from_millis(defaults.delay_ms)),
            failure_policy: self.failure_policy.unwrap_or_default(),
            fetcher,
        })
    }
}
