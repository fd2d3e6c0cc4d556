use super::CatalogScraper;
use crate::error::ScrapeError;
use crate::model::Recipe;
use log::{info, warn};
use std::thread;
use std::time::Duration;

/// Blocks between successive recipe fetches
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Sleeps the current thread for the full delay
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl Pacer for ThreadSleep {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// What to do when a single recipe fails to fetch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole collection with the error
    #[default]
    Abort,
    /// Log the error and continue with the next link
    Skip,
}

impl CatalogScraper {
    /// Collect recipes, sleeping between successive recipe fetches
    pub fn collect(&self) -> Result<Vec<Recipe>, ScrapeError> {
        self.collect_with(&mut ThreadSleep)
    }

    /// Collect recipes using a custom pacer
    ///
    /// The catalog is fetched once, then every link is parsed in order. The
    /// pacer runs between two recipe fetches only, so `n` links produce
    /// `n - 1` pauses.
    pub fn collect_with<P>(&self, pacer: &mut P) -> Result<Vec<Recipe>, ScrapeError>
    where
        P: Pacer + ?Sized,
    {
        let links = self.fetch_recipe_links()?;
        let mut recipes = Vec::with_capacity(links.len());

        for (index, link) in links.iter().enumerate() {
            if index > 0 {
                pacer.pause(self.delay);
            }

            match self.parse_recipe(link) {
                Ok(recipe) => {
                    info!(
                        "[{}/{}] {} ({} ingredients)",
                        index + 1,
                        links.len(),
                        recipe.title,
                        recipe.ingredients.len()
                    );
                    recipes.push(recipe);
                }
                Err(err) if self.failure_policy == FailurePolicy::Skip => {
                    warn!("Skipping recipe '{}': {}", link.title, err);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(recipes)
    }
}
