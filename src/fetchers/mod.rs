use crate::error::ScrapeError;

mod request;

pub use request::RequestFetcher;

/// Retrieves the body of a page.
///
/// The pipelines only talk to the network through this trait so the
/// whole collection can run against canned pages.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}
