use super::element_text;
use crate::error::ScrapeError;
use crate::model::RecipeLink;
use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Recipe anchors on a catalog page carry the `h5` class
static RECIPE_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.h5").unwrap());

/// Return the first `limit` recipe links of a catalog page in document order
///
/// Only the retained anchors are validated: a missing `href` past the
/// limit is never looked at. An anchor without text keeps an empty title.
pub fn extract_recipe_links(document: &Html, limit: usize) -> Result<Vec<RecipeLink>, ScrapeError> {
    let links = document
        .select(&RECIPE_LINK)
        .take(limit)
        .map(link_from_anchor)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Found {} recipe links (limit {})", links.len(), limit);
    Ok(links)
}

fn link_from_anchor(anchor: ElementRef) -> Result<RecipeLink, ScrapeError> {
    let title = element_text(anchor);

    let href = anchor
        .value()
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .ok_or_else(|| ScrapeError::ParseError(format!("Recipe link '{title}' has no href")))?;

    if title.is_empty() {
        warn!("Recipe link {} has no title text", href);
    }

    Ok(RecipeLink {
        title,
        href: href.to_string(),
    })
}
