//! Pure HTML extraction for the catalog and recipe pages.
//!
//! Nothing here touches the network; the pipelines hand in parsed documents.

use scraper::ElementRef;

pub mod catalog;
pub mod recipe_page;

pub use catalog::extract_recipe_links;
pub use recipe_page::{extract_calories, extract_ingredients, parse_recipe_page, RecipePage};

/// Concatenated text of an element and its descendants, trimmed
pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
