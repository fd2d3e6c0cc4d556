//! Basic usage of the CatalogScraper builder API
//!
//! Collects the first three recipes of the Georgian cuisine catalog,
//! prints their ingredients and writes them to a spreadsheet.

use menu_recipes::exporters::format_ingredients;
use menu_recipes::{export_to_spreadsheet, CatalogScraper};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Recipe links ===");
    let scraper = CatalogScraper::builder()
        .catalog_url("https://1000.menu/catalog/gruzinskaya-kuxnya")
        .limit(3)
        .delay(Duration::from_secs(1))
        .timeout(Duration::from_secs(20))
        .build()?;

    for link in scraper.fetch_recipe_links()? {
        println!("{} -> {}", link.title, link.href);
    }

    println!("\n=== Collected recipes ===");
    let recipes = scraper.collect()?;
    for recipe in &recipes {
        println!("{} ({} kcal)", recipe.title, recipe.calories.as_deref().unwrap_or("?"));
        println!("{}\n", format_ingredients(&recipe.ingredients));
    }

    export_to_spreadsheet(&recipes, "georgian_recipes.xlsx")?;
    println!("Saved to georgian_recipes.xlsx");

    Ok(())
}
