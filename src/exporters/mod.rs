//! Output formats for collected recipes.

use crate::model::{Ingredient, Recipe};

pub mod json;
pub mod xlsx;

pub use json::export_to_json;
pub use xlsx::{column_widths, export_to_spreadsheet, COLUMN_PADDING};

/// Column labels of the exported sheet
pub const HEADERS: [&str; 4] = ["Наименование", "Ссылка", "Ккал", "Ингридиенты"];

/// Separator between ingredients inside the ingredients cell
pub const INGREDIENT_SEPARATOR: &str = ", \n";

/// A recipe flattened into the four exported columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub title: String,
    pub url: String,
    pub calories: String,
    pub ingredients: String,
}

impl ExportRow {
    pub fn cells(&self) -> [&str; 4] {
        [&self.title, &self.url, &self.calories, &self.ingredients]
    }
}

impl From<&Recipe> for ExportRow {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            url: recipe.url.clone(),
            calories: recipe.calories.clone().unwrap_or_default(),
            ingredients: format_ingredients(&recipe.ingredients),
        }
    }
}

/// Join ingredients as `name: valueunit`, one per line
pub fn format_ingredients(ingredients: &[Ingredient]) -> String {
    ingredients
        .iter()
        .map(|ingredient| {
            format!(
                "{}: {}{}",
                ingredient.name, ingredient.amount.value, ingredient.amount.unit
            )
        })
        .collect::<Vec<_>>()
        .join(INGREDIENT_SEPARATOR)
}
