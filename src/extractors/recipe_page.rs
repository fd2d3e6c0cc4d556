use super::element_text;
use crate::model::Ingredient;
use log::debug;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static INGREDIENT_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.ingredient.list-item").unwrap());
static INGREDIENT_NAME: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.name").unwrap());
static INGREDIENT_VALUE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.squant.value").unwrap());
static UNIT_SELECT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("select.recalc_s_num").unwrap());
static OPTION: LazyLock<Selector> = LazyLock::new(|| Selector::parse("option").unwrap());
static CALORIES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span#nutr_kcal").unwrap());

/// Data extracted from one recipe page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePage {
    pub calories: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

pub fn parse_recipe_page(document: &Html) -> RecipePage {
    let ingredients = extract_ingredients(document);
    let calories = extract_calories(document);

    debug!(
        "Extracted {} ingredients, calories: {:?}",
        ingredients.len(),
        calories
    );

    RecipePage {
        calories,
        ingredients,
    }
}

/// Every ingredient block in document order.
///
/// A block is never dropped: missing name, quantity or unit elements
/// leave the corresponding field empty.
pub fn extract_ingredients(document: &Html) -> Vec<Ingredient> {
    document
        .select(&INGREDIENT_BLOCK)
        .map(|block| {
            let name = first_text(block, &INGREDIENT_NAME);
            let value = first_text(block, &INGREDIENT_VALUE);
            let unit = block
                .select(&UNIT_SELECT)
                .next()
                .map(|select| {
                    selected_label(select.select(&OPTION).map(|option| {
                        (
                            element_text(option),
                            option.value().attr("selected").is_some(),
                        )
                    }))
                })
                .unwrap_or_default();

            Ingredient::new(name, value, unit)
        })
        .collect()
}

pub fn extract_calories(document: &Html) -> Option<String> {
    document.select(&CALORIES).next().map(element_text)
}

/// Label of the first alternative flagged as selected, or an empty string
pub fn selected_label<I, S>(options: I) -> String
where
    I: IntoIterator<Item = (S, bool)>,
    S: Into<String>,
{
    options
        .into_iter()
        .find(|(_, selected)| *selected)
        .map(|(label, _)| label.into())
        .unwrap_or_default()
}

fn first_text(root: ElementRef, selector: &Selector) -> String {
    root.select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}
