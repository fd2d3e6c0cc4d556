use serde::{Deserialize, Serialize};

/// A recipe anchor found on the catalog page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeLink {
    /// Trimmed anchor text
    pub title: String,
    /// Raw `href` attribute, usually root-relative
    pub href: String,
}

/// Quantity of an ingredient as displayed on the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub value: String,
    pub unit: String,
}

/// One ingredient block. Every field is empty when its element is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: Amount,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: Amount {
                value: value.into(),
                unit: unit.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    /// Absolute URL of the recipe page
    pub url: String,
    /// `None` when the page has no calorie element
    pub calories: Option<String>,
    /// In document order
    pub ingredients: Vec<Ingredient>,
}
