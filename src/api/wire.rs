//! Wire format of TheMealDB JSON API.
//!
//! Both endpoints wrap their payload in a `{ "meals": [...] | null }`
//! envelope. Field values are strings or null throughout; the detail
//! record spreads its ingredient list over twenty indexed field pairs
//! (`strIngredient1..20` / `strMeasure1..20`).

use crate::model::{IngredientLine, MealDetail, MealSummary};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Upper bound on indexed ingredient fields in a detail record.
const MAX_INGREDIENT_SLOTS: usize = 20;

/// Envelope of `filter.php?i={ingredient}`. `meals` is null when the
/// ingredient matches nothing.
#[derive(Debug, Deserialize)]
pub struct FilterResponse {
    pub meals: Option<Vec<MealSummaryWire>>,
}

#[derive(Debug, Deserialize)]
pub struct MealSummaryWire {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
}

impl From<MealSummaryWire> for MealSummary {
    fn from(wire: MealSummaryWire) -> Self {
        MealSummary {
            id: wire.id,
            name: wire.name,
            thumbnail: wire.thumbnail.unwrap_or_default(),
        }
    }
}

/// Envelope of `lookup.php?i={id}`.
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    pub meals: Option<Vec<MealDetailWire>>,
}

#[derive(Debug, Deserialize)]
pub struct MealDetailWire {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    /// Catches the indexed `strIngredientN` / `strMeasureN` fields.
    #[serde(flatten)]
    indexed: HashMap<String, Value>,
}

impl MealDetailWire {
    /// Assemble the ingredient list from the indexed field pairs,
    /// preserving slot order and skipping slots with a blank name.
    fn ingredient_lines(&self) -> Vec<IngredientLine> {
        let mut lines = Vec::new();
        for i in 1..=MAX_INGREDIENT_SLOTS {
            let name = match self.field_text(&format!("strIngredient{}", i)) {
                Some(name) => name,
                None => continue,
            };
            let measure = self
                .field_text(&format!("strMeasure{}", i))
                .unwrap_or_default();
            lines.push(IngredientLine { name, measure });
        }
        lines
    }

    /// Non-blank string value of an indexed field, if any.
    fn field_text(&self, key: &str) -> Option<String> {
        self.indexed
            .get(key)
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string)
    }
}

impl From<MealDetailWire> for MealDetail {
    fn from(wire: MealDetailWire) -> Self {
        let ingredients = wire.ingredient_lines();
        MealDetail {
            id: wire.id,
            name: wire.name,
            thumbnail: wire.thumbnail.unwrap_or_default(),
            category: wire.category.unwrap_or_default(),
            area: wire.area.unwrap_or_default(),
            ingredients,
            instructions: wire.instructions.unwrap_or_default(),
            youtube: wire.youtube.filter(|url| !url.trim().is_empty()),
        }
    }
}
