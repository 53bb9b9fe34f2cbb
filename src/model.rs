use serde::Serialize;

/// Minimal recipe record shown in the result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
}

/// One `(name, measure)` pair of a recipe. The measure can be an empty
/// string; TheMealDB leaves it blank for entries like "salt to taste".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub name: String,
    pub measure: String,
}

/// Full recipe record shown in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: String,
    pub area: String,
    /// Source order, at most 20 entries.
    pub ingredients: Vec<IngredientLine>,
    pub instructions: String,
    /// Absent when the API returns no video link or an empty string.
    pub youtube: Option<String>,
}
