pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod render;

pub use api::{MealDatabase, MealDbClient};
pub use app::{App, SearchTicket, ViewState};
pub use config::AppConfig;
pub use error::ApiError;
pub use model::{IngredientLine, MealDetail, MealSummary};

/// One-shot ingredient search using the ambient configuration.
///
/// Builds a fresh client per call; use [`MealDbClient`] directly when
/// making repeated requests.
pub async fn search_by_ingredient(ingredient: &str) -> Result<Vec<MealSummary>, ApiError> {
    let client = MealDbClient::new(&AppConfig::load()?)?;
    client.filter_by_ingredient(ingredient).await
}

/// One-shot lookup of a meal's full record by id.
pub async fn fetch_meal(id: &str) -> Result<MealDetail, ApiError> {
    let client = MealDbClient::new(&AppConfig::load()?)?;
    client.lookup(id).await
}
