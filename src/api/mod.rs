use crate::error::ApiError;
use crate::model::{MealDetail, MealSummary};
use async_trait::async_trait;

mod client;
mod wire;

pub use client::MealDbClient;

/// Read-only view of a meal database.
///
/// The controller talks to this seam so tests can script responses
/// without a network.
#[async_trait]
pub trait MealDatabase: Send + Sync {
    /// List the meals that use the given ingredient.
    ///
    /// An empty list is a successful "no matches" answer, not an error.
    async fn filter_by_ingredient(&self, ingredient: &str)
        -> Result<Vec<MealSummary>, ApiError>;

    /// Fetch the full record of one meal by id.
    async fn lookup(&self, id: &str) -> Result<MealDetail, ApiError>;
}
