//! Rust client for TheMealDB recipe catalog API
//!
//! Fetches category listings and per-meal details, dropping incomplete
//! records and turning MealDB's numbered `strIngredientN` / `strMeasureN`
//! fields back into ordered lists.
//!
//! # Example
//!
//! ```no_run
//! use mealdb_api::CatalogClient;
//!
//! # async fn example() -> Result<(), mealdb_api::CatalogError> {
//! let client = CatalogClient::new();
//!
//! let desserts = client.fetch_category("Dessert").await?;
//! for meal in &desserts {
//!     println!("{} {}", meal.id, meal.name);
//! }
//!
//! // Detail lookups never fail; a missing record is just `None`
//! if let Some(detail) = client.fetch_detail(&desserts[0].id).await {
//!     for (ingredient, measure) in detail.ingredient_pairs() {
//!         println!("{ingredient}: {measure}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /filter.php?c={category}` - Meals in a category
//! - `GET /lookup.php?i={id}` - Full meal details

mod client;
mod config;
mod error;
pub mod normalize;
mod types;

pub use client::CatalogClient;
pub use config::ClientConfig;
pub use error::{CatalogError, Result};
pub use normalize::{probe_numbered_fields, FieldSource};
pub use types::{
    complete_entries, DetailRecord, MealsResponse, RawDetailEntry, RawMealEntry, SummaryRecord,
};
