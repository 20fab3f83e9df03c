//! Recipe catalog data access
//!
//! Ties the MealDB client and the in-memory image cache together for a
//! presentation layer:
//!
//! - [`Catalog`] fetches lists and details, and warms the image cache with the
//!   thumbnails of every list it returns.
//! - [`CatalogDispatcher`] runs requests in the background and hands each
//!   result to a single event receiver.
//!
//! # Example
//!
//! ```no_run
//! use recipe_catalog::{Catalog, CatalogConfig, CatalogDispatcher, CatalogEvent};
//!
//! # async fn example() {
//! let catalog = Catalog::new(CatalogConfig::default());
//! let (dispatcher, mut events) = CatalogDispatcher::new(catalog, 64);
//!
//! dispatcher.request_category("Dessert");
//! while let Some(event) = events.recv().await {
//!     match event {
//!         CatalogEvent::ListLoaded { records, .. } => {
//!             for meal in &records {
//!                 dispatcher.request_image(&meal.thumbnail_url);
//!             }
//!         }
//!         CatalogEvent::ListFailed { error, .. } => eprintln!("{error}"),
//!         _ => {}
//!     }
//! }
//! # }
//! ```

mod catalog;
mod config;
mod dispatcher;
#[cfg(test)]
mod test_support;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use dispatcher::{CatalogDispatcher, CatalogEvent};

pub use image_cache::{CachedImage, ImageCache, ImageCacheConfig, ImageLoadError};
pub use mealdb_api::{CatalogClient, CatalogError, ClientConfig, DetailRecord, SummaryRecord};
