use image_cache::ImageCacheConfig;
use mealdb_api::ClientConfig;

/// Settings for a [`Catalog`](crate::Catalog)
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub client: ClientConfig,
    pub images: ImageCacheConfig,
    /// Warm the image cache with every thumbnail of a freshly fetched list
    pub preload_thumbnails: bool,
}

impl CatalogConfig {
    /// Default settings pointed at a different MealDB API root
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: ClientConfig::with_base_url(base_url),
            ..Self::default()
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            images: ImageCacheConfig::default(),
            preload_thumbnails: true,
        }
    }
}
