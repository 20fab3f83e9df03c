//! Catalog facade over the MealDB client and the shared image cache

use std::sync::Arc;

use image_cache::{CachedImage, ImageCache};
use mealdb_api::{CatalogClient, DetailRecord, SummaryRecord};
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::config::CatalogConfig;

/// Entry point for a presentation layer: lists, details and images.
///
/// Cheap to clone; clones share the client and the image cache.
#[derive(Clone)]
pub struct Catalog {
    client: Arc<CatalogClient>,
    images: Arc<ImageCache>,
    preload_thumbnails: bool,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Self {
        let client = Arc::new(CatalogClient::with_config(config.client));
        let images = Arc::new(ImageCache::new(config.images));

        Self {
            client,
            images,
            preload_thumbnails: config.preload_thumbnails,
        }
    }

    /// Build a catalog around an existing client and image cache
    pub fn with_parts(client: Arc<CatalogClient>, images: Arc<ImageCache>) -> Self {
        Self {
            client,
            images,
            preload_thumbnails: true,
        }
    }

    /// Turn thumbnail preloading after list fetches on or off
    pub fn preload_thumbnails(mut self, enabled: bool) -> Self {
        self.preload_thumbnails = enabled;
        self
    }

    pub fn client(&self) -> &Arc<CatalogClient> {
        &self.client
    }

    pub fn images(&self) -> &Arc<ImageCache> {
        &self.images
    }

    /// Fetch a summary list and start warming the image cache with its thumbnails.
    ///
    /// The list is returned without waiting for the preload.
    pub async fn fetch_list(&self, url: &str) -> mealdb_api::Result<Vec<SummaryRecord>> {
        let records = self.client.fetch_list(url).await?;
        self.spawn_preload(&records);
        Ok(records)
    }

    /// Fetch the summary list for a category, see [`Catalog::fetch_list`]
    pub async fn fetch_category(&self, category: &str) -> mealdb_api::Result<Vec<SummaryRecord>> {
        let url = self.client.category_url(category);
        self.fetch_list(&url).await
    }

    /// Fetch a meal's details; `None` when unavailable for any reason
    pub async fn fetch_detail(&self, id: &str) -> Option<DetailRecord> {
        self.client.fetch_detail(id).await
    }

    /// Load an image through the shared cache
    pub async fn image(&self, url: &str) -> image_cache::Result<Arc<CachedImage>> {
        self.images.get(url).await
    }

    fn spawn_preload(&self, records: &[SummaryRecord]) {
        if !self.preload_thumbnails || records.is_empty() {
            return;
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!("No Tokio runtime available, skipping thumbnail preload");
            return;
        };

        let urls: Vec<String> = records.iter().map(|r| r.thumbnail_url.clone()).collect();
        debug!(count = urls.len(), "Preloading thumbnails");

        let images = Arc::clone(&self.images);
        runtime.spawn(async move {
            images.preload(urls).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{meal_list, png, wait_for};
    use image_cache::ImageCacheConfig;
    use mealdb_api::ClientConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn catalog_for(server: &MockServer) -> Catalog {
        Catalog::new(CatalogConfig::with_base_url(&server.uri()))
    }

    #[tokio::test]
    async fn test_fetch_category_preloads_thumbnails() {
        let server = MockServer::start().await;
        let thumbs = [
            format!("{}/images/1.png", server.uri()),
            format!("{}/images/2.png", server.uri()),
        ];
        Mock::given(method("GET"))
            .and(path("/filter.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(meal_list(&[
                ("1", "Cake", thumbs[0].as_str()),
                ("2", "Pie", thumbs[1].as_str()),
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/images/1.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(png(2, 2)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/images/2.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(png(3, 3)))
            .expect(1)
            .mount(&server)
            .await;

        let catalog = catalog_for(&server);
        let records = catalog.fetch_category("Dessert").await.unwrap();
        assert_eq!(records.len(), 2);

        let images = catalog.images().clone();
        let urls = thumbs.clone();
        wait_for(move || urls.iter().all(|u| images.contains(u))).await;

        // Already cached, so no further request reaches the server
        let image = catalog.image(&thumbs[1]).await.unwrap();
        assert_eq!((image.width, image.height), (3, 3));
    }

    #[tokio::test]
    async fn test_preload_failure_does_not_affect_list() {
        let server = MockServer::start().await;
        let thumb = format!("{}/images/broken.png", server.uri());
        Mock::given(method("GET"))
            .and(path("/filter.php"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(meal_list(&[("1", "Cake", thumb.as_str())])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/images/broken.png"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let catalog = catalog_for(&server);
        let records = catalog.fetch_category("Dessert").await.unwrap();
        assert_eq!(records[0].id, "1");
        assert!(catalog.image(&thumb).await.is_err());
        assert!(!catalog.images().contains(&thumb));
    }

    #[tokio::test]
    async fn test_preload_disabled() {
        let server = MockServer::start().await;
        let thumb = format!("{}/images/1.png", server.uri());
        Mock::given(method("GET"))
            .and(path("/filter.php"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(meal_list(&[("1", "Cake", thumb.as_str())])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/images/1.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(png(1, 1)))
            .expect(0)
            .mount(&server)
            .await;

        let client = Arc::new(CatalogClient::with_config(ClientConfig::with_base_url(
            &server.uri(),
        )));
        let images = Arc::new(ImageCache::new(ImageCacheConfig::default()));
        let catalog = Catalog::with_parts(client, images).preload_thumbnails(false);

        let records = catalog.fetch_category("Dessert").await.unwrap();
        assert_eq!(records.len(), 1);
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert!(!catalog.images().contains(&thumb));
    }

    #[tokio::test]
    async fn test_list_error_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/filter.php"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let catalog = catalog_for(&server);
        assert!(catalog.fetch_category("Dessert").await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_detail_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lookup.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meals": [] })))
            .mount(&server)
            .await;

        let catalog = catalog_for(&server);
        assert!(catalog.fetch_detail("52767").await.is_none());
    }
}
