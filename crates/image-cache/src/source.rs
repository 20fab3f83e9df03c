//! Where image payloads come from on a cache miss

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{ImageLoadError, Result};
use crate::types::ImageCacheConfig;

/// Fetches raw image bytes for a URL
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Plain HTTP GET image source
pub struct HttpImageSource {
    client: Client,
}

impl HttpImageSource {
    pub fn new(config: &ImageCacheConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpImageSource {
    fn default() -> Self {
        Self::new(&ImageCacheConfig::default())
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url = %url, "Fetching image");

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), url = %url, "Failed to fetch image");
            return Err(ImageLoadError::Status(response.status()));
        }

        let data = response.bytes().await?.to_vec();
        debug!(url = %url, size = data.len(), "Fetched image");

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/images/cake.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
            .mount(&server)
            .await;

        let source = HttpImageSource::default();
        let bytes = source
            .fetch(&format!("{}/images/cake.jpg", server.uri()))
            .await
            .unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_fetch_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = HttpImageSource::default();
        let err = source
            .fetch(&format!("{}/missing.png", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ImageLoadError::Status(status) if status == reqwest::StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn test_fetch_network_error() {
        let source = HttpImageSource::default();
        let err = source.fetch("http://127.0.0.1:1/x.png").await.unwrap_err();
        assert!(matches!(err, ImageLoadError::Http(_)));
    }
}
