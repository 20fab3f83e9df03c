//! In-memory image cache with coalesced fetches

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use moka::future::Cache;
use tracing::{debug, info, warn};

use crate::error::{ImageLoadError, Result};
use crate::source::{HttpImageSource, ImageSource};
use crate::types::{CacheStats, CachedImage, ImageCacheConfig, PreloadOutcome};

/// Maps image URLs to decoded images.
///
/// Construct one per process and share it; clones are cheap and see the same
/// entries. Concurrent misses on one URL share a single fetch, and failures
/// are never cached.
#[derive(Clone)]
pub struct ImageCache {
    images: Cache<String, Arc<CachedImage>>,
    source: Arc<dyn ImageSource>,
    preload_concurrency: usize,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
    fetches: Arc<AtomicU64>,
}

impl ImageCache {
    /// Create a cache that fetches over HTTP
    pub fn new(config: ImageCacheConfig) -> Self {
        let source = Arc::new(HttpImageSource::new(&config));
        Self::with_source(config, source)
    }

    /// Create a cache backed by a custom image source
    pub fn with_source(config: ImageCacheConfig, source: Arc<dyn ImageSource>) -> Self {
        let images = Cache::builder()
            .max_capacity(config.max_bytes)
            .weigher(|_url: &String, image: &Arc<CachedImage>| image.weight())
            .build();

        Self {
            images,
            source,
            preload_concurrency: config.preload_concurrency.max(1),
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
            fetches: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get an image, fetching and decoding it on a miss
    pub async fn get(&self, url: &str) -> Result<Arc<CachedImage>> {
        if let Some(image) = self.images.get(url).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(url = %url, "Image cache hit");
            return Ok(image);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);

        // Concurrent callers for the same key wait on this one initializer
        self.images
            .try_get_with(url.to_string(), async {
                self.fetches.fetch_add(1, Ordering::Relaxed);
                let bytes = self.source.fetch(url).await?;
                let image = CachedImage::decode(bytes)?;
                debug!(
                    url = %url,
                    format = ?image.format,
                    width = image.width,
                    height = image.height,
                    "Cached image"
                );
                Ok::<_, ImageLoadError>(Arc::new(image))
            })
            .await
            .map_err(|err| {
                warn!(url = %url, error = %err, "Failed to load image");
                err.as_ref().clone()
            })
    }

    /// Decode `bytes` and store them under `url`, replacing any existing entry
    pub async fn put(&self, url: &str, bytes: Vec<u8>) -> Result<()> {
        let image = CachedImage::decode(bytes)?;
        self.put_image(url, Arc::new(image)).await;
        Ok(())
    }

    /// Store an already decoded image under `url`
    pub async fn put_image(&self, url: &str, image: Arc<CachedImage>) {
        self.images.insert(url.to_string(), image).await;
    }

    /// Whether `url` is currently cached
    pub fn contains(&self, url: &str) -> bool {
        self.images.contains_key(url)
    }

    /// Fetch every uncached URL, a few at a time.
    ///
    /// Failures are logged and counted, never returned.
    pub async fn preload<I>(&self, urls: I) -> PreloadOutcome
    where
        I: IntoIterator<Item = String>,
    {
        let results: Vec<Option<bool>> = stream::iter(urls)
            .map(|url| async move {
                if self.contains(&url) {
                    return None;
                }
                match self.get(&url).await {
                    Ok(_) => Some(true),
                    Err(err) => {
                        warn!(url = %url, error = %err, "Image preload failed");
                        Some(false)
                    }
                }
            })
            .buffer_unordered(self.preload_concurrency)
            .collect()
            .await;

        let mut outcome = PreloadOutcome::default();
        for result in results {
            match result {
                None => outcome.already_cached += 1,
                Some(true) => outcome.loaded += 1,
                Some(false) => outcome.failed += 1,
            }
        }

        info!(
            loaded = outcome.loaded,
            already_cached = outcome.already_cached,
            failed = outcome.failed,
            "Image preload finished"
        );
        outcome
    }

    /// Get current cache statistics
    pub async fn stats(&self) -> CacheStats {
        self.images.run_pending_tasks().await;
        CacheStats {
            entries: self.images.entry_count(),
            weighted_size: self.images.weighted_size(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            fetches: self.fetches.load(Ordering::Relaxed),
        }
    }
}
