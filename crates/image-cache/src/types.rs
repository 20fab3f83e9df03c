//! Cache types

use std::time::Duration;

use image::ImageFormat;

use crate::error::Result;

const DEFAULT_MAX_BYTES: u64 = 64 * 1024 * 1024;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PRELOAD_CONCURRENCY: usize = 8;
const DEFAULT_USER_AGENT: &str = "image-cache-rs/0.1";

/// An image payload that decoded successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedImage {
    /// Encoded payload exactly as served
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl CachedImage {
    /// Decode `bytes` to validate them and record format and dimensions
    pub fn decode(bytes: Vec<u8>) -> Result<Self> {
        let format = image::guess_format(&bytes)?;
        let decoded = image::load_from_memory_with_format(&bytes, format)?;

        Ok(Self {
            width: decoded.width(),
            height: decoded.height(),
            format,
            bytes,
        })
    }

    /// Bytes this entry counts against the cache budget
    pub fn weight(&self) -> u32 {
        u32::try_from(self.bytes.len()).unwrap_or(u32::MAX)
    }
}

/// Settings for [`ImageCache`](crate::ImageCache) and its HTTP source
#[derive(Debug, Clone)]
pub struct ImageCacheConfig {
    /// Upper bound on the summed payload size of cached images
    pub max_bytes: u64,
    pub timeout: Duration,
    pub user_agent: String,
    /// How many images a preload fetches at once
    pub preload_concurrency: usize,
}

impl Default for ImageCacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            preload_concurrency: DEFAULT_PRELOAD_CONCURRENCY,
        }
    }
}

/// Statistics about the cache
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: u64,
    /// Summed payload bytes of the cached images
    pub weighted_size: u64,
    pub hits: u64,
    pub misses: u64,
    /// Network fetches actually issued
    pub fetches: u64,
}

/// What a preload pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreloadOutcome {
    pub loaded: usize,
    pub already_cached: usize,
    pub failed: usize,
}
