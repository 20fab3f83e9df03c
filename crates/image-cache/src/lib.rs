//! In-memory image cache
//!
//! Maps image URLs to decoded images held in memory, bounded by total payload
//! size. Misses are fetched through an [`ImageSource`] (HTTP by default);
//! concurrent misses for one URL share a single fetch.

mod cache;
mod error;
mod source;
mod types;

pub use cache::ImageCache;
pub use error::{ImageLoadError, Result};
pub use source::{HttpImageSource, ImageSource};
pub use types::{CacheStats, CachedImage, ImageCacheConfig, PreloadOutcome};
