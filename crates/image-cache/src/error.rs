//! Error types for image loading

use std::fmt;
use std::sync::Arc;

/// Errors from fetching or decoding an image.
///
/// Cloneable so every caller waiting on a shared fetch receives the failure.
#[derive(Debug, Clone)]
pub enum ImageLoadError {
    Http(Arc<reqwest::Error>),
    Status(reqwest::StatusCode),
    Decode(Arc<image::ImageError>),
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLoadError::Http(err) => write!(f, "HTTP error: {}", err),
            ImageLoadError::Status(status) => write!(f, "Image server returned status {}", status),
            ImageLoadError::Decode(err) => write!(f, "Image decode error: {}", err),
        }
    }
}

impl std::error::Error for ImageLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageLoadError::Http(err) => Some(err.as_ref()),
            ImageLoadError::Decode(err) => Some(err.as_ref()),
            ImageLoadError::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for ImageLoadError {
    fn from(err: reqwest::Error) -> Self {
        ImageLoadError::Http(Arc::new(err))
    }
}

impl From<image::ImageError> for ImageLoadError {
    fn from(err: image::ImageError) -> Self {
        ImageLoadError::Decode(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ImageLoadError>;
