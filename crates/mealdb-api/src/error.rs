//! Error types for the MealDB client

use std::fmt;

/// Errors that can occur when fetching the recipe list
#[derive(Debug)]
pub enum CatalogError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Server answered with a non-success status
    Status(reqwest::StatusCode),
    /// Failed to parse JSON response
    Json(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "MealDB HTTP error: {}", e),
            Self::Status(status) => write!(f, "MealDB returned status {}", status),
            Self::Json(e) => write!(f, "MealDB JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for MealDB list operations
pub type Result<T> = std::result::Result<T, CatalogError>;
