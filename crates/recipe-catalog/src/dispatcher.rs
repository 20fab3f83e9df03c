//! Runs catalog requests in the background and delivers every result on one
//! channel, so a UI loop owns all state updates.

use std::sync::Arc;

use image_cache::{CachedImage, ImageLoadError};
use mealdb_api::{CatalogError, DetailRecord, SummaryRecord};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::debug;

use crate::catalog::Catalog;

/// Completion of a dispatched request
#[derive(Debug)]
pub enum CatalogEvent {
    ListLoaded {
        url: String,
        records: Vec<SummaryRecord>,
    },
    ListFailed {
        url: String,
        error: CatalogError,
    },
    /// `detail` is `None` when the meal is unavailable
    DetailLoaded {
        id: String,
        detail: Option<DetailRecord>,
    },
    ImageLoaded {
        url: String,
        image: Arc<CachedImage>,
    },
    ImageFailed {
        url: String,
        error: ImageLoadError,
    },
}

/// Spawns catalog requests and forwards their results as [`CatalogEvent`]s.
///
/// Requests run on the runtime captured at construction, so the `request_*`
/// methods may be called from any thread. Events from independent requests
/// arrive in completion order. If the receiver has been dropped, results are
/// discarded.
#[derive(Clone)]
pub struct CatalogDispatcher {
    catalog: Catalog,
    events: mpsc::Sender<CatalogEvent>,
    runtime: Handle,
}

impl CatalogDispatcher {
    /// Create a dispatcher bound to the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime; use
    /// [`CatalogDispatcher::with_runtime`] there.
    pub fn new(catalog: Catalog, buffer: usize) -> (Self, mpsc::Receiver<CatalogEvent>) {
        Self::with_runtime(catalog, Handle::current(), buffer)
    }

    /// Create a dispatcher that spawns its requests on `runtime`
    pub fn with_runtime(
        catalog: Catalog,
        runtime: Handle,
        buffer: usize,
    ) -> (Self, mpsc::Receiver<CatalogEvent>) {
        let (events, rx) = mpsc::channel(buffer.max(1));
        (
            Self {
                catalog,
                events,
                runtime,
            },
            rx,
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn request_list(&self, url: &str) {
        let catalog = self.catalog.clone();
        let events = self.events.clone();
        let url = url.to_string();

        self.runtime.spawn(async move {
            let event = match catalog.fetch_list(&url).await {
                Ok(records) => CatalogEvent::ListLoaded { url, records },
                Err(error) => CatalogEvent::ListFailed { url, error },
            };
            deliver(&events, event).await;
        });
    }

    pub fn request_category(&self, category: &str) {
        let url = self.catalog.client().category_url(category);
        self.request_list(&url);
    }

    pub fn request_detail(&self, id: &str) {
        let catalog = self.catalog.clone();
        let events = self.events.clone();
        let id = id.to_string();

        self.runtime.spawn(async move {
            let detail = catalog.fetch_detail(&id).await;
            deliver(&events, CatalogEvent::DetailLoaded { id, detail }).await;
        });
    }

    pub fn request_image(&self, url: &str) {
        let catalog = self.catalog.clone();
        let events = self.events.clone();
        let url = url.to_string();

        self.runtime.spawn(async move {
            let event = match catalog.image(&url).await {
                Ok(image) => CatalogEvent::ImageLoaded { url, image },
                Err(error) => CatalogEvent::ImageFailed { url, error },
            };
            deliver(&events, event).await;
        });
    }
}

async fn deliver(events: &mpsc::Sender<CatalogEvent>, event: CatalogEvent) {
    if events.send(event).await.is_err() {
        debug!("Catalog event receiver dropped, discarding result");
    }
}
