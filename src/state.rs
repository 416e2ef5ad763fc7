//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlService;

/// Handler dependencies, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>) -> Self {
        Self { url_service }
    }
}
