//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::WaitlistService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Waitlist service for validation and persistence.
    pub waitlist_service: Arc<WaitlistService>,
}

impl AppState {
    /// Wraps `waitlist_service` for sharing across request tasks.
    #[must_use]
    pub fn new(waitlist_service: WaitlistService) -> Self {
        Self {
            waitlist_service: Arc::new(waitlist_service),
        }
    }
}
