//! Waitlist service: validates submissions and forwards them to storage.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{WaitlistEntry, validate_submission};
use crate::error::WaitlistError;
use crate::persistence::WaitlistStorage;

/// Orchestration layer for the waitlist write path.
///
/// Stateless coordinator: owns a shared handle to whichever
/// [`WaitlistStorage`] backend was chosen at startup. Every submission
/// follows the pattern: validate → store → log → return the stored record.
///
/// The write is awaited to completion: an error means nothing was stored.
/// Unavailable storage is bounded by the backend itself (the connection
/// pool's acquire timeout for PostgreSQL).
#[derive(Debug, Clone)]
pub struct WaitlistService {
    storage: Arc<dyn WaitlistStorage>,
}

impl WaitlistService {
    /// Creates a new `WaitlistService` over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn WaitlistStorage>) -> Self {
        Self { storage }
    }

    /// Returns a reference to the inner storage backend.
    #[must_use]
    pub fn storage(&self) -> &Arc<dyn WaitlistStorage> {
        &self.storage
    }

    /// Validates a raw payload and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::Validation`] if the payload is rejected, and
    /// [`WaitlistError::Storage`] if the backend fails. Nothing is stored
    /// when an error is returned.
    pub async fn submit(&self, payload: &Value) -> Result<WaitlistEntry, WaitlistError> {
        let entry = validate_submission(payload).inspect_err(|errors| {
            tracing::warn!(%errors, "waitlist submission rejected");
        })?;

        let result = self.storage.create_waitlist_entry(entry).await;

        match &result {
            Ok(created) => tracing::info!(
                id = created.id,
                company_size = %created.company_size,
                backend = self.storage.backend_name(),
                "waitlist entry created"
            ),
            Err(err) => tracing::error!(
                error = %err,
                backend = self.storage.backend_name(),
                "failed to store waitlist entry"
            ),
        }

        result
    }

    /// Returns every stored waitlist entry.
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::Storage`] if the backend cannot be read.
    pub async fn entries(&self) -> Result<Vec<WaitlistEntry>, WaitlistError> {
        self.storage.get_waitlist_entries().await
    }
}
