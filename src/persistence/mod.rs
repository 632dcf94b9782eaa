//! Persistence layer: the waitlist storage contract and its backends.
//!
//! [`WaitlistStorage`] is the capability set every backend implements.
//! [`MemoryStorage`] keeps entries for the lifetime of the process;
//! [`PostgresStorage`] persists them in the `waitlist_entries` table using
//! `sqlx::PgPool`. Callers hold an `Arc<dyn WaitlistStorage>` and never name
//! a concrete backend.

pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{InsertWaitlistEntry, WaitlistEntry};
use crate::error::WaitlistError;

pub use memory::MemoryStorage;
pub use postgres::PostgresStorage;

/// Storage contract for waitlist entries.
#[async_trait]
pub trait WaitlistStorage: Send + Sync + std::fmt::Debug {
    /// Assigns an identity and creation timestamp to `entry`, stores it,
    /// and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::Storage`] if the backend cannot persist the
    /// entry.
    async fn create_waitlist_entry(
        &self,
        entry: InsertWaitlistEntry,
    ) -> Result<WaitlistEntry, WaitlistError>;

    /// Returns every stored entry.
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::Storage`] if the backend cannot be read.
    async fn get_waitlist_entries(&self) -> Result<Vec<WaitlistEntry>, WaitlistError>;

    /// Short backend identifier used in logs and the health endpoint.
    fn backend_name(&self) -> &'static str;
}
