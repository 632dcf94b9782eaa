//! PostgreSQL implementation of the waitlist storage.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::WaitlistStorage;
use super::models::WaitlistRow;
use crate::config::AppConfig;
use crate::domain::{InsertWaitlistEntry, WaitlistEntry};
use crate::error::WaitlistError;

/// PostgreSQL-backed waitlist storage using `sqlx::PgPool`.
///
/// Identity comes from the `BIGSERIAL` sequence on `waitlist_entries.id`
/// and `created_at` from the column default, so concurrent writers never
/// need coordination in this process.
#[derive(Debug, Clone)]
pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    /// Creates a storage backend over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool using the database settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`WaitlistError::Storage`] if the database is unreachable.
    pub async fn connect(config: &AppConfig) -> Result<Self, WaitlistError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await?;

        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns a [`WaitlistError::Storage`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), WaitlistError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| WaitlistError::Storage(e.to_string()))
    }
}

#[async_trait]
impl WaitlistStorage for PostgresStorage {
    async fn create_waitlist_entry(
        &self,
        entry: InsertWaitlistEntry,
    ) -> Result<WaitlistEntry, WaitlistError> {
        let row = sqlx::query_as::<_, WaitlistRow>(
            "INSERT INTO waitlist_entries (full_name, email, company_name, company_size) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, full_name, email, company_name, company_size, created_at",
        )
        .bind(&entry.full_name)
        .bind(&entry.email)
        .bind(&entry.company_name)
        .bind(entry.company_size.as_str())
        .fetch_one(&self.pool)
        .await?;

        WaitlistEntry::try_from(row)
    }

    async fn get_waitlist_entries(&self) -> Result<Vec<WaitlistEntry>, WaitlistError> {
        let rows = sqlx::query_as::<_, WaitlistRow>(
            "SELECT id, full_name, email, company_name, company_size, created_at \
             FROM waitlist_entries ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(WaitlistEntry::try_from).collect()
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
