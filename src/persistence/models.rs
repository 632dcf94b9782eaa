//! Database row model for the `waitlist_entries` table.

use chrono::{DateTime, Utc};

use crate::domain::{CompanySize, WaitlistEntry};
use crate::error::WaitlistError;

/// A raw row from the `waitlist_entries` table.
///
/// `company_size` is stored as its label text and only becomes a
/// [`CompanySize`] once the row is converted into a [`WaitlistEntry`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WaitlistRow {
    /// `BIGSERIAL` primary key.
    pub id: i64,
    /// Full name column.
    pub full_name: String,
    /// Email column.
    pub email: String,
    /// Company name column.
    pub company_name: String,
    /// Company size label column.
    pub company_size: String,
    /// Server-side creation timestamp (`DEFAULT now()`).
    pub created_at: DateTime<Utc>,
}

impl TryFrom<WaitlistRow> for WaitlistEntry {
    type Error = WaitlistError;

    fn try_from(row: WaitlistRow) -> Result<Self, Self::Error> {
        let company_size: CompanySize = row.company_size.parse().map_err(|e| {
            WaitlistError::Storage(format!("corrupt waitlist row {}: {e}", row.id))
        })?;

        Ok(Self {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            company_name: row.company_name,
            company_size,
            created_at: row.created_at,
        })
    }
}
