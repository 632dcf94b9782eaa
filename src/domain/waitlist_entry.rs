//! Waitlist records before and after persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CompanySize;

/// A sign-up that passed validation but has not been stored yet.
///
/// Carries no identity or timestamp: both are assigned by the storage
/// backend when the entry is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertWaitlistEntry {
    /// Full name of the person signing up.
    pub full_name: String,
    /// Contact email address.
    pub email: String,
    /// Name of the person's company.
    pub company_name: String,
    /// Selected company size bucket.
    pub company_size: CompanySize,
}

/// A persisted waitlist sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    /// Storage-assigned identity. Strictly increasing, never reused.
    pub id: i64,
    /// Full name of the person signing up.
    pub full_name: String,
    /// Contact email address.
    pub email: String,
    /// Name of the person's company.
    pub company_name: String,
    /// Selected company size bucket.
    pub company_size: CompanySize,
    /// Creation timestamp (immutable after creation).
    pub created_at: DateTime<Utc>,
}

impl WaitlistEntry {
    /// Builds a stored entry from a validated candidate plus the identity
    /// and timestamp assigned by the backend.
    #[must_use]
    pub fn from_insert(id: i64, entry: InsertWaitlistEntry, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: entry.full_name,
            email: entry.email,
            company_name: entry.company_name,
            company_size: entry.company_size,
            created_at,
        }
    }
}
