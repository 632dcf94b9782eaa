//! Company size buckets offered on the sign-up form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed set of company size labels a submission may select.
///
/// Serialized as the exact label shown to users (e.g. `"11-50"`), both in
/// JSON and in the `company_size` database column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CompanySize {
    /// 1 to 10 employees.
    #[serde(rename = "1-10")]
    Micro,
    /// 11 to 50 employees.
    #[serde(rename = "11-50")]
    Small,
    /// 51 to 200 employees.
    #[serde(rename = "51-200")]
    Medium,
    /// 201 to 1000 employees.
    #[serde(rename = "201-1000")]
    Large,
    /// More than 1000 employees.
    #[serde(rename = "1000+")]
    Enterprise,
}

impl CompanySize {
    /// Every bucket, smallest first.
    pub const ALL: [Self; 5] = [
        Self::Micro,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Enterprise,
    ];

    /// Returns the wire label for this bucket.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Micro => "1-10",
            Self::Small => "11-50",
            Self::Medium => "51-200",
            Self::Large => "201-1000",
            Self::Enterprise => "1000+",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known size labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown company size: {0:?}")]
pub struct UnknownCompanySize(pub String);

impl FromStr for CompanySize {
    type Err = UnknownCompanySize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| UnknownCompanySize(s.to_string()))
    }
}
