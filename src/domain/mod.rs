//! Domain layer: waitlist records and submission validation.
//!
//! This module contains the server-side domain model: the company size
//! buckets, the pre- and post-persistence waitlist record shapes, and the
//! validator that guards the only write path into storage.

pub mod company_size;
pub mod validation;
pub mod waitlist_entry;

pub use company_size::CompanySize;
pub use validation::{FieldError, ValidationErrors, validate_submission};
pub use waitlist_entry::{InsertWaitlistEntry, WaitlistEntry};
