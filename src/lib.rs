//! # waitlist-gateway
//!
//! HTTP backend for a waitlist sign-up form. Submissions are validated
//! against a fixed schema, assigned an identity and creation timestamp, and
//! persisted through a swappable storage backend (in-memory or PostgreSQL).
//!
//! ## Architecture
//!
//! ```text
//! Sign-up form (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── WaitlistService (service/)
//!     ├── Validator (domain/)
//!     │
//!     └── WaitlistStorage (persistence/)
//!           ├── MemoryStorage
//!           └── PostgresStorage
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
pub mod shutdown;
