//! Service layer: business logic orchestration.
//!
//! [`WaitlistService`] runs submissions through validation and hands them
//! to the configured [`super::persistence::WaitlistStorage`] backend.

pub mod waitlist_service;

pub use waitlist_service::WaitlistService;
