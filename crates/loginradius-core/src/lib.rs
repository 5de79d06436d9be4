//! # LoginRadius Core
//!
//! Core domain types for the LoginRadius SDK.
//!
//! This crate contains pure domain logic with no I/O dependencies:
//! - Wire models for the identity API (profiles, tokens, status envelopes)
//! - Error definitions
//! - Argument validation applied before any request is built
//!
//! ## Design Principles
//!
//! - **Pure Functions**: No side effects, easy to test
//! - **Tolerant Parsing**: Unknown vendor fields are preserved, never fatal
//! - **Dependency-Free**: No networking or persistence dependencies

pub mod errors;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use errors::{CoreError, Result};
pub use models::{
    AccessTokenResponse, DeleteResponse, EmailEntry, ErrorResponse, Event, ExistsResponse,
    LoginResponse, PostResponse, SecondFactorAuthentication, SmsResponse, TwoFactorResponse,
    UserProfile,
};
pub use validation::{is_email, is_guid, require_email, require_guid, validate_required};
