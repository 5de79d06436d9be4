//! Endpoint groups, one per API surface.
//!
//! Every method follows the same shape: validate arguments, build the query
//! and body, run the client's generic request helper, deserialize.

pub mod account;
pub mod authentication;
pub mod events;
pub mod social;
pub mod two_factor;

pub use account::AccountApi;
pub use authentication::AuthenticationApi;
pub use events::EventsApi;
pub use social::SocialApi;
pub use two_factor::TwoFactorApi;
