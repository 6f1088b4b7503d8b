//! OAuth 2.0 authorization grants.
//!
//! - [`authorization_code`] — Authorization Code Grant: redirecting the user
//!   to the authorization page and exchanging the returned code for tokens.
pub mod authorization_code;
