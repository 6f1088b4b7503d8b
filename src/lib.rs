//! Client for the [Mindtalk] REST API with OAuth 2.0 authorization.
//!
//! Every API operation is described by an
//! [`EndpointDescriptor`](endpoints::EndpointDescriptor): its path, its HTTP
//! method, the parameters it requires and the [`TrustLevel`] it runs at.
//!
//! - **Anonymous** calls only carry the application API key.
//! - **Authenticated** calls carry the user access token.
//! - **Verified** calls carry the access token and the client credentials.
//!
//! [`ApiClient`] validates the call parameters, injects credentials, sends
//! the request through an [`HttpClient`](transport::HttpClient) and decodes
//! the JSON envelope into an [`ApiResult`].
//!
//! # Modules
//!
//! - [`client`] — The API client, its configuration and error type.
//! - [`endpoints`] — Endpoint descriptors, validation and the call pipeline.
//! - [`grant`] — Authorization Code Grant helpers.
//! - [`transport`] — HTTP request/response model and transports.
//! - [`util`] — URI query string utilities.
//!
//! Credential types ([`AccessToken`], [`ClientId`], [`Code`], [`Scope`],
//! etc.) are re-exported at the crate root.
//!
//! # Example
//!
//! ```no_run
//! use mindtalk_oauth::{ApiClient, ClientConfig, ClientIdBuf, Params, util::parse_uri};
//!
//! let config = ClientConfig::new(
//! 	ClientIdBuf::new("my-app".to_owned()).unwrap(),
//! 	"secret",
//! 	parse_uri("https://example.org/callback".to_owned())?,
//! 	"api-key",
//! );
//! let api = ApiClient::with_default_transport(config)?;
//! let _user = api.user_info(Params::new().with("name", "robin"))?;
//! # Ok::<(), mindtalk_oauth::ApiError>(())
//! ```
//!
//! [Mindtalk]: https://www.mindtalk.com
#[cfg(feature = "reqwest")]
pub use reqwest;

pub use http;
pub use iref;

pub mod client;
pub mod endpoints;
pub mod grant;
pub mod transport;
mod types;
pub mod util;

pub use client::{ApiClient, ApiError, ClientConfig};
pub use endpoints::{ApiResult, EndpointDescriptor, Reply, Requirement, TrustLevel};
pub use grant::authorization_code::{TokenExchange, TokenPair};
pub use transport::{ParamValue, Params};
pub use types::*;
