//! The Mindtalk API client.
//!
//! [`ApiClient`] owns the application configuration, the session tokens and
//! the HTTP transport. Calls are synchronous: each one blocks for a single
//! round-trip. Updating the session requires `&mut self`, so tokens cannot
//! change under a call in flight.
use crate::{
	AccessToken, AccessTokenBuf, RefreshToken, RefreshTokenBuf,
	endpoints::{BoundEndpoint, Credentials, EndpointDescriptor},
};

mod config;
mod error;

pub use config::*;
pub use error::*;

/// Client for the Mindtalk REST API.
///
/// Each API operation is exposed as a method taking the call
/// [`Params`](crate::transport::Params), e.g.
/// [`user_info`](ApiClient::user_info) or
/// [`whisper_send`](ApiClient::whisper_send). Operations not covered by the
/// built-in table can be called through [`ApiClient::endpoint`].
pub struct ApiClient<H> {
	config: ClientConfig,
	http_client: H,
	access_token: Option<AccessTokenBuf>,
	refresh_token: Option<RefreshTokenBuf>,
}

impl<H> ApiClient<H> {
	pub fn new(config: ClientConfig, http_client: H) -> Self {
		Self {
			config,
			http_client,
			access_token: None,
			refresh_token: None,
		}
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	pub fn http_client(&self) -> &H {
		&self.http_client
	}

	/// Stores the session tokens used by authenticated and verified calls.
	pub fn set_token(&mut self, access_token: AccessTokenBuf, refresh_token: RefreshTokenBuf) {
		log::debug!("session token updated");
		self.access_token = Some(access_token);
		self.refresh_token = Some(refresh_token);
	}

	pub fn access_token(&self) -> Option<&AccessToken> {
		self.access_token.as_deref()
	}

	pub fn refresh_token(&self) -> Option<&RefreshToken> {
		self.refresh_token.as_deref()
	}

	/// Credentials available to the next call.
	pub fn credentials(&self) -> Credentials<'_> {
		Credentials {
			api_key: &self.config.api_key,
			client_id: &self.config.client_id,
			client_secret: &self.config.client_secret,
			access_token: self.access_token(),
		}
	}

	/// Binds an endpoint descriptor to this client.
	pub fn endpoint<'a>(&'a self, descriptor: &'a EndpointDescriptor) -> BoundEndpoint<'a, H> {
		BoundEndpoint::new(self, descriptor)
	}
}

#[cfg(feature = "reqwest")]
impl ApiClient<reqwest::blocking::Client> {
	/// Creates a client backed by the
	/// [default blocking transport](crate::transport::default_http_client).
	pub fn with_default_transport(config: ClientConfig) -> Result<Self, ApiError> {
		Ok(Self::new(config, crate::transport::default_http_client()?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{ClientIdBuf, transport::mock::RecordingClient, util::parse_uri};

	fn client() -> ApiClient<RecordingClient> {
		ApiClient::new(
			ClientConfig::new(
				ClientIdBuf::new("c1".to_owned()).unwrap(),
				"s3cret",
				parse_uri("http://cb".to_owned()).unwrap(),
				"k3y",
			),
			RecordingClient::new(),
		)
	}

	#[test]
	fn session_starts_empty() {
		let api = client();
		assert!(api.access_token().is_none());
		assert!(api.refresh_token().is_none());
		assert!(api.credentials().access_token.is_none());
	}

	#[test]
	fn set_token_updates_credentials() {
		let mut api = client();
		api.set_token(
			AccessTokenBuf::new("AT1".to_owned()).unwrap(),
			RefreshTokenBuf::new("RT1".to_owned()).unwrap(),
		);

		let credentials = api.credentials();
		assert_eq!(credentials.access_token.map(|token| token.as_str()), Some("AT1"));
		assert_eq!(credentials.api_key, "k3y");
		assert_eq!(credentials.client_id.as_str(), "c1");
		assert_eq!(api.refresh_token().map(|token| token.as_str()), Some("RT1"));
	}
}
