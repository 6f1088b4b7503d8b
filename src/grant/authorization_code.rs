//! Authorization Code Grant.
//!
//! The application sends the user to [`ApiClient::authorization_url`]. Once
//! the user approves, the authorization server redirects to the configured
//! redirect URI with a `code` parameter, which
//! [`ApiClient::exchange_code_for_token`] trades for an access token and a
//! refresh token.
use iref::UriBuf;
use serde::Serialize;

use crate::{
	AccessTokenBuf, ApiClient, Code, RefreshTokenBuf,
	client::ApiError,
	transport::{HttpClient, HttpMethod, HttpRequest, HttpResponse, Params},
	util::extend_uri_query,
};

/// Tokens issued for an authorization code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
	pub access_token: AccessTokenBuf,
	pub refresh_token: RefreshTokenBuf,
}

/// Outcome of an authorization code exchange.
#[derive(Debug, Clone)]
pub enum TokenExchange {
	Granted(TokenPair),

	/// The authorization server answered with a status other than `200`.
	/// The response is kept for inspection.
	Rejected(HttpResponse),
}

impl TokenExchange {
	pub fn granted(self) -> Option<TokenPair> {
		match self {
			Self::Granted(tokens) => Some(tokens),
			Self::Rejected(_) => None,
		}
	}
}

#[derive(Serialize)]
struct AuthorizationQuery<'a> {
	client_id: &'a str,
	redirect_uri: &'a str,
	scopes: &'a str,
}

impl<H> ApiClient<H> {
	/// URL of the authorization page the user must be redirected to.
	pub fn authorization_url(&self) -> Result<UriBuf, ApiError> {
		let config = self.config();
		let mut uri = config.authorize_url()?;

		extend_uri_query(
			&mut uri,
			AuthorizationQuery {
				client_id: config.client_id.as_str(),
				redirect_uri: config.redirect_uri.as_str(),
				scopes: config.scopes.as_str(),
			},
		);

		Ok(uri)
	}
}

impl<H: HttpClient> ApiClient<H> {
	/// Exchanges an authorization code for a token pair.
	///
	/// A non-`200` answer is not an error: it is returned as
	/// [`TokenExchange::Rejected`]. The tokens are not stored, see
	/// [`ApiClient::set_token`] and [`ApiClient::authorize`].
	pub fn exchange_code_for_token(&self, code: &Code) -> Result<TokenExchange, ApiError> {
		let config = self.config();
		let request = HttpRequest::new(
			HttpMethod::Get,
			config.access_token_url()?,
			Params::new()
				.with("code", code.as_str())
				.with("client_secret", config.client_secret.as_str())
				.with("redirect_uri", config.redirect_uri.as_str()),
		);

		let response = self.http_client().send(&request)?;

		if response.status != http::StatusCode::OK {
			log::warn!("authorization code rejected with status {}", response.status);
			return Ok(TokenExchange::Rejected(response));
		}

		decode_token_pair(&response.body_text()).map(TokenExchange::Granted)
	}

	/// Exchanges an authorization code and, when granted, stores the tokens
	/// as the session of this client.
	pub fn authorize(&mut self, code: &Code) -> Result<TokenExchange, ApiError> {
		let exchange = self.exchange_code_for_token(code)?;

		if let TokenExchange::Granted(tokens) = &exchange {
			self.set_token(tokens.access_token.clone(), tokens.refresh_token.clone());
		}

		Ok(exchange)
	}
}

/// Reads the token pair from an `application/x-www-form-urlencoded` body.
///
/// When a key is repeated its first value is used.
fn decode_token_pair(body: &str) -> Result<TokenPair, ApiError> {
	let pairs: Vec<(String, String)> =
		serde_html_form::from_str(body).map_err(ApiError::response)?;

	let first = |key: &str| {
		pairs
			.iter()
			.find(|(name, _)| name == key)
			.map(|(_, value)| value.clone())
			.ok_or_else(|| ApiError::response(format!("token response has no {key}")))
	};

	Ok(TokenPair {
		access_token: AccessTokenBuf::new(first("access_token")?)
			.map_err(|_| ApiError::response("malformed access_token"))?,
		refresh_token: RefreshTokenBuf::new(first("refresh_token")?)
			.map_err(|_| ApiError::response("malformed refresh_token"))?,
	})
}
