//! Credential injection per trust level.
use crate::{
	AccessToken, ClientId,
	client::ApiError,
	transport::{ParamValue, Params},
};

/// Credential tier an endpoint requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrustLevel {
	/// Identified by the application API key only.
	Anonymous,

	/// Acting on behalf of a user: an access token is mandatory.
	Authenticated,

	/// Proving the application identity with its client secret. A user
	/// access token is attached when one is available.
	Verified,
}

/// Snapshot of the credentials available to one call.
#[derive(Clone, Copy)]
pub struct Credentials<'a> {
	pub api_key: &'a str,
	pub client_id: &'a ClientId,
	pub client_secret: &'a str,

	/// Session token set after the OAuth exchange.
	pub access_token: Option<&'a AccessToken>,
}

impl TrustLevel {
	/// Adds the credentials this trust level requires to `params`.
	///
	/// A non-empty `access_token` supplied by the caller takes precedence
	/// over the session token. Fails without touching `params` when an
	/// authenticated call has no token at all.
	pub fn inject(
		self,
		credentials: Credentials<'_>,
		path: &str,
		params: &mut Params,
	) -> Result<(), ApiError> {
		match self {
			Self::Anonymous => {
				params.insert("api_key", credentials.api_key);
			}
			Self::Authenticated => {
				let token = resolve_access_token(credentials, params)
					.ok_or_else(|| ApiError::missing_credential(path))?;
				params.insert("access_token", ParamValue::Text(token));
			}
			Self::Verified => {
				if let Some(token) = resolve_access_token(credentials, params) {
					params.insert("access_token", ParamValue::Text(token));
				}

				params.insert("client_id", credentials.client_id.as_str());
				params.insert("client_secret", credentials.client_secret);
			}
		}

		Ok(())
	}
}

fn resolve_access_token(credentials: Credentials<'_>, params: &Params) -> Option<String> {
	params
		.get("access_token")
		.map(|value| value.as_text().into_owned())
		.filter(|token| !token.is_empty())
		.or_else(|| credentials.access_token.map(|token| token.as_str().to_owned()))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn credentials(access_token: Option<&'static str>) -> Credentials<'static> {
		Credentials {
			api_key: "k3y",
			client_id: ClientId::new("c1").unwrap(),
			client_secret: "s3cret",
			access_token: access_token.map(|token| AccessToken::new(token).unwrap()),
		}
	}

	fn text(params: &Params, name: &str) -> Option<String> {
		params.get(name).map(|value| value.as_text().into_owned())
	}

	#[test]
	fn anonymous_adds_api_key_only() {
		let mut params = Params::new();
		TrustLevel::Anonymous
			.inject(credentials(Some("AT1")), "/user/info", &mut params)
			.unwrap();
		assert_eq!(text(&params, "api_key").as_deref(), Some("k3y"));
		assert!(!params.contains("access_token"));
		assert!(!params.contains("client_secret"));
	}

	#[test]
	fn authenticated_uses_session_token() {
		let mut params = Params::new();
		TrustLevel::Authenticated
			.inject(credentials(Some("AT1")), "/my/info", &mut params)
			.unwrap();
		assert_eq!(text(&params, "access_token").as_deref(), Some("AT1"));
		assert!(!params.contains("api_key"));
	}

	#[test]
	fn call_level_token_wins() {
		let mut params = Params::new().with("access_token", "CALLER");
		TrustLevel::Authenticated
			.inject(credentials(Some("AT1")), "/my/info", &mut params)
			.unwrap();
		assert_eq!(text(&params, "access_token").as_deref(), Some("CALLER"));
	}

	#[test]
	fn empty_call_level_token_falls_back_to_session() {
		let mut params = Params::new().with("access_token", "");
		TrustLevel::Authenticated
			.inject(credentials(Some("AT1")), "/my/info", &mut params)
			.unwrap();
		assert_eq!(text(&params, "access_token").as_deref(), Some("AT1"));
	}

	#[test]
	fn authenticated_without_any_token_fails() {
		let mut params = Params::new();
		let err = TrustLevel::Authenticated
			.inject(credentials(None), "/my/info", &mut params)
			.unwrap_err();
		assert!(matches!(err, ApiError::MissingCredential { ref path } if path == "/my/info"));
		assert!(params.is_empty());
	}

	#[test]
	fn verified_always_adds_client_credentials() {
		let mut params = Params::new();
		TrustLevel::Verified
			.inject(credentials(None), "/app/stats", &mut params)
			.unwrap();
		assert_eq!(text(&params, "client_id").as_deref(), Some("c1"));
		assert_eq!(text(&params, "client_secret").as_deref(), Some("s3cret"));
		assert!(!params.contains("access_token"));

		let mut params = Params::new();
		TrustLevel::Verified
			.inject(credentials(Some("AT1")), "/app/stats", &mut params)
			.unwrap();
		assert_eq!(text(&params, "access_token").as_deref(), Some("AT1"));
		assert_eq!(text(&params, "client_secret").as_deref(), Some("s3cret"));
	}
}
