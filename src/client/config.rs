use std::fmt;

use iref::UriBuf;
use serde::Deserialize;

use crate::{
	ClientIdBuf, IntoScope, ScopeBuf,
	client::ApiError,
	transport::{ParamValue, Params},
	util::parse_uri,
};

/// Application credentials and API locations.
///
/// Deserializable so hosts can load it from whatever configuration format
/// they use; every location has a default.
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
	pub client_id: ClientIdBuf,
	pub client_secret: String,
	pub api_key: String,
	pub redirect_uri: UriBuf,

	#[serde(default)]
	pub scopes: ScopeBuf,

	#[serde(default = "defaults::api_domain")]
	pub api_domain: String,

	#[serde(default = "defaults::api_prefix")]
	pub api_prefix: String,

	#[serde(default = "defaults::auth_endpoint")]
	pub auth_endpoint: String,

	/// Base of the per-endpoint documentation links.
	#[serde(default = "defaults::doc_endpoint")]
	pub doc_endpoint: String,

	/// Value of the `rf` parameter sent with every API call.
	#[serde(default = "defaults::return_format")]
	pub return_format: String,
}

impl ClientConfig {
	pub fn new(
		client_id: ClientIdBuf,
		client_secret: impl Into<String>,
		redirect_uri: UriBuf,
		api_key: impl Into<String>,
	) -> Self {
		Self {
			client_id,
			client_secret: client_secret.into(),
			api_key: api_key.into(),
			redirect_uri,
			scopes: ScopeBuf::default(),
			api_domain: defaults::api_domain(),
			api_prefix: defaults::api_prefix(),
			auth_endpoint: defaults::auth_endpoint(),
			doc_endpoint: defaults::doc_endpoint(),
			return_format: defaults::return_format(),
		}
	}

	/// Sets the requested scopes, falling back to `basic` when empty.
	pub fn with_scopes(mut self, scopes: impl IntoScope) -> Self {
		self.scopes = scopes.into_scope().unwrap_or_default();
		self
	}

	pub fn with_api_domain(mut self, api_domain: impl Into<String>) -> Self {
		self.api_domain = api_domain.into();
		self
	}

	pub fn with_api_prefix(mut self, api_prefix: impl Into<String>) -> Self {
		self.api_prefix = api_prefix.into();
		self
	}

	pub fn with_auth_endpoint(mut self, auth_endpoint: impl Into<String>) -> Self {
		self.auth_endpoint = auth_endpoint.into();
		self
	}

	pub fn with_doc_endpoint(mut self, doc_endpoint: impl Into<String>) -> Self {
		self.doc_endpoint = doc_endpoint.into();
		self
	}

	pub fn with_return_format(mut self, return_format: impl Into<String>) -> Self {
		self.return_format = return_format.into();
		self
	}

	/// Full URL of an API endpoint: domain, version prefix, then `path`.
	pub fn api_url(&self, path: &str) -> Result<UriBuf, ApiError> {
		parse_uri(format!("{}{}{path}", self.api_domain, self.api_prefix))
	}

	pub fn authorize_url(&self) -> Result<UriBuf, ApiError> {
		parse_uri(format!("{}/authorize", self.auth_endpoint))
	}

	pub fn access_token_url(&self) -> Result<UriBuf, ApiError> {
		parse_uri(format!("{}/access_token", self.auth_endpoint))
	}

	/// Documentation link for an endpoint documentation key.
	pub fn doc_url(&self, key: &str) -> String {
		format!("{}{key}", self.doc_endpoint)
	}

	/// Parameters sent with every API call.
	pub fn default_params(&self) -> Params {
		Params::new().with("rf", ParamValue::Text(self.return_format.clone()))
	}
}

// Secrets are left out of the debug output.
impl fmt::Debug for ClientConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ClientConfig")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.field("api_key", &"<redacted>")
			.field("redirect_uri", &self.redirect_uri)
			.field("scopes", &self.scopes)
			.field("api_domain", &self.api_domain)
			.field("api_prefix", &self.api_prefix)
			.field("auth_endpoint", &self.auth_endpoint)
			.field("doc_endpoint", &self.doc_endpoint)
			.field("return_format", &self.return_format)
			.finish()
	}
}

mod defaults {
	pub fn api_domain() -> String {
		"https://api.mindtalk.com".to_owned()
	}

	pub fn api_prefix() -> String {
		"/v1".to_owned()
	}

	pub fn auth_endpoint() -> String {
		"https://auth.mindtalk.com".to_owned()
	}

	pub fn doc_endpoint() -> String {
		"http://mndt.lk/dev/".to_owned()
	}

	pub fn return_format() -> String {
		"json".to_owned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ScopeTokenBuf;

	fn config() -> ClientConfig {
		ClientConfig::new(
			ClientIdBuf::new("c1".to_owned()).unwrap(),
			"s3cret",
			parse_uri("http://cb".to_owned()).unwrap(),
			"k3y",
		)
	}

	#[test]
	fn defaults() {
		let config = config();
		assert_eq!(config.scopes.as_str(), "basic");
		assert_eq!(config.return_format, "json");
		assert_eq!(
			config.api_url("/user/info").unwrap().as_str(),
			"https://api.mindtalk.com/v1/user/info"
		);
		assert_eq!(
			config.access_token_url().unwrap().as_str(),
			"https://auth.mindtalk.com/access_token"
		);
		assert_eq!(config.doc_url("UserInfo"), "http://mndt.lk/dev/UserInfo");
	}

	#[test]
	fn empty_path_is_api_root() {
		assert_eq!(
			config().api_url("").unwrap().as_str(),
			"https://api.mindtalk.com/v1"
		);
	}

	#[test]
	fn scope_list_is_normalized() {
		let config = config().with_scopes(vec![
			ScopeTokenBuf::new("basic".to_owned()).unwrap(),
			ScopeTokenBuf::new("all".to_owned()).unwrap(),
		]);
		assert_eq!(config.scopes.as_str(), "basic,all");

		let config = config.with_scopes(Vec::<ScopeTokenBuf>::new());
		assert_eq!(config.scopes.as_str(), "basic");
	}

	#[test]
	fn scope_string_is_accepted() {
		let config = config().with_scopes("all");
		assert_eq!(config.scopes.as_str(), "all");

		let config = config.with_scopes("");
		assert_eq!(config.scopes.as_str(), "basic");
	}

	#[test]
	fn default_params_are_fresh_per_call() {
		let config = config();
		let mut first = config.default_params();
		first.insert("rf", "xml");
		assert_eq!(config.default_params().get("rf"), Some(&ParamValue::from("json")));
	}

	#[test]
	fn deserializes_with_defaults() {
		let config: ClientConfig = serde_json::from_str(
			r#"{
				"client_id": "c1",
				"client_secret": "s3cret",
				"api_key": "k3y",
				"redirect_uri": "http://cb",
				"scopes": "basic,all",
				"api_domain": "http://localhost:8080"
			}"#,
		)
		.unwrap();

		assert_eq!(config.client_id.as_str(), "c1");
		assert_eq!(config.scopes.as_str(), "basic,all");
		assert_eq!(config.api_prefix, "/v1");
		assert_eq!(
			config.api_url("/my/info").unwrap().as_str(),
			"http://localhost:8080/v1/my/info"
		);
	}

	#[test]
	fn debug_output_hides_secrets() {
		let debug = format!("{:?}", config());
		assert!(debug.contains("c1"));
		assert!(!debug.contains("s3cret"));
		assert!(!debug.contains("k3y"));
	}
}
