//! URI construction and query string utilities.
use iref::{UriBuf, uri::Query};
use serde::Serialize;

use crate::client::ApiError;

/// Parses an owned string into a URI.
pub fn parse_uri(value: String) -> Result<UriBuf, ApiError> {
	UriBuf::new(value.clone().into_bytes()).map_err(|_| ApiError::InvalidUri(value))
}

/// Appends `value`, encoded as `application/x-www-form-urlencoded`, to the
/// query of `uri`.
///
/// The new pairs follow the existing ones after a `&`. A URI without a query
/// gets one. Nothing changes when `value` encodes to an empty string.
///
/// # Panics
///
/// Panics if `value` is not a sequence of key/value pairs.
pub fn extend_uri_query<T: Serialize>(uri: &mut UriBuf, value: T) {
	// UNWRAP SAFETY: callers pass maps and flat structs of strings.
	let pairs = serde_html_form::to_string(value).unwrap();

	if pairs.is_empty() {
		return;
	}

	let query = match uri.query() {
		Some(existing) if !existing.is_empty() => format!("{}&{pairs}", existing.as_str()),
		_ => pairs,
	};

	uri.set_query(Some(
		// UNWRAP SAFETY: form encoding only emits query-safe characters.
		Query::new(query.as_bytes()).unwrap(),
	));
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use super::*;

	fn params(pairs: &[(&'static str, &'static str)]) -> BTreeMap<&'static str, &'static str> {
		pairs.iter().copied().collect()
	}

	#[test]
	fn adds_query_to_bare_uri() {
		let mut uri = parse_uri("http://api.mindtalk.com/v1/user/info".to_owned()).unwrap();
		extend_uri_query(&mut uri, params(&[("name", "rizkyabdilah"), ("rf", "json")]));
		assert_eq!(
			uri.as_str(),
			"http://api.mindtalk.com/v1/user/info?name=rizkyabdilah&rf=json"
		);
	}

	#[test]
	fn appends_to_existing_query() {
		let mut uri = parse_uri("http://api.mindtalk.com/v1/user/info?x=1".to_owned()).unwrap();
		extend_uri_query(&mut uri, params(&[("id", "42")]));
		assert_eq!(uri.as_str(), "http://api.mindtalk.com/v1/user/info?x=1&id=42");
	}

	#[test]
	fn percent_encodes_values() {
		let mut uri = parse_uri("http://auth.mindtalk.com/authorize".to_owned()).unwrap();
		extend_uri_query(&mut uri, params(&[("redirect_uri", "http://cb/?a=b")]));
		assert_eq!(
			uri.as_str(),
			"http://auth.mindtalk.com/authorize?redirect_uri=http%3A%2F%2Fcb%2F%3Fa%3Db"
		);
	}

	#[test]
	fn empty_value_leaves_uri_untouched() {
		let mut uri = parse_uri("http://api.mindtalk.com/v1/my/info".to_owned()).unwrap();
		extend_uri_query(&mut uri, params(&[]));
		assert_eq!(uri.as_str(), "http://api.mindtalk.com/v1/my/info");
	}

	#[test]
	fn rejects_invalid_uri() {
		assert!(matches!(
			parse_uri("http://api mindtalk".to_owned()),
			Err(ApiError::InvalidUri(_))
		));
	}
}
