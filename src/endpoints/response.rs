use serde_json::Value;

use crate::{
	client::ApiError,
	transport::{HttpRequest, HttpResponse},
};

/// Decoded outcome of an API call.
///
/// The API wraps payloads in a `{"result": ...}` envelope. When the envelope
/// carries no result the raw body is returned instead, which may be either an
/// error payload or a success payload the server did not wrap. The client
/// does not try to tell those apart.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
	/// Value of the envelope's `result` field.
	Result(Value),

	/// Response body, unchanged.
	Raw(String),
}

impl ApiResult {
	/// Decodes a response body.
	///
	/// A `result` that is absent or `null`, or a body that is valid JSON but
	/// not an object, yields [`ApiResult::Raw`]. A body that is not JSON at
	/// all is an error.
	pub fn decode(body: &[u8]) -> Result<Self, ApiError> {
		let value: Value = serde_json::from_slice(body)?;

		let result = match value {
			Value::Object(mut envelope) => envelope.remove("result").filter(|v| !v.is_null()),
			_ => None,
		};

		Ok(match result {
			Some(result) => Self::Result(result),
			None => Self::Raw(String::from_utf8_lossy(body).into_owned()),
		})
	}

	/// The enveloped result, if any.
	pub fn result(&self) -> Option<&Value> {
		match self {
			Self::Result(value) => Some(value),
			Self::Raw(_) => None,
		}
	}

	pub fn into_result(self) -> Option<Value> {
		match self {
			Self::Result(value) => Some(value),
			Self::Raw(_) => None,
		}
	}

	pub fn raw(&self) -> Option<&str> {
		match self {
			Self::Result(_) => None,
			Self::Raw(body) => Some(body),
		}
	}
}

/// A completed call: what was sent, what came back, and the decoded result.
#[derive(Debug, Clone)]
pub struct Reply {
	pub request: HttpRequest,
	pub response: HttpResponse,
	pub result: ApiResult,
}
