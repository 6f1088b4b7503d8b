//! HTTP transport layer: request/response model and client abstraction.
use std::{borrow::Cow, collections::BTreeMap, fmt};

use iref::UriBuf;

use crate::util::extend_uri_query;

mod client;
#[cfg(test)]
pub(crate) mod mock;
mod params;

pub use client::*;
pub use params::*;

/// HTTP method of an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	Get,
	Post,
}

impl HttpMethod {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
		}
	}
}

impl From<HttpMethod> for http::Method {
	fn from(value: HttpMethod) -> Self {
		match value {
			HttpMethod::Get => http::Method::GET,
			HttpMethod::Post => http::Method::POST,
		}
	}
}

impl fmt::Display for HttpMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single HTTP call, described as plain data.
///
/// GET parameters travel in the query string, POST parameters in a
/// `multipart/form-data` body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
	pub method: HttpMethod,
	pub url: UriBuf,
	pub params: Params,
	pub headers: Vec<(String, String)>,
}

impl HttpRequest {
	pub fn new(method: HttpMethod, url: UriBuf, params: Params) -> Self {
		Self {
			method,
			url,
			params,
			headers: Vec::new(),
		}
	}

	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	/// The URI the request is sent to.
	///
	/// For a GET with parameters this is `url` with the encoded parameters
	/// appended to its query.
	pub fn target_uri(&self) -> UriBuf {
		let mut uri = self.url.clone();

		if self.method == HttpMethod::Get && !self.params.is_empty() {
			extend_uri_query(&mut uri, self.params.query_pairs());
		}

		uri
	}

	/// Header lines in `Key: Value` form.
	pub fn header_lines(&self) -> impl Iterator<Item = String> {
		self.headers
			.iter()
			.map(|(name, value)| format!("{name}: {value}"))
	}
}

/// Response to an [`HttpRequest`].
///
/// Transports build it incrementally with [`HttpResponse::push_header_line`]
/// and [`HttpResponse::push_body_chunk`] as data arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
	pub status: http::StatusCode,

	/// Lower-cased header names. A repeated header keeps its last value.
	pub headers: BTreeMap<String, String>,

	pub body: Vec<u8>,

	/// URL of the final hop once redirects have been followed.
	pub effective_url: String,
}

impl HttpResponse {
	pub fn new(status: http::StatusCode, effective_url: impl Into<String>) -> Self {
		Self {
			status,
			headers: BTreeMap::new(),
			body: Vec::new(),
			effective_url: effective_url.into(),
		}
	}

	/// Records one raw header line.
	///
	/// Lines without a `:`, such as the status line, are ignored.
	pub fn push_header_line(&mut self, line: &str) {
		if let Some((name, value)) = line.split_once(':') {
			self.headers
				.insert(name.to_lowercase(), value.trim().to_owned());
		}
	}

	pub fn push_body_chunk(&mut self, chunk: &[u8]) {
		self.body.extend_from_slice(chunk);
	}

	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(&name.to_lowercase()).map(String::as_str)
	}

	/// Body decoded as UTF-8, with invalid sequences replaced.
	pub fn body_text(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(&self.body)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::util::parse_uri;

	fn request(method: HttpMethod, url: &str, params: Params) -> HttpRequest {
		HttpRequest::new(method, parse_uri(url.to_owned()).unwrap(), params)
	}

	#[test]
	fn get_parameters_use_question_mark() {
		let req = request(
			HttpMethod::Get,
			"http://api.mindtalk.com/v1/user/info",
			Params::new().with("name", "rizky").with("rf", "json"),
		);
		assert_eq!(
			req.target_uri().as_str(),
			"http://api.mindtalk.com/v1/user/info?name=rizky&rf=json"
		);
	}

	#[test]
	fn get_parameters_use_ampersand_after_existing_query() {
		let req = request(
			HttpMethod::Get,
			"http://api.mindtalk.com/v1/user/info?lang=id",
			Params::new().with("id", 7),
		);
		assert_eq!(
			req.target_uri().as_str(),
			"http://api.mindtalk.com/v1/user/info?lang=id&id=7"
		);
	}

	#[test]
	fn get_without_parameters_keeps_url() {
		let req = request(HttpMethod::Get, "http://api.mindtalk.com/v1/user/newest", Params::new());
		assert_eq!(req.target_uri().as_str(), "http://api.mindtalk.com/v1/user/newest");
	}

	#[test]
	fn post_parameters_stay_out_of_url() {
		let req = request(
			HttpMethod::Post,
			"http://api.mindtalk.com/v1/whisper/send",
			Params::new().with("message", "hi"),
		);
		assert_eq!(req.target_uri().as_str(), "http://api.mindtalk.com/v1/whisper/send");
	}

	#[test]
	fn header_lines_are_literal() {
		let req = request(HttpMethod::Get, "http://api.mindtalk.com/v1", Params::new())
			.with_header("Accept", "application/json");
		assert_eq!(
			req.header_lines().collect::<Vec<_>>(),
			vec!["Accept: application/json".to_owned()]
		);
	}

	#[test]
	fn header_lines_accumulate_without_status_line() {
		let mut response = HttpResponse::new(http::StatusCode::OK, "http://x");
		for line in ["HTTP/1.1 200 OK", "Content-Type: text/html", "X-Foo: Bar"] {
			response.push_header_line(line);
		}

		let expected: BTreeMap<String, String> = [
			("content-type".to_owned(), "text/html".to_owned()),
			("x-foo".to_owned(), "Bar".to_owned()),
		]
		.into_iter()
		.collect();
		assert_eq!(response.headers, expected);
	}

	#[test]
	fn repeated_header_keeps_last_value() {
		let mut response = HttpResponse::new(http::StatusCode::OK, "http://x");
		response.push_header_line("Set-Cookie: a=1");
		response.push_header_line("set-cookie: b=2\r\n");
		response.push_header_line("\r\n");
		assert_eq!(response.headers.len(), 1);
		assert_eq!(response.header("Set-Cookie"), Some("b=2"));
	}

	#[test]
	fn header_value_splits_on_first_colon() {
		let mut response = HttpResponse::new(http::StatusCode::FOUND, "http://x");
		response.push_header_line("Location: http://auth.mindtalk.com:8080/cb");
		assert_eq!(
			response.header("location"),
			Some("http://auth.mindtalk.com:8080/cb")
		);
	}

	#[test]
	fn body_accumulates_across_chunks() {
		let mut response = HttpResponse::new(http::StatusCode::OK, "http://x");
		response.push_body_chunk(b"{\"result\":");
		response.push_body_chunk(b" {\"id\": 1}}");
		assert_eq!(response.body_text(), "{\"result\": {\"id\": 1}}");
	}
}
