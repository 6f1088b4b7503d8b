//! In-memory transport for tests.
use std::{cell::RefCell, collections::VecDeque};

use crate::{
	client::ApiError,
	transport::{HttpClient, HttpRequest, HttpResponse},
};

/// Records every request and answers with queued responses.
///
/// When the queue is empty it answers `200 {"result": {}}`.
#[derive(Default)]
pub struct RecordingClient {
	requests: RefCell<Vec<HttpRequest>>,
	responses: RefCell<VecDeque<HttpResponse>>,
}

impl RecordingClient {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_response(self, status: u16, body: &str) -> Self {
		let mut response = HttpResponse::new(
			http::StatusCode::from_u16(status).unwrap(),
			"http://mock.invalid/",
		);
		response.push_body_chunk(body.as_bytes());
		self.responses.borrow_mut().push_back(response);
		self
	}

	/// Number of times the transport was invoked.
	pub fn calls(&self) -> usize {
		self.requests.borrow().len()
	}

	pub fn last_request(&self) -> HttpRequest {
		self.requests
			.borrow()
			.last()
			.cloned()
			.expect("no request was sent")
	}
}

impl HttpClient for RecordingClient {
	fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
		self.requests.borrow_mut().push(request.clone());

		let mut response = match self.responses.borrow_mut().pop_front() {
			Some(response) => response,
			None => {
				let mut response = HttpResponse::new(http::StatusCode::OK, "");
				response.push_body_chunk(br#"{"result": {}}"#);
				response
			}
		};
		response.effective_url = request.target_uri().as_str().to_owned();

		Ok(response)
	}
}
