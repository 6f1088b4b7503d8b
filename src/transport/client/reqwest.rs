use std::io::Read;

use reqwest::{
	Url,
	blocking::{
		Client, Response,
		multipart::{Form, Part},
	},
	header::LOCATION,
};

use crate::{
	client::ApiError,
	transport::{HttpClient, HttpMethod, HttpRequest, HttpResponse, ParamValue},
};

/// `User-Agent` sent by [`default_http_client`].
pub const USER_AGENT: &str = concat!("mindtalk-oauth/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed for a single call.
pub const MAX_REDIRECTS: usize = 5;

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Builds the blocking `reqwest` client used by default, with no timeout.
///
/// Redirects are disabled in `reqwest` itself: [`HttpClient::send`] follows
/// up to [`MAX_REDIRECTS`] of them and records the headers of every hop.
pub fn default_http_client() -> Result<Client, ApiError> {
	Client::builder()
		.user_agent(USER_AGENT)
		.redirect(reqwest::redirect::Policy::none())
		.build()
		.map_err(ApiError::request)
}

fn multipart_form(request: &HttpRequest) -> Form {
	request
		.params
		.iter()
		.fold(Form::new(), |form, (name, value)| match value {
			ParamValue::File { file_name, content } => form.part(
				name.to_owned(),
				Part::bytes(content.clone()).file_name(file_name.clone()),
			),
			other => form.text(name.to_owned(), other.as_text().into_owned()),
		})
}

/// Sends one hop of `request` to `url`.
///
/// The multipart body is only attached when the hop is still a POST.
fn send_hop(
	client: &Client,
	request: &HttpRequest,
	method: HttpMethod,
	url: Url,
) -> Result<Response, ApiError> {
	let mut builder = client.request(method.into(), url);

	if method == HttpMethod::Post {
		builder = builder.multipart(multipart_form(request));
	}

	for (name, value) in &request.headers {
		builder = builder.header(name.as_str(), value.as_str());
	}

	builder.send().map_err(ApiError::request)
}

/// Where a redirect response points to, resolved against its own URL.
fn redirect_target(response: &Response) -> Option<Url> {
	if !response.status().is_redirection() {
		return None;
	}

	let location = response.headers().get(LOCATION)?.to_str().ok()?;
	response.url().join(location).ok()
}

fn collect_headers(collected: &mut HttpResponse, response: &Response) {
	for (name, value) in response.headers() {
		collected.push_header_line(&format!(
			"{name}: {}",
			String::from_utf8_lossy(value.as_bytes())
		));
	}
}

impl HttpClient for Client {
	fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
		let target = request.target_uri();
		log::debug!("HTTP {} request to: {}", request.method, target.as_str());
		log::trace!("HTTP request: {request:?}");

		let url = Url::parse(target.as_str()).map_err(ApiError::request)?;
		let mut method = request.method;
		let mut response = send_hop(self, request, method, url)?;
		let mut collected = HttpResponse::new(response.status(), response.url().as_str());
		let mut redirects = 0;

		loop {
			collected.status = response.status();
			collected.effective_url = response.url().to_string();
			collect_headers(&mut collected, &response);

			let Some(next) = redirect_target(&response) else {
				break;
			};

			if redirects == MAX_REDIRECTS {
				return Err(ApiError::request(format!(
					"maximum ({MAX_REDIRECTS}) redirects followed"
				)));
			}

			redirects += 1;

			// Only 307 and 308 replay the body.
			let status = response.status().as_u16();
			if method == HttpMethod::Post && status != 307 && status != 308 {
				method = HttpMethod::Get;
			}

			log::debug!("HTTP redirect {status} to: {next}");
			response = send_hop(self, request, method, next)?;
		}

		let mut chunk = [0u8; READ_CHUNK_SIZE];
		loop {
			let read = response.read(&mut chunk).map_err(ApiError::response)?;
			if read == 0 {
				break;
			}

			collected.push_body_chunk(&chunk[..read]);
		}

		log::trace!("HTTP response: {collected:?}");

		Ok(collected)
	}
}
