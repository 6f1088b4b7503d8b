use crate::{
	client::ApiError,
	transport::{HttpRequest, HttpResponse},
};

#[cfg(feature = "reqwest")]
mod reqwest;

#[cfg(feature = "reqwest")]
pub use self::reqwest::*;

/// Executes one HTTP round-trip.
///
/// Implementations block until the whole response has been received and
/// follow redirects themselves. Non-2xx statuses are returned as responses,
/// not errors.
pub trait HttpClient {
	fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T> HttpClient for &T
where
	T: HttpClient,
{
	fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
		T::send(*self, request)
	}
}
