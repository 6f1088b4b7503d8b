//! Endpoint descriptors and the call pipeline.
//!
//! Every API operation is an [`EndpointDescriptor`]: a path, an HTTP method,
//! a [`TrustLevel`] and the parameters it requires. Binding a descriptor to
//! an [`ApiClient`] yields a [`BoundEndpoint`] which validates the call
//! parameters, injects credentials, sends the request and decodes the
//! response envelope.
//!
//! The descriptors of the Mindtalk API live in the per-resource submodules
//! and are exposed as [`ApiClient`] methods.
use crate::{
	ApiClient,
	client::ApiError,
	transport::{HttpClient, HttpMethod, HttpRequest, Params},
};

mod response;
mod trust;
mod validate;

pub use response::*;
pub use trust::*;
pub use validate::*;

/// Builds a [`Requirement`]: `"name"` or `("a" | "b")`.
macro_rules! requirement {
	(($($name:literal)|+)) => {
		$crate::endpoints::Requirement::AnyOf(&[$($name),+])
	};
	($name:literal) => {
		$crate::endpoints::Requirement::One($name)
	};
}

/// Declares endpoint descriptors together with their [`ApiClient`] methods.
macro_rules! endpoints {
	{
		$(#[$list_meta:meta])*
		$list:ident;

		$(
			$(#[$meta:meta])*
			$trust:ident $method:ident $path:literal => $name:ident / $konst:ident
				[$($req:tt),* $(,)?] $doc:literal;
		)*
	} => {
		$(
			$(#[$meta])*
			pub const $konst: $crate::endpoints::EndpointDescriptor =
				$crate::endpoints::EndpointDescriptor {
					name: stringify!($name),
					path: $path,
					method: $crate::transport::HttpMethod::$method,
					trust: $crate::endpoints::TrustLevel::$trust,
					required: &[$(requirement!($req)),*],
					doc_key: Some($doc),
				};
		)*

		$(#[$list_meta])*
		pub const $list: &[&$crate::endpoints::EndpointDescriptor] = &[$(&$konst),*];

		impl<H: $crate::transport::HttpClient> $crate::ApiClient<H> {
			$(
				$(#[$meta])*
				pub fn $name(
					&self,
					params: $crate::transport::Params,
				) -> Result<$crate::endpoints::ApiResult, $crate::client::ApiError> {
					self.endpoint(&$konst).call(params)
				}
			)*
		}
	};
}

pub mod channel;
pub mod my;
pub mod notification;
pub mod post;
pub mod user;
pub mod whisper;

/// Declarative definition of one API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndpointDescriptor {
	/// Name of the bound [`ApiClient`] method.
	pub name: &'static str,

	/// Path below the versioned API prefix. Empty means the API root.
	pub path: &'static str,

	pub method: HttpMethod,
	pub trust: TrustLevel,
	pub required: &'static [Requirement],

	/// Documentation page key, appended to the documentation endpoint in
	/// error messages.
	pub doc_key: Option<&'static str>,
}

/// Every endpoint of the Mindtalk API.
pub fn all() -> impl Iterator<Item = &'static EndpointDescriptor> {
	[
		user::USER_ENDPOINTS,
		my::MY_ENDPOINTS,
		channel::CHANNEL_ENDPOINTS,
		post::POST_ENDPOINTS,
		notification::NOTIFICATION_ENDPOINTS,
		whisper::WHISPER_ENDPOINTS,
	]
	.into_iter()
	.flatten()
	.copied()
}

/// An endpoint bound to a client, ready to be called.
pub struct BoundEndpoint<'a, H> {
	pub client: &'a ApiClient<H>,
	pub descriptor: &'a EndpointDescriptor,
}

impl<'a, H> Clone for BoundEndpoint<'a, H> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<'a, H> Copy for BoundEndpoint<'a, H> {}

impl<'a, H> BoundEndpoint<'a, H> {
	pub fn new(client: &'a ApiClient<H>, descriptor: &'a EndpointDescriptor) -> Self {
		Self { client, descriptor }
	}

	/// Validates `params` and builds the request, without sending it.
	///
	/// Caller parameters are merged with the client defaults (defaults win)
	/// and then with the credentials required by the trust level.
	pub fn prepare(&self, mut params: Params) -> Result<HttpRequest, ApiError> {
		let descriptor = self.descriptor;
		let config = self.client.config();

		if let Err(unmet) = validate(descriptor.required, &params) {
			log::error!("{} is missing parameter {unmet}", descriptor.name);
			return Err(ApiError::MissingParameter {
				path: descriptor.path.to_owned(),
				requirement: unmet.to_string(),
				doc_url: descriptor.doc_key.map(|key| config.doc_url(key)),
			});
		}

		params.extend(config.default_params());
		descriptor
			.trust
			.inject(self.client.credentials(), descriptor.path, &mut params)?;

		let url = config.api_url(descriptor.path)?;
		Ok(HttpRequest::new(descriptor.method, url, params))
	}
}

impl<'a, H: HttpClient> BoundEndpoint<'a, H> {
	/// Sends the call and returns the exchanged request and response along
	/// with the decoded result.
	pub fn send(self, params: Params) -> Result<Reply, ApiError> {
		let request = self.prepare(params)?;

		log::debug!(
			"calling {} ({} {})",
			self.descriptor.name,
			self.descriptor.method,
			request.url.as_str()
		);

		let response = self.client.http_client().send(&request)?;
		let result = ApiResult::decode(&response.body)?;

		Ok(Reply {
			request,
			response,
			result,
		})
	}

	/// Sends the call and returns the decoded result only.
	pub fn call(self, params: Params) -> Result<ApiResult, ApiError> {
		self.send(params).map(|reply| reply.result)
	}
}
