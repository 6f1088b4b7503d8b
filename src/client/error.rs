/// Failure of an API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	/// A required parameter, or every member of an alternative group, was
	/// not supplied. Raised before any request is sent.
	#[error(
		"error during request {path}: requires parameter {requirement}{}",
		see_also(.doc_url)
	)]
	MissingParameter {
		path: String,
		requirement: String,
		doc_url: Option<String>,
	},

	/// An authenticated endpoint was called without an access token.
	#[error("{path} requires an access token, authorize the client first")]
	MissingCredential { path: String },

	#[error("unable to send request: {0}")]
	Request(String),

	#[error("unable to receive response: {0}")]
	Response(String),

	/// The response body is not valid JSON.
	#[error("malformed response body: {0}")]
	Decode(#[from] serde_json::Error),

	#[error("invalid URI: {0}")]
	InvalidUri(String),
}

impl ApiError {
	pub fn request(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("request error: {msg}");
		Self::Request(msg)
	}

	pub fn response(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("response error: {msg}");
		Self::Response(msg)
	}

	pub fn missing_credential(path: &str) -> Self {
		log::error!("no access token available for {path}");
		Self::MissingCredential {
			path: path.to_owned(),
		}
	}
}

fn see_also(doc_url: &Option<String>) -> String {
	match doc_url {
		Some(url) => format!(" (see {url})"),
		None => String::new(),
	}
}
