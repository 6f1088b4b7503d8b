use str_newtype::StrNewType;

use super::validate_token;

/// One-time code appended to the redirect URI once the user has approved the
/// application (borrowed).
///
/// See [`ApiClient::exchange_code_for_token`](crate::ApiClient::exchange_code_for_token).
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(serde, owned(CodeBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash)))]
pub struct Code(str);

impl Code {
	pub const fn validate_str(s: &str) -> bool {
		validate_token(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		validate_token(bytes)
	}
}

/// Checked [`Code`] literal.
#[macro_export]
macro_rules! code {
	($value:literal) => {{
		match $crate::Code::new($value) {
			Ok(code) => code,
			Err(_) => panic!(concat!("invalid authorization code: ", $value)),
		}
	}};
}
