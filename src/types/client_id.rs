use str_newtype::StrNewType;

use super::is_vschar_str;

/// Identifier issued to a registered Mindtalk application (borrowed).
///
/// Sent as `client_id` on the authorization URL and on every verified API
/// call. The value may be empty.
///
/// # Grammar
///
/// ```abnf
/// client_id = *VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(ClientIdBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct ClientId(str);

impl ClientId {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		is_vschar_str(bytes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_registered_client_ids() {
		assert!(ClientId::new("mtfeed").is_ok());
		assert!(ClientId::new("c1").is_ok());
		assert!(ClientId::new("my app 2").is_ok());
		assert!(ClientId::new("").is_ok());
	}

	#[test]
	fn rejects_control_chars() {
		assert!(ClientId::new("c1\n").is_err());
		assert!(ClientId::new("\x7f").is_err());
		assert!(ClientIdBuf::new("\x00".to_owned()).is_err());
	}
}
