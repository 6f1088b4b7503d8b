use str_newtype::StrNewType;

use super::validate_token;

/// Bearer token identifying a user session (borrowed).
///
/// Sent as the `access_token` parameter on authenticated and verified calls.
///
/// # Grammar
///
/// ```abnf
/// access-token = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(AccessTokenBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct AccessToken(str);

impl AccessToken {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		validate_token(bytes)
	}
}

/// Long-lived token returned next to the access token (borrowed).
///
/// The client only stores it; nothing in this crate redeems it.
///
/// # Grammar
///
/// ```abnf
/// refresh-token = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(RefreshTokenBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct RefreshToken(str);

impl RefreshToken {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		validate_token(bytes)
	}
}
