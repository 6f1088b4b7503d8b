//! Credential and scope string types.
//!
//! Each type is validated on construction and comes in a borrowed/owned pair
//! (e.g. [`AccessToken`] / [`AccessTokenBuf`]) following the same pattern as
//! [`str`] / [`String`].
mod access_token;
mod client_id;
mod code;
mod scope;

pub use access_token::*;
pub use client_id::*;
pub use code::*;
pub use scope::*;

/// Returns `true` if the byte is a VSCHAR (visible ASCII character plus
/// space), i.e. in the range `0x20..=0x7E`.
const fn is_vschar(c: u8) -> bool {
	c >= 0x20 && c <= 0x7e
}

/// Returns `true` if every byte is a VSCHAR.
const fn is_vschar_str(bytes: &[u8]) -> bool {
	let mut i = 0;

	while i < bytes.len() {
		if !is_vschar(bytes[i]) {
			return false;
		}

		i += 1
	}

	true
}

/// `1*VSCHAR`, the grammar shared by codes and tokens.
const fn validate_token(bytes: &[u8]) -> bool {
	!bytes.is_empty() && is_vschar_str(bytes)
}

/// Returns `true` if the byte is an NQCHAR, i.e. `%x21 / %x23-5B / %x5D-7E`.
const fn is_nqchar(c: u8) -> bool {
	c == 0x21 || (c >= 0x23 && c <= 0x5b) || (c >= 0x5d && c <= 0x7e)
}
