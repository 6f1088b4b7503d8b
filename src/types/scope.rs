use str_newtype::StrNewType;

use super::is_nqchar;

/// Scope requested when no scope is configured.
pub const DEFAULT_SCOPE: &str = "basic";

/// A single permission name, such as `basic` or `all` (borrowed).
///
/// Any OAuth 2.0 `NQCHAR` except the `,` delimiter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(ScopeTokenBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct ScopeToken(str);

impl ScopeToken {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		let mut i = 0;

		while i < bytes.len() {
			if !is_scope_char(bytes[i]) {
				return false;
			}

			i += 1;
		}

		!bytes.is_empty()
	}
}

const fn is_scope_char(c: u8) -> bool {
	c != b',' && is_nqchar(c)
}

/// Permissions requested for an access token (borrowed).
///
/// Mindtalk joins scope tokens with commas, e.g. `basic,whisper`. Empty
/// tokens are not allowed.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(serde, owned(ScopeBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash)))]
pub struct Scope(str);

impl Scope {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		let mut previous = b',';
		let mut i = 0;

		while i < bytes.len() {
			let c = bytes[i];

			if (c == b',' && previous == b',') || (c != b',' && !is_scope_char(c)) {
				return false;
			}

			previous = c;
			i += 1;
		}

		previous != b','
	}

	pub fn contains(&self, token: &ScopeToken) -> bool {
		self.iter().any(|t| t == token)
	}

	pub fn iter(&self) -> impl Iterator<Item = &ScopeToken> {
		// Each segment of a valid scope is a valid token.
		self.0
			.split(',')
			.map(|t| unsafe { ScopeToken::new_unchecked(t) })
	}
}

impl ScopeBuf {
	/// The `basic` scope.
	pub fn basic() -> Self {
		Self(DEFAULT_SCOPE.to_owned())
	}

	/// Comma-joins scope tokens, `None` when there are none.
	pub fn from_tokens<T>(tokens: impl IntoIterator<Item = T>) -> Option<Self>
	where
		T: AsRef<ScopeToken>,
	{
		let joined = tokens
			.into_iter()
			.map(|token| token.as_ref().as_str().to_owned())
			.collect::<Vec<_>>()
			.join(",");

		(!joined.is_empty()).then_some(Self(joined))
	}
}

impl Default for ScopeBuf {
	fn default() -> Self {
		Self::basic()
	}
}

/// Values accepted as the configured scopes.
///
/// An empty list yields `None`, which the configuration turns into the
/// [`DEFAULT_SCOPE`].
pub trait IntoScope {
	fn into_scope(self) -> Option<ScopeBuf>;
}

impl IntoScope for ScopeBuf {
	fn into_scope(self) -> Option<ScopeBuf> {
		Some(self)
	}
}

/// A comma-separated scope string such as `"basic,whisper"`.
///
/// An empty or malformed string yields `None`.
impl IntoScope for &str {
	fn into_scope(self) -> Option<ScopeBuf> {
		if self.is_empty() {
			return None;
		}

		match ScopeBuf::new(self.to_owned()) {
			Ok(scope) => Some(scope),
			Err(_) => {
				log::warn!("ignoring malformed scope {:?}", self);
				None
			}
		}
	}
}

impl IntoScope for String {
	fn into_scope(self) -> Option<ScopeBuf> {
		self.as_str().into_scope()
	}
}

impl IntoScope for Vec<ScopeTokenBuf> {
	fn into_scope(self) -> Option<ScopeBuf> {
		ScopeBuf::from_tokens(&self)
	}
}

impl IntoScope for &[ScopeTokenBuf] {
	fn into_scope(self) -> Option<ScopeBuf> {
		ScopeBuf::from_tokens(self)
	}
}
