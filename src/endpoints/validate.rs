//! Required-parameter checks, run before any request is built.
use std::fmt;

use crate::transport::Params;

/// A required-parameter rule of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
	/// The named parameter must be supplied.
	One(&'static str),

	/// At least one of the named parameters must be supplied.
	AnyOf(&'static [&'static str]),
}

impl Requirement {
	pub fn is_met(&self, supplied: &Params) -> bool {
		match self {
			Self::One(name) => supplied.contains(name),
			Self::AnyOf(names) => names.iter().any(|name| supplied.contains(name)),
		}
	}
}

/// Renders a group as `a, b or c`.
impl fmt::Display for Requirement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::One(name) => f.write_str(name),
			Self::AnyOf(names) => match names.split_last() {
				Some((last, [])) => f.write_str(last),
				Some((last, rest)) => write!(f, "{} or {last}", rest.join(", ")),
				None => Ok(()),
			},
		}
	}
}

/// Checks the supplied parameters against `required`, in order.
///
/// Stops at the first unmet requirement and returns it.
pub fn validate<'a>(required: &'a [Requirement], supplied: &Params) -> Result<(), &'a Requirement> {
	match required.iter().find(|requirement| !requirement.is_met(supplied)) {
		Some(unmet) => Err(unmet),
		None => Ok(()),
	}
}
