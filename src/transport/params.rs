use std::{borrow::Cow, collections::BTreeMap, fmt};

/// Value of a single call parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
	Text(String),
	Integer(i64),
	Float(f64),

	/// Raw file content, uploaded as a multipart file field on POST.
	File { file_name: String, content: Vec<u8> },
}

impl ParamValue {
	/// Creates a file parameter.
	pub fn file(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
		Self::File {
			file_name: file_name.into(),
			content: content.into(),
		}
	}

	/// String form of the value, as sent in a query string or a multipart
	/// content field.
	///
	/// Files are represented by their name.
	pub fn as_text(&self) -> Cow<'_, str> {
		match self {
			Self::Text(value) => Cow::Borrowed(value),
			Self::Integer(value) => Cow::Owned(value.to_string()),
			Self::Float(value) => Cow::Owned(format_float(*value)),
			Self::File { file_name, .. } => Cow::Borrowed(file_name),
		}
	}

	pub fn is_file(&self) -> bool {
		matches!(self, Self::File { .. })
	}
}

/// Whole floats keep a `.0` suffix so that `1.0` is not sent as `1`.
fn format_float(value: f64) -> String {
	if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
		format!("{value:.1}")
	} else {
		value.to_string()
	}
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.as_text())
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

impl From<i64> for ParamValue {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}

impl From<i32> for ParamValue {
	fn from(value: i32) -> Self {
		Self::Integer(value.into())
	}
}

impl From<u32> for ParamValue {
	fn from(value: u32) -> Self {
		Self::Integer(value.into())
	}
}

impl From<f64> for ParamValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

/// Named parameters of one API call.
///
/// Keys are kept sorted so that the encoded query string is deterministic.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style [`Params::insert`].
	pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Sets a parameter, returning the value it replaces.
	pub fn insert(
		&mut self,
		name: impl Into<String>,
		value: impl Into<ParamValue>,
	) -> Option<ParamValue> {
		self.0.insert(name.into(), value.into())
	}

	pub fn get(&self, name: &str) -> Option<&ParamValue> {
		self.0.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
		self.0.iter().map(|(name, value)| (name.as_str(), value))
	}

	/// Name/value pairs with every value in its string form.
	pub fn query_pairs(&self) -> BTreeMap<&str, Cow<'_, str>> {
		self.iter().map(|(name, value)| (name, value.as_text())).collect()
	}
}

impl Extend<(String, ParamValue)> for Params {
	fn extend<T: IntoIterator<Item = (String, ParamValue)>>(&mut self, iter: T) {
		self.0.extend(iter)
	}
}

impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: Into<ParamValue>,
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self(
			iter.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		)
	}
}

impl IntoIterator for Params {
	type Item = (String, ParamValue);
	type IntoIter = std::collections::btree_map::IntoIter<String, ParamValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn values_coerce_to_text() {
		assert_eq!(ParamValue::from("hello").as_text(), "hello");
		assert_eq!(ParamValue::from(42).as_text(), "42");
		assert_eq!(ParamValue::from(2.5).as_text(), "2.5");
		assert_eq!(ParamValue::file("avatar.png", vec![0x89, 0x50]).as_text(), "avatar.png");
	}

	#[test]
	fn whole_floats_keep_decimal_point() {
		assert_eq!(ParamValue::from(1.0).as_text(), "1.0");
		assert_eq!(ParamValue::from(-3.0).as_text(), "-3.0");
		assert_eq!(ParamValue::from(0.25).as_text(), "0.25");
		assert_eq!(ParamValue::from(f64::NAN).as_text(), "NaN");
	}

	#[test]
	fn later_insert_replaces_value() {
		let mut params = Params::new().with("rf", "xml");
		let previous = params.insert("rf", "json");
		assert_eq!(previous, Some(ParamValue::from("xml")));
		assert_eq!(params.get("rf"), Some(&ParamValue::from("json")));
		assert_eq!(params.len(), 1);
	}

	#[test]
	fn query_pairs_are_sorted() {
		let params: Params = [("name", "rizky"), ("id", "7")].into_iter().collect();
		let keys: Vec<&str> = params.query_pairs().into_keys().collect();
		assert_eq!(keys, vec!["id", "name"]);
	}
}
