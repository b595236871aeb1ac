//! JSON object type, backed by a sorted map so that output is deterministic.

use super::*;
use std::{
	collections::BTreeMap,
	fmt::{Debug, Display},
};

#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub BTreeMap<String, JsonValue>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Get the raw `JsonValue` for `key`, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	/// Set `key` to `value`, converting it into a `JsonValue`.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.insert(key.to_owned(), JsonValue::from(value));
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}

	#[must_use]
	pub fn stringify_pretty_single_line(&self) -> String {
		if self.0.is_empty() {
			return String::from("{}");
		}
		let items = self
			.0
			.iter()
			.map(|(key, value)| {
				format!(
					"\"{}\": {}",
					escape_json_string(key),
					stringify_pretty_single_line(value)
				)
			})
			.collect::<Vec<_>>();
		format!("{{ {} }}", items.join(", "))
	}

	/// One entry per line, indented by two spaces per `depth` level.
	#[must_use]
	pub fn stringify_pretty_multi_line(&self, max_width: usize, depth: usize) -> String {
		if self.0.is_empty() {
			return String::from("{}");
		}
		let indent = "  ".repeat(depth);
		let items = self
			.0
			.iter()
			.map(|(key, value)| {
				let key_string = format!("{indent}  \"{}\": ", escape_json_string(key));
				let value_string = stringify_pretty_multi_line(value, max_width, depth + 1, key_string.len());
				format!("{key_string}{value_string}")
			})
			.collect::<Vec<_>>();
		format!("{{\n{}\n{indent}}}", items.join(",\n"))
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonObject(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), JsonValue::from(value)))
				.collect(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn set_and_get() {
		let mut object = JsonObject::new();
		object.set("number", 42);
		object.set("text", "hello");
		object.set("number", 7.5);

		assert_eq!(object.len(), 2);
		assert_eq!(object.get("number"), Some(&JsonValue::Number(7.5)));
		assert_eq!(object.get("missing"), None);
	}

	#[test]
	fn keys_are_sorted() {
		let object = JsonObject::from(vec![("minTileRow", 0), ("maxTileRow", 5), ("coalesce", 2)]);
		assert_eq!(object.stringify(), r#"{"coalesce":2,"maxTileRow":5,"minTileRow":0}"#);
		assert_eq!(
			object.stringify_pretty_single_line(),
			r#"{ "coalesce": 2, "maxTileRow": 5, "minTileRow": 0 }"#
		);
	}

	#[test]
	fn multi_line() {
		let object = JsonObject::from(vec![("a", 1), ("bb", 2)]);
		assert_eq!(object.stringify_pretty_multi_line(80, 0), "{\n  \"a\": 1,\n  \"bb\": 2\n}");
		assert_eq!(JsonObject::new().stringify_pretty_multi_line(80, 0), "{}");
	}

	#[test]
	fn display_and_debug() {
		let object = JsonObject::from(vec![("k", "v")]);
		assert_eq!(format!("{object}"), r#"{"k":"v"}"#);
		assert_eq!(format!("{object:?}"), r#"{"k": String("v")}"#);
	}
}
