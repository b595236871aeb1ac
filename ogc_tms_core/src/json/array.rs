//! JSON array type.

use super::*;
use std::fmt::Debug;

#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	/// E.g. `[ 1, 2, 3 ]`.
	#[must_use]
	pub fn stringify_pretty_single_line(&self) -> String {
		if self.0.is_empty() {
			return String::from("[]");
		}
		let items = self.0.iter().map(stringify_pretty_single_line).collect::<Vec<_>>();
		format!("[ {} ]", items.join(", "))
	}

	#[must_use]
	pub fn stringify_pretty_multi_line(&self, max_width: usize, depth: usize) -> String {
		if self.0.is_empty() {
			return String::from("[]");
		}
		let indent = "  ".repeat(depth);
		let items = self
			.0
			.iter()
			.map(|value| {
				format!(
					"{indent}  {}",
					stringify_pretty_multi_line(value, max_width, depth + 1, indent.len() + 2)
				)
			})
			.collect::<Vec<_>>();
		format!("[\n{}\n{indent}]", items.join(",\n"))
	}

	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.0.iter()).finish()
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl FromIterator<JsonValue> for JsonArray {
	fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
		JsonArray(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stringify_variants() {
		let array = JsonArray::from(vec![1, 2, 3]);
		assert_eq!(array.stringify(), "[1,2,3]");
		assert_eq!(array.stringify_pretty_single_line(), "[ 1, 2, 3 ]");
		assert_eq!(array.stringify_pretty_multi_line(80, 0), "[\n  1,\n  2,\n  3\n]");
		assert_eq!(JsonArray::default().stringify_pretty_single_line(), "[]");
	}

	#[test]
	fn collect_values() {
		let array: JsonArray = ["a", "b"].into_iter().map(JsonValue::from).collect();
		assert_eq!(array.len(), 2);
		assert!(!array.is_empty());
		assert_eq!(format!("{array:?}"), r#"[String("a"), String("b")]"#);
	}
}
