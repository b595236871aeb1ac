//! Recursive descent parser for JSON text.
//!
//! Accepts the full JSON grammar (RFC 8259). Objects are collected into a sorted map, so
//! duplicate keys keep the last value. Errors carry the byte position and a short snippet
//! of the preceding input.

use super::{ByteCursor, JsonArray, JsonObject, JsonValue};
use anyhow::{Context, Result};

/// Nesting limit, protects the stack against hostile input like `[[[[...`.
const MAX_DEPTH: usize = 256;

/// Parse a complete JSON document. Trailing non-whitespace is an error.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut cursor = ByteCursor::new(json);
	parse_document(&mut cursor).with_context(|| format!("while parsing JSON '{}'", shorten(json)))
}

fn parse_document(cursor: &mut ByteCursor) -> Result<JsonValue> {
	let value = parse_value(cursor, 0)?;
	cursor.skip_whitespace();
	if !cursor.is_at_end() {
		cursor.advance();
		return Err(cursor.format_error("unexpected trailing characters"));
	}
	Ok(value)
}

fn parse_value(cursor: &mut ByteCursor, depth: usize) -> Result<JsonValue> {
	if depth > MAX_DEPTH {
		return Err(cursor.format_error("nesting too deep"));
	}
	cursor.skip_whitespace();
	match cursor.expect_peeked_byte()? {
		b'[' => parse_array(cursor, depth),
		b'{' => parse_object(cursor, depth),
		b'"' => parse_string(cursor).map(JsonValue::String),
		b'-' | b'0'..=b'9' => parse_number(cursor).map(JsonValue::Number),
		b't' => parse_tag(cursor, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(cursor, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(cursor, "null").map(|()| JsonValue::Null),
		c => {
			cursor.advance();
			Err(cursor.format_error(&format!("unexpected character '{}'", c as char)))
		}
	}
}

fn parse_tag(cursor: &mut ByteCursor, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if cursor.expect_next_byte()? != expected {
			return Err(cursor.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

fn parse_array(cursor: &mut ByteCursor, depth: usize) -> Result<JsonValue> {
	cursor.advance(); // '['
	let mut entries = Vec::new();

	cursor.skip_whitespace();
	if cursor.peek() == Some(b']') {
		cursor.advance();
		return Ok(JsonValue::Array(JsonArray(entries)));
	}

	loop {
		entries.push(parse_value(cursor, depth + 1)?);
		cursor.skip_whitespace();
		match cursor.expect_next_byte()? {
			b',' => continue,
			b']' => break,
			_ => return Err(cursor.format_error("parsing array, expected ',' or ']'")),
		}
	}
	Ok(JsonValue::Array(JsonArray(entries)))
}

fn parse_object(cursor: &mut ByteCursor, depth: usize) -> Result<JsonValue> {
	cursor.advance(); // '{'
	let mut object = JsonObject::new();

	cursor.skip_whitespace();
	if cursor.peek() == Some(b'}') {
		cursor.advance();
		return Ok(JsonValue::Object(object));
	}

	loop {
		cursor.skip_whitespace();
		if cursor.expect_peeked_byte()? != b'"' {
			cursor.advance();
			return Err(cursor.format_error("parsing object, expected '\"'"));
		}
		let key = parse_string(cursor)?;

		cursor.skip_whitespace();
		if cursor.expect_next_byte()? != b':' {
			return Err(cursor.format_error("expected ':'"));
		}

		let value = parse_value(cursor, depth + 1)?;
		object.0.insert(key, value);

		cursor.skip_whitespace();
		match cursor.expect_next_byte()? {
			b',' => continue,
			b'}' => break,
			_ => return Err(cursor.format_error("parsing object, expected ',' or '}'")),
		}
	}
	Ok(JsonValue::Object(object))
}

fn parse_string(cursor: &mut ByteCursor) -> Result<String> {
	cursor.advance(); // '"'
	let mut bytes = Vec::with_capacity(32);

	loop {
		match cursor.expect_next_byte()? {
			b'"' => break,
			b'\\' => match cursor.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let c = parse_unicode_escape(cursor)?;
					let mut buffer = [0u8; 4];
					bytes.extend_from_slice(c.encode_utf8(&mut buffer).as_bytes());
				}
				_ => return Err(cursor.format_error("invalid escape sequence")),
			},
			c if c < 0x20 => return Err(cursor.format_error("unescaped control character in string")),
			c => bytes.push(c),
		}
	}

	// the input is a &str and escapes produce valid UTF-8
	String::from_utf8(bytes).map_err(|_| cursor.format_error("invalid UTF-8 in string"))
}

/// Reads the `XXXX` of a `\uXXXX` escape, combining surrogate pairs.
fn parse_unicode_escape(cursor: &mut ByteCursor) -> Result<char> {
	let high = parse_hex4(cursor)?;
	if !(0xD800..0xDC00).contains(&high) {
		return char::from_u32(u32::from(high)).ok_or_else(|| cursor.format_error("invalid unicode code point"));
	}

	if cursor.expect_next_byte()? != b'\\' || cursor.expect_next_byte()? != b'u' {
		return Err(cursor.format_error("expected low surrogate"));
	}
	let low = parse_hex4(cursor)?;
	if !(0xDC00..0xE000).contains(&low) {
		return Err(cursor.format_error("invalid low surrogate"));
	}
	let code_point = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
	char::from_u32(code_point).ok_or_else(|| cursor.format_error("invalid unicode code point"))
}

fn parse_hex4(cursor: &mut ByteCursor) -> Result<u16> {
	let mut value: u16 = 0;
	for _ in 0..4 {
		let byte = cursor.expect_next_byte()?;
		let digit = (byte as char)
			.to_digit(16)
			.ok_or_else(|| cursor.format_error("invalid hex digit in unicode escape"))?;
		value = value * 16 + digit as u16;
	}
	Ok(value)
}

fn parse_number(cursor: &mut ByteCursor) -> Result<f64> {
	let mut number = String::with_capacity(16);

	if cursor.peek() == Some(b'-') {
		number.push('-');
		cursor.advance();
	}

	// Integer part, no leading zeros
	match cursor.expect_next_byte()? {
		b'0' => {
			number.push('0');
			if let Some(b'0'..=b'9') = cursor.peek() {
				cursor.advance();
				return Err(cursor.format_error("leading zeros are not allowed"));
			}
		}
		c @ b'1'..=b'9' => {
			number.push(c as char);
			push_digits(cursor, &mut number);
		}
		_ => return Err(cursor.format_error("expected digits in number")),
	}

	// Fractional part
	if cursor.peek() == Some(b'.') {
		number.push('.');
		cursor.advance();
		if push_digits(cursor, &mut number) == 0 {
			cursor.advance();
			return Err(cursor.format_error("expected digits after decimal point"));
		}
	}

	// Exponent part
	if let Some(c @ (b'e' | b'E')) = cursor.peek() {
		number.push(c as char);
		cursor.advance();
		if let Some(c @ (b'+' | b'-')) = cursor.peek() {
			number.push(c as char);
			cursor.advance();
		}
		if push_digits(cursor, &mut number) == 0 {
			cursor.advance();
			return Err(cursor.format_error("expected digits after exponent"));
		}
	}

	number
		.parse::<f64>()
		.map_err(|_| cursor.format_error("invalid number"))
}

fn push_digits(cursor: &mut ByteCursor, number: &mut String) -> usize {
	let mut count = 0;
	while let Some(c @ b'0'..=b'9') = cursor.peek() {
		number.push(c as char);
		cursor.advance();
		count += 1;
	}
	count
}

fn shorten(json: &str) -> String {
	const MAX_CHARS: usize = 64;
	if json.chars().count() <= MAX_CHARS {
		json.to_string()
	} else {
		let mut short: String = json.chars().take(MAX_CHARS).collect();
		short.push('…');
		short
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn v<T>(input: T) -> JsonValue
	where
		JsonValue: From<T>,
	{
		JsonValue::from(input)
	}

	fn obj<T>(input: Vec<(&str, T)>) -> JsonValue
	where
		JsonValue: From<T>,
	{
		JsonValue::Object(JsonObject::from(input))
	}

	fn root_cause(json: &str) -> String {
		parse_json_str(json).unwrap_err().chain().last().unwrap().to_string()
	}

	#[test]
	fn tile_matrix_fragment() {
		let data = r#"{"id":"0","variableMatrixWidths":[{"coalesce":2,"minTileRow":0,"maxTileRow":0}]}"#;
		assert_eq!(
			parse_json_str(data).unwrap(),
			obj(vec![
				("id", v("0")),
				(
					"variableMatrixWidths",
					v(vec![obj(vec![("coalesce", 2), ("minTileRow", 0), ("maxTileRow", 0)])])
				)
			])
		);
	}

	#[test]
	fn whitespace_everywhere() -> Result<()> {
		let expected = obj(vec![(
			"a",
			v(vec![
				obj(vec![("b", v(7)), ("c", v(true))]),
				obj(vec![("d", v(false)), ("e", JsonValue::Null), ("f", v("g"))]),
			]),
		)]);
		let data = r#"_{_"a"_:_[_{_"b"_:_7_,_"c"_:_true_}_,_{_"d"_:_false_,_"e"_:_null_,_"f"_:_"g"_}_]_}_"#;
		for whitespace in ["", " ", "\t", "\n", "\r"] {
			assert_eq!(parse_json_str(&data.replace('_', whitespace))?, expected);
		}
		Ok(())
	}

	#[rstest]
	#[case("0", 0.0)]
	#[case("-0", -0.0)]
	#[case("42", 42.0)]
	#[case("-17", -17.0)]
	#[case("2.5", 2.5)]
	#[case("1e3", 1000.0)]
	#[case("1E+2", 100.0)]
	#[case("25e-1", 2.5)]
	#[case("9007199254740991", 9_007_199_254_740_991.0)]
	fn numbers(#[case] input: &str, #[case] expected: f64) {
		assert_eq!(parse_json_str(input).unwrap(), JsonValue::Number(expected));
	}

	#[rstest]
	#[case(r#""plain""#, "plain")]
	#[case(r#""a\"b\\c\/d""#, "a\"b\\c/d")]
	#[case(r#""\b\f\n\r\t""#, "\x08\x0c\n\r\t")]
	#[case(r#""\u00e9t\u00E9""#, "été")]
	#[case(r#""\ud83d\ude00""#, "😀")]
	#[case(r#""ünïcödé 🌍""#, "ünïcödé 🌍")]
	fn strings(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(parse_json_str(input).unwrap(), v(expected));
	}

	#[test]
	fn empty_containers() {
		assert_eq!(parse_json_str("{}").unwrap(), JsonValue::Object(JsonObject::new()));
		assert_eq!(parse_json_str(" [ ] ").unwrap(), JsonValue::new_array());
	}

	#[test]
	fn duplicate_keys_keep_last() {
		assert_eq!(parse_json_str(r#"{"a":1,"a":2}"#).unwrap(), obj(vec![("a", 2)]));
	}

	#[rstest]
	#[case("", "unexpected end at position 0: <EOF>")]
	#[case("not json", "unexpected character while parsing tag 'null' at position 1: no")]
	#[case("{invalid json}", "parsing object, expected '\"' at position 1: {i")]
	#[case(r#"{"city":"Nantes","country","France"}"#, "expected ':' at position 26: ntes\",\"country\",")]
	#[case("[1,2", "unexpected end at position 3: [1,2<EOF>")]
	#[case("[1 2]", "parsing array, expected ',' or ']' at position 3: [1 2")]
	#[case("{} x", "unexpected trailing characters at position 3: {} x<EOF>")]
	#[case("01", "leading zeros are not allowed at position 1: 01<EOF>")]
	#[case("1.", "expected digits after decimal point at position 1: 1.<EOF>")]
	#[case("-", "unexpected end at position 0: -<EOF>")]
	#[case("\"abc", "unexpected end at position 3: \"abc<EOF>")]
	#[case("\"\\x\"", "invalid escape sequence at position 2: \"\\x")]
	#[case("'single'", "unexpected character ''' at position 0: '")]
	fn errors(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(root_cause(input), expected);
	}

	#[test]
	fn error_context_contains_input() {
		let error = parse_json_str("not json").unwrap_err();
		assert_eq!(error.to_string(), "while parsing JSON 'not json'");
	}

	#[test]
	fn deep_nesting_is_rejected() {
		let data = "[".repeat(MAX_DEPTH + 2);
		assert!(root_cause(&data).starts_with("nesting too deep"));
	}
}
