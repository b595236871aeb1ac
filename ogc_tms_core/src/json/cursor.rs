//! A byte cursor over an in-memory JSON document.
//!
//! `ByteCursor` supports peeking at the next byte, consuming bytes one by one and
//! producing errors that point at the current position, followed by a short
//! snippet of the bytes read just before it.

use anyhow::{Error, Result, anyhow};

const ERROR_SNIPPET_SIZE: usize = 16;

pub struct ByteCursor<'a> {
	bytes: &'a [u8],
	position: usize,
}

impl<'a> ByteCursor<'a> {
	pub fn new(text: &'a str) -> Self {
		ByteCursor {
			bytes: text.as_bytes(),
			position: 0,
		}
	}

	#[inline]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.bytes.len() {
			self.position += 1;
		}
	}

	#[inline]
	pub fn is_at_end(&self) -> bool {
		self.position >= self.bytes.len()
	}

	/// Returns the next byte and moves past it.
	///
	/// # Errors
	/// Returns an error at the end of the input.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		let byte = self.expect_peeked_byte()?;
		self.position += 1;
		Ok(byte)
	}

	/// Returns the next byte without moving.
	///
	/// # Errors
	/// Returns an error at the end of the input.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
			self.position += 1;
		}
	}

	/// Builds an error for the byte just consumed, e.g. `expected ':' at position 11: {"a" 1`.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let end = self.position.min(self.bytes.len());
		let start = end.saturating_sub(ERROR_SNIPPET_SIZE);
		let mut snippet = String::from_utf8_lossy(&self.bytes[start..end]).into_owned();
		if self.is_at_end() {
			snippet.push_str("<EOF>");
		}
		anyhow!("{msg} at position {}: {snippet}", self.position.saturating_sub(1))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn peek_and_consume() {
		let mut cursor = ByteCursor::new("ab");
		assert_eq!(cursor.peek(), Some(b'a'));
		assert_eq!(cursor.expect_next_byte().unwrap(), b'a');
		assert_eq!(cursor.position, 1);
		assert_eq!(cursor.expect_next_byte().unwrap(), b'b');
		assert!(cursor.is_at_end());
		assert!(cursor.expect_next_byte().is_err());
		assert!(cursor.expect_peeked_byte().is_err());
	}

	#[test]
	fn advance_stops_at_end() {
		let mut cursor = ByteCursor::new("x");
		cursor.advance();
		cursor.advance();
		assert_eq!(cursor.position, 1);
		assert_eq!(cursor.peek(), None);
	}

	#[test]
	fn whitespace_is_skipped() {
		let mut cursor = ByteCursor::new(" \t\r\n1");
		cursor.skip_whitespace();
		assert_eq!(cursor.peek(), Some(b'1'));
	}

	#[test]
	fn error_contains_position_and_snippet() {
		let mut cursor = ByteCursor::new("0123456789abcdefghij");
		for _ in 0..18 {
			cursor.advance();
		}
		assert_eq!(
			cursor.format_error("oops").to_string(),
			"oops at position 17: 23456789abcdefgh"
		);
	}

	#[test]
	fn error_marks_end_of_input() {
		let mut cursor = ByteCursor::new("[1");
		cursor.advance();
		cursor.advance();
		assert_eq!(cursor.format_error("unexpected end").to_string(), "unexpected end at position 1: [1<EOF>");
	}
}
