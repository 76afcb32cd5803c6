// ══════════════════════════════════════════════════════════════════════════════
// DECODE MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Message input for the leveled console calls, and the best-effort normalizer
// that turns it into printable text. Nothing here fails except coercion of a
// `Display` value whose formatter reports an error.

use std::borrow::Cow;
use std::fmt::{self, Write};

/// Token treated as "no value", matched after trimming.
pub const NULL_TOKEN: &str = "NULL";

/// Anything a console call accepts as its message.
#[derive(Clone, Copy)]
pub enum Message<'a> {
	Null,
	Text(&'a str),
	Bytes(&'a [u8]),
	Args(fmt::Arguments<'a>),
	Display(&'a dyn fmt::Display),
}

/// A message after coercion: either text or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
	Text(Cow<'a, str>),
	Bytes(Cow<'a, [u8]>),
}

impl<'a> Message<'a> {
	/// Wraps any `Display` value; it is formatted when the message is rendered.
	pub fn display(value: &'a dyn fmt::Display) -> Self {
		Message::Display(value)
	}

	/// Converts the message to text or bytes, running the formatter for
	/// `Args` and `Display` messages.
	pub fn coerce(&self) -> Result<Option<Value<'a>>, fmt::Error> {
		Ok(match *self {
			Message::Null => None,
			Message::Text(text) => Some(Value::Text(Cow::Borrowed(text))),
			Message::Bytes(bytes) => Some(Value::Bytes(Cow::Borrowed(bytes))),
			Message::Args(args) => {
				let mut text = String::new();
				text.write_fmt(args)?;
				Some(Value::Text(Cow::Owned(text)))
			}
			Message::Display(value) => {
				let mut text = String::new();
				write!(text, "{}", value)?;
				Some(Value::Text(Cow::Owned(text)))
			}
		})
	}
}

impl fmt::Debug for Message<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Message::Null => f.write_str("Null"),
			Message::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Message::Bytes(bytes) => f.debug_tuple("Bytes").field(bytes).finish(),
			Message::Args(args) => f.debug_tuple("Args").field(args).finish(),
			Message::Display(_) => f.write_str("Display(..)"),
		}
	}
}

impl<'a> From<&'a str> for Message<'a> {
	fn from(text: &'a str) -> Self { Message::Text(text) }
}

impl<'a> From<&'a String> for Message<'a> {
	fn from(text: &'a String) -> Self { Message::Text(text) }
}

impl<'a> From<&'a [u8]> for Message<'a> {
	fn from(bytes: &'a [u8]) -> Self { Message::Bytes(bytes) }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Message<'a> {
	fn from(bytes: &'a [u8; N]) -> Self { Message::Bytes(bytes) }
}

impl<'a> From<&'a Vec<u8>> for Message<'a> {
	fn from(bytes: &'a Vec<u8>) -> Self { Message::Bytes(bytes) }
}

impl<'a> From<fmt::Arguments<'a>> for Message<'a> {
	fn from(args: fmt::Arguments<'a>) -> Self { Message::Args(args) }
}

impl<'a, M: Into<Message<'a>>> From<Option<M>> for Message<'a> {
	fn from(value: Option<M>) -> Self {
		value.map_or(Message::Null, Into::into)
	}
}

impl fmt::Display for Value<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Text(text) => f.write_str(text),
			Value::Bytes(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
		}
	}
}

impl<'a> From<&'a str> for Value<'a> {
	fn from(text: &'a str) -> Self { Value::Text(Cow::Borrowed(text)) }
}

impl<'a> From<&'a [u8]> for Value<'a> {
	fn from(bytes: &'a [u8]) -> Self { Value::Bytes(Cow::Borrowed(bytes)) }
}

/// Normalizes a coerced message into printable text.
///
/// Absent values, empty text and the `NULL` token all come back as `None`.
/// Bytes are decoded as UTF-8 and fall back to Latin-1, which maps every
/// byte, so ASCII input is covered by either step. Text passes through
/// untouched.
pub fn decode(value: Option<Value<'_>>) -> Option<Cow<'_, str>> {
	let text = match value? {
		Value::Text(text) => text,
		Value::Bytes(bytes) => decode_bytes(bytes),
	};

	if text.is_empty() || text.trim() == NULL_TOKEN {
		return None;
	}
	Some(text)
}

fn decode_bytes(bytes: Cow<'_, [u8]>) -> Cow<'_, str> {
	match bytes {
		Cow::Borrowed(raw) => match std::str::from_utf8(raw) {
			Ok(text) => Cow::Borrowed(text),
			Err(_) => Cow::Owned(latin1(raw)),
		},
		Cow::Owned(raw) => match String::from_utf8(raw) {
			Ok(text) => Cow::Owned(text),
			Err(e) => Cow::Owned(latin1(e.as_bytes())),
		},
	}
}

fn latin1(raw: &[u8]) -> String {
	raw.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Failing;

	impl fmt::Display for Failing {
		fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
			Err(fmt::Error)
		}
	}

	#[test]
	fn test_decode_absent_and_empty() {
		assert_eq!(decode(None), None);
		assert_eq!(decode(Some("".into())), None);
		assert_eq!(decode(Some(b"".as_slice().into())), None);
	}

	#[test]
	fn test_decode_null_token() {
		assert_eq!(decode(Some("NULL".into())), None);
		assert_eq!(decode(Some("  NULL\n".into())), None);
		assert_eq!(decode(Some(b"NULL".as_slice().into())), None);
		assert_eq!(decode(Some("null".into())).as_deref(), Some("null"));
	}

	#[test]
	fn test_decode_text_unchanged() {
		let decoded = decode(Some("hello".into()));
		assert!(matches!(decoded, Some(Cow::Borrowed("hello"))));
	}

	#[test]
	fn test_decode_utf8_bytes() {
		let raw = "héllo ✔".as_bytes();
		assert_eq!(decode(Some(raw.into())).as_deref(), Some("héllo ✔"));
	}

	#[test]
	fn test_decode_latin1_fallback() {
		// 0xE9 alone is invalid UTF-8; Latin-1 reads it as 'é'.
		let raw: &[u8] = &[b'c', b'a', b'f', 0xE9];
		assert_eq!(decode(Some(raw.into())).as_deref(), Some("café"));
		let owned = Value::Bytes(Cow::Owned(vec![0xFF, b'!']));
		assert_eq!(decode(Some(owned)).as_deref(), Some("ÿ!"));
	}

	#[test]
	fn test_coerce_variants() {
		let n = 42;
		assert_eq!(Message::Null.coerce(), Ok(None));
		assert_eq!(Message::from("hi").coerce(), Ok(Some("hi".into())));
		assert_eq!(Message::display(&n).coerce(), Ok(Some(Value::Text(Cow::Owned("42".into())))));
		assert_eq!(Message::from(format_args!("{}-{}", 1, 2)).coerce(), Ok(Some(Value::Text(Cow::Owned("1-2".into())))));
		assert_eq!(Message::from(b"ab").coerce(), Ok(Some(b"ab".as_slice().into())));
		assert_eq!(Message::from(None::<&str>).coerce(), Ok(None));
	}

	#[test]
	fn test_coerce_failure_propagates() {
		assert_eq!(Message::display(&Failing).coerce(), Err(fmt::Error));
	}

	#[test]
	fn test_value_display_is_lossy_for_bytes() {
		let raw: &[u8] = &[b'o', b'k', 0xFF];
		assert_eq!(Value::from(raw).to_string(), "ok\u{FFFD}");
		assert_eq!(Value::from("NULL").to_string(), "NULL");
	}
}
