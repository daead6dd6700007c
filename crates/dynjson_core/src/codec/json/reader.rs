use crate::codec::json::{JsonNode, JsonNumber};
use crate::codec::{CodecError, DEFAULT_MAX_DEPTH, Result};

/// Parse a complete JSON document with the default nesting limit.
pub fn parse(text: &str) -> Result<JsonNode> {
	parse_with_depth(text, DEFAULT_MAX_DEPTH)
}

/// Parse a complete JSON document, failing with `DepthExceeded` past `max_depth` nested containers.
///
/// Besides standard JSON the reader accepts `NaN`, `Infinity` and `-Infinity` as numbers.
pub fn parse_with_depth(text: &str, max_depth: u32) -> Result<JsonNode> {
	let mut reader = Reader::new(text, max_depth);
	reader.skip_ws();
	if reader.remaining() == 0 {
		return Err(reader.error_at(reader.pos(), "The document is empty."));
	}
	let node = reader.read_value(0)?;
	reader.skip_ws();
	if reader.remaining() > 0 {
		return Err(reader.error_at(reader.pos(), "The document root must not be followed by other values."));
	}
	Ok(node)
}

/// Bounded cursor over the document text.
struct Reader<'a> {
	text: &'a str,
	bytes: &'a [u8],
	pos: usize,
	max_depth: u32,
}

impl<'a> Reader<'a> {
	fn new(text: &'a str, max_depth: u32) -> Self {
		Self {
			text,
			bytes: text.as_bytes(),
			pos: 0,
			max_depth,
		}
	}

	fn pos(&self) -> usize {
		self.pos
	}

	fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	fn rest(&self) -> &'a [u8] {
		&self.bytes[self.pos.min(self.bytes.len())..]
	}

	fn skip_ws(&mut self) {
		while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
			self.pos += 1;
		}
	}

	fn error_at(&self, offset: usize, message: impl Into<String>) -> CodecError {
		CodecError::Parse {
			offset,
			message: message.into(),
		}
	}

	fn read_value(&mut self, depth: u32) -> Result<JsonNode> {
		match self.peek() {
			Some(b'{') => self.read_object(depth + 1),
			Some(b'[') => self.read_array(depth + 1),
			Some(b'"') => self.read_string().map(JsonNode::String),
			Some(b'n') => self.read_literal("null", JsonNode::Null),
			Some(b't') => self.read_literal("true", JsonNode::Bool(true)),
			Some(b'f') => self.read_literal("false", JsonNode::Bool(false)),
			Some(b'N') => self.read_literal("NaN", JsonNode::Number(JsonNumber::F64(f64::NAN))),
			Some(b'I') => self.read_literal("Infinity", JsonNode::Number(JsonNumber::F64(f64::INFINITY))),
			Some(b'-') if self.rest().starts_with(b"-Infinity") => {
				self.read_literal("-Infinity", JsonNode::Number(JsonNumber::F64(f64::NEG_INFINITY)))
			}
			Some(b'-' | b'0'..=b'9') => self.read_number().map(JsonNode::Number),
			_ => Err(self.error_at(self.pos, "Invalid value.")),
		}
	}

	fn enter(&self, depth: u32) -> Result<()> {
		if depth > self.max_depth {
			return Err(CodecError::DepthExceeded { max_depth: self.max_depth });
		}
		Ok(())
	}

	fn read_literal(&mut self, literal: &str, node: JsonNode) -> Result<JsonNode> {
		if !self.rest().starts_with(literal.as_bytes()) {
			return Err(self.error_at(self.pos, "Invalid value."));
		}
		self.pos += literal.len();
		Ok(node)
	}

	fn read_array(&mut self, depth: u32) -> Result<JsonNode> {
		self.enter(depth)?;
		self.pos += 1;
		let mut items = Vec::new();
		self.skip_ws();
		if self.peek() == Some(b']') {
			self.pos += 1;
			return Ok(JsonNode::Array(items));
		}

		loop {
			self.skip_ws();
			items.push(self.read_value(depth)?);
			self.skip_ws();
			match self.peek() {
				Some(b',') => self.pos += 1,
				Some(b']') => {
					self.pos += 1;
					return Ok(JsonNode::Array(items));
				}
				_ => return Err(self.error_at(self.pos, "Missing a comma or ']' after an array element.")),
			}
		}
	}

	fn read_object(&mut self, depth: u32) -> Result<JsonNode> {
		self.enter(depth)?;
		self.pos += 1;
		let mut members = Vec::new();
		self.skip_ws();
		if self.peek() == Some(b'}') {
			self.pos += 1;
			return Ok(JsonNode::Object(members));
		}

		loop {
			self.skip_ws();
			if self.peek() != Some(b'"') {
				return Err(self.error_at(self.pos, "Missing a name for object member."));
			}
			let key = self.read_string()?;
			self.skip_ws();
			if self.peek() != Some(b':') {
				return Err(self.error_at(self.pos, "Missing a colon after a name of object member."));
			}
			self.pos += 1;
			self.skip_ws();
			let value = self.read_value(depth)?;
			members.push((key, value));
			self.skip_ws();
			match self.peek() {
				Some(b',') => self.pos += 1,
				Some(b'}') => {
					self.pos += 1;
					return Ok(JsonNode::Object(members));
				}
				_ => return Err(self.error_at(self.pos, "Missing a comma or '}' after an object member.")),
			}
		}
	}

	/// Find the closing quote and let `serde_json` unescape and validate the literal.
	fn read_string(&mut self) -> Result<String> {
		let start = self.pos;
		let mut end = start + 1;
		loop {
			match self.bytes.get(end) {
				Some(b'"') => break,
				Some(b'\\') => end += 2,
				Some(_) => end += 1,
				None => return Err(self.error_at(start, "Missing a closing quotation mark in string.")),
			}
		}

		let literal = &self.text[start..=end];
		let value = serde_json::from_str::<String>(literal).map_err(|err| {
			let column = err.column().saturating_sub(1);
			self.error_at(start + column, err.to_string())
		})?;
		self.pos = end + 1;
		Ok(value)
	}

	/// Scan the number grammar, then classify the literal through `serde_json::Number`.
	fn read_number(&mut self) -> Result<JsonNumber> {
		let start = self.pos;
		let mut end = start;
		if self.bytes.get(end) == Some(&b'-') {
			end += 1;
		}

		match self.bytes.get(end) {
			Some(b'0') => end += 1,
			Some(b'1'..=b'9') => end = self.skip_digits(end),
			_ => return Err(self.error_at(end, "Invalid value.")),
		}

		if self.bytes.get(end) == Some(&b'.') {
			let digits = end + 1;
			end = self.skip_digits(digits);
			if end == digits {
				return Err(self.error_at(end, "Missing fraction part in number."));
			}
		}

		if let Some(b'e' | b'E') = self.bytes.get(end) {
			end += 1;
			if let Some(b'+' | b'-') = self.bytes.get(end) {
				end += 1;
			}
			let digits = end;
			end = self.skip_digits(digits);
			if end == digits {
				return Err(self.error_at(end, "Missing exponent in number."));
			}
		}

		let literal = &self.text[start..end];
		let number = serde_json::from_str::<serde_json::Number>(literal).map_err(|err| self.error_at(start, err.to_string()))?;
		self.pos = end;
		Ok(JsonNumber::from(&number))
	}

	fn skip_digits(&self, mut at: usize) -> usize {
		while let Some(b'0'..=b'9') = self.bytes.get(at) {
			at += 1;
		}
		at
	}
}
