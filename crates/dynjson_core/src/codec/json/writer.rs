use std::io;

use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};

use crate::codec::json::{JsonNode, JsonNumber};
use crate::codec::{CodecError, Result};

/// Receiver of JSON write events.
///
/// Values inside an object must be preceded by [`JsonSink::key`].
pub trait JsonSink {
	/// Write `null`.
	fn null(&mut self) -> Result<()>;
	/// Write a boolean.
	fn bool(&mut self, value: bool) -> Result<()>;
	/// Write a signed integer literal.
	fn int(&mut self, value: i64) -> Result<()>;
	/// Write an unsigned integer literal.
	fn uint(&mut self, value: u64) -> Result<()>;
	/// Write a floating literal; non-finite values are written as `NaN`, `Infinity`, or `-Infinity`.
	fn double(&mut self, value: f64) -> Result<()>;
	/// Write a string.
	fn string(&mut self, value: &str) -> Result<()>;
	/// Open an array.
	fn begin_array(&mut self) -> Result<()>;
	/// Close the innermost array.
	fn end_array(&mut self) -> Result<()>;
	/// Open an object.
	fn begin_object(&mut self) -> Result<()>;
	/// Write the key of the next object member.
	fn key(&mut self, name: &str) -> Result<()>;
	/// Close the innermost object.
	fn end_object(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy)]
enum Frame {
	Array { first: bool },
	Object { first: bool, has_key: bool },
}

/// Text writer driven by `serde_json` formatters.
pub struct TextWriter<W, F = CompactFormatter> {
	out: W,
	formatter: F,
	stack: Vec<Frame>,
}

impl<W: io::Write> TextWriter<W> {
	/// Writer producing compact output.
	pub fn compact(out: W) -> Self {
		Self::with_formatter(out, CompactFormatter)
	}
}

impl<W: io::Write> TextWriter<W, PrettyFormatter<'static>> {
	/// Writer producing indented output (four spaces per level).
	pub fn pretty(out: W) -> Self {
		Self::with_formatter(out, PrettyFormatter::with_indent(b"    "))
	}
}

impl<W: io::Write, F: Formatter> TextWriter<W, F> {
	/// Writer using a caller-supplied formatter.
	pub fn with_formatter(out: W, formatter: F) -> Self {
		Self {
			out,
			formatter,
			stack: Vec::new(),
		}
	}

	/// Return the underlying output.
	pub fn into_inner(self) -> W {
		self.out
	}

	fn before_value(&mut self) -> Result<()> {
		match self.stack.last_mut() {
			None => Ok(()),
			Some(Frame::Array { first }) => {
				self.formatter.begin_array_value(&mut self.out, *first)?;
				*first = false;
				Ok(())
			}
			Some(Frame::Object { has_key: true, .. }) => Ok(()),
			Some(Frame::Object { has_key: false, .. }) => Err(misuse("object value written without a key")),
		}
	}

	fn after_value(&mut self) -> Result<()> {
		match self.stack.last_mut() {
			None => Ok(()),
			Some(Frame::Array { .. }) => Ok(self.formatter.end_array_value(&mut self.out)?),
			Some(Frame::Object { has_key, .. }) => {
				*has_key = false;
				Ok(self.formatter.end_object_value(&mut self.out)?)
			}
		}
	}

	fn write_escaped(&mut self, value: &str) -> Result<()> {
		serde_json::to_writer(&mut self.out, value).map_err(io::Error::from)?;
		Ok(())
	}
}

impl<W: io::Write, F: Formatter> JsonSink for TextWriter<W, F> {
	fn null(&mut self) -> Result<()> {
		self.before_value()?;
		self.formatter.write_null(&mut self.out)?;
		self.after_value()
	}

	fn bool(&mut self, value: bool) -> Result<()> {
		self.before_value()?;
		self.formatter.write_bool(&mut self.out, value)?;
		self.after_value()
	}

	fn int(&mut self, value: i64) -> Result<()> {
		self.before_value()?;
		self.formatter.write_i64(&mut self.out, value)?;
		self.after_value()
	}

	fn uint(&mut self, value: u64) -> Result<()> {
		self.before_value()?;
		self.formatter.write_u64(&mut self.out, value)?;
		self.after_value()
	}

	fn double(&mut self, value: f64) -> Result<()> {
		self.before_value()?;
		if value.is_nan() {
			self.out.write_all(b"NaN")?;
		} else if value.is_infinite() {
			self.out.write_all(if value > 0.0 { b"Infinity" as &[u8] } else { b"-Infinity" })?;
		} else {
			self.formatter.write_f64(&mut self.out, value)?;
		}
		self.after_value()
	}

	fn string(&mut self, value: &str) -> Result<()> {
		self.before_value()?;
		self.write_escaped(value)?;
		self.after_value()
	}

	fn begin_array(&mut self) -> Result<()> {
		self.before_value()?;
		self.formatter.begin_array(&mut self.out)?;
		self.stack.push(Frame::Array { first: true });
		Ok(())
	}

	fn end_array(&mut self) -> Result<()> {
		match self.stack.pop() {
			Some(Frame::Array { .. }) => {}
			_ => return Err(misuse("end_array without matching begin_array")),
		}
		self.formatter.end_array(&mut self.out)?;
		self.after_value()
	}

	fn begin_object(&mut self) -> Result<()> {
		self.before_value()?;
		self.formatter.begin_object(&mut self.out)?;
		self.stack.push(Frame::Object { first: true, has_key: false });
		Ok(())
	}

	fn key(&mut self, name: &str) -> Result<()> {
		let first = match self.stack.last_mut() {
			Some(Frame::Object { first, has_key: false }) => std::mem::replace(first, false),
			_ => return Err(misuse("key written outside an object")),
		};
		self.formatter.begin_object_key(&mut self.out, first)?;
		self.write_escaped(name)?;
		self.formatter.end_object_key(&mut self.out)?;
		self.formatter.begin_object_value(&mut self.out)?;
		if let Some(Frame::Object { has_key, .. }) = self.stack.last_mut() {
			*has_key = true;
		}
		Ok(())
	}

	fn end_object(&mut self) -> Result<()> {
		match self.stack.pop() {
			Some(Frame::Object { has_key: false, .. }) => {}
			_ => return Err(misuse("end_object without matching begin_object")),
		}
		self.formatter.end_object(&mut self.out)?;
		self.after_value()
	}
}

fn misuse(message: &'static str) -> CodecError {
	CodecError::Io(io::Error::new(io::ErrorKind::InvalidInput, message))
}

enum Partial {
	Array(Vec<JsonNode>),
	Object(Vec<(String, JsonNode)>, Option<String>),
}

/// Sink that assembles a [`JsonNode`] tree instead of text.
#[derive(Default)]
pub struct NodeSink {
	stack: Vec<Partial>,
	root: Option<JsonNode>,
}

impl NodeSink {
	/// Create an empty sink.
	pub fn new() -> Self {
		Self::default()
	}

	/// Return the completed document, if one top-level value was written.
	pub fn finish(self) -> Option<JsonNode> {
		if self.stack.is_empty() { self.root } else { None }
	}

	fn push(&mut self, node: JsonNode) -> Result<()> {
		match self.stack.last_mut() {
			None if self.root.is_none() => {
				self.root = Some(node);
				Ok(())
			}
			None => Err(misuse("more than one top-level value")),
			Some(Partial::Array(items)) => {
				items.push(node);
				Ok(())
			}
			Some(Partial::Object(members, key)) => match key.take() {
				Some(key) => {
					members.push((key, node));
					Ok(())
				}
				None => Err(misuse("object value written without a key")),
			},
		}
	}
}

impl JsonSink for NodeSink {
	fn null(&mut self) -> Result<()> {
		self.push(JsonNode::Null)
	}

	fn bool(&mut self, value: bool) -> Result<()> {
		self.push(JsonNode::Bool(value))
	}

	fn int(&mut self, value: i64) -> Result<()> {
		let number = if value >= 0 { JsonNumber::U64(value as u64) } else { JsonNumber::I64(value) };
		self.push(JsonNode::Number(number))
	}

	fn uint(&mut self, value: u64) -> Result<()> {
		self.push(JsonNode::Number(JsonNumber::U64(value)))
	}

	fn double(&mut self, value: f64) -> Result<()> {
		self.push(JsonNode::Number(JsonNumber::F64(value)))
	}

	fn string(&mut self, value: &str) -> Result<()> {
		self.push(JsonNode::String(value.to_owned()))
	}

	fn begin_array(&mut self) -> Result<()> {
		self.stack.push(Partial::Array(Vec::new()));
		Ok(())
	}

	fn end_array(&mut self) -> Result<()> {
		match self.stack.pop() {
			Some(Partial::Array(items)) => self.push(JsonNode::Array(items)),
			_ => Err(misuse("end_array without matching begin_array")),
		}
	}

	fn begin_object(&mut self) -> Result<()> {
		self.stack.push(Partial::Object(Vec::new(), None));
		Ok(())
	}

	fn key(&mut self, name: &str) -> Result<()> {
		match self.stack.last_mut() {
			Some(Partial::Object(_, key @ None)) => {
				*key = Some(name.to_owned());
				Ok(())
			}
			_ => Err(misuse("key written outside an object")),
		}
	}

	fn end_object(&mut self) -> Result<()> {
		match self.stack.pop() {
			Some(Partial::Object(members, None)) => self.push(JsonNode::Object(members)),
			_ => Err(misuse("end_object without matching begin_object")),
		}
	}
}
