//! JSON document model, text reader, and event writers.

mod reader;
mod writer;


pub use reader::{parse, parse_with_depth};
pub use writer::{JsonSink, NodeSink, TextWriter};

/// Parsed JSON document node.
///
/// Object members keep document order and duplicates; resolving duplicate keys is left to the decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonNode {
	/// `null`.
	Null,
	/// `true` or `false`.
	Bool(bool),
	/// Any number, including the `NaN`/`Infinity` extension literals.
	Number(JsonNumber),
	/// String.
	String(String),
	/// Array.
	Array(Vec<JsonNode>),
	/// Object members in document order.
	Object(Vec<(String, JsonNode)>),
}

/// Number representation reported by the reader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNumber {
	/// Non-negative integer literal.
	U64(u64),
	/// Negative integer literal.
	I64(i64),
	/// Fractional, exponent, out-of-range, or non-finite literal.
	F64(f64),
}

impl JsonNumber {
	/// Value widened to `f64`.
	pub fn as_f64(self) -> f64 {
		match self {
			Self::U64(value) => value as f64,
			Self::I64(value) => value as f64,
			Self::F64(value) => value,
		}
	}

	/// True for integral source representations.
	pub fn is_integer(self) -> bool {
		matches!(self, Self::U64(_) | Self::I64(_))
	}
}

/// Type tag of a node; `true` and `false` share [`JsonType::Bool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
	/// `null`.
	Null,
	/// Boolean.
	Bool,
	/// Number.
	Number,
	/// String.
	String,
	/// Array.
	Array,
	/// Object.
	Object,
}

impl JsonType {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl JsonNode {
	/// Type tag of this node.
	pub fn json_type(&self) -> JsonType {
		match self {
			Self::Null => JsonType::Null,
			Self::Bool(_) => JsonType::Bool,
			Self::Number(_) => JsonType::Number,
			Self::String(_) => JsonType::String,
			Self::Array(_) => JsonType::Array,
			Self::Object(_) => JsonType::Object,
		}
	}
}

impl From<serde_json::Value> for JsonNode {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(value) => Self::Bool(value),
			serde_json::Value::Number(number) => Self::Number(JsonNumber::from(&number)),
			serde_json::Value::String(value) => Self::String(value),
			serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			serde_json::Value::Object(map) => Self::Object(map.into_iter().map(|(key, value)| (key, Self::from(value))).collect()),
		}
	}
}

impl From<&serde_json::Number> for JsonNumber {
	fn from(number: &serde_json::Number) -> Self {
		if let Some(value) = number.as_u64() {
			Self::U64(value)
		} else if let Some(value) = number.as_i64() {
			Self::I64(value)
		} else {
			Self::F64(number.as_f64().unwrap_or(f64::NAN))
		}
	}
}
