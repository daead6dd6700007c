use tracing::{debug, trace};

use crate::codec::json::{JsonNode, JsonNumber, JsonType, parse_with_depth};
use crate::codec::{
	CodecError, DecodeOptions, IdentifierSanitizer, LogicalArray, MakeValidName, NdArray, NumberScalar, NumericArray, Record, RecordArray,
	Result, Shape, Value,
};


/// Parse JSON text and decode it with the default sanitizer.
pub fn decode_str(text: &str, options: &DecodeOptions) -> Result<Value> {
	Decoder::new(options).decode_str(text)
}

/// Decode an already parsed document with the default sanitizer.
pub fn decode(node: &JsonNode, options: &DecodeOptions) -> Result<Value> {
	Decoder::new(options).decode(node)
}

/// Decode one JSON number; integral representations yield integer-class scalars.
pub fn decode_number(number: JsonNumber) -> NumberScalar {
	if number.is_integer() {
		NumberScalar::integer(number.as_f64())
	} else {
		NumberScalar::double(number.as_f64())
	}
}

/// JSON-to-value decoder bound to options and an identifier sanitizer.
pub struct Decoder<'a> {
	options: &'a DecodeOptions,
	sanitizer: &'a dyn IdentifierSanitizer,
}

impl<'a> Decoder<'a> {
	/// Decoder using [`MakeValidName`] for object keys.
	pub fn new(options: &'a DecodeOptions) -> Self {
		Self {
			options,
			sanitizer: &MakeValidName,
		}
	}

	/// Replace the identifier sanitizer.
	pub fn with_sanitizer(mut self, sanitizer: &'a dyn IdentifierSanitizer) -> Self {
		self.sanitizer = sanitizer;
		self
	}

	/// Parse and decode JSON text.
	pub fn decode_str(&self, text: &str) -> Result<Value> {
		debug!(bytes = text.len(), "decoding json text");
		let node = parse_with_depth(text, self.options.max_depth)?;
		self.decode(&node)
	}

	/// Decode a parsed document.
	pub fn decode(&self, node: &JsonNode) -> Result<Value> {
		self.decode_node(node, 0)
	}

	fn enter(&self, depth: u32) -> Result<u32> {
		let depth = depth + 1;
		if depth > self.options.max_depth {
			return Err(CodecError::DepthExceeded {
				max_depth: self.options.max_depth,
			});
		}
		Ok(depth)
	}

	fn decode_node(&self, node: &JsonNode, depth: u32) -> Result<Value> {
		match node {
			JsonNode::Bool(value) => Ok(Value::Bool(*value)),
			JsonNode::Number(number) => Ok(Value::Number(decode_number(*number))),
			JsonNode::String(text) => Ok(Value::string(text)),
			JsonNode::Object(members) => Ok(Value::Record(self.decode_object(members, depth)?)),
			JsonNode::Null => Ok(Value::Empty),
			JsonNode::Array(items) => self.decode_array(items, depth),
		}
	}

	fn decode_object(&self, members: &[(String, JsonNode)], depth: u32) -> Result<Record> {
		let depth = self.enter(depth)?;
		let mut record = Record::new();
		for (key, value) in members {
			let name = if self.options.make_valid_name {
				self.sanitizer.sanitize(key, &self.options.sanitize)
			} else {
				key.clone()
			};
			record.insert(name, self.decode_node(value, depth)?);
		}
		Ok(record)
	}

	fn decode_array(&self, items: &[JsonNode], depth: u32) -> Result<Value> {
		let depth = self.enter(depth)?;
		let Some(first) = items.first() else {
			return Ok(Value::Empty);
		};

		if let Some(values) = items.iter().map(numeric_element).collect::<Option<Vec<f64>>>() {
			return Ok(Value::Numeric(NumericArray::column(values)));
		}

		let array_type = first.json_type();
		if !items.iter().all(|item| item.json_type() == array_type) {
			return Ok(Value::Cell(self.decode_cell(items, depth)?));
		}

		match array_type {
			JsonType::Bool => {
				let values = items
					.iter()
					.map(|item| match item {
						JsonNode::Bool(value) => Ok(*value),
						other => Err(CodecError::UnidentifiedType {
							kind: other.json_type().as_str(),
						}),
					})
					.collect::<Result<Vec<bool>>>()?;
				Ok(Value::Logical(LogicalArray::column(values)))
			}
			JsonType::String => Ok(Value::Cell(self.decode_cell(items, depth)?)),
			JsonType::Object => self.decode_object_array(items, depth),
			JsonType::Array => self.decode_array_of_arrays(items, depth),
			JsonType::Null | JsonType::Number => Err(CodecError::UnidentifiedType { kind: array_type.as_str() }),
		}
	}

	fn decode_cell(&self, items: &[JsonNode], depth: u32) -> Result<NdArray<Value>> {
		let values = items.iter().map(|item| self.decode_node(item, depth)).collect::<Result<Vec<_>>>()?;
		Ok(NdArray::column(values))
	}

	fn decode_object_array(&self, items: &[JsonNode], depth: u32) -> Result<Value> {
		let records = items
			.iter()
			.map(|item| match item {
				JsonNode::Object(members) => self.decode_object(members, depth),
				other => Err(CodecError::UnidentifiedType {
					kind: other.json_type().as_str(),
				}),
			})
			.collect::<Result<Vec<Record>>>()?;

		if let Some(array) = RecordArray::from_records(&records) {
			return Ok(Value::RecordArray(array));
		}

		trace!(count = records.len(), "object field lists differ; keeping cell of records");
		Ok(Value::Cell(NdArray::column(records.into_iter().map(Value::Record).collect())))
	}

	fn decode_array_of_arrays(&self, items: &[JsonNode], depth: u32) -> Result<Value> {
		let cell = self.decode_cell(items, depth)?;
		if let Some(value) = promote(cell.data())? {
			return Ok(value);
		}

		trace!(count = cell.numel(), "sub-arrays not uniform; keeping cell");
		Ok(Value::Cell(cell))
	}
}

fn numeric_element(node: &JsonNode) -> Option<f64> {
	match node {
		JsonNode::Null => Some(f64::NAN),
		JsonNode::Number(number) => Some(decode_number(*number).value),
		_ => None,
	}
}

/// Stack uniform numeric or logical sub-arrays along a new leading dimension.
///
/// Returns `None` when any sub-value is not an array of the first one's class and shape, or the shape is empty.
fn promote(subs: &[Value]) -> Result<Option<Value>> {
	match subs.first() {
		Some(Value::Numeric(first)) if !first.is_empty() => {
			let arrays = subs
				.iter()
				.map(|sub| match sub {
					Value::Numeric(array) if array.shape() == first.shape() => Some(array),
					_ => None,
				})
				.collect::<Option<Vec<_>>>();
			arrays.map(|arrays| stack(&arrays).map(Value::Numeric)).transpose()
		}
		Some(Value::Logical(first)) if !first.is_empty() => {
			let arrays = subs
				.iter()
				.map(|sub| match sub {
					Value::Logical(array) if array.shape() == first.shape() => Some(array),
					_ => None,
				})
				.collect::<Option<Vec<_>>>();
			arrays.map(|arrays| stack(&arrays).map(Value::Logical)).transpose()
		}
		_ => Ok(None),
	}
}

/// Interleave so that the new leading dimension varies fastest: `out[i * n + k] = arrays[k][i]`.
fn stack<T: Copy>(arrays: &[&NdArray<T>]) -> Result<NdArray<T>> {
	let inner = arrays.first().map(|array| array.shape().clone()).unwrap_or_else(Shape::empty);
	let mut data = Vec::with_capacity(inner.numel() * arrays.len());
	for i in 0..inner.numel() {
		for array in arrays {
			data.push(array.data()[i]);
		}
	}
	NdArray::new(inner.prepend(arrays.len()), data)
}
