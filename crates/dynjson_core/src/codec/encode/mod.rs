use tracing::{debug, trace};

use crate::codec::{
	CharArray, CodecError, DictionaryAccessor, EncodeOptions, EntriesAccessor, JsonNode, JsonSink, NdArray, NodeSink, NumberScalar,
	Record, RecordArray, Result, Shape, TextWriter, Value, is_na,
};

mod ndarray;

#[cfg(test)]
mod tests;

use self::ndarray::encode_nd;

/// Encode `value` as JSON text, compact or indented per `options.pretty_writer`.
pub fn encode_to_string(value: &Value, options: &EncodeOptions) -> Result<String> {
	Encoder::new(options).encode_to_string(value)
}

/// Encode `value` into any [`JsonSink`].
pub fn encode<S: JsonSink + ?Sized>(value: &Value, options: &EncodeOptions, sink: &mut S) -> Result<()> {
	Encoder::new(options).encode(value, sink)
}

/// Encode `value` into a [`JsonNode`] tree.
pub fn encode_to_node(value: &Value, options: &EncodeOptions) -> Result<JsonNode> {
	let mut sink = NodeSink::new();
	encode(value, options, &mut sink)?;
	sink.finish()
		.ok_or_else(|| CodecError::Io(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "encoder produced no document")))
}

/// Value-to-JSON encoder bound to options and a dictionary accessor.
pub struct Encoder<'a> {
	options: &'a EncodeOptions,
	dictionaries: Option<&'a dyn DictionaryAccessor>,
}

impl<'a> Encoder<'a> {
	/// Encoder using [`EntriesAccessor`] for dictionaries.
	pub fn new(options: &'a EncodeOptions) -> Self {
		Self { options, dictionaries: None }
	}

	/// Replace the dictionary accessor.
	pub fn with_dictionary_accessor(mut self, accessor: &'a dyn DictionaryAccessor) -> Self {
		self.dictionaries = Some(accessor);
		self
	}

	/// Encode `value` as JSON text.
	pub fn encode_to_string(&self, value: &Value) -> Result<String> {
		let mut out = Vec::new();
		if self.options.pretty_writer {
			self.encode(value, &mut TextWriter::pretty(&mut out))?;
		} else {
			self.encode(value, &mut TextWriter::compact(&mut out))?;
		}
		Ok(String::from_utf8(out)?)
	}

	/// Encode `value` into `sink`.
	pub fn encode<S: JsonSink + ?Sized>(&self, value: &Value, sink: &mut S) -> Result<()> {
		debug!(kind = value.kind_name(), pretty = self.options.pretty_writer, "encoding value");
		self.encode_value(value, sink, 0)
	}

	fn enter(&self, depth: u32, levels: usize) -> Result<u32> {
		let depth = u32::try_from(levels).map_or(u32::MAX, |levels| depth.saturating_add(levels));
		if depth > self.options.max_depth {
			return Err(CodecError::DepthExceeded {
				max_depth: self.options.max_depth,
			});
		}
		Ok(depth)
	}

	fn encode_value<S: JsonSink + ?Sized>(&self, value: &Value, sink: &mut S, depth: u32) -> Result<()> {
		match value {
			Value::Empty => {
				sink.begin_array()?;
				sink.end_array()
			}
			Value::Bool(value) => sink.bool(*value),
			Value::Number(scalar) => encode_scalar(*scalar, self.options, sink),
			Value::Numeric(array) => {
				self.enter(depth, array.shape().ndims())?;
				encode_nd(array.shape(), sink, |sink, offset| encode_double(array.data()[offset], self.options, sink))
			}
			Value::Logical(array) => {
				self.enter(depth, array.shape().ndims())?;
				encode_nd(array.shape(), sink, |sink, offset| sink.bool(array.data()[offset]))
			}
			Value::Char(array) => {
				self.enter(depth, array.shape().ndims())?;
				encode_chars(array, sink)
			}
			Value::Cell(cell) => self.encode_cell(cell, sink, depth),
			Value::Record(record) => self.encode_record(record, sink, depth),
			Value::RecordArray(array) => self.encode_record_array(array, sink, depth),
			Value::Dictionary(dictionary) => {
				let record = match self.dictionaries {
					Some(accessor) => accessor.to_record(dictionary)?,
					None => EntriesAccessor::new().to_record(dictionary)?,
				};
				self.encode_record(&record, sink, depth)
			}
			Value::Opaque(opaque) => Err(CodecError::UnsupportedType {
				class: opaque.class_name.to_string(),
			}),
		}
	}

	fn encode_cell<S: JsonSink + ?Sized>(&self, cell: &NdArray<Value>, sink: &mut S, depth: u32) -> Result<()> {
		let depth = self.enter(depth, 1)?;
		sink.begin_array()?;
		for element in cell.data() {
			self.encode_value(element, sink, depth)?;
		}
		sink.end_array()
	}

	fn encode_record<S: JsonSink + ?Sized>(&self, record: &Record, sink: &mut S, depth: u32) -> Result<()> {
		let depth = self.enter(depth, 1)?;
		sink.begin_object()?;
		for field in record.fields() {
			sink.key(&field.name)?;
			self.encode_value(&field.value, sink, depth)?;
		}
		sink.end_object()
	}

	fn encode_record_array<S: JsonSink + ?Sized>(&self, array: &RecordArray, sink: &mut S, depth: u32) -> Result<()> {
		match array.numel() {
			0 => {
				self.enter(depth, 1)?;
				sink.begin_array()?;
				sink.end_array()
			}
			1 => self.encode_record_element(array, 0, sink, depth),
			count => {
				let depth = self.enter(depth, 1)?;
				sink.begin_array()?;
				for index in 0..count {
					self.encode_record_element(array, index, sink, depth)?;
				}
				sink.end_array()
			}
		}
	}

	fn encode_record_element<S: JsonSink + ?Sized>(&self, array: &RecordArray, index: usize, sink: &mut S, depth: u32) -> Result<()> {
		let depth = self.enter(depth, 1)?;
		sink.begin_object()?;
		for (name, column) in array.columns() {
			sink.key(name)?;
			self.encode_value(&column[index], sink, depth)?;
		}
		sink.end_object()
	}
}

fn encode_scalar<S: JsonSink + ?Sized>(scalar: NumberScalar, options: &EncodeOptions, sink: &mut S) -> Result<()> {
	let value = scalar.value;
	if scalar.is_integer_class() && value.floor() == value {
		if (0.0..=u64::MAX as f64).contains(&value) {
			return sink.uint(value as u64);
		}
		if (i64::MIN as f64..0.0).contains(&value) {
			return sink.int(value as i64);
		}
	}
	encode_double(value, options, sink)
}

fn encode_double<S: JsonSink + ?Sized>(value: f64, options: &EncodeOptions, sink: &mut S) -> Result<()> {
	let limit = options.integer_literal_limit;
	// The upper bound is exclusive: `i64::MAX as f64` rounds up to 2^63.
	let in_i64 = (i64::MIN as f64..i64::MAX as f64).contains(&value);
	if value.floor() == value && in_i64 && (-limit..=limit).contains(&value) {
		return sink.int(value as i64);
	}
	if is_na(value) {
		return sink.null();
	}
	if !value.is_finite() && options.convert_inf_and_nan {
		trace!(value, "non-finite value written as null");
		return sink.null();
	}
	sink.double(value)
}

/// Single-row and empty 2-D char arrays are one string; anything else is an N-D array of row strings.
fn encode_chars<S: JsonSink + ?Sized>(array: &CharArray, sink: &mut S) -> Result<()> {
	let dims = array.shape().dims();
	let (rows, cols) = (dims[0], dims[1]);
	if array.shape().ndims() == 2 && rows <= 1 {
		return sink.string(&array.to_text());
	}

	let mut string_dims = Vec::with_capacity(dims.len() - 1);
	string_dims.push(rows);
	string_dims.extend_from_slice(&dims[2..]);
	let strings = Shape::new(string_dims);
	let data = array.data();
	encode_nd(&strings, sink, |sink, offset| {
		let (row, page) = (offset % rows, offset / rows);
		let base = row + page * rows * cols;
		let text: String = (0..cols).map(|col| data[base + col * rows]).collect();
		sink.string(&text)
	})
}
