mod array;
mod record;

#[cfg(test)]
mod tests;

pub use array::{CharArray, LogicalArray, NdArray, NumericArray, Shape};
pub(crate) use array::is_vector_like;
pub use record::{Dictionary, FieldValue, Record, RecordArray};

const NA_BITS: u64 = 0x7FF8_0000_0000_07A2;

/// Missing-value marker: a NaN with a dedicated payload, distinct from ordinary NaN.
pub const NA: f64 = f64::from_bits(NA_BITS);

/// True when `value` is the [`NA`] marker (not merely any NaN).
pub fn is_na(value: f64) -> bool {
	value.to_bits() == NA_BITS
}

/// Dynamic value tree produced by decode and consumed by encode.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Empty `0x0` array.
	Empty,
	/// Boolean scalar.
	Bool(bool),
	/// Numeric scalar.
	Number(NumberScalar),
	/// N-dimensional double array.
	Numeric(NumericArray),
	/// N-dimensional boolean array.
	Logical(LogicalArray),
	/// N-dimensional character array.
	Char(CharArray),
	/// N-dimensional heterogeneous container.
	Cell(NdArray<Value>),
	/// Scalar record.
	Record(Record),
	/// Array of records sharing one field list.
	RecordArray(RecordArray),
	/// String-keyed dictionary.
	Dictionary(Dictionary),
	/// Host value with no JSON representation.
	Opaque(OpaqueValue),
}

/// Source class of a numeric scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberClass {
	/// Floating value.
	#[default]
	Double,
	/// Value read from an integral representation.
	Integer,
}

/// Numeric scalar with its source class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberScalar {
	/// Numeric value.
	pub value: f64,
	/// Source class hint; only the encoder reads it.
	pub class: NumberClass,
}

impl NumberScalar {
	/// Double-class scalar.
	pub fn double(value: f64) -> Self {
		Self {
			value,
			class: NumberClass::Double,
		}
	}

	/// Integer-class scalar.
	pub fn integer(value: f64) -> Self {
		Self {
			value,
			class: NumberClass::Integer,
		}
	}

	/// Missing-value scalar.
	pub fn na() -> Self {
		Self::double(NA)
	}

	/// True when the scalar came from an integral representation.
	pub fn is_integer_class(&self) -> bool {
		self.class == NumberClass::Integer
	}
}

/// Placeholder for host values (function handles, objects) that cannot be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueValue {
	/// Host class name reported in errors.
	pub class_name: Box<str>,
}

impl OpaqueValue {
	/// Create a placeholder for class `class_name`.
	pub fn new(class_name: impl Into<Box<str>>) -> Self {
		Self {
			class_name: class_name.into(),
		}
	}
}

impl Value {
	/// Double-class numeric scalar.
	pub fn number(value: f64) -> Self {
		Self::Number(NumberScalar::double(value))
	}

	/// Integer-class numeric scalar.
	pub fn integer(value: i64) -> Self {
		Self::Number(NumberScalar::integer(value as f64))
	}

	/// Single-row character array.
	pub fn string(text: &str) -> Self {
		Self::Char(CharArray::from_text(text))
	}

	/// Numeric column vector.
	pub fn column(values: Vec<f64>) -> Self {
		Self::Numeric(NumericArray::column(values))
	}

	/// Shape of the value; scalars and records report `1x1`.
	pub fn shape(&self) -> Shape {
		match self {
			Self::Empty => Shape::empty(),
			Self::Bool(_) | Self::Number(_) | Self::Record(_) | Self::Dictionary(_) | Self::Opaque(_) => Shape::scalar(),
			Self::Numeric(array) => array.shape().clone(),
			Self::Logical(array) => array.shape().clone(),
			Self::Char(array) => array.shape().clone(),
			Self::Cell(array) => array.shape().clone(),
			Self::RecordArray(array) => array.shape().clone(),
		}
	}

	/// Stable lowercase label for the variant.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Empty => "empty",
			Self::Bool(_) => "bool",
			Self::Number(_) => "number",
			Self::Numeric(_) => "numeric",
			Self::Logical(_) => "logical",
			Self::Char(_) => "char",
			Self::Cell(_) => "cell",
			Self::Record(_) => "record",
			Self::RecordArray(_) => "record_array",
			Self::Dictionary(_) => "dictionary",
			Self::Opaque(_) => "opaque",
		}
	}

	/// Text of a single-row character array.
	pub fn as_text(&self) -> Option<String> {
		match self {
			Self::Char(array) if array.shape().dims()[0] <= 1 => Some(array.to_text()),
			_ => None,
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::number(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::string(value)
	}
}

impl From<Record> for Value {
	fn from(value: Record) -> Self {
		Self::Record(value)
	}
}
