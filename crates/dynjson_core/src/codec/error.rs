use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while parsing, decoding, and encoding JSON.
#[derive(Debug, Error)]
pub enum CodecError {
	/// JSON text was malformed.
	#[error("parse error at offset {offset}: {message}")]
	Parse {
		/// Byte offset of the failure in the input text.
		offset: usize,
		/// Reader diagnostic.
		message: String,
	},
	/// Option list was malformed (count, name, or value type).
	#[error("invalid arguments: {reason}")]
	InvalidArguments {
		/// What was wrong with the arguments.
		reason: String,
	},
	/// Value kind has no JSON representation.
	#[error("unsupported type: {class}")]
	UnsupportedType {
		/// Class name of the rejected value.
		class: String,
	},
	/// JSON node kind was not recognised during decode.
	#[error("unidentified type: {kind}")]
	UnidentifiedType {
		/// Node kind that could not be handled.
		kind: &'static str,
	},
	/// Recursion depth exceeded configured limit.
	#[error("depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Buffer length did not match the element count implied by a shape.
	#[error("shape mismatch: expected {expected} elements, got {got}")]
	ShapeMismatch {
		/// Element count implied by the shape.
		expected: usize,
		/// Element count supplied.
		got: usize,
	},
	/// Record field name appeared twice in a field list.
	#[error("duplicate field: {name}")]
	DuplicateField {
		/// Repeated field name.
		name: String,
	},
	/// Output sink failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Encoded output was not valid UTF-8.
	#[error("utf8: {0}")]
	Utf8(#[from] std::string::FromUtf8Error),
}

impl CodecError {
	/// Build an [`CodecError::InvalidArguments`] from any message.
	pub fn invalid_arguments(reason: impl Into<String>) -> Self {
		Self::InvalidArguments { reason: reason.into() }
	}
}
