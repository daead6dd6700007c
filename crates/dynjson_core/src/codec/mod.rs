mod decode;
mod dictionary;
mod encode;
mod error;
mod json;
mod options;
mod sanitize;
mod value;

/// Decoding entry points and the configurable decoder.
pub use decode::{Decoder, decode, decode_number, decode_str};
/// Dictionary-to-record conversion seam used by the encoder.
pub use dictionary::{DictionaryAccessor, EntriesAccessor};
/// Encoding entry points and the configurable encoder.
pub use encode::{Encoder, encode, encode_to_node, encode_to_string};
/// Error and result aliases.
pub use error::{CodecError, Result};
/// JSON document model, reader, and writer sinks.
pub use json::{JsonNode, JsonNumber, JsonSink, JsonType, NodeSink, TextWriter, parse, parse_with_depth};
/// Decode/encode options and their defaults.
pub use options::{DEFAULT_MAX_DEPTH, DecodeOptions, EncodeOptions, INTEGER_LITERAL_LIMIT, OptionArg};
/// Identifier sanitizers for object keys.
pub use sanitize::{
	IdentifierSanitizer, Identity, KEYWORDS, MAX_IDENTIFIER_LEN, MakeValidName, ReplacementStyle, SanitizeOptions, is_keyword,
	is_valid_identifier,
};
/// Dynamic value model.
pub use value::{
	CharArray, Dictionary, FieldValue, LogicalArray, NA, NdArray, NumberClass, NumberScalar, NumericArray, OpaqueValue, Record,
	RecordArray, Shape, Value, is_na,
};
pub(crate) use value::is_vector_like;
