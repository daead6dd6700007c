//! Shape- and type-preserving JSON codec for dynamically typed array values.

/// JSON reader/writer, dynamic value model, and the decode/encode algorithms.
pub mod codec;
