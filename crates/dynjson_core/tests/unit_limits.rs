#![allow(missing_docs)]

use dynjson::codec::{CodecError, DEFAULT_MAX_DEPTH, DecodeOptions, EncodeOptions, NdArray, Value, decode_str, encode_to_string};
use dynjson_testkit::nested_arrays;

#[test]
fn default_depth_accepts_limit_and_rejects_one_more() {
	let limit = DEFAULT_MAX_DEPTH as usize;
	decode_str(&nested_arrays(limit), &DecodeOptions::default()).expect("limit depth decodes");
	let err = decode_str(&nested_arrays(limit + 1), &DecodeOptions::default()).expect_err("past limit");
	assert!(matches!(err, CodecError::DepthExceeded { max_depth } if max_depth == DEFAULT_MAX_DEPTH));
}

#[test]
fn deep_input_fails_without_overflowing_the_stack() {
	let err = decode_str(&nested_arrays(100_000), &DecodeOptions::default()).expect_err("far past limit");
	assert!(matches!(err, CodecError::DepthExceeded { .. }));
}

#[test]
fn deep_cells_are_rejected_by_encoder() {
	let mut value = Value::Bool(true);
	for _ in 0..(DEFAULT_MAX_DEPTH + 1) {
		value = Value::Cell(NdArray::column(vec![value]));
	}
	let err = encode_to_string(&value, &EncodeOptions::default()).expect_err("too deep");
	assert!(matches!(err, CodecError::DepthExceeded { .. }));
}
