mod numbers {
	use test_case::test_case;

	use crate::codec::{EncodeOptions, NA, NumberScalar, Value, encode_to_string};

	fn compact(value: &Value) -> String {
		encode_to_string(value, &EncodeOptions::default()).expect("value encodes")
	}

	#[test_case(999_999.0, "999999" ; "at the literal limit")]
	#[test_case(-999_999.0, "-999999" ; "at the negative limit")]
	#[test_case(1_000_000.0, "1000000.0" ; "past the literal limit")]
	#[test_case(0.5, "0.5" ; "fraction")]
	#[test_case(3.0, "3" ; "small integral double")]
	fn double_literals(value: f64, expected: &str) {
		assert_eq!(compact(&Value::number(value)), expected);
	}

	#[test]
	fn integer_class_ignores_literal_limit() {
		assert_eq!(compact(&Value::integer(5_000_000_000)), "5000000000");
		assert_eq!(compact(&Value::integer(-5_000_000_000)), "-5000000000");
		assert_eq!(compact(&Value::Number(NumberScalar::integer(1.5))), "1.5");
	}

	#[test]
	fn non_finite_values() {
		let values = Value::column(vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY]);
		assert_eq!(compact(&values), "[null,null,null]");
		let literal = encode_to_string(&values, &EncodeOptions::non_finite_literals()).expect("encodes");
		assert_eq!(literal, "[NaN,Infinity,-Infinity]");
	}

	#[test]
	fn na_is_always_null() {
		let literal = encode_to_string(&Value::Number(NumberScalar::na()), &EncodeOptions::non_finite_literals()).expect("encodes");
		assert_eq!(literal, "null");
		assert_eq!(compact(&Value::column(vec![1.0, NA])), "[1,null]");
	}

	#[test]
	fn custom_literal_limit() {
		let options = EncodeOptions {
			integer_literal_limit: 10.0,
			..EncodeOptions::default()
		};
		assert_eq!(encode_to_string(&Value::number(11.0), &options).expect("encodes"), "11.0");

		let unbounded = EncodeOptions {
			integer_literal_limit: f64::INFINITY,
			..EncodeOptions::default()
		};
		assert_eq!(encode_to_string(&Value::number(4096.0), &unbounded).expect("encodes"), "4096");
		assert_eq!(encode_to_string(&Value::number(-1e15), &unbounded).expect("encodes"), "-1000000000000000");
		let text = encode_to_string(&Value::number(1e20), &unbounded).expect("encodes");
		assert_eq!(text, "1e20");
		assert_eq!(text.parse::<f64>().expect("float literal"), 1e20);
		assert_eq!(encode_to_string(&Value::number(-1e20), &unbounded).expect("encodes"), "-1e20");
	}
}

mod arrays {
	use crate::codec::{CharArray, EncodeOptions, LogicalArray, NumericArray, Shape, Value, encode_to_string};

	fn compact(value: &Value) -> String {
		encode_to_string(value, &EncodeOptions::default()).expect("value encodes")
	}

	fn numeric(dims: &[usize], data: Vec<f64>) -> Value {
		Value::Numeric(NumericArray::new(Shape::new(dims.to_vec()), data).expect("shape matches data"))
	}

	#[test]
	fn vectors_are_flat() {
		assert_eq!(compact(&Value::column(vec![1.0, 2.0, 3.0])), "[1,2,3]");
		assert_eq!(compact(&Value::Numeric(NumericArray::row(vec![1.0, 2.0]))), "[1,2]");
		assert_eq!(compact(&Value::Logical(LogicalArray::column(vec![true, false]))), "[true,false]");
	}

	#[test]
	fn empty_values_are_empty_arrays() {
		assert_eq!(compact(&Value::Empty), "[]");
		assert_eq!(compact(&numeric(&[0, 3], Vec::new())), "[]");
	}

	#[test]
	fn matrix_rows_are_dimension_zero() {
		assert_eq!(compact(&numeric(&[2, 2], vec![1.0, 3.0, 2.0, 4.0])), "[[1,2],[3,4]]");
		assert_eq!(compact(&numeric(&[2, 3], vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0])), "[[1,2,3],[4,5,6]]");
	}

	#[test]
	fn singleton_dimensions_are_padded() {
		assert_eq!(compact(&numeric(&[1, 2, 2], vec![1.0, 3.0, 2.0, 4.0])), "[[[1,2],[3,4]]]");
		assert_eq!(compact(&numeric(&[2, 1, 2], vec![1.0, 2.0, 3.0, 4.0])), "[[[1,3]],[[2,4]]]");
		assert_eq!(compact(&numeric(&[1, 1, 3], vec![1.0, 2.0, 3.0])), "[1,2,3]");
	}

	#[test]
	fn three_dimensional_layout() {
		let data: Vec<f64> = (1..=8).map(f64::from).collect();
		// x(i,j,k) = 1 + i + 2j + 4k
		assert_eq!(compact(&numeric(&[2, 2, 2], data)), "[[[1,5],[3,7]],[[2,6],[4,8]]]");
	}

	#[test]
	fn char_arrays() {
		assert_eq!(compact(&Value::string("hi \"there\"")), r#""hi \"there\"""#);
		assert_eq!(compact(&Value::string("")), r#""""#);
		let rows = CharArray::from_rows(&["ab", "cd", "ef"]).expect("rows");
		assert_eq!(compact(&Value::Char(rows)), r#"["ab","cd","ef"]"#);
	}

	#[test]
	fn three_dimensional_char_array_is_nested_rows() {
		// two pages of 2x2: page 0 rows "ab","cd"; page 1 rows "ef","gh"
		let data = vec!['a', 'c', 'b', 'd', 'e', 'g', 'f', 'h'];
		let chars = CharArray::new(Shape::new(vec![2, 2, 2]), data).expect("shape matches");
		assert_eq!(compact(&Value::Char(chars)), r#"[["ab","ef"],["cd","gh"]]"#);
	}

	#[test]
	fn pretty_output() {
		let text = encode_to_string(&numeric(&[2, 2], vec![1.0, 3.0, 2.0, 4.0]), &EncodeOptions::pretty()).expect("encodes");
		assert_eq!(text, "[\n    [\n        1,\n        2\n    ],\n    [\n        3,\n        4\n    ]\n]");
	}
}

mod containers {
	use crate::codec::{
		CodecError, Dictionary, DictionaryAccessor, EncodeOptions, Encoder, JsonNode, NdArray, OpaqueValue, Record, RecordArray, Result,
		Shape, Value, encode_to_node, encode_to_string,
	};

	fn compact(value: &Value) -> String {
		encode_to_string(value, &EncodeOptions::default()).expect("value encodes")
	}

	#[test]
	fn records_keep_field_order() {
		let record: Record = [("b", Value::integer(1)), ("a", Value::string("x"))].into_iter().collect();
		assert_eq!(compact(&Value::Record(record)), r#"{"b":1,"a":"x"}"#);
	}

	#[test]
	fn record_arrays_by_element_count() {
		let one = RecordArray::new(vec!["a".into()], Shape::scalar(), vec![vec![Value::integer(1)]]).expect("one element");
		assert_eq!(compact(&Value::RecordArray(one)), r#"{"a":1}"#);

		let two = RecordArray::new(vec!["a".into(), "b".into()], Shape::column(2), vec![
			vec![Value::integer(1), Value::integer(2)],
			vec![Value::Bool(true), Value::Bool(false)],
		])
		.expect("two elements");
		assert_eq!(compact(&Value::RecordArray(two)), r#"[{"a":1,"b":true},{"a":2,"b":false}]"#);

		let none = RecordArray::new(vec!["a".into()], Shape::column(0), vec![Vec::new()]).expect("zero elements");
		assert_eq!(compact(&Value::RecordArray(none)), "[]");
	}

	#[test]
	fn cells_are_flat_arrays() {
		let cell = NdArray::column(vec![Value::integer(1), Value::string("a"), Value::Empty, Value::column(vec![1.5, 2.0])]);
		assert_eq!(compact(&Value::Cell(cell)), r#"[1,"a",[],[1.5,2]]"#);
	}

	#[test]
	fn dictionaries_use_sanitized_keys() {
		let mut dictionary = Dictionary::new();
		dictionary.insert("first name", Value::integer(1));
		dictionary.insert("ok", Value::Bool(true));
		assert_eq!(compact(&Value::Dictionary(dictionary)), r#"{"firstName":1,"ok":true}"#);
	}

	struct Reversed;

	impl DictionaryAccessor for Reversed {
		fn to_record(&self, dictionary: &Dictionary) -> Result<Record> {
			Ok(dictionary.entries().iter().rev().map(|(key, value)| (key.as_str(), value.clone())).collect())
		}
	}

	#[test]
	fn injected_dictionary_accessor() {
		let mut dictionary = Dictionary::new();
		dictionary.insert("a", Value::integer(1));
		dictionary.insert("b", Value::integer(2));
		let options = EncodeOptions::default();
		let text = Encoder::new(&options)
			.with_dictionary_accessor(&Reversed)
			.encode_to_string(&Value::Dictionary(dictionary))
			.expect("encodes");
		assert_eq!(text, r#"{"b":2,"a":1}"#);
	}

	#[test]
	fn opaque_values_are_rejected() {
		let record: Record = [("f", Value::Opaque(OpaqueValue::new("function_handle")))].into_iter().collect();
		let err = encode_to_string(&Value::Record(record), &EncodeOptions::default()).expect_err("unsupported");
		assert!(matches!(err, CodecError::UnsupportedType { ref class } if class == "function_handle"));
	}

	#[test]
	fn depth_limit() {
		let mut value = Value::integer(1);
		for _ in 0..4 {
			value = Value::Cell(NdArray::column(vec![value]));
		}
		let options = EncodeOptions {
			max_depth: 3,
			..EncodeOptions::default()
		};
		let err = encode_to_string(&value, &options).expect_err("too deep");
		assert!(matches!(err, CodecError::DepthExceeded { max_depth: 3 }));

		let relaxed = EncodeOptions {
			max_depth: 4,
			..EncodeOptions::default()
		};
		assert_eq!(encode_to_string(&value, &relaxed).expect("fits"), "[[[[1]]]]");
	}

	#[test]
	fn node_output_matches_text() {
		let record: Record = [("a", Value::column(vec![1.0, 2.5]))].into_iter().collect();
		let node = encode_to_node(&Value::Record(record), &EncodeOptions::default()).expect("encodes");
		let JsonNode::Object(members) = node else {
			panic!("expected object");
		};
		assert_eq!(members.len(), 1);
		assert!(matches!(&members[0].1, JsonNode::Array(items) if items.len() == 2));
	}
}
