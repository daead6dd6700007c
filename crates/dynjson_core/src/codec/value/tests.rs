mod shape_normalisation {
	use test_case::test_case;

	use crate::codec::Shape;

	#[test_case(&[], &[1, 1] ; "no dims")]
	#[test_case(&[4], &[4, 1] ; "one dim")]
	#[test_case(&[2, 3, 1], &[2, 3] ; "trailing singleton")]
	#[test_case(&[2, 1, 1, 1], &[2, 1] ; "several trailing singletons")]
	#[test_case(&[1, 1, 3], &[1, 1, 3] ; "leading singletons kept")]
	#[test_case(&[2, 1, 3], &[2, 1, 3] ; "inner singleton kept")]
	fn new_normalises(raw: &[usize], expected: &[usize]) {
		assert_eq!(Shape::new(raw.to_vec()).dims(), expected);
	}

	#[test]
	fn strides_are_column_major() {
		let shape = Shape::new(vec![2, 3, 4]);
		assert_eq!(shape.strides(), vec![1, 2, 6]);
		assert_eq!(shape.offset_of(&[1, 2, 3]), Some(1 + 2 * 2 + 3 * 6));
		assert_eq!(shape.offset_of(&[2, 0, 0]), None);
		assert_eq!(shape.offset_of(&[0, 0]), None);
	}

	#[test]
	fn prepend_adds_leading_dimension() {
		assert_eq!(Shape::column(3).prepend(2).dims(), &[2, 3]);
		assert_eq!(Shape::new(vec![2, 2]).prepend(5).dims(), &[5, 2, 2]);
	}

	#[test]
	fn vector_like_and_display() {
		assert!(Shape::row(7).is_vector_like());
		assert!(Shape::new(vec![1, 1, 7]).is_vector_like());
		assert!(!Shape::new(vec![2, 1, 7]).is_vector_like());
		assert!(Shape::empty().is_empty());
		assert_eq!(Shape::new(vec![2, 3, 4]).to_string(), "2x3x4");
	}
}

mod arrays {
	use crate::codec::{CharArray, CodecError, NdArray, NumericArray, Shape};

	#[test]
	fn new_rejects_wrong_buffer_length() {
		let err = NumericArray::new(Shape::new(vec![2, 2]), vec![1.0, 2.0, 3.0]).expect_err("length mismatch");
		assert!(matches!(err, CodecError::ShapeMismatch { expected: 4, got: 3 }));
	}

	#[test]
	fn get_reads_column_major() {
		let array = NdArray::new(Shape::new(vec![2, 2]), vec![1, 3, 2, 4]).expect("array builds");
		assert_eq!(array.get(&[0, 1]), Some(&2));
		assert_eq!(array.get(&[1, 0]), Some(&3));
		assert_eq!(array.get(&[2, 0]), None);
	}

	#[test]
	fn into_parts_returns_shape_and_buffer() {
		let array = NumericArray::new(Shape::new(vec![1, 2, 2]), vec![1.0, 2.0, 3.0, 4.0]).expect("array builds");
		let (shape, data) = array.into_parts();
		assert_eq!(shape.dims(), &[1, 2, 2]);
		assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0]);
	}

	#[test]
	fn char_rows_are_stored_column_major() {
		let chars = CharArray::from_rows(&["ab", "cd"]).expect("rows share a length");
		assert_eq!(chars.shape().dims(), &[2, 2]);
		assert_eq!(chars.data(), &['a', 'c', 'b', 'd']);
		assert_eq!(chars.get(&[1, 1]), Some(&'d'));
	}

	#[test]
	fn char_rows_must_share_length() {
		let err = CharArray::from_rows(&["abc", "d"]).expect_err("ragged rows");
		assert!(matches!(err, CodecError::ShapeMismatch { .. }));
	}

	#[test]
	fn from_text_counts_chars_not_bytes() {
		let chars = CharArray::from_text("héllo");
		assert_eq!(chars.shape().dims(), &[1, 5]);
		assert_eq!(chars.to_text(), "héllo");
	}
}

mod records {
	use crate::codec::{CodecError, Record, RecordArray, Shape, Value};

	#[test]
	fn insert_overwrites_in_place() {
		let mut record = Record::new();
		record.insert("a", Value::number(1.0));
		record.insert("b", Value::number(2.0));
		record.insert("a", Value::number(3.0));

		assert_eq!(record.field_names().collect::<Vec<_>>(), vec!["a", "b"]);
		assert_eq!(record.get("a"), Some(&Value::number(3.0)));
	}

	#[test]
	fn into_fields_keeps_order() {
		let record: Record = [("z", Value::Bool(true)), ("a", Value::Empty), ("z", Value::Bool(false))].into_iter().collect();
		let fields = record.into_fields();
		assert_eq!(fields.len(), 2);
		assert_eq!(fields[0].name.as_ref(), "z");
		assert_eq!(fields[0].value, Value::Bool(false));
		assert_eq!(fields[1].name.as_ref(), "a");
	}

	#[test]
	fn from_records_requires_identical_field_order() {
		let ab: Record = [("a", Value::number(1.0)), ("b", Value::number(2.0))].into_iter().collect();
		let ba: Record = [("b", Value::number(3.0)), ("a", Value::number(4.0))].into_iter().collect();

		assert!(RecordArray::from_records(&[ab.clone(), ba]).is_none());

		let array = RecordArray::from_records(&[ab.clone(), ab]).expect("same field list");
		assert_eq!(array.shape(), &Shape::column(2));
		assert_eq!(array.column("b"), Some(&[Value::number(2.0), Value::number(2.0)][..]));
		let element = array.element(1).expect("second element");
		assert_eq!(element.get("a"), Some(&Value::number(1.0)));
		assert!(array.element(2).is_none());
	}

	#[test]
	fn new_validates_columns() {
		let duplicate = RecordArray::new(vec!["a".into(), "a".into()], Shape::scalar(), vec![vec![Value::Empty], vec![Value::Empty]]);
		assert!(matches!(duplicate, Err(CodecError::DuplicateField { ref name }) if name == "a"));

		let short = RecordArray::new(vec!["a".into()], Shape::column(2), vec![vec![Value::Empty]]);
		assert!(matches!(short, Err(CodecError::ShapeMismatch { expected: 2, got: 1 })));
	}
}

mod scalars {
	use crate::codec::{NA, NumberScalar, Shape, Value, is_na};

	#[test]
	fn na_is_a_distinct_nan() {
		assert!(NA.is_nan());
		assert!(is_na(NA));
		assert!(!is_na(f64::NAN));
		assert!(NumberScalar::na().value.is_nan());
	}

	#[test]
	fn value_shapes_and_kinds() {
		assert_eq!(Value::Empty.shape(), Shape::empty());
		assert_eq!(Value::from(true).shape(), Shape::scalar());
		assert_eq!(Value::string("abc").shape(), Shape::row(3));
		assert_eq!(Value::column(vec![1.0, 2.0]).kind_name(), "numeric");
		assert_eq!(Value::integer(3), Value::Number(NumberScalar::integer(3.0)));
		assert_eq!(Value::from("hi").as_text().as_deref(), Some("hi"));
	}
}
