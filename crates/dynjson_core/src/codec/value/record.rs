use crate::codec::{CodecError, Result, Shape, Value};

/// One named field of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field name.
	pub name: Box<str>,
	/// Field value.
	pub value: Value,
}

/// Scalar record: ordered fields with unique names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
	fields: Vec<FieldValue>,
}

impl Record {
	/// Create an empty record.
	pub fn new() -> Self {
		Self::default()
	}

	/// Assign a field. An existing field keeps its position and takes the new value.
	pub fn insert(&mut self, name: impl Into<Box<str>>, value: Value) {
		let name = name.into();
		match self.fields.iter_mut().find(|field| field.name == name) {
			Some(field) => field.value = value,
			None => self.fields.push(FieldValue { name, value }),
		}
	}

	/// Look up a field value by name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}

	/// Fields in order.
	pub fn fields(&self) -> &[FieldValue] {
		&self.fields
	}

	/// Field names in order.
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|field| field.name.as_ref())
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// True when the record has no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// True when both records list the same names in the same order.
	pub fn has_same_field_names(&self, other: &Record) -> bool {
		self.field_names().eq(other.field_names())
	}

	/// Consume into the ordered field list.
	pub fn into_fields(self) -> Vec<FieldValue> {
		self.fields
	}
}

impl<K: Into<Box<str>>> FromIterator<(K, Value)> for Record {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		let mut record = Record::new();
		for (name, value) in iter {
			record.insert(name, value);
		}
		record
	}
}

/// Array of records sharing one ordered field list, stored column-wise.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordArray {
	field_names: Vec<Box<str>>,
	shape: Shape,
	columns: Vec<Vec<Value>>,
}

impl RecordArray {
	/// Build a record array from one column per field, each holding `shape.numel()` values.
	pub fn new(field_names: Vec<Box<str>>, shape: Shape, columns: Vec<Vec<Value>>) -> Result<Self> {
		if columns.len() != field_names.len() {
			return Err(CodecError::ShapeMismatch {
				expected: field_names.len(),
				got: columns.len(),
			});
		}
		for (idx, name) in field_names.iter().enumerate() {
			if field_names[..idx].contains(name) {
				return Err(CodecError::DuplicateField { name: name.to_string() });
			}
		}
		let expected = shape.numel();
		if let Some(column) = columns.iter().find(|column| column.len() != expected) {
			return Err(CodecError::ShapeMismatch {
				expected,
				got: column.len(),
			});
		}
		Ok(Self {
			field_names,
			shape,
			columns,
		})
	}

	/// Transpose records with identical field lists into a column vector record array.
	///
	/// Returns `None` when the records do not all share the first record's field names and order.
	pub fn from_records(records: &[Record]) -> Option<Self> {
		let first = records.first()?;
		if !records.iter().all(|record| record.has_same_field_names(first)) {
			return None;
		}

		let field_names: Vec<Box<str>> = first.fields().iter().map(|field| field.name.clone()).collect();
		let mut columns: Vec<Vec<Value>> = field_names.iter().map(|_| Vec::with_capacity(records.len())).collect();
		for record in records {
			for (column, field) in columns.iter_mut().zip(record.fields()) {
				column.push(field.value.clone());
			}
		}

		Some(Self {
			field_names,
			shape: Shape::column(records.len()),
			columns,
		})
	}

	/// Shared field names in order.
	pub fn field_names(&self) -> &[Box<str>] {
		&self.field_names
	}

	/// Array shape.
	pub fn shape(&self) -> &Shape {
		&self.shape
	}

	/// Number of records.
	pub fn numel(&self) -> usize {
		self.shape.numel()
	}

	/// Values of one field across all records, in column-major order.
	pub fn column(&self, name: &str) -> Option<&[Value]> {
		let idx = self.field_names.iter().position(|field| field.as_ref() == name)?;
		self.columns.get(idx).map(Vec::as_slice)
	}

	/// Field names paired with their value columns, in field order.
	pub fn columns(&self) -> impl Iterator<Item = (&str, &[Value])> {
		self.field_names.iter().map(AsRef::as_ref).zip(self.columns.iter().map(Vec::as_slice))
	}

	/// Rebuild the record at linear index `index`.
	pub fn element(&self, index: usize) -> Option<Record> {
		if index >= self.numel() {
			return None;
		}
		let fields = self
			.field_names
			.iter()
			.zip(&self.columns)
			.map(|(name, column)| FieldValue {
				name: name.clone(),
				value: column[index].clone(),
			})
			.collect();
		Some(Record { fields })
	}
}

/// Dictionary value keyed by arbitrary strings, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
	entries: Vec<(String, Value)>,
}

impl Dictionary {
	/// Create an empty dictionary.
	pub fn new() -> Self {
		Self::default()
	}

	/// Assign an entry, replacing the value of an existing key.
	pub fn insert(&mut self, key: impl Into<String>, value: Value) {
		let key = key.into();
		match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
			Some((_, slot)) => *slot = value,
			None => self.entries.push((key, value)),
		}
	}

	/// Entries in insertion order.
	pub fn entries(&self) -> &[(String, Value)] {
		&self.entries
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when the dictionary is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
