use std::fmt;

use crate::codec::{CodecError, Result};

/// Dimension vector of an array value.
///
/// Shapes always carry at least two dimensions and never end in a singleton dimension beyond the second, so
/// `(2, 2, 1)` and `(2, 2)` are the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape(Vec<usize>);

impl Shape {
	/// Build a normalised shape from raw dimensions.
	pub fn new(dims: impl Into<Vec<usize>>) -> Self {
		let mut dims = dims.into();
		while dims.len() < 2 {
			dims.push(1);
		}
		while dims.len() > 2 && dims.last() == Some(&1) {
			dims.pop();
		}
		Self(dims)
	}

	/// Canonical empty shape `(0, 0)`.
	pub fn empty() -> Self {
		Self(vec![0, 0])
	}

	/// Shape `(1, 1)`.
	pub fn scalar() -> Self {
		Self(vec![1, 1])
	}

	/// Column vector shape `(n, 1)`.
	pub fn column(n: usize) -> Self {
		Self(vec![n, 1])
	}

	/// Row vector shape `(1, n)`.
	pub fn row(n: usize) -> Self {
		Self(vec![1, n])
	}

	/// Dimension sizes.
	pub fn dims(&self) -> &[usize] {
		&self.0
	}

	/// Number of dimensions (at least 2).
	pub fn ndims(&self) -> usize {
		self.0.len()
	}

	/// Total element count.
	pub fn numel(&self) -> usize {
		self.0.iter().product()
	}

	/// True when the shape holds no elements.
	pub fn is_empty(&self) -> bool {
		self.numel() == 0
	}

	/// True when at most one dimension differs from 1.
	pub fn is_vector_like(&self) -> bool {
		is_vector_like(&self.0)
	}

	/// Shape with a new leading dimension of size `n`.
	pub fn prepend(&self, n: usize) -> Self {
		let mut dims = Vec::with_capacity(self.0.len() + 1);
		dims.push(n);
		dims.extend_from_slice(&self.0);
		Self::new(dims)
	}

	/// Column-major strides (first dimension has stride 1).
	pub fn strides(&self) -> Vec<usize> {
		let mut strides = Vec::with_capacity(self.0.len());
		let mut acc = 1_usize;
		for &size in &self.0 {
			strides.push(acc);
			acc = acc.saturating_mul(size);
		}
		strides
	}

	/// Linear column-major offset of a full subscript, if in bounds.
	pub fn offset_of(&self, index: &[usize]) -> Option<usize> {
		if index.len() != self.0.len() {
			return None;
		}
		let mut offset = 0_usize;
		for ((&i, &size), stride) in index.iter().zip(&self.0).zip(self.strides()) {
			if i >= size {
				return None;
			}
			offset += i * stride;
		}
		Some(offset)
	}
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, size) in self.0.iter().enumerate() {
			if idx > 0 {
				f.write_str("x")?;
			}
			write!(f, "{size}")?;
		}
		Ok(())
	}
}

pub(crate) fn is_vector_like(dims: &[usize]) -> bool {
	dims.iter().filter(|&&size| size != 1).count() <= 1
}

/// Dense N-dimensional array stored in column-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray<T> {
	shape: Shape,
	data: Vec<T>,
}

/// Numeric (double) array.
pub type NumericArray = NdArray<f64>;
/// Boolean array.
pub type LogicalArray = NdArray<bool>;
/// Character array.
pub type CharArray = NdArray<char>;

impl<T> NdArray<T> {
	/// Build an array, checking that `data` fills `shape` exactly.
	pub fn new(shape: Shape, data: Vec<T>) -> Result<Self> {
		let expected = shape.numel();
		if data.len() != expected {
			return Err(CodecError::ShapeMismatch { expected, got: data.len() });
		}
		Ok(Self { shape, data })
	}

	/// Column vector `(n, 1)` over `data`.
	pub fn column(data: Vec<T>) -> Self {
		Self {
			shape: Shape::column(data.len()),
			data,
		}
	}

	/// Row vector `(1, n)` over `data`.
	pub fn row(data: Vec<T>) -> Self {
		Self {
			shape: Shape::row(data.len()),
			data,
		}
	}

	/// Array shape.
	pub fn shape(&self) -> &Shape {
		&self.shape
	}

	/// Elements in column-major order.
	pub fn data(&self) -> &[T] {
		&self.data
	}

	/// Total element count.
	pub fn numel(&self) -> usize {
		self.data.len()
	}

	/// True when the array holds no elements.
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Element at a full subscript.
	pub fn get(&self, index: &[usize]) -> Option<&T> {
		self.shape.offset_of(index).and_then(|offset| self.data.get(offset))
	}

	/// Split into shape and buffer.
	pub fn into_parts(self) -> (Shape, Vec<T>) {
		(self.shape, self.data)
	}
}

impl CharArray {
	/// Single-row character array `(1, len)` holding `text`.
	pub fn from_text(text: &str) -> Self {
		Self::row(text.chars().collect())
	}

	/// Two-dimensional character array with one row per entry; rows must share a length.
	pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
		let rows: Vec<Vec<char>> = rows.iter().map(|row| row.as_ref().chars().collect()).collect();
		let cols = rows.first().map_or(0, Vec::len);
		let shape = Shape::new(vec![rows.len(), cols]);
		let mut data = Vec::with_capacity(shape.numel());
		for col in 0..cols {
			for row in &rows {
				let ch = row.get(col).copied().ok_or(CodecError::ShapeMismatch {
					expected: cols,
					got: row.len(),
				})?;
				data.push(ch);
			}
		}
		if let Some(row) = rows.iter().find(|row| row.len() != cols) {
			return Err(CodecError::ShapeMismatch {
				expected: cols,
				got: row.len(),
			});
		}
		Self::new(shape, data)
	}

	/// Text of the whole array read in column-major order.
	pub fn to_text(&self) -> String {
		self.data.iter().collect()
	}
}
