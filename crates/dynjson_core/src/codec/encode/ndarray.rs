//! Nested-array layout of column-major N-D buffers.
//!
//! JSON nesting order follows dimension order: the outermost array walks dimension 0 and the innermost walks the
//! last dimension. This is the inverse of decode-side promotion, which prepends a dimension per nesting level.

use crate::codec::{JsonSink, Result, Shape, is_vector_like};

/// Write the elements of an array of `shape` as nested JSON arrays.
///
/// `emit` writes the element stored at a column-major linear offset.
pub(crate) fn encode_nd<S, F>(shape: &Shape, sink: &mut S, mut emit: F) -> Result<()>
where
	S: JsonSink + ?Sized,
	F: FnMut(&mut S, usize) -> Result<()>,
{
	if shape.is_empty() {
		sink.begin_array()?;
		return sink.end_array();
	}

	if shape.is_vector_like() {
		sink.begin_array()?;
		for offset in 0..shape.numel() {
			emit(sink, offset)?;
		}
		return sink.end_array();
	}

	let slab = Slab {
		dims: shape.dims(),
		strides: shape.strides(),
	};
	slab.encode_level(0, 0, sink, &mut emit)
}

struct Slab<'a> {
	dims: &'a [usize],
	strides: Vec<usize>,
}

impl Slab<'_> {
	fn encode_level<S, F>(&self, level: usize, base: usize, sink: &mut S, emit: &mut F) -> Result<()>
	where
		S: JsonSink + ?Sized,
		F: FnMut(&mut S, usize) -> Result<()>,
	{
		let rest = &self.dims[level..];
		if is_vector_like(rest) {
			// Normalised shapes end in a non-singleton dim, so the run lies along the last dimension.
			let last = self.dims.len() - 1;
			let padding = last - level;
			for _ in 0..padding {
				sink.begin_array()?;
			}
			sink.begin_array()?;
			for j in 0..self.dims[last] {
				emit(sink, base + j * self.strides[last])?;
			}
			sink.end_array()?;
			for _ in 0..padding {
				sink.end_array()?;
			}
			return Ok(());
		}

		sink.begin_array()?;
		if self.dims[level] == 1 {
			self.encode_level(level + 1, base, sink, emit)?;
		} else {
			for i in 0..self.dims[level] {
				self.encode_level(level + 1, base + i * self.strides[level], sink, emit)?;
			}
		}
		sink.end_array()
	}
}
