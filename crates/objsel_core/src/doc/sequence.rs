use crate::doc::{Complex, DocError, ElementKind, Kind, Map, Result, Scalar, Value};

/// Homogeneous sequence with concretely typed backing storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence {
	/// `bool` elements.
	Bool(Vec<bool>),
	/// `i8` elements.
	I8(Vec<i8>),
	/// `i16` elements.
	I16(Vec<i16>),
	/// `i32` elements.
	I32(Vec<i32>),
	/// `i64` elements.
	I64(Vec<i64>),
	/// Raw bytes.
	U8(Vec<u8>),
	/// `u16` elements.
	U16(Vec<u16>),
	/// `u32` elements.
	U32(Vec<u32>),
	/// `u64` elements.
	U64(Vec<u64>),
	/// `usize` elements.
	Usize(Vec<usize>),
	/// `f32` elements.
	F32(Vec<f32>),
	/// `f64` elements.
	F64(Vec<f64>),
	/// `Complex<f32>` elements.
	C64(Vec<Complex<f32>>),
	/// `Complex<f64>` elements.
	C128(Vec<Complex<f64>>),
	/// `String` elements.
	String(Vec<String>),
	/// Mapping elements.
	Map(Vec<Map>),
	/// Heterogeneous elements.
	Value(Vec<Value>),
}

/// Element read from a sequence.
///
/// Scalar elements are copied out of their typed storage; containers stay borrowed.
#[derive(Debug, Clone)]
pub enum Element<'a> {
	/// Borrowed heterogeneous element or document node.
	Value(&'a Value),
	/// Borrowed mapping element.
	Map(&'a Map),
	/// Scalar element rewrapped as a value.
	Owned(Value),
}

/// Mutable container element reached while descending for a write.
pub(crate) enum ElementMut<'a> {
	Value(&'a mut Value),
	Map(&'a mut Map),
}

impl<'a> ElementMut<'a> {
	pub(crate) fn into_map(self) -> Option<&'a mut Map> {
		match self {
			ElementMut::Value(Value::Map(map)) => Some(map),
			ElementMut::Map(map) => Some(map),
			ElementMut::Value(_) => None,
		}
	}

	pub(crate) fn into_seq(self) -> Option<&'a mut Sequence> {
		match self {
			ElementMut::Value(Value::Seq(items)) => Some(items),
			_ => None,
		}
	}

	pub(crate) fn is_seq(&self) -> bool {
		matches!(self, ElementMut::Value(Value::Seq(_)))
	}
}

/// Match every scalar-backed variant with one generic body, followed by caller-supplied arms.
macro_rules! match_scalar_seq {
	($seq:expr, $items:ident => $body:expr, $($rest:tt)*) => {
		match $seq {
			Sequence::Bool($items) => $body,
			Sequence::I8($items) => $body,
			Sequence::I16($items) => $body,
			Sequence::I32($items) => $body,
			Sequence::I64($items) => $body,
			Sequence::U8($items) => $body,
			Sequence::U16($items) => $body,
			Sequence::U32($items) => $body,
			Sequence::U64($items) => $body,
			Sequence::Usize($items) => $body,
			Sequence::F32($items) => $body,
			Sequence::F64($items) => $body,
			Sequence::C64($items) => $body,
			Sequence::C128($items) => $body,
			Sequence::String($items) => $body,
			$($rest)*
		}
	};
}

impl Sequence {
	/// Number of elements.
	pub fn len(&self) -> usize {
		match_scalar_seq!(self, items => items.len(),
			Sequence::Map(items) => items.len(),
			Sequence::Value(items) => items.len(),
		)
	}

	/// Whether the sequence has no elements.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Element classification of the backing storage.
	pub fn element_kind(&self) -> ElementKind {
		match self {
			Sequence::Bool(_) => ElementKind::Bool,
			Sequence::I8(_) => ElementKind::I8,
			Sequence::I16(_) => ElementKind::I16,
			Sequence::I32(_) => ElementKind::I32,
			Sequence::I64(_) => ElementKind::I64,
			Sequence::U8(_) => ElementKind::U8,
			Sequence::U16(_) => ElementKind::U16,
			Sequence::U32(_) => ElementKind::U32,
			Sequence::U64(_) => ElementKind::U64,
			Sequence::Usize(_) => ElementKind::Usize,
			Sequence::F32(_) => ElementKind::F32,
			Sequence::F64(_) => ElementKind::F64,
			Sequence::C64(_) => ElementKind::C64,
			Sequence::C128(_) => ElementKind::C128,
			Sequence::String(_) => ElementKind::String,
			Sequence::Map(_) => ElementKind::Mapping,
			Sequence::Value(_) => ElementKind::Value,
		}
	}

	/// Read the element at `index`, or `None` when out of range.
	pub fn get_at(&self, index: usize) -> Option<Element<'_>> {
		match_scalar_seq!(self, items => items.get(index).map(|item| Element::Owned(item.clone().into_value())),
			Sequence::Map(items) => items.get(index).map(Element::Map),
			Sequence::Value(items) => items.get(index).map(Element::Value),
		)
	}

	/// Replace the element at `index` in place.
	///
	/// Fails with [`DocError::IndexOutOfRange`] when `index >= len`, then with
	/// [`DocError::TypeMismatch`] when `value` is not of the stored element kind.
	pub fn set_at(&mut self, index: usize, value: Value) -> Result<()> {
		let len = self.len();
		if index >= len {
			return Err(DocError::IndexOutOfRange { index, len });
		}

		match_scalar_seq!(self, items => store(items, index, value),
			Sequence::Map(items) => match value {
				Value::Map(map) => {
					items[index] = map;
					Ok(())
				}
				other => Err(DocError::TypeMismatch {
					expected: Kind::Mapping,
					got: other.kind(),
				}),
			},
			Sequence::Value(items) => {
				items[index] = value;
				Ok(())
			}
		)
	}

	/// Mutable container element at `index`; `None` for scalar elements or out-of-range indices.
	pub(crate) fn element_mut(&mut self, index: usize) -> Option<ElementMut<'_>> {
		match self {
			Sequence::Map(items) => items.get_mut(index).map(ElementMut::Map),
			Sequence::Value(items) => items.get_mut(index).map(ElementMut::Value),
			_ => None,
		}
	}
}

fn store<T: Scalar>(items: &mut [T], index: usize, value: Value) -> Result<()> {
	let item = T::take(value).map_err(|rejected| DocError::TypeMismatch {
		expected: T::KIND,
		got: rejected.kind(),
	})?;
	items[index] = item;
	Ok(())
}

#[cfg(test)]
mod tests;
