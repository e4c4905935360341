use std::borrow::Cow;

use crate::doc::{Complex, Element, ElementKind, Kind, Map, Opaque, Scalar, Sequence, Value};

/// Resolved value with its kind classified once, exposing typed extraction.
///
/// Every scalar kind `K` gets three accessors: a default-returning form (`or`), a failing form
/// (`must`, panics on kind mismatch), and a predicate (`is`). The same triad exists for the
/// sequence form of `K`. Named shortcuts such as [`Typed::i32_or`] forward to the generic ones.
#[derive(Debug, Clone)]
pub struct Typed<'a> {
	slot: Slot<'a>,
	kind: Kind,
}

#[derive(Debug, Clone)]
enum Slot<'a> {
	Nil,
	Ref(&'a Value),
	Map(&'a Map),
	Owned(Value),
}

impl<'a> Typed<'a> {
	/// Wrapper around nothing.
	pub fn nil() -> Self {
		Self {
			slot: Slot::Nil,
			kind: Kind::Nil,
		}
	}

	/// Wrap a borrowed value.
	pub fn new(value: &'a Value) -> Self {
		Self {
			kind: value.kind(),
			slot: Slot::Ref(value),
		}
	}

	/// Wrap an owned value.
	pub fn owned(value: Value) -> Self {
		Self {
			kind: value.kind(),
			slot: Slot::Owned(value),
		}
	}

	pub(crate) fn from_element(element: Element<'a>) -> Self {
		match element {
			Element::Value(value) => Self::new(value),
			Element::Map(map) => Self {
				slot: Slot::Map(map),
				kind: Kind::Mapping,
			},
			Element::Owned(value) => Self::owned(value),
		}
	}

	/// Cached classification of the wrapped value.
	pub fn kind(&self) -> Kind {
		self.kind
	}

	/// Whether nothing was found, or what was found is an explicit nil.
	pub fn is_nil(&self) -> bool {
		self.kind == Kind::Nil
	}

	fn as_value(&self) -> Option<&Value> {
		match &self.slot {
			Slot::Ref(value) => Some(*value),
			Slot::Owned(value) => Some(value),
			Slot::Nil | Slot::Map(_) => None,
		}
	}

	/// Borrow the wrapped value; mapping elements of mapping sequences are cloned into a value.
	pub fn value(&self) -> Option<Cow<'_, Value>> {
		match &self.slot {
			Slot::Nil => None,
			Slot::Ref(value) => Some(Cow::Borrowed(*value)),
			Slot::Owned(value) => Some(Cow::Borrowed(value)),
			Slot::Map(map) => Some(Cow::Owned(Value::Map((*map).clone()))),
		}
	}

	/// Take the wrapped value, [`Value::Nil`] when nothing was found.
	pub fn into_value(self) -> Value {
		match self.slot {
			Slot::Nil => Value::Nil,
			Slot::Ref(value) => value.clone(),
			Slot::Map(map) => Value::Map(map.clone()),
			Slot::Owned(value) => value,
		}
	}

	/// Payload of kind `T`, or `None` on mismatch.
	pub fn get<T: Scalar>(&self) -> Option<T> {
		if self.kind != T::KIND {
			return None;
		}
		self.as_value().and_then(T::from_value).cloned()
	}

	/// Payload of kind `T`, or `default` on mismatch.
	pub fn or<T: Scalar>(&self, default: T) -> T {
		self.get().unwrap_or(default)
	}

	/// Payload of kind `T`, or the zero value of `T` on mismatch.
	pub fn or_default<T: Scalar>(&self) -> T {
		self.get().unwrap_or_default()
	}

	/// Payload of kind `T`.
	///
	/// # Panics
	///
	/// Panics when the wrapped value is not of kind `T`, including when it is nil.
	pub fn must<T: Scalar>(&self) -> T {
		match self.get() {
			Some(item) => item,
			None => panic!("expected {} value, found {}", T::KIND, self.kind),
		}
	}

	/// Whether the wrapped value is of kind `T`.
	pub fn is<T: Scalar>(&self) -> bool {
		self.kind == T::KIND
	}

	fn as_seq(&self) -> Option<&Sequence> {
		match self.as_value()? {
			Value::Seq(items) => Some(items),
			_ => None,
		}
	}

	/// Elements of a sequence of `T`, or `None` on mismatch.
	pub fn seq<T: Scalar>(&self) -> Option<&[T]> {
		if self.kind != T::SEQ_KIND {
			return None;
		}
		self.as_seq().and_then(T::from_seq)
	}

	/// Elements of a sequence of `T`, or `default` on mismatch.
	pub fn seq_or<T: Scalar>(&self, default: Vec<T>) -> Vec<T> {
		self.seq().map_or(default, <[T]>::to_vec)
	}

	/// Elements of a sequence of `T`, or an empty vector on mismatch.
	pub fn seq_or_default<T: Scalar>(&self) -> Vec<T> {
		self.seq_or(Vec::new())
	}

	/// Elements of a sequence of `T`.
	///
	/// # Panics
	///
	/// Panics when the wrapped value is not a sequence of `T`.
	pub fn must_seq<T: Scalar>(&self) -> &[T] {
		match self.seq() {
			Some(items) => items,
			None => panic!("expected {} value, found {}", T::SEQ_KIND, self.kind),
		}
	}

	/// Whether the wrapped value is a sequence of `T`.
	pub fn is_seq<T: Scalar>(&self) -> bool {
		self.kind == T::SEQ_KIND
	}

	/// Borrowed string payload.
	pub fn str(&self) -> Option<&str> {
		match self.as_value()? {
			Value::String(text) => Some(text.as_str()),
			_ => None,
		}
	}

	/// Borrowed string payload, or `default` on mismatch.
	pub fn str_or<'s>(&'s self, default: &'s str) -> &'s str {
		self.str().unwrap_or(default)
	}

	/// Raw byte sequence payload.
	pub fn bytes(&self) -> Option<&[u8]> {
		self.seq::<u8>()
	}

	/// Borrowed mapping payload.
	pub fn mapping(&self) -> Option<&Map> {
		match &self.slot {
			Slot::Map(map) => Some(*map),
			Slot::Ref(Value::Map(map)) => Some(map),
			Slot::Owned(Value::Map(map)) => Some(map),
			_ => None,
		}
	}

	/// Mapping payload, or `default` on mismatch.
	pub fn mapping_or(&self, default: Map) -> Map {
		self.mapping().cloned().unwrap_or(default)
	}

	/// Mapping payload, or an empty mapping on mismatch.
	pub fn mapping_or_default(&self) -> Map {
		self.mapping_or(Map::new())
	}

	/// Borrowed mapping payload.
	///
	/// # Panics
	///
	/// Panics when the wrapped value is not a mapping.
	pub fn must_mapping(&self) -> &Map {
		match self.mapping() {
			Some(map) => map,
			None => panic!("expected {} value, found {}", Kind::Mapping, self.kind),
		}
	}

	/// Whether the wrapped value is a mapping.
	pub fn is_mapping(&self) -> bool {
		self.kind == Kind::Mapping
	}

	/// Elements of a sequence of mappings.
	pub fn mapping_seq(&self) -> Option<&[Map]> {
		match self.as_seq()? {
			Sequence::Map(items) => Some(items.as_slice()),
			_ => None,
		}
	}

	/// Elements of a sequence of mappings, or `default` on mismatch.
	pub fn mapping_seq_or(&self, default: Vec<Map>) -> Vec<Map> {
		self.mapping_seq().map_or(default, <[Map]>::to_vec)
	}

	/// Elements of a sequence of mappings, or an empty vector on mismatch.
	pub fn mapping_seq_or_default(&self) -> Vec<Map> {
		self.mapping_seq_or(Vec::new())
	}

	/// Elements of a sequence of mappings.
	///
	/// # Panics
	///
	/// Panics when the wrapped value is not a sequence of mappings.
	pub fn must_mapping_seq(&self) -> &[Map] {
		match self.mapping_seq() {
			Some(items) => items,
			None => panic!("expected [mapping] value, found {}", self.kind),
		}
	}

	/// Whether the wrapped value is a sequence of mappings.
	pub fn is_mapping_seq(&self) -> bool {
		matches!(self.kind, Kind::Sequence(ElementKind::Mapping))
	}

	/// Elements of a heterogeneous sequence.
	pub fn values(&self) -> Option<&[Value]> {
		match self.as_seq()? {
			Sequence::Value(items) => Some(items.as_slice()),
			_ => None,
		}
	}

	/// Elements of a heterogeneous sequence, or `default` on mismatch.
	pub fn values_or(&self, default: Vec<Value>) -> Vec<Value> {
		self.values().map_or(default, <[Value]>::to_vec)
	}

	/// Elements of a heterogeneous sequence, or an empty vector on mismatch.
	pub fn values_or_default(&self) -> Vec<Value> {
		self.values_or(Vec::new())
	}

	/// Elements of a heterogeneous sequence.
	///
	/// # Panics
	///
	/// Panics when the wrapped value is not a heterogeneous sequence.
	pub fn must_values(&self) -> &[Value] {
		match self.values() {
			Some(items) => items,
			None => panic!("expected [value] value, found {}", self.kind),
		}
	}

	/// Whether the wrapped value is a heterogeneous sequence.
	pub fn is_values(&self) -> bool {
		matches!(self.kind, Kind::Sequence(ElementKind::Value))
	}

	/// Opaque payload handle.
	pub fn opaque(&self) -> Option<&Opaque> {
		match self.as_value()? {
			Value::Opaque(item) => Some(item),
			_ => None,
		}
	}

	/// Opaque payload handle.
	///
	/// # Panics
	///
	/// Panics when the wrapped value is not an opaque payload.
	pub fn must_opaque(&self) -> &Opaque {
		match self.opaque() {
			Some(item) => item,
			None => panic!("expected {} value, found {}", Kind::Other, self.kind),
		}
	}

	/// Whether the wrapped value is an opaque payload.
	pub fn is_opaque(&self) -> bool {
		self.kind == Kind::Other
	}
}

impl<'a> From<&'a Value> for Typed<'a> {
	fn from(value: &'a Value) -> Self {
		Self::new(value)
	}
}

macro_rules! named_accessors {
	($($ty:ty => $get:ident, $or:ident, $must:ident, $is:ident, $seq:ident, $seq_or:ident, $must_seq:ident, $is_seq:ident;)*) => {
		impl Typed<'_> {
			$(
				#[doc = concat!("`", stringify!($ty), "` payload, or `None` on kind mismatch.")]
				pub fn $get(&self) -> Option<$ty> {
					self.get::<$ty>()
				}

				#[doc = concat!("`", stringify!($ty), "` payload, or `default` on kind mismatch.")]
				pub fn $or(&self, default: $ty) -> $ty {
					self.or::<$ty>(default)
				}

				#[doc = concat!("`", stringify!($ty), "` payload; panics on kind mismatch.")]
				pub fn $must(&self) -> $ty {
					self.must::<$ty>()
				}

				#[doc = concat!("Whether the wrapped value is a `", stringify!($ty), "`.")]
				pub fn $is(&self) -> bool {
					self.is::<$ty>()
				}

				#[doc = concat!("Elements of a `", stringify!($ty), "` sequence, or `None` on kind mismatch.")]
				pub fn $seq(&self) -> Option<&[$ty]> {
					self.seq::<$ty>()
				}

				#[doc = concat!("Elements of a `", stringify!($ty), "` sequence, or `default` on kind mismatch.")]
				pub fn $seq_or(&self, default: Vec<$ty>) -> Vec<$ty> {
					self.seq_or::<$ty>(default)
				}

				#[doc = concat!("Elements of a `", stringify!($ty), "` sequence; panics on kind mismatch.")]
				pub fn $must_seq(&self) -> &[$ty] {
					self.must_seq::<$ty>()
				}

				#[doc = concat!("Whether the wrapped value is a `", stringify!($ty), "` sequence.")]
				pub fn $is_seq(&self) -> bool {
					self.is_seq::<$ty>()
				}
			)*
		}
	};
}

named_accessors! {
	bool => bool, bool_or, must_bool, is_bool, bool_seq, bool_seq_or, must_bool_seq, is_bool_seq;
	i8 => i8, i8_or, must_i8, is_i8, i8_seq, i8_seq_or, must_i8_seq, is_i8_seq;
	i16 => i16, i16_or, must_i16, is_i16, i16_seq, i16_seq_or, must_i16_seq, is_i16_seq;
	i32 => i32, i32_or, must_i32, is_i32, i32_seq, i32_seq_or, must_i32_seq, is_i32_seq;
	i64 => i64, i64_or, must_i64, is_i64, i64_seq, i64_seq_or, must_i64_seq, is_i64_seq;
	u8 => u8, u8_or, must_u8, is_u8, u8_seq, u8_seq_or, must_u8_seq, is_u8_seq;
	u16 => u16, u16_or, must_u16, is_u16, u16_seq, u16_seq_or, must_u16_seq, is_u16_seq;
	u32 => u32, u32_or, must_u32, is_u32, u32_seq, u32_seq_or, must_u32_seq, is_u32_seq;
	u64 => u64, u64_or, must_u64, is_u64, u64_seq, u64_seq_or, must_u64_seq, is_u64_seq;
	usize => usize, usize_or, must_usize, is_usize, usize_seq, usize_seq_or, must_usize_seq, is_usize_seq;
	f32 => f32, f32_or, must_f32, is_f32, f32_seq, f32_seq_or, must_f32_seq, is_f32_seq;
	f64 => f64, f64_or, must_f64, is_f64, f64_seq, f64_seq_or, must_f64_seq, is_f64_seq;
	Complex<f32> => c64, c64_or, must_c64, is_c64, c64_seq, c64_seq_or, must_c64_seq, is_c64_seq;
	Complex<f64> => c128, c128_or, must_c128, is_c128, c128_seq, c128_seq_or, must_c128_seq, is_c128_seq;
	String => string, string_or, must_string, is_string, string_seq, string_seq_or, must_string_seq, is_string_seq;
}
