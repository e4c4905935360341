use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::doc::Sequence;

/// String-keyed mapping container.
pub type Map = BTreeMap<String, Value>;

/// Dynamic value held in a decoded document.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// Absent value.
	#[default]
	Nil,
	/// Boolean scalar.
	Bool(bool),
	/// 8-bit signed integer scalar.
	I8(i8),
	/// 16-bit signed integer scalar.
	I16(i16),
	/// 32-bit signed integer scalar.
	I32(i32),
	/// 64-bit signed integer scalar.
	I64(i64),
	/// 8-bit unsigned integer scalar.
	U8(u8),
	/// 16-bit unsigned integer scalar.
	U16(u16),
	/// 32-bit unsigned integer scalar.
	U32(u32),
	/// 64-bit unsigned integer scalar.
	U64(u64),
	/// Pointer-sized unsigned integer scalar.
	Usize(usize),
	/// 32-bit float scalar.
	F32(f32),
	/// 64-bit float scalar.
	F64(f64),
	/// Complex number with 32-bit parts.
	C64(Complex<f32>),
	/// Complex number with 64-bit parts.
	C128(Complex<f64>),
	/// UTF-8 string scalar.
	String(String),
	/// Typed sequence.
	Seq(Sequence),
	/// String-keyed mapping.
	Map(Map),
	/// Any other concrete payload.
	Opaque(Opaque),
}

/// Complex number stored as real and imaginary parts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex<T> {
	/// Real part.
	pub re: T,
	/// Imaginary part.
	pub im: T,
}

impl<T> Complex<T> {
	/// Build a complex number from its parts.
	pub const fn new(re: T, im: T) -> Self {
		Self { re, im }
	}
}

impl<T: fmt::Display> fmt::Display for Complex<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}+{}i)", self.re, self.im)
	}
}

/// Shared handle to a payload that has no dedicated variant.
///
/// Equality is identity: two handles are equal only when they point at the same allocation.
#[derive(Clone)]
pub struct Opaque {
	type_name: &'static str,
	inner: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
	/// Wrap an arbitrary payload.
	pub fn new<T: Any + Send + Sync>(value: T) -> Self {
		Self {
			type_name: std::any::type_name::<T>(),
			inner: Arc::new(value),
		}
	}

	/// Rust type name of the wrapped payload.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Borrow the payload if it has type `T`.
	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.inner.downcast_ref::<T>()
	}
}

impl fmt::Debug for Opaque {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Opaque({})", self.type_name)
	}
}

impl PartialEq for Opaque {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_owned())
	}
}

impl From<Map> for Value {
	fn from(value: Map) -> Self {
		Value::Map(value)
	}
}

impl From<Sequence> for Value {
	fn from(value: Sequence) -> Self {
		Value::Seq(value)
	}
}

impl From<Vec<Map>> for Value {
	fn from(value: Vec<Map>) -> Self {
		Value::Seq(Sequence::Map(value))
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Value::Seq(Sequence::Value(value))
	}
}

impl From<Opaque> for Value {
	fn from(value: Opaque) -> Self {
		Value::Opaque(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Nil, Into::into)
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Value::Map(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}
