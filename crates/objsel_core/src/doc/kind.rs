use std::fmt;

use crate::doc::{Sequence, Value};

/// Element classification of a typed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
	/// `bool` elements.
	Bool,
	/// `i8` elements.
	I8,
	/// `i16` elements.
	I16,
	/// `i32` elements.
	I32,
	/// `i64` elements.
	I64,
	/// `u8` elements.
	U8,
	/// `u16` elements.
	U16,
	/// `u32` elements.
	U32,
	/// `u64` elements.
	U64,
	/// `usize` elements.
	Usize,
	/// `f32` elements.
	F32,
	/// `f64` elements.
	F64,
	/// `Complex<f32>` elements.
	C64,
	/// `Complex<f64>` elements.
	C128,
	/// `String` elements.
	String,
	/// Mapping elements.
	Mapping,
	/// Heterogeneous [`Value`] elements.
	Value,
}

impl ElementKind {
	/// Stable lowercase label.
	pub fn name(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::I8 => "i8",
			Self::I16 => "i16",
			Self::I32 => "i32",
			Self::I64 => "i64",
			Self::U8 => "u8",
			Self::U16 => "u16",
			Self::U32 => "u32",
			Self::U64 => "u64",
			Self::Usize => "usize",
			Self::F32 => "f32",
			Self::F64 => "f64",
			Self::C64 => "c64",
			Self::C128 => "c128",
			Self::String => "string",
			Self::Mapping => "mapping",
			Self::Value => "value",
		}
	}
}

/// Classification tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Absent value.
	Nil,
	/// Boolean scalar.
	Bool,
	/// 8-bit signed integer scalar.
	I8,
	/// 16-bit signed integer scalar.
	I16,
	/// 32-bit signed integer scalar.
	I32,
	/// 64-bit signed integer scalar.
	I64,
	/// 8-bit unsigned integer scalar.
	U8,
	/// 16-bit unsigned integer scalar.
	U16,
	/// 32-bit unsigned integer scalar.
	U32,
	/// 64-bit unsigned integer scalar.
	U64,
	/// Pointer-sized unsigned integer scalar.
	Usize,
	/// 32-bit float scalar.
	F32,
	/// 64-bit float scalar.
	F64,
	/// Complex scalar with 32-bit parts.
	C64,
	/// Complex scalar with 64-bit parts.
	C128,
	/// String scalar.
	String,
	/// Raw byte sequence (the `u8` sequence form).
	ByteSequence,
	/// Sequence of the given element kind.
	Sequence(ElementKind),
	/// String-keyed mapping.
	Mapping,
	/// Any other concrete payload.
	Other,
}

impl Kind {
	/// Classify a value by its concrete representation.
	pub fn of(value: &Value) -> Self {
		match value {
			Value::Nil => Self::Nil,
			Value::Bool(_) => Self::Bool,
			Value::I8(_) => Self::I8,
			Value::I16(_) => Self::I16,
			Value::I32(_) => Self::I32,
			Value::I64(_) => Self::I64,
			Value::U8(_) => Self::U8,
			Value::U16(_) => Self::U16,
			Value::U32(_) => Self::U32,
			Value::U64(_) => Self::U64,
			Value::Usize(_) => Self::Usize,
			Value::F32(_) => Self::F32,
			Value::F64(_) => Self::F64,
			Value::C64(_) => Self::C64,
			Value::C128(_) => Self::C128,
			Value::String(_) => Self::String,
			Value::Seq(Sequence::U8(_)) => Self::ByteSequence,
			Value::Seq(items) => Self::Sequence(items.element_kind()),
			Value::Map(_) => Self::Mapping,
			Value::Opaque(_) => Self::Other,
		}
	}

	/// Whether this kind is a single scalar payload.
	pub fn is_scalar(self) -> bool {
		!matches!(self, Self::Nil | Self::ByteSequence | Self::Sequence(_) | Self::Mapping | Self::Other)
	}

	/// Whether this kind is indexable by the sequence adapter.
	pub fn is_sequence(self) -> bool {
		matches!(self, Self::ByteSequence | Self::Sequence(_))
	}

	/// Element kind for sequence kinds.
	pub fn element(self) -> Option<ElementKind> {
		match self {
			Self::ByteSequence => Some(ElementKind::U8),
			Self::Sequence(element) => Some(element),
			_ => None,
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Nil => "nil",
			Self::Bool => "bool",
			Self::I8 => "i8",
			Self::I16 => "i16",
			Self::I32 => "i32",
			Self::I64 => "i64",
			Self::U8 => "u8",
			Self::U16 => "u16",
			Self::U32 => "u32",
			Self::U64 => "u64",
			Self::Usize => "usize",
			Self::F32 => "f32",
			Self::F64 => "f64",
			Self::C64 => "c64",
			Self::C128 => "c128",
			Self::String => "string",
			Self::ByteSequence => "bytes",
			Self::Sequence(element) => return write!(f, "[{}]", element.name()),
			Self::Mapping => "mapping",
			Self::Other => "other",
		};
		f.write_str(label)
	}
}

impl Value {
	/// Classification tag of this value.
	pub fn kind(&self) -> Kind {
		Kind::of(self)
	}

	/// Whether this value is [`Value::Nil`].
	pub fn is_nil(&self) -> bool {
		matches!(self, Value::Nil)
	}
}
