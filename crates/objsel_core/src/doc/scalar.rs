use crate::doc::{Complex, ElementKind, Kind, Sequence, Value};

/// Concrete Rust type backing one scalar [`Kind`] and its sequence form.
///
/// Implemented once per scalar kind. The typed accessors and the sequence adapter are written
/// against this trait, so adding a kind only means adding a variant and one `scalar!` line.
pub trait Scalar: Clone + Default + Sized + 'static {
	/// Kind of a single value of this type.
	const KIND: Kind;
	/// Kind of a sequence of this type.
	const SEQ_KIND: Kind;

	/// Borrow the payload when `value` holds exactly this type.
	fn from_value(value: &Value) -> Option<&Self>;

	/// Move the payload out of `value`, handing the value back on kind mismatch.
	fn take(value: Value) -> Result<Self, Value>;

	/// Borrow the backing storage when `seq` stores exactly this element type.
	fn from_seq(seq: &Sequence) -> Option<&[Self]>;

	/// Wrap a scalar payload.
	fn into_value(self) -> Value;

	/// Wrap a vector as a typed sequence.
	fn into_seq(items: Vec<Self>) -> Sequence;
}

macro_rules! scalar {
	($($ty:ty => $variant:ident, $seq_kind:expr;)*) => {
		$(
			impl Scalar for $ty {
				const KIND: Kind = Kind::$variant;
				const SEQ_KIND: Kind = $seq_kind;

				fn from_value(value: &Value) -> Option<&Self> {
					match value {
						Value::$variant(item) => Some(item),
						_ => None,
					}
				}

				fn take(value: Value) -> Result<Self, Value> {
					match value {
						Value::$variant(item) => Ok(item),
						other => Err(other),
					}
				}

				fn from_seq(seq: &Sequence) -> Option<&[Self]> {
					match seq {
						Sequence::$variant(items) => Some(items.as_slice()),
						_ => None,
					}
				}

				fn into_value(self) -> Value {
					Value::$variant(self)
				}

				fn into_seq(items: Vec<Self>) -> Sequence {
					Sequence::$variant(items)
				}
			}

			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Value::$variant(value)
				}
			}

			impl From<Vec<$ty>> for Value {
				fn from(value: Vec<$ty>) -> Self {
					Value::Seq(Sequence::$variant(value))
				}
			}
		)*
	};
}

scalar! {
	bool => Bool, Kind::Sequence(ElementKind::Bool);
	i8 => I8, Kind::Sequence(ElementKind::I8);
	i16 => I16, Kind::Sequence(ElementKind::I16);
	i32 => I32, Kind::Sequence(ElementKind::I32);
	i64 => I64, Kind::Sequence(ElementKind::I64);
	u8 => U8, Kind::ByteSequence;
	u16 => U16, Kind::Sequence(ElementKind::U16);
	u32 => U32, Kind::Sequence(ElementKind::U32);
	u64 => U64, Kind::Sequence(ElementKind::U64);
	usize => Usize, Kind::Sequence(ElementKind::Usize);
	f32 => F32, Kind::Sequence(ElementKind::F32);
	f64 => F64, Kind::Sequence(ElementKind::F64);
	Complex<f32> => C64, Kind::Sequence(ElementKind::C64);
	Complex<f64> => C128, Kind::Sequence(ElementKind::C128);
	String => String, Kind::Sequence(ElementKind::String);
}
