#![allow(missing_docs)]

use std::panic::{AssertUnwindSafe, catch_unwind};

use objsel::doc::{Complex, Kind, Map, Opaque, Scalar, Sequence, Typed, Value};

fn samples() -> Vec<Value> {
	vec![
		Value::Nil,
		Value::Bool(true),
		Value::I8(-8),
		Value::I16(-16),
		Value::I32(-32),
		Value::I64(-64),
		Value::U8(8),
		Value::U16(16),
		Value::U32(32),
		Value::U64(64),
		Value::Usize(128),
		Value::F32(0.5),
		Value::F64(0.25),
		Value::C64(Complex::new(1.0, 2.0)),
		Value::C128(Complex::new(3.0, 4.0)),
		Value::from("text"),
		Value::Seq(Sequence::U8(vec![1, 2])),
		Value::from(vec![1_i32, 2]),
		Value::from(vec!["a".to_owned()]),
		Value::Map(Map::new()),
		Value::Opaque(Opaque::new(())),
	]
}

fn fails<R>(f: impl FnOnce() -> R) -> bool {
	catch_unwind(AssertUnwindSafe(f)).is_err()
}

fn check_scalar<T: Scalar + PartialEq + std::fmt::Debug>(default: T) {
	for value in samples() {
		let typed = Typed::new(&value);
		if value.kind() == T::KIND {
			assert!(typed.is::<T>());
			assert_eq!(typed.get::<T>().as_ref(), T::from_value(&value));
			assert!(!fails(|| typed.must::<T>()));
		} else {
			assert!(!typed.is::<T>(), "{} should not be {}", value.kind(), T::KIND);
			assert_eq!(typed.or(default.clone()), default);
			assert!(fails(|| typed.must::<T>()), "must {} on {} should panic", T::KIND, value.kind());
		}
	}
}

#[test]
fn every_scalar_kind_obeys_the_accessor_contract() {
	check_scalar(false);
	check_scalar(99_i8);
	check_scalar(99_i16);
	check_scalar(99_i32);
	check_scalar(99_i64);
	check_scalar(99_u8);
	check_scalar(99_u16);
	check_scalar(99_u32);
	check_scalar(99_u64);
	check_scalar(99_usize);
	check_scalar(9.5_f32);
	check_scalar(9.5_f64);
	check_scalar(Complex::new(9.0_f32, 9.0));
	check_scalar(Complex::new(9.0_f64, 9.0));
	check_scalar("default".to_owned());
}

#[test]
fn sequence_kinds_obey_the_accessor_contract() {
	for value in samples() {
		let typed = Typed::new(&value);
		assert_eq!(typed.is_i32_seq(), value.kind() == <i32 as Scalar>::SEQ_KIND);
		assert_eq!(typed.is_u8_seq(), value.kind() == Kind::ByteSequence);
		if !typed.is_string_seq() {
			assert_eq!(typed.string_seq_or(vec!["d".to_owned()]), vec!["d".to_owned()]);
			assert!(fails(|| typed.must_string_seq().len()));
		}
	}
}

#[test]
fn nil_wrapper_and_nil_payload_agree() {
	let nil = Value::Nil;
	assert!(Typed::nil().is_nil());
	assert!(Typed::new(&nil).is_nil());
	assert_eq!(Typed::nil().kind(), Typed::new(&nil).kind());
	assert!(fails(|| Typed::nil().must_mapping().len()));
	assert!(fails(|| Typed::nil().must_values().len()));
}

#[test]
fn resolved_typed_elements_keep_their_width() {
	let root: Value = [
		("bytes", Value::Seq(Sequence::U8(b"xyz".to_vec()))),
		("flags", Value::from(vec![true, false])),
		("waves", Value::from(vec![Complex::new(0.0_f64, 1.0)])),
	]
	.into_iter()
	.collect();

	assert_eq!(root.get("bytes[1]").must_u8(), b'y');
	assert_eq!(root.get("bytes").bytes(), Some(&b"xyz"[..]));
	assert!(!root.get("flags[1]").must_bool());
	assert_eq!(root.get("waves[0]").must_c128(), Complex::new(0.0, 1.0));
	assert_eq!(root.get("waves[0]").kind(), Kind::C128);
	assert!(root.get("flags[2]").is_nil());
}
