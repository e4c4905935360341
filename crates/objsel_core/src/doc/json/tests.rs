use serde_json::json;

use crate::doc::{Complex, DocError, ElementKind, Kind, Opaque, Sequence, Value, to_json};

#[test]
fn decodes_json_shapes() {
	let value = Value::from(json!({
		"n": null,
		"ok": true,
		"small": -3,
		"big": 18446744073709551615_u64,
		"ratio": 0.5,
		"tags": ["a", 1],
		"inner": {"k": "v"}
	}));

	assert!(value.get("n").is_nil());
	assert!(value.has("ok"));
	assert!(!value.has("n"));
	assert!(value.get("ok").must_bool());
	assert_eq!(value.get("small").must_i64(), -3);
	assert_eq!(value.get("big").must_u64(), u64::MAX);
	assert_eq!(value.get("ratio").must_f64(), 0.5);
	assert_eq!(value.get("tags").kind(), Kind::Sequence(ElementKind::Value));
	assert_eq!(value.get("inner.k").str(), Some("v"));
}

#[test]
fn encodes_typed_values() {
	let value: Value = [
		("ids", Value::from(vec![1_u16, 2])),
		("raw", Value::Seq(Sequence::U8(vec![7, 8]))),
		("z", Value::C128(Complex::new(1.0, -2.0))),
		("f", Value::F32(1.5)),
		("name", Value::from("x")),
		("gone", Value::Nil),
	]
	.into_iter()
	.collect();

	let json = to_json(&value).expect("encodes");
	assert_eq!(
		json,
		json!({
			"ids": [1, 2],
			"raw": [7, 8],
			"z": [1.0, -2.0],
			"f": 1.5,
			"name": "x",
			"gone": null
		})
	);
}

#[test]
fn json_text_round_trips_through_documents() {
	let text = r#"{"books":[{"title":"Dune","year":1965}],"open":true}"#;
	let value = Value::from_json_str(text).expect("decodes");
	let back = value.to_json().expect("encodes");
	assert_eq!(back, serde_json::from_str::<serde_json::Value>(text).expect("reference parses"));
}

#[test]
fn rejects_unrepresentable_values() {
	let err = to_json(&Value::Opaque(Opaque::new(1_u8))).expect_err("opaque has no encoding");
	assert!(matches!(err, DocError::Unrepresentable { kind: Kind::Other }));

	let err = to_json(&Value::F64(f64::NAN)).expect_err("nan has no encoding");
	assert!(matches!(err, DocError::Unrepresentable { kind: Kind::F64 }));
}

#[test]
fn malformed_json_text_is_an_error() {
	let err = Value::from_json_str("{").expect_err("truncated json should fail");
	assert!(matches!(err, DocError::Json(_)));
}
