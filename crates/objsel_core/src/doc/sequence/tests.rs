use crate::doc::{DocError, Element, ElementKind, Kind, Map, Sequence, Value};

#[test]
fn get_at_rewraps_typed_elements() {
	let items = Sequence::I32(vec![10, 20, 30]);
	let Some(Element::Owned(Value::I32(item))) = items.get_at(1) else {
		panic!("expected owned i32 element");
	};
	assert_eq!(item, 20);
	assert!(items.get_at(3).is_none());
}

#[test]
fn get_at_borrows_container_elements() {
	let mut map = Map::new();
	map.insert("name".to_owned(), Value::from("one"));
	let maps = Sequence::Map(vec![map]);
	assert!(matches!(maps.get_at(0), Some(Element::Map(item)) if item.contains_key("name")));

	let values = Sequence::Value(vec![Value::Bool(true)]);
	assert!(matches!(values.get_at(0), Some(Element::Value(Value::Bool(true)))));
}

#[test]
fn set_at_replaces_in_place() {
	let mut items = Sequence::String(vec!["a".to_owned(), "b".to_owned()]);
	items.set_at(1, Value::from("z")).expect("same-kind replace succeeds");
	assert_eq!(items, Sequence::String(vec!["a".to_owned(), "z".to_owned()]));
	assert_eq!(items.len(), 2);
}

#[test]
fn set_at_rejects_other_element_kind() {
	let mut items = Sequence::I32(vec![1, 2]);
	let err = items.set_at(0, Value::I64(9)).expect_err("i64 into i32 storage should fail");
	assert!(matches!(
		err,
		DocError::TypeMismatch {
			expected: Kind::I32,
			got: Kind::I64
		}
	));
	assert_eq!(items, Sequence::I32(vec![1, 2]));
}

#[test]
fn set_at_rejects_out_of_range() {
	let mut items = Sequence::Bool(vec![true]);
	let err = items.set_at(1, Value::Bool(false)).expect_err("index past end should fail");
	assert!(matches!(err, DocError::IndexOutOfRange { index: 1, len: 1 }));
}

#[test]
fn range_is_checked_before_kind() {
	let mut items = Sequence::F64(vec![]);
	let err = items.set_at(0, Value::from("x")).expect_err("empty sequence should fail");
	assert!(matches!(err, DocError::IndexOutOfRange { index: 0, len: 0 }));
}

#[test]
fn mapping_sequence_only_accepts_mappings() {
	let mut items = Sequence::Map(vec![Map::new()]);
	let err = items.set_at(0, Value::Bool(true)).expect_err("bool into mapping storage should fail");
	assert!(matches!(err, DocError::TypeMismatch { expected: Kind::Mapping, got: Kind::Bool }));
	items.set_at(0, Value::Map(Map::new())).expect("mapping replace succeeds");
}

#[test]
fn heterogeneous_sequence_accepts_anything() {
	let mut items = Sequence::Value(vec![Value::Nil]);
	items.set_at(0, Value::U8(3)).expect("any kind is accepted");
	assert_eq!(items.element_kind(), ElementKind::Value);
	assert!(matches!(items.get_at(0), Some(Element::Value(Value::U8(3)))));
}

#[test]
fn element_mut_descends_only_into_containers() {
	let mut scalars = Sequence::U64(vec![1]);
	assert!(scalars.element_mut(0).is_none());

	let mut values = Sequence::Value(vec![Value::Map(Map::new())]);
	let map = values.element_mut(0).and_then(|element| element.into_map()).expect("mapping element");
	map.insert("k".to_owned(), Value::Bool(true));
	assert!(matches!(values.get_at(0), Some(Element::Value(Value::Map(item))) if item.len() == 1));
}
