//! Property-based tests for selector parsing and resolve/assign behavior.

use objsel::doc::{Selector, Step, Value, resolve};
use objsel_testkit::fixture_json;
use proptest::prelude::*;

fn library() -> Value {
	Value::from(fixture_json("library.json"))
}

proptest! {
	/// `key[index]` parses to a single field+index step.
	#[test]
	fn prop_array_notation_parses(key in "[a-z_][a-z0-9_]{0,11}", index in 0..100_000usize) {
		let selector = Selector::parse(&format!("{key}[{index}]")).expect("selector parses");
		prop_assert_eq!(selector.steps().to_vec(), vec![Step::FieldIndex(key.clone(), index)]);

		let nested = Selector::parse(&format!("types.{key}[{index}]")).expect("selector parses");
		prop_assert_eq!(nested.steps().to_vec(), vec![Step::Field("types".to_owned()), Step::FieldIndex(key, index)]);
	}

	/// Parsed selectors render back to the text they came from.
	#[test]
	fn prop_display_round_trips(segments in prop::collection::vec(("[a-z]{1,6}", prop::option::of(0..50usize)), 1..6)) {
		let text = segments
			.iter()
			.map(|(key, index)| match index {
				Some(index) => format!("{key}[{index}]"),
				None => key.clone(),
			})
			.collect::<Vec<_>>()
			.join(".");
		let selector = Selector::parse(&text).expect("selector parses");
		prop_assert_eq!(selector.len(), segments.len());
		prop_assert_eq!(selector.to_string(), text);
	}

	/// Paths that do not exist resolve nil and are reported absent.
	#[test]
	fn prop_missing_paths_are_nil(key in "zz[a-z]{1,8}", index in 0..8usize, tail in "[a-z]{1,6}") {
		let root = library();
		for text in [key.clone(), format!("address.{key}"), format!("{key}[{index}].{tail}"), format!("books[{}].{tail}", index + 2)] {
			let selector = Selector::parse(&text).expect("selector parses");
			prop_assert!(resolve(&root, &selector).is_nil(), "{} should be nil", text);
			prop_assert!(!root.has(&text));
		}
	}

	/// Assigning a same-kind scalar and reading it back yields that scalar.
	#[test]
	fn prop_assign_then_resolve(number in any::<i64>(), text in "\\PC{0,24}", flag in any::<bool>(), slot in 0..3usize) {
		let mut root = library();

		root.set("founded", number).expect("assign succeeds");
		root.set(&format!("books[1].chapters[{slot}].title"), text.clone()).expect("assign succeeds");
		root.set("open", flag).expect("assign succeeds");

		let founded = root.get("founded");
		prop_assert_eq!(founded.kind(), Value::I64(number).kind());
		prop_assert_eq!(founded.must_i64(), number);
		let title = root.get(&format!("books[1].chapters[{slot}].title"));
		prop_assert_eq!(title.str(), Some(text.as_str()));
		prop_assert_eq!(root.get("open").must_bool(), flag);
	}

	/// Typed sequence elements round-trip at any in-range index.
	#[test]
	fn prop_typed_sequence_assign(items in prop::collection::vec(any::<u32>(), 1..32), replacement in any::<u32>(), pick in any::<prop::sample::Index>()) {
		let index = pick.index(items.len());
		let mut root: Value = [("ids", Value::from(items.clone()))].into_iter().collect();

		root.set(&format!("ids[{index}]"), replacement).expect("assign succeeds");

		let mut expected = items;
		expected[index] = replacement;
		prop_assert_eq!(root.get(&format!("ids[{index}]")).must_u32(), replacement);
		let ids = root.get("ids");
		prop_assert_eq!(ids.must_u32_seq(), expected.as_slice());
	}

	/// Default-returning accessors return the default whenever the kind differs.
	#[test]
	fn prop_default_on_kind_mismatch(default in any::<i32>(), fallback in "[a-z]{0,8}") {
		let root = library();
		for text in ["name", "founded", "rating", "address", "tags", "manager", "nope"] {
			let found = root.get(text);
			prop_assert_eq!(found.i32_or(default), default);
		}
		prop_assert_eq!(root.get("founded").string_or(fallback.clone()), fallback);
	}
}
