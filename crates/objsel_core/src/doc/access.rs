use crate::doc::sequence::ElementMut;
use crate::doc::{DocError, Element, Result, Selector, Sequence, Step, Typed, Value};

/// Movement a step makes against the current container.
enum Move<'s> {
	Key(&'s str),
	Index(usize),
	KeyIndex(&'s str, usize),
}

fn plan(step: &Step, root_is_seq: bool) -> Move<'_> {
	if root_is_seq && let Some(index) = step.root_index() {
		return Move::Index(index);
	}
	match step {
		Step::Field(key) => Move::Key(key),
		Step::FieldIndex(key, index) => Move::KeyIndex(key, *index),
		Step::Index(index) => Move::Index(*index),
	}
}

/// Read the value `selector` addresses inside `root`.
///
/// Never fails: a missing key, an out-of-range index, or a step into a scalar yields a nil wrapper.
pub fn resolve<'a>(root: &'a Value, selector: &Selector) -> Typed<'a> {
	let mut cursor = Element::Value(root);

	for (step_index, step) in selector.steps().iter().enumerate() {
		let root_is_seq = step_index == 0 && matches!(root, Value::Seq(_));
		let next = match plan(step, root_is_seq) {
			Move::Key(key) => field(cursor, key),
			Move::Index(index) => element(cursor, index),
			Move::KeyIndex(key, index) => field(cursor, key).and_then(|found| element(found, index)),
		};

		match next {
			Some(found) => cursor = found,
			None => {
				log::trace!("resolve `{selector}` found nothing at step {step_index}");
				return Typed::nil();
			}
		}
	}

	Typed::from_element(cursor)
}

fn field<'a>(cursor: Element<'a>, key: &str) -> Option<Element<'a>> {
	match cursor {
		Element::Value(Value::Map(map)) => map.get(key).map(Element::Value),
		Element::Map(map) => map.get(key).map(Element::Value),
		_ => None,
	}
}

fn element(cursor: Element<'_>, index: usize) -> Option<Element<'_>> {
	match cursor {
		Element::Value(Value::Seq(items)) => items.get_at(index),
		_ => None,
	}
}

/// Whether `selector` reaches a non-nil value inside `root`.
pub fn has(root: &Value, selector: &Selector) -> bool {
	!resolve(root, selector).is_nil()
}

/// Write `value` at the location `selector` addresses, mutating `root` in place.
///
/// Intermediate containers are never created: every non-terminal step must already reach a
/// mapping or sequence. Terminal field steps insert or overwrite the key; terminal index steps
/// replace an existing element of the same kind.
pub fn assign(root: &mut Value, selector: &Selector, value: impl Into<Value>) -> Result<()> {
	let result = assign_value(root, selector, value.into());
	if let Err(err) = &result {
		log::debug!("assign `{selector}` rejected: {err}");
	}
	result
}

fn assign_value(root: &mut Value, selector: &Selector, value: Value) -> Result<()> {
	let steps = selector.steps();
	let last = steps.len().saturating_sub(1);
	let mut cursor = ElementMut::Value(root);

	for (step_index, step) in steps.iter().enumerate() {
		let terminal = step_index == last;
		let missing = || DocError::IntermediatePathMissing {
			selector: selector.to_string(),
			step: step_index,
		};
		let root_is_seq = step_index == 0 && cursor.is_seq();

		match plan(step, root_is_seq) {
			Move::Key(key) => {
				let map = cursor.into_map().ok_or_else(missing)?;
				if terminal {
					map.insert(key.to_owned(), value);
					return Ok(());
				}
				cursor = ElementMut::Value(map.get_mut(key).ok_or_else(missing)?);
			}
			Move::Index(index) => {
				let items = cursor.into_seq().ok_or_else(missing)?;
				if terminal {
					return items.set_at(index, value);
				}
				cursor = descend(items, index, missing)?;
			}
			Move::KeyIndex(key, index) => {
				let map = cursor.into_map().ok_or_else(missing)?;
				let Some(Value::Seq(items)) = map.get_mut(key) else {
					return Err(missing());
				};
				if terminal {
					return items.set_at(index, value);
				}
				cursor = descend(items, index, missing)?;
			}
		}
	}

	Ok(())
}

fn descend(items: &mut Sequence, index: usize, missing: impl FnOnce() -> DocError) -> Result<ElementMut<'_>> {
	let len = items.len();
	if index >= len {
		return Err(DocError::IndexOutOfRange { index, len });
	}
	items.element_mut(index).ok_or_else(missing)
}

impl Value {
	/// Resolve selector text against this value.
	///
	/// # Panics
	///
	/// Panics when `selector` is malformed; use [`Value::try_get`] for untrusted selector text.
	pub fn get(&self, selector: &str) -> Typed<'_> {
		match Selector::parse(selector) {
			Ok(parsed) => resolve(self, &parsed),
			Err(err) => panic!("{err}"),
		}
	}

	/// Resolve selector text against this value, reporting malformed selectors.
	pub fn try_get(&self, selector: &str) -> Result<Typed<'_>> {
		Ok(resolve(self, &Selector::parse(selector)?))
	}

	/// Element `index` of a root sequence.
	pub fn at(&self, index: usize) -> Typed<'_> {
		resolve(self, &Selector::index(index))
	}

	/// Assign `value` at selector text, mutating this value in place.
	pub fn set(&mut self, selector: &str, value: impl Into<Value>) -> Result<()> {
		assign(self, &Selector::parse(selector)?, value)
	}

	/// Whether selector text reaches a non-nil value.
	///
	/// # Panics
	///
	/// Panics when `selector` is malformed.
	pub fn has(&self, selector: &str) -> bool {
		!self.get(selector).is_nil()
	}
}
