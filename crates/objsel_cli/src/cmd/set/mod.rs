use std::path::PathBuf;

use objsel::doc::{ParseOptions, Value, assign};

use crate::cmd::print::{PrintOptions, render_value};
use crate::cmd::util::{emit_json, load_document, parse_selector, write_document};

/// Output and parsing switches for `set`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetOptions {
	/// Store `value` verbatim as a string instead of decoding it as JSON.
	pub string: bool,
	/// Print the updated document as JSON.
	pub json: bool,
	/// Write the updated document back to its file.
	pub write: bool,
}

/// Assign a value at a selector and emit or persist the updated document.
pub fn run(path: PathBuf, selector: String, value: String, options: &ParseOptions, set: SetOptions) -> objsel::doc::Result<()> {
	let mut root = load_document(&path)?;
	let selector = parse_selector(&selector, options)?;
	let value = parse_value(value, set.string)?;

	assign(&mut root, &selector, value)?;

	if set.write {
		write_document(&path, &root)?;
		log::info!("wrote {} after assigning `{selector}`", path.display());
		return Ok(());
	}

	if set.json {
		return emit_json(&root.to_json()?);
	}

	print!("{}", render_value(&root, PrintOptions::default()));
	Ok(())
}

pub(crate) fn parse_value(text: String, literal: bool) -> objsel::doc::Result<Value> {
	if literal {
		return Ok(Value::String(text));
	}
	Value::from_json_str(&text)
}
