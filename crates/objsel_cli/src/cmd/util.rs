use std::path::Path;

use objsel::doc::{ParseOptions, Result, Selector, Value};

/// Read and decode a JSON document from disk.
pub(crate) fn load_document(path: &Path) -> Result<Value> {
	let text = std::fs::read_to_string(path)?;
	let value = Value::from_json_str(&text)?;
	log::debug!("loaded {} as {}", path.display(), value.kind());
	Ok(value)
}

/// Encode a document as pretty JSON and write it to disk.
pub(crate) fn write_document(path: &Path, value: &Value) -> Result<()> {
	let mut text = serde_json::to_string_pretty(&value.to_json()?)?;
	text.push('\n');
	std::fs::write(path, text)?;
	Ok(())
}

/// Parse selector text with CLI options.
pub(crate) fn parse_selector(text: &str, options: &ParseOptions) -> Result<Selector> {
	Selector::parse_with(text, options)
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
