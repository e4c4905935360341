use std::path::PathBuf;

use objsel::doc::{ParseOptions, resolve};

use crate::cmd::print::{PrintOptions, render_value};
use crate::cmd::util::{emit_json, load_document, parse_selector};

/// Resolve a selector in a JSON document and print what it reaches.
pub fn run(path: PathBuf, selector: String, options: &ParseOptions, json: bool) -> objsel::doc::Result<()> {
	let root = load_document(&path)?;
	let selector = parse_selector(&selector, options)?;
	let found = resolve(&root, &selector);

	if json {
		let value = match found.value() {
			Some(value) => value.to_json()?,
			None => serde_json::Value::Null,
		};
		return emit_json(&GetJson {
			path: path.display().to_string(),
			selector: selector.to_string(),
			kind: found.kind().to_string(),
			found: !found.is_nil(),
			value,
		});
	}

	println!("path: {}", path.display());
	println!("selector: {selector}");
	println!("kind: {}", found.kind());
	match found.value() {
		Some(value) => print!("{}", render_value(&value, PrintOptions::default())),
		None => println!("null"),
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct GetJson {
	path: String,
	selector: String,
	kind: String,
	found: bool,
	value: serde_json::Value,
}

#[cfg(test)]
mod tests {
	use crate::cmd::test_support::{fixture_path, run_objsel, run_objsel_json};

	#[test]
	fn get_json_reports_nested_value() {
		let fixture = fixture_path("library.json");
		let fixture = fixture.to_string_lossy().into_owned();
		let json = run_objsel_json(&["get", &fixture, "books[0].chapters[2].title", "--json"]);

		assert_eq!(json["selector"], "books[0].chapters[2].title");
		assert_eq!(json["kind"], "string");
		assert_eq!(json["found"], true);
		assert_eq!(json["value"], "Spice");
	}

	#[test]
	fn get_missing_path_is_nil_not_error() {
		let fixture = fixture_path("library.json");
		let fixture = fixture.to_string_lossy().into_owned();
		let json = run_objsel_json(&["get", &fixture, "books[9].title", "--json"]);

		assert_eq!(json["kind"], "nil");
		assert_eq!(json["found"], false);
		assert!(json["value"].is_null());
	}

	#[test]
	fn get_text_output_prints_kind_and_value() {
		let fixture = fixture_path("library.json");
		let fixture = fixture.to_string_lossy().into_owned();
		let output = run_objsel(&["get", &fixture, "address.city"]);
		assert!(output.status.success());

		let stdout = String::from_utf8_lossy(&output.stdout);
		assert!(stdout.contains("kind: string"), "unexpected output: {stdout}");
		assert!(stdout.contains("\"Boulder\""), "unexpected output: {stdout}");
	}

	#[test]
	fn get_malformed_selector_fails() {
		let fixture = fixture_path("library.json");
		let fixture = fixture.to_string_lossy().into_owned();
		let output = run_objsel(&["get", &fixture, "books[x]"]);

		assert!(!output.status.success());
		let stderr = String::from_utf8_lossy(&output.stderr);
		assert!(stderr.contains("malformed selector"), "unexpected stderr: {stderr}");
	}
}
