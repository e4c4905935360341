use std::fmt::Write;

use objsel::doc::{Element, Map, Sequence, Value};

/// Output truncation and formatting limits for rendered values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for a single mapping.
	pub max_fields: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for sequences.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested containers.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Render one value tree as indented text.
pub fn render_value(value: &Value, options: PrintOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, 0, 0, options);
	out
}

fn write_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Seq(items) => write_seq(out, items, indent, depth, options),
		Value::Map(map) => write_map(out, map, indent, depth, options),
		scalar => {
			let _ = writeln!(out, "{pad}{}", render_scalar(scalar, options));
		}
	}
}

/// Single-line rendering of a non-container value.
pub fn render_scalar(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::Nil => "null".to_owned(),
		Value::Bool(v) => v.to_string(),
		Value::I8(v) => v.to_string(),
		Value::I16(v) => v.to_string(),
		Value::I32(v) => v.to_string(),
		Value::I64(v) => v.to_string(),
		Value::U8(v) => v.to_string(),
		Value::U16(v) => v.to_string(),
		Value::U32(v) => v.to_string(),
		Value::U64(v) => v.to_string(),
		Value::Usize(v) => v.to_string(),
		Value::F32(v) => v.to_string(),
		Value::F64(v) => v.to_string(),
		Value::C64(v) => v.to_string(),
		Value::C128(v) => v.to_string(),
		Value::String(v) => format!("\"{}\"", truncate(v, options.max_string_len)),
		Value::Seq(Sequence::U8(bytes)) => format!("bytes[{}]", bytes.len()),
		Value::Seq(items) => format!("[{} items]", items.len()),
		Value::Map(map) => format!("{{{} entries}}", map.len()),
		Value::Opaque(item) => format!("<{}>", item.type_name()),
	}
}

fn write_seq(out: &mut String, items: &Sequence, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	if let Sequence::U8(bytes) = items {
		let _ = writeln!(out, "{pad}bytes[{}]", bytes.len());
		return;
	}
	if depth >= options.max_print_depth {
		let _ = writeln!(out, "{pad}[... {} items]", items.len());
		return;
	}

	let _ = writeln!(out, "{pad}[");
	for index in 0..items.len().min(options.max_array_items) {
		match items.get_at(index) {
			Some(Element::Value(item)) => write_value(out, item, indent + 2, depth + 1, options),
			Some(Element::Map(map)) => write_map(out, map, indent + 2, depth + 1, options),
			Some(Element::Owned(item)) => write_value(out, &item, indent + 2, depth + 1, options),
			None => {}
		}
	}
	if items.len() > options.max_array_items {
		let _ = writeln!(out, "{pad}  ... {} more", items.len() - options.max_array_items);
	}
	let _ = writeln!(out, "{pad}]");
}

fn write_map(out: &mut String, map: &Map, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	if depth >= options.max_print_depth {
		let _ = writeln!(out, "{pad}{{ ... }}");
		return;
	}

	let _ = writeln!(out, "{pad}{{");
	for (key, item) in map.iter().take(options.max_fields) {
		let _ = write!(out, "{pad}  {key} = ");
		if matches!(item, Value::Map(_) | Value::Seq(_)) && !matches!(item, Value::Seq(Sequence::U8(_))) {
			let _ = writeln!(out);
			write_value(out, item, indent + 4, depth + 1, options);
		} else {
			write_value(out, item, 0, depth + 1, options);
		}
	}
	if map.len() > options.max_fields {
		let _ = writeln!(out, "{pad}  ... {} more fields", map.len() - options.max_fields);
	}
	let _ = writeln!(out, "{pad}}}");
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
