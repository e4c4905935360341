use std::path::PathBuf;

use objsel::doc::{ParseOptions, resolve};

use crate::cmd::util::{load_document, parse_selector};

/// Print the kind of the value a selector reaches.
pub fn run(path: PathBuf, selector: String, options: &ParseOptions) -> objsel::doc::Result<()> {
	let root = load_document(&path)?;
	let selector = parse_selector(&selector, options)?;
	println!("{}", resolve(&root, &selector).kind());
	Ok(())
}
