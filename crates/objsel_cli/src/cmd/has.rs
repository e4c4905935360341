use std::path::PathBuf;

use objsel::doc::{ParseOptions, has};

use crate::cmd::util::{load_document, parse_selector};

/// Print whether a selector reaches a non-nil value.
pub fn run(path: PathBuf, selector: String, options: &ParseOptions) -> objsel::doc::Result<()> {
	let root = load_document(&path)?;
	let selector = parse_selector(&selector, options)?;
	println!("{}", has(&root, &selector));
	Ok(())
}
