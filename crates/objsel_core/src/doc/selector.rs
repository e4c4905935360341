use std::fmt;
use std::str::FromStr;

use crate::doc::{DocError, Result};

/// One parsed unit of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
	/// Select a mapping key.
	Field(String),
	/// Select a mapping key holding a sequence, then an element of it.
	FieldIndex(String, usize),
	/// Select an element of the root sequence.
	Index(usize),
}

impl Step {
	/// Index this step addresses when applied to a root sequence.
	///
	/// A bare all-digit first segment parses as a field, but reads as an index against a sequence root.
	pub(crate) fn root_index(&self) -> Option<usize> {
		match self {
			Step::Index(index) => Some(*index),
			Step::Field(key) if is_digits(key) => key.parse().ok(),
			_ => None,
		}
	}
}

/// Selector parsing knobs.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
	/// Character splitting selector text into segments.
	pub separator: char,
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self { separator: '.' }
	}
}

/// Parsed selector: an ordered, non-empty list of steps, root first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
	steps: Vec<Step>,
	separator: char,
}

impl Selector {
	/// Parse dotted selector text with optional trailing `[index]` per segment.
	pub fn parse(input: &str) -> Result<Self> {
		Self::parse_with(input, &ParseOptions::default())
	}

	/// Parse selector text using a custom segment separator.
	pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Self> {
		let steps = input
			.split(options.separator)
			.enumerate()
			.map(|(position, segment)| parse_segment(input, segment, position == 0))
			.collect::<Result<Vec<_>>>()?;

		Ok(Self {
			steps,
			separator: options.separator,
		})
	}

	/// Selector addressing one element of a root sequence.
	pub fn index(index: usize) -> Self {
		Self {
			steps: vec![Step::Index(index)],
			separator: ParseOptions::default().separator,
		}
	}

	/// Parsed steps in traversal order.
	pub fn steps(&self) -> &[Step] {
		&self.steps
	}

	/// Number of steps.
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// Whether there are no steps; never true for a parsed selector.
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}
}

fn parse_segment(input: &str, segment: &str, at_root: bool) -> Result<Step> {
	let malformed = |reason: &'static str| DocError::MalformedSelector {
		selector: input.to_owned(),
		reason,
	};

	let Some(open) = segment.find('[') else {
		if segment.contains(']') {
			return Err(malformed("unbalanced `]` in field name"));
		}
		return Ok(Step::Field(segment.to_owned()));
	};

	let key = &segment[..open];
	if key.contains(']') {
		return Err(malformed("unbalanced `]` in field name"));
	}

	let Some(digits) = segment[open + 1..].strip_suffix(']') else {
		return Err(malformed("array index must end the segment with `]`"));
	};
	if !is_digits(digits) {
		return Err(malformed("array index must be a non-negative integer"));
	}
	let index = digits.parse::<usize>().map_err(|_| malformed("array index does not fit in usize"))?;

	if key.is_empty() {
		if at_root {
			return Ok(Step::Index(index));
		}
		return Err(malformed("array index needs a field name outside the root segment"));
	}

	Ok(Step::FieldIndex(key.to_owned(), index))
}

fn is_digits(text: &str) -> bool {
	!text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

impl FromStr for Selector {
	type Err = DocError;

	fn from_str(input: &str) -> Result<Self> {
		Self::parse(input)
	}
}

impl TryFrom<&str> for Selector {
	type Error = DocError;

	fn try_from(input: &str) -> Result<Self> {
		Self::parse(input)
	}
}

impl From<usize> for Selector {
	fn from(index: usize) -> Self {
		Self::index(index)
	}
}

impl fmt::Display for Selector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (position, step) in self.steps.iter().enumerate() {
			if position > 0 {
				write!(f, "{}", self.separator)?;
			}
			match step {
				Step::Field(key) => f.write_str(key)?,
				Step::FieldIndex(key, index) => write!(f, "{key}[{index}]")?,
				Step::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}
