use thiserror::Error;

use crate::doc::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DocError>;

/// Errors produced while parsing selectors, assigning values, and bridging documents.
#[derive(Debug, Error)]
pub enum DocError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON text could not be decoded or encoded.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Selector text used bracket syntax without a valid index.
	#[error("malformed selector `{selector}`: {reason}")]
	MalformedSelector {
		/// Original selector text.
		selector: String,
		/// What was wrong with the offending segment.
		reason: &'static str,
	},
	/// A non-terminal step did not reach a container during assignment.
	#[error("intermediate path missing in `{selector}` at step {step}")]
	IntermediatePathMissing {
		/// Rendered selector.
		selector: String,
		/// Zero-based step where the walk stopped.
		step: usize,
	},
	/// Sequence index was not less than the sequence length.
	#[error("index {index} out of range for sequence of length {len}")]
	IndexOutOfRange {
		/// Requested index.
		index: usize,
		/// Sequence length at the time of the request.
		len: usize,
	},
	/// Assigned value does not match the element kind of the target sequence.
	#[error("type mismatch: expected {expected}, got {got}")]
	TypeMismatch {
		/// Kind the sequence stores.
		expected: Kind,
		/// Kind of the rejected value.
		got: Kind,
	},
	/// Value has no JSON encoding.
	#[error("value of kind {kind} has no JSON representation")]
	Unrepresentable {
		/// Kind of the offending value.
		kind: Kind,
	},
}
