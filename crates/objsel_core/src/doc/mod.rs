mod access;
mod error;
mod json;
mod kind;
mod scalar;
mod selector;
mod sequence;
mod typed;
mod value;

/// Selector-driven read and write entry points.
pub use access::{assign, has, resolve};
/// Error and result aliases.
pub use error::{DocError, Result};
/// JSON encoding of documents.
pub use json::to_json;
/// Value classification tags.
pub use kind::{ElementKind, Kind};
/// Scalar kind binding used by typed accessors.
pub use scalar::Scalar;
/// Selector parser types.
pub use selector::{ParseOptions, Selector, Step};
/// Typed sequence storage and indexed element access.
pub use sequence::{Element, Sequence};
/// Typed-value wrapper returned by resolution.
pub use typed::Typed;
/// Dynamic document value types.
pub use value::{Complex, Map, Opaque, Value};
