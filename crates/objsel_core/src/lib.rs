//! Public library API for reading and writing dynamic nested documents through textual selectors.

/// Dynamic values, selectors, path resolution, and typed extraction.
pub mod doc;
