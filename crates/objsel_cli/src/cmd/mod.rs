/// Selector read command.
pub mod get;
/// Presence check command.
pub mod has;
/// Kind report command.
pub mod kind;
/// Human-readable value rendering.
pub mod print;
/// Selector write command.
pub mod set;
#[cfg(test)]
pub(crate) mod test_support;
/// Shared document loading and selector helpers.
pub(crate) mod util;
