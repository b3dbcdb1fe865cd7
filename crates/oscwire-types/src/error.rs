/// Error returned by invariant-checked constructors in this crate.
///
/// An OSC address pattern must be non-empty and begin with `/`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid address pattern {address:?} (must start with '/')")]
pub struct InvalidAddress {
    /// The rejected address string.
    pub address: String,
}
