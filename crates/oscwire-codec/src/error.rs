/// Errors that can occur while encoding or decoding a packet.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The buffer ran out mid-parse. For a complete frame this means
    /// truncated or corrupt input; the framing layer never invokes the
    /// structural codec until a frame's boundary is fully buffered.
    #[error("insufficient data (needed {needed} bytes, {available} available)")]
    InsufficientData { needed: usize, available: usize },

    /// The address pattern does not start with `/`.
    #[error("invalid address pattern {0:?} (must start with '/')")]
    InvalidAddress(String),

    /// A type tag character has no registered decoder.
    #[error("unknown type tag {0:?}")]
    UnknownTypeTag(char),

    /// A value's variant has no registered encoder.
    #[error("no encoder registered for value kind {0:?}")]
    UnknownValueKind(char),

    /// Mismatched `[` / `]` in a type tag string.
    #[error("unbalanced array brackets in type tag string")]
    UnbalancedArray,

    /// A string field contains invalid text.
    #[error("malformed string: {0}")]
    MalformedString(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;
