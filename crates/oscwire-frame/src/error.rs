use oscwire_codec::CodecError;

/// Errors that can occur in the framing layer.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A frame exceeds the configured maximum size.
    #[error("frame too large ({size} bytes, max {max})")]
    FrameTooLarge { size: usize, max: usize },

    /// A SLIP escape byte was followed by something other than
    /// `0xDC` or `0xDD`.
    #[error("invalid SLIP escape sequence (0xDB 0x{0:02X})")]
    InvalidSlipEscape(u8),

    /// A SLIP frame ended in the middle of an escape sequence.
    #[error("truncated SLIP escape at end of frame")]
    TruncatedSlipEscape,

    /// The frame's payload failed structural decoding.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub type Result<T> = std::result::Result<T, FrameError>;
