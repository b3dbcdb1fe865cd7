//! Transport mode and framing style selectors.

/// How packet bytes reach the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Each call delivers exactly one complete packet's bytes (e.g. UDP).
    /// Framing style is ignored — no headers, no delimiters.
    Datagram,
    /// Bytes arrive in arbitrary chunks over a reliable stream (e.g. TCP);
    /// frames are reassembled according to the [`Framing`] style.
    Stream,
}

/// Stream framing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framing {
    /// 4-byte big-endian length before each packet (the OSC 1.0 convention).
    LengthPrefixed,
    /// SLIP byte-stuffing with `0xC0` delimiters (the OSC 1.1 convention).
    Slip,
}

/// Configuration for the framing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Maximum frame size in bytes. Default: 16 MiB.
    pub max_frame_size: usize,
}

/// Default maximum frame size: 16 MiB.
pub const DEFAULT_MAX_FRAME_SIZE: usize = 16 * 1024 * 1024;

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
        }
    }
}
