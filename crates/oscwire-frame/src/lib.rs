//! Transport framing for OSC packets.
//!
//! Wraps one encoded packet for the wire and reassembles packets from a
//! chunked byte stream:
//!
//! | Mode | Framing | Wire layout |
//! |---|---|---|
//! | Datagram | any | `<packet-bytes>` |
//! | Stream | length-prefixed | `<u32 length><packet-bytes>` repeated |
//! | Stream | SLIP | `0xC0 <escaped packet-bytes> 0xC0` repeated |
//!
//! No sockets live here — callers feed received bytes in and send returned
//! bytes out however they like.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod mode;
pub mod slip;

pub use decoder::PacketDecoder;
pub use encoder::{encode, PacketEncoder};
pub use error::{FrameError, Result};
pub use mode::{FrameConfig, Framing, Mode, DEFAULT_MAX_FRAME_SIZE};
