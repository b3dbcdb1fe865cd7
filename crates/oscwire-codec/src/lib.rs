//! OSC 1.0/1.1 binary codec: type-tag dispatch and the recursive packet grammar.
//!
//! This crate turns raw packet bytes into [`oscwire_types::Packet`] trees and
//! back. It knows nothing about transports or framing — it always receives a
//! complete packet's bytes. Argument payloads are decoded and encoded through
//! a [`Registry`] of per-tag handlers, so custom/vendor tags extend the codec
//! without touching the grammar walker.

mod atoms;

pub mod codec;
pub mod cursor;
pub mod error;
pub mod registry;

pub use codec::{decode_packet, encode_packet, BUNDLE_MARKER};
pub use cursor::{padding_for, write_padded_str, ByteCursor};
pub use error::{CodecError, Result};
pub use registry::{DecodeFn, EncodeFn, Registry};
