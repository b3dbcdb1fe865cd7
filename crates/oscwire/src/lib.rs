//! Open Sound Control 1.0/1.1 wire codec.
//!
//! oscwire parses raw OSC bytes into a typed packet tree (messages, bundles,
//! atomic and array arguments) and serializes that tree back to bytes, under
//! datagram and stream transports with length-prefixed or SLIP framing.
//! It never performs I/O itself.
//!
//! # Crate Structure
//!
//! - [`types`] — Immutable packet data model ([`types::Packet`], [`types::Value`])
//! - [`codec`] — Type-tag dispatch registry and the recursive packet grammar
//! - [`frame`] — Transport framing and the stateful streaming decoder

/// Re-export packet model types.
pub mod types {
    pub use oscwire_types::*;
}

/// Re-export codec types.
pub mod codec {
    pub use oscwire_codec::*;
}

/// Re-export framing types.
pub mod frame {
    pub use oscwire_frame::*;
}
