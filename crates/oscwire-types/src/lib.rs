//! Immutable value types for the OSC 1.0/1.1 packet model.
//!
//! This is the lowest layer of oscwire. It defines the argument union
//! ([`Value`]), messages, bundles, and the [`Packet`] tree the codec
//! produces and consumes. Nothing here touches bytes or sockets — once
//! constructed, values are never mutated and compare structurally.

pub mod error;
pub mod packet;
pub mod timetag;
pub mod value;

pub use error::InvalidAddress;
pub use packet::{Bundle, Message, Packet};
pub use timetag::TimeTag;
pub use value::{Midi, Rgba, Value};
