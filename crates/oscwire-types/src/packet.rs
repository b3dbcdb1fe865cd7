//! Messages, bundles, and the top-level packet union.

use crate::error::InvalidAddress;
use crate::timetag::TimeTag;
use crate::value::Value;

/// An OSC message: address pattern plus an ordered argument list.
///
/// The address is an OSC Address Pattern and always begins with `/`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// The address pattern this message targets.
    pub address: String,
    /// The typed arguments, in wire order.
    pub args: Vec<Value>,
}

impl Message {
    /// Create a message, validating the address pattern.
    ///
    /// Returns [`InvalidAddress`] if the address is empty or does not start
    /// with `/`.
    pub fn new(address: impl Into<String>, args: Vec<Value>) -> Result<Self, InvalidAddress> {
        let address = address.into();
        if !address.starts_with('/') {
            return Err(InvalidAddress { address });
        }
        Ok(Self { address, args })
    }
}

/// An OSC bundle: a timetag plus message/bundle elements.
///
/// Elements recurse — bundles may contain bundles to arbitrary depth.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bundle {
    /// When the receiver should act on the elements. 0 means immediately.
    pub timetag: TimeTag,
    /// The contained packets, in wire order.
    pub elements: Vec<Packet>,
}

impl Bundle {
    /// Create a bundle.
    pub fn new(timetag: TimeTag, elements: Vec<Packet>) -> Self {
        Self { timetag, elements }
    }
}

/// The top-level decoded unit: a message or a bundle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Packet {
    Message(Message),
    Bundle(Bundle),
}

impl From<Message> for Packet {
    fn from(message: Message) -> Self {
        Packet::Message(message)
    }
}

impl From<Bundle> for Packet {
    fn from(bundle: Bundle) -> Self {
        Packet::Bundle(bundle)
    }
}
