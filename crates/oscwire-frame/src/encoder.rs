//! Packet encoding under a transport mode and framing style.

use std::sync::Arc;

use bytes::{BufMut, Bytes, BytesMut};
use oscwire_codec::{encode_packet, Registry};
use oscwire_types::Packet;

use crate::error::{FrameError, Result};
use crate::mode::{FrameConfig, Framing, Mode};
use crate::slip;

/// Encodes packets into wire bytes for a fixed mode/framing pair.
///
/// Holds no state between calls — one encoder may serve any number of
/// packets, and independent threads may share it.
pub struct PacketEncoder {
    mode: Mode,
    framing: Framing,
    config: FrameConfig,
    registry: Arc<Registry>,
}

impl PacketEncoder {
    /// Create an encoder with the built-in tag registry.
    pub fn new(mode: Mode, framing: Framing) -> Self {
        Self::with_registry(mode, framing, Arc::new(Registry::new()))
    }

    /// Create an encoder sharing an extended registry.
    pub fn with_registry(mode: Mode, framing: Framing, registry: Arc<Registry>) -> Self {
        Self {
            mode,
            framing,
            config: FrameConfig::default(),
            registry,
        }
    }

    /// Encode one packet into wire bytes.
    pub fn encode(&self, packet: &Packet) -> Result<Bytes> {
        let mut raw = BytesMut::new();
        encode_packet(packet, &self.registry, &mut raw)?;

        match (self.mode, self.framing) {
            // A datagram already carries exactly one packet; no framing.
            (Mode::Datagram, _) => Ok(raw.freeze()),
            (Mode::Stream, Framing::LengthPrefixed) => {
                if raw.len() > self.config.max_frame_size {
                    return Err(FrameError::FrameTooLarge {
                        size: raw.len(),
                        max: self.config.max_frame_size,
                    });
                }
                let mut out = BytesMut::with_capacity(4 + raw.len());
                out.put_u32(raw.len() as u32);
                out.put_slice(&raw);
                Ok(out.freeze())
            }
            (Mode::Stream, Framing::Slip) => {
                let mut out = BytesMut::with_capacity(raw.len() + 2);
                out.put_u8(slip::END);
                slip::escape(&raw, &mut out);
                out.put_u8(slip::END);
                Ok(out.freeze())
            }
        }
    }

    /// Update the maximum frame size for subsequent encodes.
    pub fn set_max_frame_size(&mut self, max_frame_size: usize) {
        self.config.max_frame_size = max_frame_size;
    }

    /// Current encoder configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

/// One-shot convenience: encode a packet with the built-in registry.
pub fn encode(packet: &Packet, mode: Mode, framing: Framing) -> Result<Bytes> {
    PacketEncoder::new(mode, framing).encode(packet)
}

#[cfg(test)]
mod tests {
    use oscwire_types::{Message, Value};

    use super::*;

    fn float_message() -> Packet {
        Message::new("/FB", vec![Value::Float(0.5)]).unwrap().into()
    }

    #[test]
    fn datagram_is_raw_packet_bytes() {
        let wire = encode(&float_message(), Mode::Datagram, Framing::LengthPrefixed).unwrap();
        assert_eq!(wire.as_ref(), b"/FB\x00,f\x00\x00?\x00\x00\x00");

        // Datagram mode ignores the framing style.
        let slip_wire = encode(&float_message(), Mode::Datagram, Framing::Slip).unwrap();
        assert_eq!(wire, slip_wire);
    }

    #[test]
    fn length_prefixed_stream_frame() {
        let wire = encode(&float_message(), Mode::Stream, Framing::LengthPrefixed).unwrap();
        assert_eq!(&wire[..4], &[0, 0, 0, 12]);
        assert_eq!(&wire[4..], b"/FB\x00,f\x00\x00?\x00\x00\x00");
    }

    #[test]
    fn slip_stream_frame_is_delimited() {
        let wire = encode(&float_message(), Mode::Stream, Framing::Slip).unwrap();
        assert_eq!(wire[0], slip::END);
        assert_eq!(wire[wire.len() - 1], slip::END);
        assert_eq!(&wire[1..wire.len() - 1], b"/FB\x00,f\x00\x00?\x00\x00\x00");
    }

    #[test]
    fn slip_escapes_packet_bytes() {
        let message: Packet = Message::new("/b", vec![Value::Blob(vec![slip::END, slip::ESC])])
            .unwrap()
            .into();
        let wire = encode(&message, Mode::Stream, Framing::Slip).unwrap();

        // Exactly the two delimiters; every interior special byte is escaped.
        let delimiters = wire.iter().filter(|&&b| b == slip::END).count();
        assert_eq!(delimiters, 2);
        assert_eq!(wire[0], slip::END);
        assert_eq!(wire[wire.len() - 1], slip::END);
    }

    #[test]
    fn oversized_frame_rejected() {
        let mut encoder = PacketEncoder::new(Mode::Stream, Framing::LengthPrefixed);
        encoder.set_max_frame_size(8);
        assert!(matches!(
            encoder.encode(&float_message()),
            Err(FrameError::FrameTooLarge { size: 12, max: 8 })
        ));
    }
}
