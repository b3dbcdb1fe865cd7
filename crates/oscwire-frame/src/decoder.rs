//! Stateful, streaming packet decoding.
//!
//! [`PacketDecoder`] owns a persistent accumulator. Each [`feed`] call
//! appends newly received bytes and extracts every fully-reassembled packet,
//! leaving incomplete trailing bytes buffered for the next call. Decode
//! never blocks and never discards buffered-but-incomplete input; a
//! structurally invalid complete frame is yielded as an error without
//! corrupting the accumulator for subsequent frames.
//!
//! [`feed`]: PacketDecoder::feed

use std::sync::Arc;

use bytes::{Buf, BytesMut};
use oscwire_codec::{decode_packet, ByteCursor, Registry};
use oscwire_types::Packet;
use tracing::{debug, trace};

use crate::error::{FrameError, Result};
use crate::mode::{FrameConfig, Framing, Mode};
use crate::slip;

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;

/// Reassembles and decodes packets from a chunked byte stream.
///
/// Instance-scoped mutable state: a single decoder must not be driven from
/// multiple threads without external serialization.
pub struct PacketDecoder {
    mode: Mode,
    framing: Framing,
    config: FrameConfig,
    registry: Arc<Registry>,
    acc: BytesMut,
    /// Bytes of an oversized declared frame still to be drained unbuffered.
    discard: usize,
}

impl PacketDecoder {
    /// Create a decoder with the built-in tag registry.
    pub fn new(mode: Mode, framing: Framing) -> Self {
        Self::with_registry(mode, framing, Arc::new(Registry::new()))
    }

    /// Create a decoder sharing an extended registry.
    pub fn with_registry(mode: Mode, framing: Framing, registry: Arc<Registry>) -> Self {
        Self {
            mode,
            framing,
            config: FrameConfig::default(),
            registry,
            acc: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            discard: 0,
        }
    }

    /// Feed newly received bytes and extract every completed packet.
    ///
    /// For datagram mode the chunk must be exactly one full datagram. For
    /// stream modes, chunk boundaries are arbitrary; a call that completes
    /// no frame returns an empty vec. Per-frame decode failures are yielded
    /// in place so later frames in the same chunk still decode.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Result<Packet>> {
        match (self.mode, self.framing) {
            (Mode::Datagram, _) => self.feed_datagram(chunk),
            (Mode::Stream, Framing::LengthPrefixed) => self.feed_length_prefixed(chunk),
            (Mode::Stream, Framing::Slip) => self.feed_slip(chunk),
        }
    }

    /// Count of buffered bytes awaiting frame completion.
    pub fn pending(&self) -> usize {
        self.acc.len()
    }

    /// Drop all buffered state (e.g. after abandoning a stalled stream).
    pub fn reset(&mut self) {
        self.acc.clear();
        self.discard = 0;
    }

    /// Update the maximum frame size for subsequent frame decoding.
    pub fn set_max_frame_size(&mut self, max_frame_size: usize) {
        self.config.max_frame_size = max_frame_size;
    }

    /// Current decoder configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    fn decode_frame(&self, bytes: &[u8]) -> Result<Packet> {
        let mut cursor = ByteCursor::new(bytes);
        Ok(decode_packet(&mut cursor, &self.registry)?)
    }

    fn feed_datagram(&mut self, chunk: &[u8]) -> Vec<Result<Packet>> {
        // No cross-call state: one datagram, one packet.
        if chunk.is_empty() {
            return Vec::new();
        }
        vec![self.decode_frame(chunk)]
    }

    fn feed_length_prefixed(&mut self, chunk: &[u8]) -> Vec<Result<Packet>> {
        self.acc.extend_from_slice(chunk);
        let mut packets = Vec::new();

        loop {
            if self.discard > 0 {
                let drained = self.discard.min(self.acc.len());
                self.acc.advance(drained);
                self.discard -= drained;
                if self.discard > 0 {
                    break;
                }
            }

            if self.acc.len() < 4 {
                break;
            }
            let declared = u32::from_be_bytes(self.acc[0..4].try_into().unwrap()) as usize;

            if declared > self.config.max_frame_size {
                debug!(declared, max = self.config.max_frame_size, "skipping oversized frame");
                packets.push(Err(FrameError::FrameTooLarge {
                    size: declared,
                    max: self.config.max_frame_size,
                }));
                self.acc.advance(4);
                self.discard = declared;
                continue;
            }

            if self.acc.len() < 4 + declared {
                trace!(
                    declared,
                    buffered = self.acc.len(),
                    "incomplete frame, awaiting more bytes"
                );
                break;
            }

            self.acc.advance(4);
            let frame = self.acc.split_to(declared);
            packets.push(self.decode_frame(&frame));
        }

        packets
    }

    fn feed_slip(&mut self, chunk: &[u8]) -> Vec<Result<Packet>> {
        self.acc.extend_from_slice(chunk);
        let mut packets = Vec::new();

        while let Some(pos) = self.acc.iter().position(|&b| b == slip::END) {
            let span = self.acc.split_to(pos);
            self.acc.advance(1); // the delimiter itself

            // Back-to-back delimiters produce empty spans between frames.
            if span.is_empty() {
                continue;
            }
            packets.push(
                slip::unescape(&span).and_then(|frame| self.decode_frame(&frame)),
            );
        }

        if !self.acc.is_empty() {
            trace!(buffered = self.acc.len(), "incomplete SLIP frame buffered");
        }
        packets
    }
}

#[cfg(test)]
mod tests {
    use oscwire_codec::CodecError;
    use oscwire_types::{Message, Value};

    use super::*;
    use crate::encoder::encode;

    fn message(address: &str, n: i32) -> Packet {
        Message::new(address, vec![Value::Int(n)]).unwrap().into()
    }

    fn unwrap_all(results: Vec<Result<Packet>>) -> Vec<Packet> {
        results.into_iter().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn datagram_decodes_directly() {
        let mut decoder = PacketDecoder::new(Mode::Datagram, Framing::LengthPrefixed);
        let wire = encode(&message("/a", 1), Mode::Datagram, Framing::LengthPrefixed).unwrap();

        let packets = unwrap_all(decoder.feed(&wire));
        assert_eq!(packets, vec![message("/a", 1)]);
        assert_eq!(decoder.pending(), 0);

        assert!(decoder.feed(&[]).is_empty());
    }

    #[test]
    fn length_prefixed_stream_of_three() {
        let mut decoder = PacketDecoder::new(Mode::Stream, Framing::LengthPrefixed);
        let mut stream = Vec::new();
        for n in 1..=3 {
            let wire = encode(
                &message(&format!("/msg{n}"), n),
                Mode::Stream,
                Framing::LengthPrefixed,
            )
            .unwrap();
            stream.extend_from_slice(&wire);
        }

        let packets = unwrap_all(decoder.feed(&stream));
        assert_eq!(
            packets,
            vec![message("/msg1", 1), message("/msg2", 2), message("/msg3", 3)]
        );
    }

    #[test]
    fn reassembly_is_chunk_size_invariant() {
        let mut stream = Vec::new();
        for n in 1..=3 {
            let wire = encode(
                &message(&format!("/msg{n}"), n),
                Mode::Stream,
                Framing::LengthPrefixed,
            )
            .unwrap();
            stream.extend_from_slice(&wire);
        }

        for chunk_size in 1..=10 {
            let mut decoder = PacketDecoder::new(Mode::Stream, Framing::LengthPrefixed);
            let mut packets = Vec::new();
            for chunk in stream.chunks(chunk_size) {
                packets.extend(unwrap_all(decoder.feed(chunk)));
            }
            assert_eq!(
                packets,
                vec![message("/msg1", 1), message("/msg2", 2), message("/msg3", 3)],
                "chunk size {chunk_size}"
            );
            assert_eq!(decoder.pending(), 0);
        }
    }

    #[test]
    fn partial_frame_yields_nothing_until_complete() {
        let mut decoder = PacketDecoder::new(Mode::Stream, Framing::LengthPrefixed);
        let wire = encode(&message("/partial", 7), Mode::Stream, Framing::LengthPrefixed).unwrap();

        let (head, tail) = wire.split_at(wire.len() / 2);
        assert!(decoder.feed(head).is_empty());
        assert!(decoder.pending() > 0);

        let packets = unwrap_all(decoder.feed(tail));
        assert_eq!(packets, vec![message("/partial", 7)]);
    }

    #[test]
    fn slip_stream_round_trip() {
        let mut decoder = PacketDecoder::new(Mode::Stream, Framing::Slip);
        let first = encode(&message("/a", 1), Mode::Stream, Framing::Slip).unwrap();
        let second = encode(&message("/b", 2), Mode::Stream, Framing::Slip).unwrap();

        let mut stream = first.to_vec();
        stream.extend_from_slice(&second);

        let packets = unwrap_all(decoder.feed(&stream));
        assert_eq!(packets, vec![message("/a", 1), message("/b", 2)]);
        assert_eq!(decoder.pending(), 0);
    }

    #[test]
    fn slip_blob_with_special_bytes_survives() {
        let special = vec![0x00, slip::END, slip::ESC, 0xFF, slip::END, slip::ESC, 0x00];
        let original: Packet = Message::new("/binary", vec![Value::Blob(special.clone())])
            .unwrap()
            .into();
        let wire = encode(&original, Mode::Stream, Framing::Slip).unwrap();

        // One byte at a time.
        let mut decoder = PacketDecoder::new(Mode::Stream, Framing::Slip);
        let mut packets = Vec::new();
        for byte in wire.iter() {
            packets.extend(unwrap_all(decoder.feed(std::slice::from_ref(byte))));
        }
        assert_eq!(packets, vec![original]);
    }

    #[test]
    fn malformed_frame_does_not_poison_the_stream() {
        let mut decoder = PacketDecoder::new(Mode::Stream, Framing::LengthPrefixed);

        // A complete frame whose payload has a bogus address, then a good one.
        let mut stream = vec![0, 0, 0, 4];
        stream.extend_from_slice(b"XXX\x00");
        let good = encode(&message("/ok", 1), Mode::Stream, Framing::LengthPrefixed).unwrap();
        stream.extend_from_slice(&good);

        let results = decoder.feed(&stream);
        assert_eq!(results.len(), 2);
        assert!(matches!(
            results[0],
            Err(FrameError::Codec(CodecError::InvalidAddress(_)))
        ));
        assert_eq!(results[1].as_ref().unwrap(), &message("/ok", 1));
    }

    #[test]
    fn oversized_declared_frame_is_drained() {
        let mut decoder = PacketDecoder::new(Mode::Stream, Framing::LengthPrefixed);
        decoder.set_max_frame_size(16);

        // Declare a 1024-byte frame, stream its body, then a good frame.
        let mut results = decoder.feed(&[0, 0, 4, 0]);
        assert_eq!(results.len(), 1);
        assert!(matches!(
            results[0],
            Err(FrameError::FrameTooLarge { size: 1024, max: 16 })
        ));

        // Body drains without buffering.
        assert!(decoder.feed(&vec![0xAB; 512]).is_empty());
        assert_eq!(decoder.pending(), 0);
        assert!(decoder.feed(&vec![0xAB; 512]).is_empty());

        let good = encode(&message("/after", 9), Mode::Stream, Framing::LengthPrefixed).unwrap();
        results = decoder.feed(&good);
        assert_eq!(unwrap_all(results), vec![message("/after", 9)]);
    }

    #[test]
    fn reset_discards_buffered_state() {
        let mut decoder = PacketDecoder::new(Mode::Stream, Framing::LengthPrefixed);
        decoder.feed(&[0, 0, 0, 32, 1, 2, 3]);
        assert!(decoder.pending() > 0);

        decoder.reset();
        assert_eq!(decoder.pending(), 0);

        let wire = encode(&message("/fresh", 1), Mode::Stream, Framing::LengthPrefixed).unwrap();
        assert_eq!(unwrap_all(decoder.feed(&wire)), vec![message("/fresh", 1)]);
    }

    #[test]
    fn invalid_slip_escape_is_reported_per_frame() {
        let mut decoder = PacketDecoder::new(Mode::Stream, Framing::Slip);

        // END, bogus escape, END, then a good frame.
        let mut stream = vec![slip::END, 0x01, slip::ESC, 0x02, slip::END];
        let good = encode(&message("/ok", 1), Mode::Stream, Framing::Slip).unwrap();
        stream.extend_from_slice(&good);

        let results = decoder.feed(&stream);
        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], Err(FrameError::InvalidSlipEscape(0x02))));
        assert_eq!(results[1].as_ref().unwrap(), &message("/ok", 1));
    }
}
