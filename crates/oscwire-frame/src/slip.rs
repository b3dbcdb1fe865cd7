//! SLIP byte-stuffing (RFC 1055), as used by OSC 1.1 stream framing.
//!
//! Packets are delimited by `END` bytes; occurrences of `END` and `ESC`
//! inside a packet are replaced by two-byte escape sequences so the
//! delimiter never appears in packet data.

use bytes::{BufMut, BytesMut};

use crate::error::{FrameError, Result};

/// Frame delimiter.
pub const END: u8 = 0xC0;
/// Escape introducer.
pub const ESC: u8 = 0xDB;
/// Escaped `END` (`0xC0` → `0xDB 0xDC`).
pub const ESC_END: u8 = 0xDC;
/// Escaped `ESC` (`0xDB` → `0xDB 0xDD`).
pub const ESC_ESC: u8 = 0xDD;

/// Append `data` to `out` with SLIP byte-stuffing applied.
pub fn escape(data: &[u8], out: &mut BytesMut) {
    out.reserve(data.len());
    for &byte in data {
        match byte {
            END => out.put_slice(&[ESC, ESC_END]),
            ESC => out.put_slice(&[ESC, ESC_ESC]),
            byte => out.put_u8(byte),
        }
    }
}

/// Reverse SLIP byte-stuffing on one complete frame span.
///
/// `data` must not contain `END`; the caller splits on delimiters first.
pub fn unescape(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len());
    let mut bytes = data.iter();
    while let Some(&byte) = bytes.next() {
        if byte != ESC {
            out.push(byte);
            continue;
        }
        match bytes.next() {
            Some(&ESC_END) => out.push(END),
            Some(&ESC_ESC) => out.push(ESC),
            Some(&other) => return Err(FrameError::InvalidSlipEscape(other)),
            None => return Err(FrameError::TruncatedSlipEscape),
        }
    }
    Ok(out)
}
