//! Byte cursor over accumulated input.
//!
//! OSC fields are 4-byte aligned on the wire. [`ByteCursor`] provides the
//! bounded reads the structural codec needs, including the null-terminated,
//! pad-to-4 string reads. The encode side needs no cursor — writers append
//! to a `BytesMut` directly, with [`write_padded_str`] handling alignment.

use bytes::{BufMut, BytesMut};

use crate::error::{CodecError, Result};

/// NUL padding needed to bring `len` bytes up to the next 4-byte boundary.
pub fn padding_for(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Append a null-terminated string padded to a 4-byte boundary.
pub fn write_padded_str(out: &mut BytesMut, text: &str) {
    out.put_slice(text.as_bytes());
    out.put_u8(0);
    out.put_bytes(0, padding_for(text.len() + 1));
}

/// A growable byte buffer with a monotonically advancing read cursor.
///
/// Used by the decoder over one packet's bytes; the streaming framing layer
/// may [`append`](ByteCursor::append) newly received bytes behind the cursor.
#[derive(Debug, Default)]
pub struct ByteCursor {
    buf: BytesMut,
    pos: usize,
}

impl ByteCursor {
    /// Create a cursor over an initial byte buffer.
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            buf: BytesMut::from(bytes),
            pos: 0,
        }
    }

    /// Count of unread bytes.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Extend the underlying buffer without moving the cursor.
    pub fn append(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Non-consuming look-ahead at the next `n` bytes.
    pub fn peek(&self, n: usize) -> Result<&[u8]> {
        if self.remaining() < n {
            return Err(self.underrun(n));
        }
        Ok(&self.buf[self.pos..self.pos + n])
    }

    /// Read and consume exactly `n` bytes.
    pub fn read_exact(&mut self, n: usize) -> Result<&[u8]> {
        if self.remaining() < n {
            return Err(self.underrun(n));
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }

    /// Read a null-terminated string and skip its NUL padding.
    ///
    /// Consumes bytes up to and including the first NUL, then any further
    /// padding up to the next 4-byte boundary relative to the read start.
    pub fn read_cstring(&mut self) -> Result<String> {
        let nul = self.buf[self.pos..]
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| self.underrun(self.remaining() + 1))?;

        let text = std::str::from_utf8(&self.buf[self.pos..self.pos + nul])
            .map_err(|err| CodecError::MalformedString(err.to_string()))?
            .to_owned();

        self.pos += nul + 1;
        let pad = padding_for(nul + 1);
        if self.remaining() < pad {
            return Err(self.underrun(pad));
        }
        self.pos += pad;
        Ok(text)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_be_bytes(self.read_array()?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_be_bytes(self.read_array()?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_be_bytes(self.read_array()?))
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_exact(N)?);
        Ok(out)
    }

    fn underrun(&self, needed: usize) -> CodecError {
        CodecError::InsufficientData {
            needed,
            available: self.remaining(),
        }
    }
}
