//! Type-tag dispatch registry.
//!
//! OSC keeps its atomic type set open — vendors add tags without changing the
//! packet grammar. The registry maps each one-character tag to a decode/encode
//! handler pair; the grammar walker in [`crate::codec`] never needs to know
//! which tags exist.

use std::collections::HashMap;

use bytes::BytesMut;
use oscwire_types::Value;

use crate::atoms;
use crate::cursor::ByteCursor;
use crate::error::{CodecError, Result};

/// Decodes one argument's payload bytes from the cursor.
pub type DecodeFn = Box<dyn Fn(&mut ByteCursor) -> Result<Value> + Send + Sync>;

/// Encodes one argument's payload bytes to the output buffer.
pub type EncodeFn = Box<dyn Fn(&Value, &mut BytesMut) -> Result<()> + Send + Sync>;

struct TagHandler {
    decode: DecodeFn,
    encode: EncodeFn,
}

/// Tag-keyed registry of argument codecs.
///
/// Populate once during initialization, then share immutably — handlers are
/// `Send + Sync`, so a registry behind an `Arc` serves encoder and decoder
/// on any thread.
pub struct Registry {
    handlers: HashMap<char, TagHandler>,
}

impl Registry {
    /// Create a registry with the 15 built-in OSC 1.0/1.1 handlers.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        atoms::register_builtins(&mut registry);
        registry
    }

    /// Create a registry with no handlers at all.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Associate a tag with a decode/encode pair.
    ///
    /// Re-registering a tag replaces the previous handler (last write wins).
    pub fn register<D, E>(&mut self, tag: char, decode: D, encode: E)
    where
        D: Fn(&mut ByteCursor) -> Result<Value> + Send + Sync + 'static,
        E: Fn(&Value, &mut BytesMut) -> Result<()> + Send + Sync + 'static,
    {
        self.handlers.insert(
            tag,
            TagHandler {
                decode: Box::new(decode),
                encode: Box::new(encode),
            },
        );
    }

    /// Whether a handler is registered for `tag`.
    pub fn is_registered(&self, tag: char) -> bool {
        self.handlers.contains_key(&tag)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<char> {
        let mut tags: Vec<char> = self.handlers.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// Decode one argument for `tag` from the cursor.
    pub fn decode_for_tag(&self, tag: char, cursor: &mut ByteCursor) -> Result<Value> {
        let handler = self
            .handlers
            .get(&tag)
            .ok_or(CodecError::UnknownTypeTag(tag))?;
        (handler.decode)(cursor)
    }

    /// Encode one atomic argument, dispatching on its runtime variant.
    ///
    /// Arrays carry no payload of their own and are handled by the grammar
    /// walker; passing one here is an `UnknownValueKind` error.
    pub fn encode_value(&self, value: &Value, out: &mut BytesMut) -> Result<()> {
        let tag = value
            .type_tag()
            .ok_or(CodecError::UnknownValueKind('['))?;
        let handler = self
            .handlers
            .get(&tag)
            .ok_or(CodecError::UnknownValueKind(tag))?;
        (handler.encode)(value, out)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
