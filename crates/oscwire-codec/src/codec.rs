//! The recursive message/bundle grammar.
//!
//! A packet is either a message (address pattern, type-tag string, argument
//! payloads) or a bundle (the literal `#bundle\0` marker, a timetag, then
//! length-prefixed sub-packets). The first 8 bytes decide which — there is
//! no other discriminator on the wire.

use bytes::{BufMut, BytesMut};
use oscwire_types::{Bundle, Message, Packet, TimeTag, Value};

use crate::cursor::{write_padded_str, ByteCursor};
use crate::error::{CodecError, Result};
use crate::registry::Registry;

/// Bundle marker: the literal `#bundle` followed by NUL.
pub const BUNDLE_MARKER: [u8; 8] = *b"#bundle\x00";

/// Decode one packet from the cursor.
pub fn decode_packet(cursor: &mut ByteCursor, registry: &Registry) -> Result<Packet> {
    let is_bundle =
        cursor.remaining() >= BUNDLE_MARKER.len() && cursor.peek(BUNDLE_MARKER.len())? == BUNDLE_MARKER;
    if is_bundle {
        Ok(Packet::Bundle(decode_bundle(cursor, registry)?))
    } else {
        Ok(Packet::Message(decode_message(cursor, registry)?))
    }
}

/// Encode one packet into `out`.
pub fn encode_packet(packet: &Packet, registry: &Registry, out: &mut BytesMut) -> Result<()> {
    match packet {
        Packet::Message(message) => encode_message(message, registry, out),
        Packet::Bundle(bundle) => encode_bundle(bundle, registry, out),
    }
}

fn decode_message(cursor: &mut ByteCursor, registry: &Registry) -> Result<Message> {
    let address = cursor.read_cstring()?;
    if !address.starts_with('/') {
        return Err(CodecError::InvalidAddress(address));
    }

    // Legacy zero-argument messages omit the type-tag string entirely.
    if cursor.remaining() == 0 {
        return Ok(Message {
            address,
            args: Vec::new(),
        });
    }

    let tags = cursor.read_cstring()?;
    let mut chars = tags.chars();
    match chars.next() {
        Some(',') => {}
        Some(other) => return Err(CodecError::UnknownTypeTag(other)),
        None => {
            return Err(CodecError::MalformedString(
                "empty type tag string".to_owned(),
            ))
        }
    }

    // The base of the stack collects top-level arguments; each '[' opens a
    // nested collection context on top of it.
    let mut stack: Vec<Vec<Value>> = vec![Vec::new()];
    for tag in chars {
        match tag {
            '[' => stack.push(Vec::new()),
            ']' => {
                let items = stack.pop().ok_or(CodecError::UnbalancedArray)?;
                let parent = stack.last_mut().ok_or(CodecError::UnbalancedArray)?;
                parent.push(Value::Array(items));
            }
            tag => {
                let value = registry.decode_for_tag(tag, cursor)?;
                let context = stack.last_mut().ok_or(CodecError::UnbalancedArray)?;
                context.push(value);
            }
        }
    }

    if stack.len() != 1 {
        return Err(CodecError::UnbalancedArray);
    }
    let args = stack.pop().ok_or(CodecError::UnbalancedArray)?;
    Ok(Message { address, args })
}

fn decode_bundle(cursor: &mut ByteCursor, registry: &Registry) -> Result<Bundle> {
    cursor.read_exact(BUNDLE_MARKER.len())?;
    let timetag = TimeTag::from(cursor.read_u64()?);

    let mut elements = Vec::new();
    while cursor.remaining() > 0 {
        let len = cursor.read_u32()? as usize;
        let mut sub = ByteCursor::new(cursor.read_exact(len)?);
        elements.push(decode_packet(&mut sub, registry)?);
    }
    Ok(Bundle { timetag, elements })
}

fn encode_message(message: &Message, registry: &Registry, out: &mut BytesMut) -> Result<()> {
    if !message.address.starts_with('/') {
        return Err(CodecError::InvalidAddress(message.address.clone()));
    }
    write_padded_str(out, &message.address);

    let mut tags = String::from(",");
    build_tag_string(&message.args, &mut tags);
    write_padded_str(out, &tags);

    write_payloads(&message.args, registry, out)
}

fn build_tag_string(args: &[Value], tags: &mut String) {
    for arg in args {
        match arg {
            Value::Array(items) => {
                tags.push('[');
                build_tag_string(items, tags);
                tags.push(']');
            }
            atomic => {
                // Every non-array variant carries a single tag character.
                if let Some(tag) = atomic.type_tag() {
                    tags.push(tag);
                }
            }
        }
    }
}

fn write_payloads(args: &[Value], registry: &Registry, out: &mut BytesMut) -> Result<()> {
    for arg in args {
        match arg {
            // Brackets live in the tag string only; array items flatten into
            // the payload stream in depth-first order.
            Value::Array(items) => write_payloads(items, registry, out)?,
            atomic => registry.encode_value(atomic, out)?,
        }
    }
    Ok(())
}

fn encode_bundle(bundle: &Bundle, registry: &Registry, out: &mut BytesMut) -> Result<()> {
    out.put_slice(&BUNDLE_MARKER);
    out.put_u64(bundle.timetag.raw());

    let mut element_buf = BytesMut::new();
    for element in &bundle.elements {
        element_buf.clear();
        encode_packet(element, registry, &mut element_buf)?;
        out.put_u32(element_buf.len() as u32);
        out.put_slice(&element_buf);
    }
    Ok(())
}
