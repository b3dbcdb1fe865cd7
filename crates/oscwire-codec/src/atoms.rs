//! Built-in handlers for the 15 OSC atomic argument tags.
//!
//! Payload layouts per the OSC spec: multi-byte quantities big-endian,
//! strings and blobs padded to 4-byte boundaries, `T`/`F`/`N`/`I` carried
//! by the tag character alone.

use bytes::{BufMut, BytesMut};
use oscwire_types::{Midi, Rgba, TimeTag, Value};

use crate::cursor::{padding_for, write_padded_str, ByteCursor};
use crate::error::{CodecError, Result};
use crate::registry::Registry;

pub(crate) fn register_builtins(registry: &mut Registry) {
    registry.register('i', decode_int, encode_int);
    registry.register('f', decode_float, encode_float);
    registry.register('s', decode_str, encode_str);
    registry.register('b', decode_blob, encode_blob);
    registry.register('T', decode_true, encode_no_payload);
    registry.register('F', decode_false, encode_no_payload);
    registry.register('N', decode_nil, encode_no_payload);
    registry.register('I', decode_impulse, encode_no_payload);
    registry.register('h', decode_long, encode_long);
    registry.register('d', decode_double, encode_double);
    registry.register('t', decode_time, encode_time);
    registry.register('c', decode_char, encode_char);
    registry.register('S', decode_symbol, encode_symbol);
    registry.register('r', decode_rgba, encode_rgba);
    registry.register('m', decode_midi, encode_midi);
}

fn mismatch(value: &Value) -> CodecError {
    CodecError::UnknownValueKind(value.type_tag().unwrap_or('['))
}

fn decode_int(cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Int(cursor.read_i32()?))
}

fn encode_int(value: &Value, out: &mut BytesMut) -> Result<()> {
    match value {
        Value::Int(v) => {
            out.put_i32(*v);
            Ok(())
        }
        other => Err(mismatch(other)),
    }
}

fn decode_float(cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Float(cursor.read_f32()?))
}

fn encode_float(value: &Value, out: &mut BytesMut) -> Result<()> {
    match value {
        Value::Float(v) => {
            out.put_f32(*v);
            Ok(())
        }
        other => Err(mismatch(other)),
    }
}

fn decode_str(cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Str(cursor.read_cstring()?))
}

fn encode_str(value: &Value, out: &mut BytesMut) -> Result<()> {
    match value {
        Value::Str(v) => {
            write_padded_str(out, v);
            Ok(())
        }
        other => Err(mismatch(other)),
    }
}

fn decode_blob(cursor: &mut ByteCursor) -> Result<Value> {
    let len = cursor.read_u32()? as usize;
    let data = cursor.read_exact(len)?.to_vec();
    cursor.read_exact(padding_for(len))?;
    Ok(Value::Blob(data))
}

fn encode_blob(value: &Value, out: &mut BytesMut) -> Result<()> {
    match value {
        Value::Blob(data) => {
            // Padding bytes are not counted in the length field.
            out.put_u32(data.len() as u32);
            out.put_slice(data);
            out.put_bytes(0, padding_for(data.len()));
            Ok(())
        }
        other => Err(mismatch(other)),
    }
}

fn decode_true(_cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Bool(true))
}

fn decode_false(_cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Bool(false))
}

fn decode_nil(_cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Nil)
}

fn decode_impulse(_cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Impulse)
}

fn encode_no_payload(_value: &Value, _out: &mut BytesMut) -> Result<()> {
    Ok(())
}

fn decode_long(cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Long(cursor.read_i64()?))
}

fn encode_long(value: &Value, out: &mut BytesMut) -> Result<()> {
    match value {
        Value::Long(v) => {
            out.put_i64(*v);
            Ok(())
        }
        other => Err(mismatch(other)),
    }
}

fn decode_double(cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Double(cursor.read_f64()?))
}

fn encode_double(value: &Value, out: &mut BytesMut) -> Result<()> {
    match value {
        Value::Double(v) => {
            out.put_f64(*v);
            Ok(())
        }
        other => Err(mismatch(other)),
    }
}

fn decode_time(cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Time(TimeTag::from(cursor.read_u64()?)))
}

fn encode_time(value: &Value, out: &mut BytesMut) -> Result<()> {
    match value {
        Value::Time(tag) => {
            out.put_u64(tag.raw());
            Ok(())
        }
        other => Err(mismatch(other)),
    }
}

fn decode_char(cursor: &mut ByteCursor) -> Result<Value> {
    let code = cursor.read_u32()?;
    let c = char::from_u32(code)
        .ok_or_else(|| CodecError::MalformedString(format!("invalid character code {code:#x}")))?;
    Ok(Value::Char(c))
}

fn encode_char(value: &Value, out: &mut BytesMut) -> Result<()> {
    match value {
        Value::Char(c) => {
            out.put_u32(*c as u32);
            Ok(())
        }
        other => Err(mismatch(other)),
    }
}

fn decode_symbol(cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Symbol(cursor.read_cstring()?))
}

fn encode_symbol(value: &Value, out: &mut BytesMut) -> Result<()> {
    match value {
        Value::Symbol(v) => {
            write_padded_str(out, v);
            Ok(())
        }
        other => Err(mismatch(other)),
    }
}

fn decode_rgba(cursor: &mut ByteCursor) -> Result<Value> {
    let bytes = cursor.read_exact(4)?;
    Ok(Value::Rgba(Rgba {
        red: bytes[0],
        green: bytes[1],
        blue: bytes[2],
        alpha: bytes[3],
    }))
}

fn encode_rgba(value: &Value, out: &mut BytesMut) -> Result<()> {
    match value {
        Value::Rgba(c) => {
            out.put_slice(&[c.red, c.green, c.blue, c.alpha]);
            Ok(())
        }
        other => Err(mismatch(other)),
    }
}

fn decode_midi(cursor: &mut ByteCursor) -> Result<Value> {
    let bytes = cursor.read_exact(4)?;
    Ok(Value::Midi(Midi {
        port: bytes[0],
        status: bytes[1],
        data1: bytes[2],
        data2: bytes[3],
    }))
}

fn encode_midi(value: &Value, out: &mut BytesMut) -> Result<()> {
    match value {
        Value::Midi(m) => {
            out.put_slice(&[m.port, m.status, m.data1, m.data2]);
            Ok(())
        }
        other => Err(mismatch(other)),
    }
}
