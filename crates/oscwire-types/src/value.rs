//! The OSC argument union.
//!
//! [`Value`] covers the 15 atomic argument kinds of OSC 1.0/1.1 plus the
//! recursive array kind. Each atomic variant corresponds to a one-character
//! type tag; arrays are delimited by `[` and `]` in the tag string and may
//! nest to arbitrary depth.

use crate::timetag::TimeTag;

/// RGBA color argument (type tag `r`), one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

/// MIDI message argument (type tag `m`).
///
/// Wire bytes from MSB to LSB: port id, status, data1, data2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Midi {
    pub port: u8,
    pub status: u8,
    pub data1: u8,
    pub data2: u8,
}

/// A single OSC argument: one of the 15 atomic kinds, or a nested array.
///
/// Equality is structural. The `Array` variant owns its items, giving the
/// model its tree-shaped ownership — no sharing, no back-references.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 32-bit signed integer (tag `i`).
    Int(i32),
    /// 32-bit IEEE 754 float (tag `f`).
    Float(f32),
    /// String (tag `s`).
    Str(String),
    /// Opaque byte blob (tag `b`).
    Blob(Vec<u8>),
    /// Boolean (tags `T` / `F`, no payload bytes).
    Bool(bool),
    /// Nil (tag `N`, no payload bytes).
    Nil,
    /// Impulse / "bang" (tag `I`, no payload bytes).
    Impulse,
    /// 64-bit signed integer (tag `h`).
    Long(i64),
    /// 64-bit IEEE 754 float (tag `d`).
    Double(f64),
    /// NTP timetag (tag `t`).
    Time(TimeTag),
    /// Single character (tag `c`).
    Char(char),
    /// Symbol — string-typed but semantically distinct from `Str` (tag `S`).
    Symbol(String),
    /// RGBA color (tag `r`).
    Rgba(Rgba),
    /// MIDI message (tag `m`).
    Midi(Midi),
    /// Ordered sequence of arguments, arbitrarily nested (tags `[` … `]`).
    Array(Vec<Value>),
}

impl Value {
    /// The one-character type tag for atomic variants.
    ///
    /// Returns `None` for `Array`: arrays contribute a bracketed span to the
    /// tag string rather than a single tag, and carry no payload of their own.
    pub fn type_tag(&self) -> Option<char> {
        match self {
            Value::Int(_) => Some('i'),
            Value::Float(_) => Some('f'),
            Value::Str(_) => Some('s'),
            Value::Blob(_) => Some('b'),
            Value::Bool(true) => Some('T'),
            Value::Bool(false) => Some('F'),
            Value::Nil => Some('N'),
            Value::Impulse => Some('I'),
            Value::Long(_) => Some('h'),
            Value::Double(_) => Some('d'),
            Value::Time(_) => Some('t'),
            Value::Char(_) => Some('c'),
            Value::Symbol(_) => Some('S'),
            Value::Rgba(_) => Some('r'),
            Value::Midi(_) => Some('m'),
            Value::Array(_) => None,
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<TimeTag> for Value {
    fn from(v: TimeTag) -> Self {
        Value::Time(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}
