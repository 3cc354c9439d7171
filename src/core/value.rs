//! Purpose: Carry a parsed scalar between the parser switch and a destination.
//! Exports: `Value`.
//! Role: Normalized, kind-tagged result of parsing; never retained past a bind.
//! Invariants: `Value::kind()` always agrees with the variant.

use std::fmt;

use time::{Date, OffsetDateTime};

use crate::core::kind::Kind;
use crate::core::timestamp::{TimestampFormat, format_date};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Timestamp(OffsetDateTime),
    Date(Date),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::I8(_) => Kind::I8,
            Value::I16(_) => Kind::I16,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::U8(_) => Kind::U8,
            Value::U16(_) => Kind::U16,
            Value::U32(_) => Kind::U32,
            Value::U64(_) => Kind::U64,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::Bool(_) => Kind::Bool,
            Value::Timestamp(_) => Kind::Timestamp,
            Value::Date(_) => Kind::Date,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            // RFC 3339 cannot spell years outside 0000..=9999; those fall
            // back to the `time` crate's own rendering.
            Value::Timestamp(v) => match TimestampFormat::Rfc3339Nano.format(*v) {
                Ok(text) => f.write_str(&text),
                Err(_) => write!(f, "{v}"),
            },
            Value::Date(v) => match format_date(*v) {
                Ok(text) => f.write_str(&text),
                Err(_) => write!(f, "{v}"),
            },
        }
    }
}
