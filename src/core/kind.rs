//! Purpose: Name the closed set of destination kinds the binder understands.
//! Exports: `Kind`.
//! Role: Dispatch tag shared by the parser switch, destinations, and errors.
//! Invariants: Tag names are a stable contract (parsed tags, serialized output).
//! Invariants: Adding a kind forces every `match` over `Kind` to be revisited.

use std::any::type_name;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::error::{BindError, BindErrorKind};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    Timestamp,
    Date,
}

impl Kind {
    pub const ALL: [Kind; 13] = [
        Kind::I8,
        Kind::I16,
        Kind::I32,
        Kind::I64,
        Kind::U8,
        Kind::U16,
        Kind::U32,
        Kind::U64,
        Kind::F32,
        Kind::F64,
        Kind::Bool,
        Kind::Timestamp,
        Kind::Date,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Bool => "bool",
            Kind::Timestamp => "timestamp",
            Kind::Date => "date",
        }
    }

    /// Storage width for numeric kinds.
    pub fn bits(self) -> Option<u32> {
        match self {
            Kind::I8 | Kind::U8 => Some(8),
            Kind::I16 | Kind::U16 => Some(16),
            Kind::I32 | Kind::U32 | Kind::F32 => Some(32),
            Kind::I64 | Kind::U64 | Kind::F64 => Some(64),
            Kind::Bool | Kind::Timestamp | Kind::Date => None,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self, Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64)
    }

    pub fn is_unsigned(self) -> bool {
        matches!(self, Kind::U8 | Kind::U16 | Kind::U32 | Kind::U64)
    }

    pub fn is_float(self) -> bool {
        matches!(self, Kind::F32 | Kind::F64)
    }

    /// Accepted text grammar, for diagnostics and hints.
    pub fn literals(self) -> &'static str {
        match self {
            Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64 => {
                "base-10 integer with optional sign, e.g. -124"
            }
            Kind::U8 | Kind::U16 | Kind::U32 | Kind::U64 => {
                "base-10 digits without a sign, e.g. 124"
            }
            Kind::F32 | Kind::F64 => "base-10 float, e.g. 1.25, -3e8, inf, NaN",
            Kind::Bool => "1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False",
            Kind::Timestamp => {
                "RFC 3339 with offset, e.g. 2024-05-01T12:30:00.123456789Z or 2024-05-01T14:30:00+02:00"
            }
            Kind::Date => "RFC 3339 full-date, e.g. 2024-05-01",
        }
    }

    /// Name of the primitive Rust type that stores this kind.
    pub fn rust_type(self) -> &'static str {
        match self {
            Kind::I8 => type_name::<i8>(),
            Kind::I16 => type_name::<i16>(),
            Kind::I32 => type_name::<i32>(),
            Kind::I64 => type_name::<i64>(),
            Kind::U8 => type_name::<u8>(),
            Kind::U16 => type_name::<u16>(),
            Kind::U32 => type_name::<u32>(),
            Kind::U64 => type_name::<u64>(),
            Kind::F32 => type_name::<f32>(),
            Kind::F64 => type_name::<f64>(),
            Kind::Bool => type_name::<bool>(),
            Kind::Timestamp => type_name::<time::OffsetDateTime>(),
            Kind::Date => type_name::<time::Date>(),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = BindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == value)
            .ok_or_else(|| {
                let supported = Kind::ALL.map(Kind::name).join(", ");
                BindError::new(BindErrorKind::UnsupportedKind)
                    .with_message(format!("unknown kind {value:?}"))
                    .with_hint(format!("Use one of: {supported}."))
            })
    }
}
