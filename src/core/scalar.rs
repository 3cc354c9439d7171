//! Purpose: Connect Rust storage types to the kind they bind as.
//! Exports: `Scalar`, `scalar_alias!`.
//! Role: Static half of the destination handle; declares kind and write-back.
//! Invariants: `from_value` accepts only the variant for `KIND`.
//! Notes: Pointer-sized integers also take narrower widths they can hold losslessly.

use time::{Date, OffsetDateTime};

use crate::core::kind::Kind;
use crate::core::value::Value;

/// A storage type the binder can write into.
///
/// Implement through [`scalar_alias!`](crate::scalar_alias) for named
/// wrappers around a supported primitive; plain `type` aliases need nothing.
pub trait Scalar: Sized {
    const KIND: Kind;

    /// Convert a parsed value into this type. `None` means the value is of a
    /// different kind than `KIND`.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: Kind = Kind::$variant;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_scalar!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    OffsetDateTime => Timestamp,
    Date => Date,
);

impl Scalar for isize {
    const KIND: Kind = match isize::BITS {
        16 => Kind::I16,
        32 => Kind::I32,
        _ => Kind::I64,
    };

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::I16(inner) => Some(isize::from(inner)),
            Value::I32(inner) => isize::try_from(inner).ok(),
            Value::I64(inner) => isize::try_from(inner).ok(),
            _ => None,
        }
    }
}

impl Scalar for usize {
    const KIND: Kind = match usize::BITS {
        16 => Kind::U16,
        32 => Kind::U32,
        _ => Kind::U64,
    };

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::U16(inner) => Some(usize::from(inner)),
            Value::U32(inner) => usize::try_from(inner).ok(),
            Value::U64(inner) => usize::try_from(inner).ok(),
            _ => None,
        }
    }
}

/// Make single-field tuple structs bind like the primitive they wrap.
///
/// ```
/// use scalarbind::api::bind;
///
/// #[derive(Debug, PartialEq)]
/// struct UserId(i64);
/// scalarbind::scalar_alias!(UserId(i64));
///
/// let mut id = UserId(0);
/// bind("5", &mut id).unwrap();
/// assert_eq!(id, UserId(5));
/// ```
#[macro_export]
macro_rules! scalar_alias {
    ($($alias:ident($repr:ty)),+ $(,)?) => {
        $(
            impl $crate::api::Scalar for $alias {
                const KIND: $crate::api::Kind = <$repr as $crate::api::Scalar>::KIND;

                fn from_value(value: $crate::api::Value) -> ::core::option::Option<Self> {
                    <$repr as $crate::api::Scalar>::from_value(value).map($alias)
                }
            }
        )+
    };
}
