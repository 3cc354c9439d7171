//! Purpose: Bind text into caller-owned storage through a destination handle.
//! Exports: `Destination`, `bind`, `bind_destination`, `bind_any`, `parse`.
//! Role: The scalar binder; parse by kind tag, then write back once.
//! Invariants: One write on success, zero writes on failure.
//! Invariants: A destination borrows its slot exclusively and only for one call.
//! Invariants: No state survives a call; concurrent calls on distinct slots are independent.

use std::any::{Any, type_name};
use std::fmt;

use time::{Date, OffsetDateTime};

use crate::core::error::{BindError, BindErrorKind};
use crate::core::kind::Kind;
use crate::core::parse::parse_value;
use crate::core::scalar::Scalar;
use crate::core::value::Value;

type WriteBack<'a> = Box<dyn FnOnce(Value) -> Result<(), Value> + 'a>;

/// Exclusive, single-use write capability for one storage location.
pub struct Destination<'a> {
    kind: Option<Kind>,
    type_name: &'static str,
    write: WriteBack<'a>,
}

impl<'a> Destination<'a> {
    pub fn new<T: Scalar>(slot: &'a mut T) -> Self {
        Self {
            kind: Some(T::KIND),
            type_name: type_name::<T>(),
            write: Box::new(move |value: Value| -> Result<(), Value> {
                let converted = T::from_value(value).ok_or(value)?;
                *slot = converted;
                Ok(())
            }),
        }
    }

    /// Resolve the slot's concrete type at runtime. Types outside the
    /// supported primitive set yield an unsupported destination; named
    /// aliases are invisible here and must go through [`Destination::new`].
    pub fn from_any(slot: &'a mut dyn Any) -> Self {
        Self::resolve(slot).unwrap_or_else(|| Self::unsupported("unknown type"))
    }

    // The `is` guard keeps each mutable borrow inside a branch that returns;
    // a bare `if let Some(..) = slot.downcast_mut()` would hold `slot` for the
    // rest of the function.
    fn resolve(slot: &'a mut dyn Any) -> Option<Self> {
        macro_rules! resolve {
            ($($ty:ty),+) => {
                $(
                    if slot.is::<$ty>() {
                        return slot.downcast_mut::<$ty>().map(Self::new);
                    }
                )+
            };
        }
        resolve!(
            i8,
            i16,
            i32,
            i64,
            isize,
            u8,
            u16,
            u32,
            u64,
            usize,
            f32,
            f64,
            bool,
            OffsetDateTime,
            Date
        );
        None
    }

    /// A handle for storage the binder cannot write (structs, sequences,
    /// maps). Binding into it always fails with `UnsupportedKind`.
    pub fn unsupported(type_name: &'static str) -> Self {
        Self {
            kind: None,
            type_name,
            write: Box::new(Err::<(), Value>),
        }
    }

    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Destination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("kind", &self.kind)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Parse `text` per the destination's kind and write the result into it.
pub fn bind_destination(text: &str, destination: Destination<'_>) -> Result<(), BindError> {
    let Destination {
        kind,
        type_name,
        write,
    } = destination;
    let result = match kind {
        Some(kind) => parse_value(text, kind).and_then(|value| {
            write(value).map_err(|rejected| {
                BindError::new(BindErrorKind::UnsupportedKind)
                    .with_target(kind)
                    .with_message(format!(
                        "destination declared {kind} but rejected a {} value",
                        rejected.kind()
                    ))
            })
        }),
        None => Err(BindError::new(BindErrorKind::UnsupportedKind)
            .with_message("destination is not a supported scalar")
            .with_hint(format!(
                "Supported kinds: {}.",
                Kind::ALL.map(Kind::name).join(", ")
            ))),
    };
    match result {
        Ok(()) => {
            tracing::trace!(kind = ?kind, type_name, "bound scalar");
            Ok(())
        }
        Err(err) => {
            let err = err.with_text(text).with_type_name(type_name);
            tracing::debug!(error_kind = ?err.kind(), kind = ?kind, type_name, "bind failed");
            Err(err)
        }
    }
}

/// Bind into a statically typed slot. On error `slot` keeps its old value.
pub fn bind<T: Scalar>(text: &str, slot: &mut T) -> Result<(), BindError> {
    bind_destination(text, Destination::new(slot))
}

/// Bind into a slot whose type is only known at runtime.
pub fn bind_any(text: &str, slot: &mut dyn Any) -> Result<(), BindError> {
    bind_destination(text, Destination::from_any(slot))
}

/// Parse `text` into a fresh `T`.
pub fn parse<T: Scalar>(text: &str) -> Result<T, BindError> {
    let value = parse_value(text, T::KIND)
        .map_err(|err| err.with_type_name(type_name::<T>()))?;
    T::from_value(value).ok_or_else(|| {
        BindError::new(BindErrorKind::UnsupportedKind)
            .with_text(text)
            .with_target(T::KIND)
            .with_type_name(type_name::<T>())
    })
}
