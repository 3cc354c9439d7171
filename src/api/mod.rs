//! Purpose: Define the stable public Rust API boundary for scalarbind.
//! Exports: Binder entrypoints, destination handles, kinds, values, and errors.
//! Role: Public, additive-only surface used by parameter layers.
//! Invariants: This module is the only public path to binder primitives.
//! Invariants: Accepted literal sets per kind are part of the contract.

pub use crate::core::bind::{Destination, bind, bind_any, bind_destination, parse};
pub use crate::core::error::{BindError, BindErrorKind};
pub use crate::core::kind::Kind;
pub use crate::core::parse::parse_value;
pub use crate::core::scalar::Scalar;
pub use crate::core::timestamp::{TIMESTAMP_FORMATS, TimestampFormat};
pub use crate::core::value::Value;
