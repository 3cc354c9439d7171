//! Purpose: Bind string-valued inputs into strongly typed scalar destinations.
//! Exports: `api` (binder entrypoints, kinds, values, errors) and `scalar_alias!`.
//! Role: Library backing request-parameter binding layers.
//! Invariants: Binding is synchronous, allocation-light, and keeps no state.
//! Invariants: Callers reach the binder through `api`; `core` is an implementation detail.
pub mod api;
#[doc(hidden)]
pub mod core;
