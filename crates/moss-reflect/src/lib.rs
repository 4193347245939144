//! Moss runtime type registry.
//!
//! This crate provides the reflective core of the Moss runtime: type
//! descriptors keyed by qualified name, a process-wide registry that
//! bootstraps the builtin type table on first use, and text conversion
//! for the boolean value type.
//!
//! ## Modules
//!
//! - [`ty`]: Type descriptors -- qualified names, base links, classification
//! - [`registry`]: Registration, lookup, the value-to-type bridge, ancestry walks
//! - [`builtins`]: The builtin type table (`sys::Obj`, `sys::Bool`, ...)
//! - [`value`]: Raw runtime values as seen by the type bridge
//! - [`boolean`]: Parsing and formatting for `sys::Bool` values
//! - [`error`]: The error type shared across the crate

pub mod boolean;
pub mod builtins;
pub mod error;
pub mod registry;
pub mod ty;
pub mod value;

// Re-export the working surface for convenient access.
pub use builtins::register_builtins;
pub use error::TypeError;
pub use registry::{global_registry, TypeRegistry};
pub use ty::TypeDesc;
pub use value::Value;
