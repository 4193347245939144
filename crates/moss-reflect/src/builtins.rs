//! Builtin type registration.
//!
//! Registers the core type table into a [`TypeRegistry`]: the universal
//! root `sys::Obj`, the classification roots `sys::Enum` and `sys::Mixin`,
//! the value types bridged from raw runtime values (`sys::Bool`,
//! `sys::Int`, `sys::Float`, `sys::Str`), and the remaining core types
//! including `sys::Type` itself.
//!
//! The process-wide registry runs this once on first access; a fresh
//! registry can be populated with the same table for isolated use.

use crate::error::TypeError;
use crate::registry::TypeRegistry;

/// The builtin type table: qualified name and explicit base.
///
/// Rows with no base default to the universal root. The table is kept
/// alphabetical, and bases link by name, so a row may precede the row it
/// names as base (`sys::Float` before `sys::Num`).
const BUILTIN_TYPES: &[(&str, Option<&str>)] = &[
    ("sys::Bool", None),
    ("sys::Date", None),
    ("sys::DateTime", None),
    ("sys::Duration", None),
    ("sys::Enum", None),
    ("sys::Err", None),
    ("sys::Float", Some("sys::Num")),
    ("sys::Int", Some("sys::Num")),
    ("sys::List", None),
    ("sys::Map", None),
    ("sys::Mixin", None),
    ("sys::Month", Some("sys::Enum")),
    ("sys::Num", None),
    ("sys::Obj", None),
    ("sys::Range", None),
    ("sys::Str", None),
    ("sys::StrBuf", None),
    ("sys::Test", None),
    ("sys::Type", None),
];

/// Register the builtin type table into `registry`.
///
/// After this call every name in the table resolves via `find`, and every
/// base chain terminates at `sys::Obj`. Running it twice against the same
/// registry fails on the first row with
/// [`TypeError::DuplicateRegistration`].
pub fn register_builtins(registry: &TypeRegistry) -> Result<(), TypeError> {
    for (qname, base) in BUILTIN_TYPES {
        registry.register(qname, *base)?;
    }
    Ok(())
}
