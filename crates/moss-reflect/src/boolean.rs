//! The boolean value type.
//!
//! Text conversion and type identity for `sys::Bool`. Parsing accepts
//! exactly the literals `"true"` and `"false"`, with no case folding and
//! no whitespace trimming, in a strict form that reports failure and a
//! lenient form that swallows it.

use std::sync::Arc;

use crate::error::TypeError;
use crate::ty::{TypeDesc, BOOL};

/// The default boolean value.
pub const DEF_VAL: bool = false;

/// Parse a boolean from its literal form.
///
/// Fails with [`TypeError::ParseError`] carrying the rejected input.
pub fn from_str(s: &str) -> Result<bool, TypeError> {
    from_str_opt(s).ok_or_else(|| TypeError::ParseError {
        type_name: "Bool".to_string(),
        text: s.to_string(),
    })
}

/// Parse a boolean from its literal form, or `None` if the input is not
/// exactly `"true"` or `"false"`.
pub fn from_str_opt(s: &str) -> Option<bool> {
    match s {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// The display form of a boolean.
pub fn to_str(val: bool) -> &'static str {
    if val {
        "true"
    } else {
        "false"
    }
}

/// The source-literal form of a boolean.
///
/// Coincides with [`to_str`] for booleans; string values, by contrast,
/// quote and escape in their code form. Kept as its own operation.
pub fn to_code(val: bool) -> &'static str {
    to_str(val)
}

/// The type descriptor for `sys::Bool`, from the global registry.
pub fn ty() -> Arc<TypeDesc> {
    crate::registry::builtin(BOOL)
}
