//! Raw runtime values of the hosted object system.
//!
//! [`Value`] is the closed set of primitive kinds the host can hand to the
//! reflection layer. Only booleans, integers, floats, and strings have a
//! built-in type mapping; `Null` and `List` exist in the value model but sit
//! outside the `type_of` bridge.

use std::sync::Arc;

use crate::error::TypeError;
use crate::registry;
use crate::ty::TypeDesc;

/// A raw host-level value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    /// The kind name of this value, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Str(_) => "Str",
            Value::List(_) => "List",
        }
    }

    /// The descriptor for this value's built-in type, from the global
    /// registry.
    ///
    /// Fails with [`TypeError::UnrecognizedValueKind`] for kinds outside
    /// the bridged set.
    pub fn ty(&self) -> Result<Arc<TypeDesc>, TypeError> {
        registry::global_registry().type_of(self)
    }
}
