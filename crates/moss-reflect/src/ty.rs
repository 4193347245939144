//! Type descriptors -- the reflective identity of one built-in type.
//!
//! A [`TypeDesc`] records a type's qualified name and the qualified name of
//! its base type. Classification (class/enum/mixin) is derived from the base
//! name alone, one level up, never stored. Descriptors are created only
//! through [`TypeRegistry::register`](crate::TypeRegistry::register), are
//! immutable afterwards, and circulate as `Arc<TypeDesc>` for the life of
//! the process.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::TypeError;

// ── Well-known qualified names ─────────────────────────────────────────

/// The universal root type. Every base chain terminates here.
pub const OBJ: &str = "sys::Obj";
/// The enum root. A type based directly on it is an enum.
pub const ENUM: &str = "sys::Enum";
/// The mixin root. A type based directly on it is a mixin.
pub const MIXIN: &str = "sys::Mixin";
/// The type of types. `desc.ty()` resolves to this descriptor.
pub const TYPE: &str = "sys::Type";
/// The boolean primitive type.
pub const BOOL: &str = "sys::Bool";
/// The integer primitive type.
pub const INT: &str = "sys::Int";
/// The floating-point primitive type.
pub const FLOAT: &str = "sys::Float";
/// The string primitive type.
pub const STR: &str = "sys::Str";

/// Split a qualified name into its namespace and simple name.
///
/// Returns `None` unless the name is exactly `<namespace>::<simpleName>`
/// with both parts non-empty and a single `::` separator.
fn split_qname(qname: &str) -> Option<(&str, &str)> {
    let (ns, name) = qname.split_once("::")?;
    if ns.is_empty() || name.is_empty() || name.contains("::") {
        return None;
    }
    Some((ns, name))
}

// ── TypeDesc ───────────────────────────────────────────────────────────

/// The reflective metadata record for one type.
///
/// The base is stored as a qualified *name*, not a structural link, so the
/// registry can be populated in any order and a dangling or looping base is
/// detected at resolution time rather than construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDesc {
    qname: String,
    name: String,
    base: String,
}

impl TypeDesc {
    /// Create a descriptor, validating both names.
    ///
    /// An omitted `base` defaults to the universal root, which makes the
    /// root itself self-based; [`base_of`](crate::TypeRegistry::base_of)
    /// treats the root as terminal rather than resolving that self-link.
    pub(crate) fn new(qname: &str, base: Option<&str>) -> Result<Self, TypeError> {
        let (_, name) = split_qname(qname).ok_or_else(|| TypeError::InvalidQName {
            qname: qname.to_string(),
        })?;
        if let Some(base) = base {
            // A malformed base can never be satisfied by a later
            // registration.
            if split_qname(base).is_none() {
                return Err(TypeError::InvalidQName {
                    qname: base.to_string(),
                });
            }
        }
        Ok(TypeDesc {
            qname: qname.to_string(),
            name: name.to_string(),
            base: base.unwrap_or(OBJ).to_string(),
        })
    }

    /// The globally unique `<namespace>::<simpleName>` identifier.
    pub fn qname(&self) -> &str {
        &self.qname
    }

    /// The simple name -- the part after `::`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The qualified name of the base type.
    pub fn base_qname(&self) -> &str {
        &self.base
    }

    /// The type signature. For non-generic types this is the qualified name.
    pub fn signature(&self) -> &str {
        &self.qname
    }

    /// Whether this type is an enum: its immediate base is the enum root.
    pub fn is_enum(&self) -> bool {
        self.base == ENUM
    }

    /// Whether this type is a mixin: its immediate base is the mixin root.
    pub fn is_mixin(&self) -> bool {
        self.base == MIXIN
    }

    /// Whether this type is a plain class -- neither enum nor mixin.
    pub fn is_class(&self) -> bool {
        !self.is_enum() && !self.is_mixin()
    }

    /// Resolve the base descriptor against the global registry.
    ///
    /// Returns `Ok(None)` for the universal root. Descriptors held in a
    /// private registry resolve through
    /// [`base_of`](crate::TypeRegistry::base_of) on that registry instead.
    pub fn base(&self) -> Result<Option<Arc<TypeDesc>>, TypeError> {
        crate::registry::global_registry().base_of(self)
    }

    /// The descriptor describing descriptors: the global registry's
    /// `sys::Type`.
    pub fn ty(&self) -> Arc<TypeDesc> {
        crate::registry::builtin(TYPE)
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qname)
    }
}
