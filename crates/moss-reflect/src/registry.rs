//! Qualified-name type registration and lookup.
//!
//! The registry is the single source of truth for type identity and
//! inheritance metadata: a table from qualified name to [`TypeDesc`],
//! plus the bridge from raw runtime values to their descriptive type.
//!
//! ## Semantics
//!
//! - A qualified name can be registered exactly once; duplicates are
//!   rejected, never overwritten.
//! - `find(qname)` returns the descriptor for an exact match, or `None`.
//!   Absence is a normal outcome, not an error.
//! - Bases are linked by name, so registration order is free; a dangling
//!   or looping base surfaces when the chain is resolved, not before.
//! - The process-wide instance behind [`global_registry`] is populated
//!   once, on first access, with the builtin table. After that it is
//!   effectively read-only, but the lock keeps late registration safe.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::{Arc, OnceLock};

use crate::builtins::register_builtins;
use crate::error::TypeError;
use crate::ty::{self, TypeDesc};
use crate::value::Value;

// ---------------------------------------------------------------------------
// TypeRegistry
// ---------------------------------------------------------------------------

/// Table of type descriptors, keyed by qualified name.
///
/// Reads share the lock; `register` takes it exclusively. Descriptors are
/// handed out as `Arc<TypeDesc>` and never removed, so a resolved
/// descriptor stays valid for the life of the process.
pub struct TypeRegistry {
    types: RwLock<FxHashMap<String, Arc<TypeDesc>>>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        TypeRegistry {
            types: RwLock::new(FxHashMap::default()),
        }
    }

    /// Look up a descriptor by qualified name.
    ///
    /// Returns `None` if the name is not registered. Never fails: callers
    /// that require presence surface the absence as an error themselves.
    pub fn find(&self, qname: &str) -> Option<Arc<TypeDesc>> {
        self.types.read().get(qname).map(Arc::clone)
    }

    /// Register a type under a qualified name.
    ///
    /// An omitted `base` defaults to the universal root. Fails with
    /// [`TypeError::InvalidQName`] if either name is malformed, or
    /// [`TypeError::DuplicateRegistration`] if the name is already taken --
    /// re-registration is a programming error, not an update.
    pub fn register(&self, qname: &str, base: Option<&str>) -> Result<(), TypeError> {
        let desc = TypeDesc::new(qname, base)?;
        let mut types = self.types.write();

        if types.contains_key(qname) {
            return Err(TypeError::DuplicateRegistration {
                qname: qname.to_string(),
            });
        }

        types.insert(qname.to_string(), Arc::new(desc));
        Ok(())
    }

    /// Resolve a raw runtime value to the descriptor of its built-in type.
    ///
    /// The bridge covers exactly booleans, integers, floats, and strings.
    /// Anything else fails with [`TypeError::UnrecognizedValueKind`]; this
    /// is a narrow mapping onto the builtin table, not a type inferencer.
    pub fn type_of(&self, value: &Value) -> Result<Arc<TypeDesc>, TypeError> {
        let qname = match value {
            Value::Bool(_) => ty::BOOL,
            Value::Int(_) => ty::INT,
            Value::Float(_) => ty::FLOAT,
            Value::Str(_) => ty::STR,
            Value::Null | Value::List(_) => {
                return Err(TypeError::UnrecognizedValueKind { kind: value.kind() })
            }
        };
        self.find(qname).ok_or_else(|| TypeError::MissingBuiltin {
            qname: qname.to_string(),
        })
    }

    /// Resolve a descriptor's base descriptor.
    ///
    /// Returns `Ok(None)` for the universal root -- the terminal of every
    /// base chain (the root's stored base is itself). Fails with
    /// [`TypeError::UnknownBaseType`] if the stored base name is not
    /// registered; the mapping is appendable, so this is checked on every
    /// resolution.
    pub fn base_of(&self, desc: &TypeDesc) -> Result<Option<Arc<TypeDesc>>, TypeError> {
        if desc.qname() == ty::OBJ {
            return Ok(None);
        }
        match self.find(desc.base_qname()) {
            Some(base) => Ok(Some(base)),
            None => Err(TypeError::UnknownBaseType {
                qname: desc.qname().to_string(),
                base: desc.base_qname().to_string(),
            }),
        }
    }

    /// The inheritance chain from `desc` up to and including the universal
    /// root.
    ///
    /// The walk is bounded by the number of registered types: revisiting a
    /// qualified name means the base chain loops, and the walk fails with
    /// [`TypeError::CyclicInheritance`] carrying the looping path instead
    /// of running forever.
    pub fn ancestry(&self, desc: &Arc<TypeDesc>) -> Result<Vec<Arc<TypeDesc>>, TypeError> {
        let mut chain: Vec<Arc<TypeDesc>> = Vec::new();
        let mut current = Arc::clone(desc);
        loop {
            if let Some(start) = chain.iter().position(|d| d.qname() == current.qname()) {
                let mut path: Vec<String> =
                    chain[start..].iter().map(|d| d.qname().to_string()).collect();
                path.push(current.qname().to_string());
                return Err(TypeError::CyclicInheritance { path });
            }
            chain.push(Arc::clone(&current));
            match self.base_of(&current)? {
                Some(base) => current = base,
                None => return Ok(chain),
            }
        }
    }

    /// All registered descriptors, sorted by qualified name for
    /// deterministic iteration.
    pub fn types(&self) -> Vec<Arc<TypeDesc>> {
        let mut all: Vec<Arc<TypeDesc>> = self.types.read().values().map(Arc::clone).collect();
        all.sort_by(|a, b| a.qname().cmp(b.qname()));
        all
    }

    /// The number of registered types.
    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    /// Whether the registry has no registered types.
    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Global registry instance
// ---------------------------------------------------------------------------

/// The global type registry, bootstrapped on first access.
static GLOBAL_REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// Get a reference to the global type registry.
///
/// The first call populates it with the builtin table; later calls are
/// idempotent. Bootstrap runs here, explicitly, never from static-init
/// ordering. A bootstrap failure means the builtin table itself is
/// inconsistent and is fatal to the process.
pub fn global_registry() -> &'static TypeRegistry {
    GLOBAL_REGISTRY.get_or_init(|| {
        let registry = TypeRegistry::new();
        if let Err(err) = register_builtins(&registry) {
            panic!("builtin type table failed to bootstrap: {err}");
        }
        registry
    })
}

/// Look up a builtin descriptor on the global registry.
///
/// Every name in the builtin table is present once `global_registry`
/// returns, so this cannot miss for table entries.
pub(crate) fn builtin(qname: &str) -> Arc<TypeDesc> {
    global_registry()
        .find(qname)
        .expect("builtin types are registered at bootstrap")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
