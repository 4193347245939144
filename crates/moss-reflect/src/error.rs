use std::fmt;

use serde::Serialize;

/// An error raised by the type registry or a primitive value operation.
///
/// Absence from a lookup is *not* an error: [`find`](crate::TypeRegistry::find)
/// returns `Option` and never fails. Every variant here signals a corrupted or
/// misconfigured type universe (or bad input text) and is surfaced to the
/// caller immediately, with no retry and no silent recovery. Callers decide
/// whether that is fatal to the process or local to one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeError {
    /// A qualified name is not of the form `<namespace>::<simpleName>`.
    InvalidQName { qname: String },
    /// A qualified name was registered twice.
    DuplicateRegistration { qname: String },
    /// A descriptor's stored base name is not itself registered.
    UnknownBaseType { qname: String, base: String },
    /// Following base names revisited a type instead of reaching the root.
    ///
    /// The path lists the qualified names walked, ending with the repeated
    /// name, e.g. `["sys::A", "sys::B", "sys::A"]`.
    CyclicInheritance { path: Vec<String> },
    /// A runtime value kind outside the closed set bridged by `type_of`.
    UnrecognizedValueKind { kind: &'static str },
    /// `type_of` mapped a value to a built-in that is not registered.
    ///
    /// Cannot happen on the bootstrapped global registry; reachable only on
    /// a custom registry populated without the builtin table.
    MissingBuiltin { qname: String },
    /// Text that is not a literal of the named primitive type.
    ParseError { type_name: String, text: String },
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::InvalidQName { qname } => {
                write!(
                    f,
                    "malformed qualified name `{qname}`, expected `<namespace>::<name>`"
                )
            }
            TypeError::DuplicateRegistration { qname } => {
                write!(f, "type `{qname}` is already registered")
            }
            TypeError::UnknownBaseType { qname, base } => {
                write!(f, "base type `{base}` of `{qname}` is not registered")
            }
            TypeError::CyclicInheritance { path } => {
                write!(f, "inheritance cycle: {}", path.join(" -> "))
            }
            TypeError::UnrecognizedValueKind { kind } => {
                write!(f, "no built-in type for {kind} values")
            }
            TypeError::MissingBuiltin { qname } => {
                write!(f, "built-in type `{qname}` is not registered")
            }
            TypeError::ParseError { type_name, text } => {
                write!(f, "invalid {type_name}: {text:?}")
            }
        }
    }
}

impl std::error::Error for TypeError {}
