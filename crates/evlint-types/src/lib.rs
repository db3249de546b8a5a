//! Type expressions, the class-hierarchy index, and the conformance resolver.
//!
//! The resolver answers one question: is a declared type assignable to a
//! fully-qualified target name? It is a pure function of the type, the target,
//! and the hierarchy index the host registered; it never mutates anything and
//! always terminates.

pub mod assignability;
pub mod index;
pub mod ty;
pub mod well_known;

pub use assignability::{is_assignable_to_fqn, is_event, is_throwable, returns_void_or_unit};
pub use index::{ClassDef, ClassId, ClassKind, TypeIndex};
pub use ty::{Primitive, Ty};
