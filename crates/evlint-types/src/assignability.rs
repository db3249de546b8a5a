//! The type-conformance resolver.
//!
//! `is_assignable_to_fqn` answers whether a declared type conforms to a
//! fully-qualified target name: by canonical text, by declared class, or by
//! the target appearing in the breadth-first closure over superclass and
//! implemented-interface edges.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::index::{ClassId, TypeIndex};
use crate::ty::Ty;
use crate::well_known;

/// Whether `ty` is assignable to the class or interface named `target_fqn`.
///
/// Invalid and primitive types are assignable to nothing. The hierarchy walk
/// is visited-set bounded, so cyclic and diamond-shaped graphs terminate.
pub fn is_assignable_to_fqn(ty: &Ty, target_fqn: &str, index: &TypeIndex) -> bool {
    if ty.is_invalid() || ty.is_primitive() {
        return false;
    }

    let normalized = ty.normalized();
    let Some(canonical) = normalized.canonical_name() else {
        return false;
    };
    if canonical == target_fqn {
        return true;
    }

    let resolved = normalized
        .declared_class()
        .or_else(|| index.class_named(canonical));
    let Some(resolved) = resolved else {
        trace!("no declared class for '{canonical}'");
        return false;
    };
    if index.qualified_name(resolved) == Some(target_fqn) {
        return true;
    }

    has_super_named(resolved, target_fqn, index)
}

/// Breadth-first walk over superclass and interface edges. The visited set
/// bounds the search to the finite hierarchy.
fn has_super_named(start: ClassId, target_fqn: &str, index: &TypeIndex) -> bool {
    let mut seen = FxHashSet::default();
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(id) = queue.pop_front() {
        if !seen.insert(id) {
            continue;
        }
        let Some(def) = index.get(id) else {
            continue;
        };

        if let Some(super_class) = def.super_class {
            if index.qualified_name(super_class) == Some(target_fqn) {
                return true;
            }
            queue.push_back(super_class);
        }
        for &interface in &def.interfaces {
            if index.qualified_name(interface) == Some(target_fqn) {
                return true;
            }
            queue.push_back(interface);
        }
    }

    trace!("'{}' has no supertype named '{target_fqn}'", index.qualified_name(start).unwrap_or("?"));
    false
}

/// Whether `ty` implements the event interface.
pub fn is_event(ty: &Ty, index: &TypeIndex) -> bool {
    is_assignable_to_fqn(ty, well_known::EVENT_FQN, index)
}

/// Whether `ty` is a throwable, under either platform spelling of the root.
pub fn is_throwable(ty: &Ty, index: &TypeIndex) -> bool {
    is_assignable_to_fqn(ty, well_known::JAVA_THROWABLE_FQN, index)
        || is_assignable_to_fqn(ty, well_known::KOTLIN_THROWABLE_FQN, index)
}

/// Whether a declaration's return type is void or Kotlin's `Unit`.
/// A missing return type is not void-equivalent.
pub fn returns_void_or_unit(return_ty: Option<&Ty>) -> bool {
    let Some(ty) = return_ty else {
        return false;
    };
    match ty.canonical_name() {
        Some(name) => name == well_known::VOID || name == well_known::KOTLIN_UNIT_FQN,
        None => false,
    }
}
