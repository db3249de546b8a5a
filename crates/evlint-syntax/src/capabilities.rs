//! Per-syntax capability implementations.
//!
//! Each supported surface syntax answers the same small set of questions —
//! where is a parameter's type annotation, where is the parameter list, can
//! the return type be rewritten — through one implementation selected at
//! ingestion. An unrecognized syntax answers nothing, so diagnostics fall
//! back to declaration-level anchors and every repair is a no-op.

use evlint_common::TextRange;

use crate::decl::{Declaration, ReturnTypePosition, SyntaxKind};

pub trait SyntaxCapabilities: Sync {
    fn kind(&self) -> SyntaxKind;

    /// The explicit type annotation of the parameter at `index`.
    fn param_type_anchor(&self, decl: &Declaration, index: usize) -> Option<TextRange>;

    /// The whole parameter construct at `index`.
    fn param_anchor(&self, decl: &Declaration, index: usize) -> Option<TextRange>;

    /// The parameter list construct.
    fn param_list_anchor(&self, decl: &Declaration) -> Option<TextRange>;

    /// The explicit return-type reference, when the syntax exposes one.
    fn return_type_anchor(&self, decl: &Declaration) -> Option<TextRange>;

    /// Whether the parameter-swap repair understands this syntax.
    fn supports_param_swap(&self) -> bool;

    /// Whether the return-type rewrite understands this syntax.
    fn supports_return_rewrite(&self) -> bool;
}

pub fn capabilities_for(kind: SyntaxKind) -> &'static dyn SyntaxCapabilities {
    match kind {
        SyntaxKind::Java => &JavaCapabilities,
        SyntaxKind::Kotlin => &KotlinCapabilities,
        SyntaxKind::Scala => &ScalaCapabilities,
        SyntaxKind::Other => &OtherCapabilities,
    }
}

/// Java: parameters always carry a type element, the return type is a typed
/// node, and both repairs apply.
struct JavaCapabilities;

impl SyntaxCapabilities for JavaCapabilities {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::Java
    }

    fn param_type_anchor(&self, decl: &Declaration, index: usize) -> Option<TextRange> {
        decl.param(index)?.type_range
    }

    fn param_anchor(&self, decl: &Declaration, index: usize) -> Option<TextRange> {
        decl.param(index)?.range
    }

    fn param_list_anchor(&self, decl: &Declaration) -> Option<TextRange> {
        decl.param_list
    }

    fn return_type_anchor(&self, decl: &Declaration) -> Option<TextRange> {
        match decl.return_position {
            ReturnTypePosition::TypedNode(range) => Some(range),
            _ => None,
        }
    }

    fn supports_param_swap(&self) -> bool {
        true
    }

    fn supports_return_rewrite(&self) -> bool {
        true
    }
}

/// Kotlin: the return type is an optional trailing annotation, and both
/// repairs apply.
struct KotlinCapabilities;

impl SyntaxCapabilities for KotlinCapabilities {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::Kotlin
    }

    fn param_type_anchor(&self, decl: &Declaration, index: usize) -> Option<TextRange> {
        decl.param(index)?.type_range
    }

    fn param_anchor(&self, decl: &Declaration, index: usize) -> Option<TextRange> {
        decl.param(index)?.range
    }

    fn param_list_anchor(&self, decl: &Declaration) -> Option<TextRange> {
        decl.param_list
    }

    fn return_type_anchor(&self, decl: &Declaration) -> Option<TextRange> {
        match decl.return_position {
            ReturnTypePosition::TrailingAnnotation { type_ref, .. } => Some(type_ref),
            _ => None,
        }
    }

    fn supports_param_swap(&self) -> bool {
        true
    }

    fn supports_return_rewrite(&self) -> bool {
        true
    }
}

/// Scala: parameter anchors work (type elements may be absent on inferred
/// parameters), but neither repair understands the syntax and the
/// return-type rule anchors at the declaration level.
struct ScalaCapabilities;

impl SyntaxCapabilities for ScalaCapabilities {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::Scala
    }

    fn param_type_anchor(&self, decl: &Declaration, index: usize) -> Option<TextRange> {
        decl.param(index)?.type_range
    }

    fn param_anchor(&self, decl: &Declaration, index: usize) -> Option<TextRange> {
        decl.param(index)?.range
    }

    fn param_list_anchor(&self, decl: &Declaration) -> Option<TextRange> {
        decl.param_list
    }

    fn return_type_anchor(&self, _decl: &Declaration) -> Option<TextRange> {
        None
    }

    fn supports_param_swap(&self) -> bool {
        false
    }

    fn supports_return_rewrite(&self) -> bool {
        false
    }
}

/// Pass-through for syntaxes the engine does not understand.
struct OtherCapabilities;

impl SyntaxCapabilities for OtherCapabilities {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::Other
    }

    fn param_type_anchor(&self, _decl: &Declaration, _index: usize) -> Option<TextRange> {
        None
    }

    fn param_anchor(&self, _decl: &Declaration, _index: usize) -> Option<TextRange> {
        None
    }

    fn param_list_anchor(&self, _decl: &Declaration) -> Option<TextRange> {
        None
    }

    fn return_type_anchor(&self, _decl: &Declaration) -> Option<TextRange> {
        None
    }

    fn supports_param_swap(&self) -> bool {
        false
    }

    fn supports_return_rewrite(&self) -> bool {
        false
    }
}
