//! The unified declaration model.
//!
//! A `Declaration` is the host's view of one method/function construct,
//! flattened to what signature validation needs: annotations, parameters
//! with their source ranges, the parameter list, and where the return type
//! lives for the declaration's surface syntax. The host owns the syntax
//! tree; this model only carries ranges into it.

use bitflags::bitflags;
use evlint_common::TextRange;
use evlint_types::Ty;
use smallvec::SmallVec;

use crate::capabilities::{SyntaxCapabilities, capabilities_for};
use crate::document::DocumentId;

/// The surface syntax a declaration was ingested from. `Other` covers
/// syntaxes the engine does not understand; they pass through every check
/// with declaration-level anchors only and no repair support.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Java,
    Kotlin,
    Scala,
    Other,
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct DeclFlags: u8 {
        const CONSTRUCTOR = 1 << 0;
    }
}

/// One value parameter of a declaration.
#[derive(Clone, Debug)]
pub struct Parameter {
    pub ty: Ty,
    /// The whole parameter construct (`Event e`, `e: Event`).
    pub range: Option<TextRange>,
    /// The explicit type annotation; `None` when the type is inferred.
    pub type_range: Option<TextRange>,
}

/// Where a declaration's return type lives in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReturnTypePosition {
    /// A mandatory typed node before the name (Java).
    TypedNode(TextRange),
    /// An explicit trailing annotation, `: T` (Kotlin, Scala).
    TrailingAnnotation {
        colon: TextRange,
        type_ref: TextRange,
    },
    /// No explicit annotation; `insert_at` is where one would attach (Kotlin).
    ImplicitUnit { insert_at: u32 },
    /// The syntax exposes no rewritable return-type position.
    None,
}

/// A method/function declaration as surfaced by the host's syntax layer.
#[derive(Clone, Debug)]
pub struct Declaration {
    pub doc: DocumentId,
    pub syntax: SyntaxKind,
    pub flags: DeclFlags,
    /// Full source range of the declaration.
    pub range: TextRange,
    /// The name identifier, when the host exposes one.
    pub name_range: Option<TextRange>,
    /// Fully-qualified names of the annotations on the declaration.
    pub annotations: Vec<String>,
    pub params: SmallVec<[Parameter; 2]>,
    /// The parameter list construct, parentheses included.
    pub param_list: Option<TextRange>,
    pub return_ty: Option<Ty>,
    pub return_position: ReturnTypePosition,
}

impl Declaration {
    pub fn is_constructor(&self) -> bool {
        self.flags.contains(DeclFlags::CONSTRUCTOR)
    }

    pub fn has_annotation(&self, fqn: &str) -> bool {
        self.annotations.iter().any(|a| a == fqn)
    }

    pub fn param(&self, index: usize) -> Option<&Parameter> {
        self.params.get(index)
    }

    /// The capability implementation for this declaration's surface syntax,
    /// selected once from the kind recorded at ingestion.
    pub fn capabilities(&self) -> &'static dyn SyntaxCapabilities {
        capabilities_for(self.syntax)
    }
}
