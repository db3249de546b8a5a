//! The return-type rewrite repair.

use evlint_common::TextRange;
use evlint_syntax::{Declaration, DocumentStore, EditTransaction, ReturnTypePosition};
use tracing::debug;

use crate::preview::FixPreview;

/// Rewrites a handler's return type to the void equivalent of its syntax:
/// `void` for a typed return node, and for a trailing annotation either the
/// removal of the annotation (reverting to the implicit `Unit` default) or
/// the attachment of an explicit `: Unit`.
pub struct RewriteReturnTypeFix;

impl RewriteReturnTypeFix {
    pub const FAMILY_KEY: &'static str = "quickfix.changeReturnTypeToVoidOrUnit";

    pub fn family_name() -> &'static str {
        "Change return type to 'void' or 'Unit'"
    }

    /// Apply the rewrite to the declaration's document as one atomic edit.
    /// Returns whether the document was mutated.
    pub fn apply(&self, docs: &mut DocumentStore, decl: &Declaration) -> bool {
        let Some(tx) = self.build_transaction(decl) else {
            return false;
        };
        let Some(doc) = docs.get_mut(decl.doc) else {
            return false;
        };
        debug!(file = %doc.file_name, "rewriting handler return type");
        tx.commit(doc)
    }

    /// A before/after diff of the affected document.
    pub fn preview(&self, docs: &DocumentStore, decl: &Declaration) -> FixPreview {
        let Some(tx) = self.build_transaction(decl) else {
            return FixPreview::None;
        };
        let Some(doc) = docs.get(decl.doc) else {
            return FixPreview::None;
        };
        match tx.preview(doc) {
            Some(after) => FixPreview::Diff {
                before: doc.text().to_string(),
                after,
            },
            None => FixPreview::None,
        }
    }

    fn build_transaction(&self, decl: &Declaration) -> Option<EditTransaction> {
        if !decl.capabilities().supports_return_rewrite() {
            return None;
        }

        let mut tx = EditTransaction::new();
        match decl.return_position {
            ReturnTypePosition::TypedNode(range) => {
                tx.replace(range, "void");
            }
            ReturnTypePosition::TrailingAnnotation { colon, type_ref } => {
                // Deleting colon-through-type-reference reverts the
                // declaration to the implicit Unit default.
                tx.replace(TextRange::new(colon.start, type_ref.end), "");
            }
            ReturnTypePosition::ImplicitUnit { insert_at } => {
                tx.replace(TextRange::empty(insert_at), ": Unit");
            }
            ReturnTypePosition::None => return None,
        }
        Some(tx)
    }
}
