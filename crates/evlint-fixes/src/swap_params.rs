//! The parameter-swap repair.

use evlint_common::TextRange;
use evlint_syntax::{Declaration, DocumentStore, EditTransaction, SourceDocument};
use tracing::debug;

use crate::preview::FixPreview;

/// Swaps the first two parameters of an exception handler, preserving the
/// separator text between them exactly.
pub struct SwapParametersFix;

impl SwapParametersFix {
    pub const FAMILY_KEY: &'static str = "quickfix.swapParameters";

    pub fn family_name() -> &'static str {
        "Swap exception handler parameters"
    }

    /// Apply the swap to the declaration's document as one atomic edit.
    /// Returns whether the document was mutated.
    pub fn apply(&self, docs: &mut DocumentStore, decl: &Declaration) -> bool {
        let Some(tx) = self.build_transaction(docs, decl) else {
            return false;
        };
        let Some(doc) = docs.get_mut(decl.doc) else {
            return false;
        };
        debug!(file = %doc.file_name, "swapping exception handler parameters");
        tx.commit(doc)
    }

    /// The host shows its generic presentation for this repair.
    pub fn preview(&self, _docs: &DocumentStore, _decl: &Declaration) -> FixPreview {
        FixPreview::None
    }

    fn build_transaction(
        &self,
        docs: &DocumentStore,
        decl: &Declaration,
    ) -> Option<EditTransaction> {
        if !decl.capabilities().supports_param_swap() {
            return None;
        }
        let doc = docs.get(decl.doc)?;
        let first = decl.param(0)?.range?;
        let second = decl.param(1)?.range?;
        swap_adjacent_ranges(doc, first, second)
    }
}

/// Replace `[first.start, second.end)` with second's text, the original
/// separator text, then first's text. Inverted or overlapping ranges
/// produce no transaction.
fn swap_adjacent_ranges(
    doc: &SourceDocument,
    first: TextRange,
    second: TextRange,
) -> Option<EditTransaction> {
    if first.start >= second.end {
        return None;
    }
    if first.end > second.start {
        return None;
    }

    let first_text = doc.range_text(first);
    let second_text = doc.range_text(second);
    let separator = doc.range_text(TextRange::new(first.end, second.start));

    let mut tx = EditTransaction::new();
    tx.replace(
        TextRange::new(first.start, second.end),
        format!("{second_text}{separator}{first_text}"),
    );
    Some(tx)
}
