//! Fix previews.

use serde::Serialize;

/// What the host shows before a repair is applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FixPreview {
    /// No custom preview; the host falls back to its generic presentation.
    None,
    /// A before/after diff of the affected document.
    Diff { before: String, after: String },
}

impl FixPreview {
    pub fn is_diff(&self) -> bool {
        matches!(self, FixPreview::Diff { .. })
    }
}
