//! Source documents and atomic edit transactions.
//!
//! Repairs never touch a document directly; they build an `EditTransaction`,
//! which validates every replacement against the current text and then
//! applies all of them or none of them. A dry-run `preview` produces the
//! would-be text without mutating anything.

use evlint_common::TextRange;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DocumentId(pub u32);

#[derive(Clone, Debug)]
pub struct SourceDocument {
    pub file_name: String,
    text: String,
}

impl SourceDocument {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Read a range's text. Returns `""` for out-of-bounds ranges.
    pub fn range_text(&self, range: TextRange) -> &str {
        range.text(&self.text)
    }

    fn replace(&mut self, range: TextRange, new_text: &str) {
        self.text
            .replace_range(range.start as usize..range.end as usize, new_text);
    }
}

/// Owns the documents a validation pass works against.
#[derive(Default, Debug)]
pub struct DocumentStore {
    docs: Vec<SourceDocument>,
}

impl DocumentStore {
    pub fn new() -> Self {
        DocumentStore::default()
    }

    pub fn add(&mut self, doc: SourceDocument) -> DocumentId {
        let id = DocumentId(self.docs.len() as u32);
        self.docs.push(doc);
        id
    }

    pub fn get(&self, id: DocumentId) -> Option<&SourceDocument> {
        self.docs.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: DocumentId) -> Option<&mut SourceDocument> {
        self.docs.get_mut(id.0 as usize)
    }
}

/// A single text replacement. An empty range with non-empty text is an
/// insertion; a non-empty range with empty text is a deletion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub range: TextRange,
    pub new_text: String,
}

/// An all-or-nothing edit against one document.
///
/// Replacements must lie inside the document, start on character boundaries,
/// and be ordered and non-overlapping. A transaction that fails validation
/// leaves the document byte-identical.
#[derive(Default, Debug)]
pub struct EditTransaction {
    edits: Vec<Replacement>,
}

impl EditTransaction {
    pub fn new() -> Self {
        EditTransaction::default()
    }

    pub fn replace(&mut self, range: TextRange, new_text: impl Into<String>) {
        self.edits.push(Replacement {
            range,
            new_text: new_text.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn edits(&self) -> &[Replacement] {
        &self.edits
    }

    fn validate(&self, doc: &SourceDocument) -> bool {
        let text = doc.text();
        let mut previous_end = 0u32;
        for edit in &self.edits {
            let TextRange { start, end } = edit.range;
            if start < previous_end || start > end {
                return false;
            }
            if end as usize > text.len() {
                return false;
            }
            if !text.is_char_boundary(start as usize) || !text.is_char_boundary(end as usize) {
                return false;
            }
            previous_end = end;
        }
        true
    }

    /// Apply every replacement, or none. Returns whether the document changed.
    pub fn commit(self, doc: &mut SourceDocument) -> bool {
        if self.edits.is_empty() || !self.validate(doc) {
            return false;
        }
        // Applied back to front so earlier offsets stay valid.
        for edit in self.edits.iter().rev() {
            doc.replace(edit.range, &edit.new_text);
        }
        true
    }

    /// The document text as it would look after `commit`, without mutating.
    /// `None` when validation fails.
    pub fn preview(&self, doc: &SourceDocument) -> Option<String> {
        if self.edits.is_empty() || !self.validate(doc) {
            return None;
        }
        let mut text = doc.text().to_string();
        for edit in self.edits.iter().rev() {
            text.replace_range(edit.range.start as usize..edit.range.end as usize, &edit.new_text);
        }
        Some(text)
    }
}
