//! Anchor selection.
//!
//! A diagnostic attaches to the most specific non-empty range available:
//! the parameter's explicit type annotation, then the parameter construct,
//! then the parameter list, then the declaration name, and finally the
//! declaration itself. A zero-width candidate is never used; if nothing in
//! the cascade has width, there is no anchor and the caller drops the
//! diagnostic.

use evlint_common::TextRange;
use evlint_syntax::Declaration;
use tracing::trace;

fn non_empty(range: Option<TextRange>) -> Option<TextRange> {
    range.filter(|r| !r.is_empty())
}

/// Anchor for "this parameter's type is wrong" diagnostics.
pub fn param_type_anchor(decl: &Declaration, index: usize) -> Option<TextRange> {
    let caps = decl.capabilities();
    non_empty(caps.param_type_anchor(decl, index))
        .or_else(|| non_empty(caps.param_anchor(decl, index)))
        .or_else(|| {
            trace!("parameter {index} has no usable range, anchoring at the list");
            param_list_anchor(decl)
        })
}

/// Anchor for parameter-list-level diagnostics.
pub fn param_list_anchor(decl: &Declaration) -> Option<TextRange> {
    let caps = decl.capabilities();
    non_empty(caps.param_list_anchor(decl))
        .or_else(|| non_empty(decl.name_range))
        .or_else(|| non_empty(Some(decl.range)))
}

/// Anchor for return-type diagnostics: the explicit return-type reference
/// when the syntax exposes a non-empty one, else the declaration name, else
/// the declaration.
pub fn return_type_anchor(decl: &Declaration) -> Option<TextRange> {
    non_empty(decl.capabilities().return_type_anchor(decl))
        .or_else(|| non_empty(decl.name_range))
        .or_else(|| non_empty(Some(decl.range)))
}
