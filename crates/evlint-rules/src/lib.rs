//! Signature rules for the event-dispatch annotation contract.
//!
//! Each rule is an independent per-declaration pass with no state across
//! declarations: the host feeds every ingested declaration to every rule and
//! reports whatever diagnostics come back. Rules locate their anchors through
//! the cascade in [`anchors`]; a violation with no valid anchor is silently
//! dropped rather than reported at a bogus location.

pub mod anchors;
pub mod implicit_usage;

mod event_handler;
mod exception_handler;
mod return_type;

pub use event_handler::EventHandlerRule;
pub use exception_handler::ExceptionHandlerRule;
pub use return_type::ReturnTypeRule;

use evlint_common::{Diagnostic, TextRange, format_message, get_message_template};
use evlint_syntax::{Declaration, DocumentStore};
use evlint_types::TypeIndex;

/// Read-only context a rule evaluates against.
pub struct RuleContext<'a> {
    pub types: &'a TypeIndex,
    pub docs: &'a DocumentStore,
}

impl<'a> RuleContext<'a> {
    pub fn new(types: &'a TypeIndex, docs: &'a DocumentStore) -> Self {
        Self { types, docs }
    }

    pub fn file_name(&self, decl: &Declaration) -> Option<&str> {
        self.docs.get(decl.doc).map(|doc| doc.file_name.as_str())
    }
}

/// A per-declaration signature check the host plugs into its diagnostic pass.
pub trait SignatureRule {
    fn name(&self) -> &'static str;

    fn check(&self, decl: &Declaration, ctx: &RuleContext<'_>) -> Vec<Diagnostic>;
}

/// The full rule set, in the order the host registers them.
pub fn default_rules() -> Vec<Box<dyn SignatureRule>> {
    vec![
        Box::new(EventHandlerRule),
        Box::new(ExceptionHandlerRule),
        Box::new(ReturnTypeRule),
    ]
}

/// Run every rule against one declaration.
pub fn check_declaration(decl: &Declaration, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for rule in default_rules() {
        diagnostics.extend(rule.check(decl, ctx));
    }
    diagnostics
}

/// Build an error diagnostic for `decl` at `anchor`, or nothing when the
/// declaration's document or the code's template is unknown.
fn report(
    ctx: &RuleContext<'_>,
    decl: &Declaration,
    anchor: TextRange,
    code: u32,
    args: &[&str],
) -> Option<Diagnostic> {
    let file = ctx.file_name(decl)?;
    let template = get_message_template(code)?;
    Some(Diagnostic::error(
        file,
        anchor,
        code,
        format_message(template, args),
    ))
}
