//! The return-type shape rule.

use evlint_common::{Diagnostic, FixKind, diagnostic_codes};
use evlint_syntax::Declaration;
use evlint_types::{returns_void_or_unit, well_known};

use crate::{RuleContext, SignatureRule, anchors, report};

/// Handlers never return a value: anything other than `void`/`Unit` gets a
/// diagnostic carrying the return-type rewrite repair.
pub struct ReturnTypeRule;

impl ReturnTypeRule {
    fn is_handler(decl: &Declaration) -> bool {
        decl.has_annotation(well_known::EVENT_HANDLER_FQN)
            || decl.has_annotation(well_known::EXCEPTION_HANDLER_FQN)
    }
}

impl SignatureRule for ReturnTypeRule {
    fn name(&self) -> &'static str {
        "handler-return-type"
    }

    fn check(&self, decl: &Declaration, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        if decl.is_constructor() || !Self::is_handler(decl) {
            return Vec::new();
        }
        if returns_void_or_unit(decl.return_ty.as_ref()) {
            return Vec::new();
        }

        let Some(anchor) = anchors::return_type_anchor(decl) else {
            return Vec::new();
        };
        report(
            ctx,
            decl,
            anchor,
            diagnostic_codes::HANDLER_RETURN_TYPE_NOT_VOID,
            &[],
        )
        .map(|diag| diag.with_fix(FixKind::RewriteReturnType))
        .into_iter()
        .collect()
    }
}
