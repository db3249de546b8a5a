//! The event-handler shape rule.

use evlint_common::{Diagnostic, diagnostic_codes};
use evlint_syntax::Declaration;
use evlint_types::{is_event, well_known};
use tracing::debug;

use crate::{RuleContext, SignatureRule, anchors, report};

/// Validates `@EventHandler` declarations: exactly one parameter, and that
/// parameter must implement the event interface.
pub struct EventHandlerRule;

impl SignatureRule for EventHandlerRule {
    fn name(&self) -> &'static str {
        "event-handler-signature"
    }

    fn check(&self, decl: &Declaration, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        if decl.is_constructor() || !decl.has_annotation(well_known::EVENT_HANDLER_FQN) {
            return Vec::new();
        }

        if decl.params.len() != 1 {
            debug!(count = decl.params.len(), "event handler with wrong parameter count");
            // No point type-checking anything else when the count is wrong.
            let Some(anchor) = anchors::param_list_anchor(decl) else {
                return Vec::new();
            };
            return report(
                ctx,
                decl,
                anchor,
                diagnostic_codes::EVENT_HANDLER_PARAMETER_COUNT,
                &[],
            )
            .into_iter()
            .collect();
        }

        let param = &decl.params[0];
        if !is_event(&param.ty, ctx.types) {
            let Some(anchor) = anchors::param_type_anchor(decl, 0) else {
                return Vec::new();
            };
            return report(
                ctx,
                decl,
                anchor,
                diagnostic_codes::EVENT_HANDLER_PARAMETER_TYPE,
                &[well_known::EVENT_FQN],
            )
            .into_iter()
            .collect();
        }

        Vec::new()
    }
}
