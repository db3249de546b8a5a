//! The exception-handler shape rule.
//!
//! Valid shapes: a single parameter implementing either the event interface
//! or a throwable type, or the pair (event, throwable) in that order. The
//! reversed pair gets one diagnostic with the parameter-swap repair; a pair
//! where either slot is simply wrong gets an independent diagnostic per
//! wrong slot, with no repair.

use evlint_common::{Diagnostic, FixKind, diagnostic_codes};
use evlint_syntax::Declaration;
use evlint_types::{is_event, is_throwable, well_known};
use tracing::debug;

use crate::{RuleContext, SignatureRule, anchors, report};

pub struct ExceptionHandlerRule;

impl SignatureRule for ExceptionHandlerRule {
    fn name(&self) -> &'static str {
        "exception-handler-signature"
    }

    fn check(&self, decl: &Declaration, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        if decl.is_constructor() || !decl.has_annotation(well_known::EXCEPTION_HANDLER_FQN) {
            return Vec::new();
        }

        let count = decl.params.len();
        if count != 1 && count != 2 {
            debug!(count, "exception handler with invalid shape");
            let Some(anchor) = anchors::param_list_anchor(decl) else {
                return Vec::new();
            };
            return report(
                ctx,
                decl,
                anchor,
                diagnostic_codes::EXCEPTION_HANDLER_INVALID_SHAPE,
                &[],
            )
            .into_iter()
            .collect();
        }

        if count == 1 {
            let ty = &decl.params[0].ty;
            if is_event(ty, ctx.types) || is_throwable(ty, ctx.types) {
                return Vec::new();
            }
            let Some(anchor) = anchors::param_type_anchor(decl, 0) else {
                return Vec::new();
            };
            return report(
                ctx,
                decl,
                anchor,
                diagnostic_codes::EXCEPTION_HANDLER_SINGLE_PARAMETER_TYPE,
                &[well_known::EVENT_FQN, well_known::JAVA_THROWABLE_FQN],
            )
            .into_iter()
            .collect();
        }

        let p0_is_event = is_event(&decl.params[0].ty, ctx.types);
        let p1_is_event = is_event(&decl.params[1].ty, ctx.types);
        let p0_is_throwable = is_throwable(&decl.params[0].ty, ctx.types);
        let p1_is_throwable = is_throwable(&decl.params[1].ty, ctx.types);

        if p0_is_event && p1_is_throwable {
            return Vec::new();
        }

        if p0_is_throwable && p1_is_event {
            debug!("exception handler parameters are reversed");
            let Some(anchor) = anchors::param_list_anchor(decl) else {
                return Vec::new();
            };
            return report(
                ctx,
                decl,
                anchor,
                diagnostic_codes::EXCEPTION_HANDLER_REVERSED_PARAMETERS,
                &[well_known::EVENT_FQN, well_known::JAVA_THROWABLE_FQN],
            )
            .map(|diag| diag.with_fix(FixKind::SwapParameters))
            .into_iter()
            .collect();
        }

        // Each wrong slot reports on its own; both may fire together.
        let mut diagnostics = Vec::new();

        if !p0_is_event {
            if let Some(anchor) = anchors::param_type_anchor(decl, 0) {
                diagnostics.extend(report(
                    ctx,
                    decl,
                    anchor,
                    diagnostic_codes::EXCEPTION_HANDLER_FIRST_PARAMETER_TYPE,
                    &[well_known::EVENT_FQN],
                ));
            }
        }

        if !p1_is_throwable {
            if let Some(anchor) = anchors::param_type_anchor(decl, 1) {
                diagnostics.extend(report(
                    ctx,
                    decl,
                    anchor,
                    diagnostic_codes::EXCEPTION_HANDLER_SECOND_PARAMETER_TYPE,
                    &[],
                ));
            }
        }

        diagnostics
    }
}
