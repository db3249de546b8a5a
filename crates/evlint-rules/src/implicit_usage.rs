//! Implicit-usage suppression.
//!
//! Handler methods are invoked reflectively by the dispatcher, so the host's
//! dead-code analysis must treat annotated declarations and their parameters
//! as always used.

use evlint_syntax::Declaration;
use evlint_types::well_known;

pub enum UsageElement<'a> {
    Method(&'a Declaration),
    /// A parameter of a declaration, by index.
    Parameter(&'a Declaration, usize),
}

fn is_handler(decl: &Declaration) -> bool {
    decl.has_annotation(well_known::EVENT_HANDLER_FQN)
        || decl.has_annotation(well_known::EXCEPTION_HANDLER_FQN)
}

pub fn is_implicit_usage(element: &UsageElement<'_>) -> bool {
    match element {
        UsageElement::Method(decl) => is_handler(decl),
        UsageElement::Parameter(decl, index) => *index < decl.params.len() && is_handler(decl),
    }
}

pub fn is_implicit_read(_element: &UsageElement<'_>) -> bool {
    false
}

pub fn is_implicit_write(_element: &UsageElement<'_>) -> bool {
    false
}
