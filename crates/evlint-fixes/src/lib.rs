//! Repair actions for evlint signature diagnostics.
//!
//! Both repairs operate on the declaration's document through an
//! [`EditTransaction`](evlint_syntax::EditTransaction): they either apply as
//! one atomic, undoable edit or do nothing at all. A repair invoked on a
//! syntax it does not understand, or with preconditions violated, mutates
//! nothing.

mod preview;
mod rewrite_return;
mod swap_params;

pub use preview::FixPreview;
pub use rewrite_return::RewriteReturnTypeFix;
pub use swap_params::SwapParametersFix;
