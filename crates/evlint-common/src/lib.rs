//! Common types for the evlint signature-validation engine.
//!
//! This crate provides the foundational types shared by every evlint crate:
//! - Source ranges (`TextRange`)
//! - The diagnostic model (`Diagnostic`, `DiagnosticCategory`, `FixKind`)
//! - Diagnostic codes and the localizable message catalog

pub mod diagnostics;
pub mod text_range;

pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, FixKind, diagnostic_codes,
    diagnostic_messages, format_message, get_message_template, message_key,
};
pub use text_range::TextRange;
