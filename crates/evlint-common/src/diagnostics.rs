//! Diagnostic model and message catalog.
//!
//! Every diagnostic the rules can produce is addressed by a stable numeric
//! code. A code carries the host's localization-bundle key alongside an
//! English template; the host looks up its own translation by key, while
//! `format_message` fills the `{0}`-style placeholders of the template.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::text_range::TextRange;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

/// A catalog entry: numeric code, severity, bundle key, English template.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub key: &'static str,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const EVENT_HANDLER_PARAMETER_COUNT: u32 = 1001;
    pub const EVENT_HANDLER_PARAMETER_TYPE: u32 = 1002;
    pub const EXCEPTION_HANDLER_INVALID_SHAPE: u32 = 1003;
    pub const EXCEPTION_HANDLER_SINGLE_PARAMETER_TYPE: u32 = 1004;
    pub const EXCEPTION_HANDLER_REVERSED_PARAMETERS: u32 = 1005;
    pub const EXCEPTION_HANDLER_FIRST_PARAMETER_TYPE: u32 = 1006;
    pub const EXCEPTION_HANDLER_SECOND_PARAMETER_TYPE: u32 = 1007;
    pub const HANDLER_RETURN_TYPE_NOT_VOID: u32 = 1008;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const EVENT_HANDLER_PARAMETER_COUNT: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EVENT_HANDLER_PARAMETER_COUNT,
        category: DiagnosticCategory::Error,
        key: "inspection.eventHandler.mustHaveExactlyOneParameter",
        message: "An '@EventHandler' method must have exactly one parameter.",
    };
    pub const EVENT_HANDLER_PARAMETER_TYPE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EVENT_HANDLER_PARAMETER_TYPE,
        category: DiagnosticCategory::Error,
        key: "inspection.eventHandler.parameterMustImplementEvent",
        message: "Event handler parameter must implement '{0}'.",
    };
    pub const EXCEPTION_HANDLER_INVALID_SHAPE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXCEPTION_HANDLER_INVALID_SHAPE,
        category: DiagnosticCategory::Error,
        key: "inspection.exceptionHandler.invalidShape",
        message: "An '@ExceptionHandler' method must have one or two parameters.",
    };
    pub const EXCEPTION_HANDLER_SINGLE_PARAMETER_TYPE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXCEPTION_HANDLER_SINGLE_PARAMETER_TYPE,
        category: DiagnosticCategory::Error,
        key: "inspection.exceptionHandler.singleParamMustBeEventOrThrowable",
        message: "A single exception handler parameter must implement '{0}' or '{1}'.",
    };
    pub const EXCEPTION_HANDLER_REVERSED_PARAMETERS: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXCEPTION_HANDLER_REVERSED_PARAMETERS,
        category: DiagnosticCategory::Error,
        key: "inspection.exceptionHandler.reversedOrder",
        message: "Exception handler parameters are reversed: expected ('{0}', '{1}').",
    };
    pub const EXCEPTION_HANDLER_FIRST_PARAMETER_TYPE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXCEPTION_HANDLER_FIRST_PARAMETER_TYPE,
        category: DiagnosticCategory::Error,
        key: "inspection.exceptionHandler.firstParamMustBeEvent",
        message: "The first exception handler parameter must implement '{0}'.",
    };
    pub const EXCEPTION_HANDLER_SECOND_PARAMETER_TYPE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXCEPTION_HANDLER_SECOND_PARAMETER_TYPE,
        category: DiagnosticCategory::Error,
        key: "inspection.exceptionHandler.secondParamMustBeThrowable",
        message: "The second exception handler parameter must be a throwable type.",
    };
    pub const HANDLER_RETURN_TYPE_NOT_VOID: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::HANDLER_RETURN_TYPE_NOT_VOID,
        category: DiagnosticCategory::Error,
        key: "inspection.returnType.mustBeVoidOrUnit",
        message: "A handler method must return 'void' or 'Unit'.",
    };
}

/// The full catalog, in code order.
pub static MESSAGES: &[DiagnosticMessage] = &[
    diagnostic_messages::EVENT_HANDLER_PARAMETER_COUNT,
    diagnostic_messages::EVENT_HANDLER_PARAMETER_TYPE,
    diagnostic_messages::EXCEPTION_HANDLER_INVALID_SHAPE,
    diagnostic_messages::EXCEPTION_HANDLER_SINGLE_PARAMETER_TYPE,
    diagnostic_messages::EXCEPTION_HANDLER_REVERSED_PARAMETERS,
    diagnostic_messages::EXCEPTION_HANDLER_FIRST_PARAMETER_TYPE,
    diagnostic_messages::EXCEPTION_HANDLER_SECOND_PARAMETER_TYPE,
    diagnostic_messages::HANDLER_RETURN_TYPE_NOT_VOID,
];

static MESSAGES_BY_CODE: Lazy<FxHashMap<u32, &'static DiagnosticMessage>> =
    Lazy::new(|| MESSAGES.iter().map(|m| (m.code, m)).collect());

pub fn get_message_template(code: u32) -> Option<&'static str> {
    MESSAGES_BY_CODE.get(&code).map(|m| m.message)
}

/// The host's localization-bundle key for a code.
pub fn message_key(code: u32) -> Option<&'static str> {
    MESSAGES_BY_CODE.get(&code).map(|m| m.key)
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// The repair a diagnostic offers, if any. Diagnostics reference repairs by
/// kind; the host wires the kind to the matching fix in `evlint-fixes`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum FixKind {
    SwapParameters,
    RewriteReturnType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<FixKind>,
}

impl Diagnostic {
    /// An error diagnostic anchored at `range`. The anchor must have width;
    /// rules guarantee this by selecting anchors through the cascade.
    pub fn error(
        file: impl Into<String>,
        range: TextRange,
        code: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            file: file.into(),
            start: range.start,
            length: range.len(),
            message_text: message.into(),
            fix: None,
        }
    }

    pub fn with_fix(mut self, fix: FixKind) -> Self {
        self.fix = Some(fix);
        self
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(self.start, self.start + self.length)
    }
}
