//! Fully-qualified names of the annotation contract and platform types.
//!
//! These must match the event library's published API exactly; the rules
//! compare against them byte for byte.

pub const EVENT_HANDLER_FQN: &str = "com.smushytaco.event_library.api.EventHandler";
pub const EXCEPTION_HANDLER_FQN: &str = "com.smushytaco.event_library.api.ExceptionHandler";
pub const EVENT_FQN: &str = "com.smushytaco.event_library.api.Event";

/// The two spellings of the root throwable type; treated as equivalent targets.
pub const JAVA_THROWABLE_FQN: &str = "java.lang.Throwable";
pub const KOTLIN_THROWABLE_FQN: &str = "kotlin.Throwable";

pub const OBJECT_FQN: &str = "java.lang.Object";

/// The two void-equivalent return-type spellings.
pub const VOID: &str = "void";
pub const KOTLIN_UNIT_FQN: &str = "kotlin.Unit";
