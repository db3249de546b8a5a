//! Unified declaration model and document edits.
//!
//! This crate is the seam between the host's syntax trees and the rule
//! engines: the host ingests each method/function declaration into a
//! `Declaration` once, choosing the capability implementation for its
//! surface syntax, and the rules and repairs read only that model.

pub mod capabilities;
pub mod decl;
pub mod document;

pub use capabilities::{SyntaxCapabilities, capabilities_for};
pub use decl::{DeclFlags, Declaration, Parameter, ReturnTypePosition, SyntaxKind};
pub use document::{DocumentId, DocumentStore, EditTransaction, Replacement, SourceDocument};
