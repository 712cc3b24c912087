//! Compiler error types

use aril_core::ast::Span;
use thiserror::Error;

/// Compiler error
///
/// Every failure during transduction is a source-program error: the
/// construct exists in the host language but has no target-IR form.
/// An error aborts the whole unit; no partial IR or text survives.
#[derive(Error, Debug)]
pub enum CompileError {
    /// A source construct the target IR cannot express
    #[error("Unsupported syntax: {0}")]
    UnsupportedSyntax(String),
}

impl CompileError {
    /// Build an `UnsupportedSyntax` error naming the construct and its position
    pub fn unsupported(construct: impl Into<String>, span: Span) -> Self {
        CompileError::UnsupportedSyntax(format!(
            "{} (line {}, column {})",
            construct.into(),
            span.line,
            span.column
        ))
    }
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
