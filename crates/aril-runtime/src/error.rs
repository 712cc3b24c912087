//! Runtime error types

use thiserror::Error;

/// Runtime error
///
/// `Engine` carries engine failures through unchanged; translation
/// failures keep their own type and message.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Translation failed before anything reached the engine
    #[error(transparent)]
    Compile(#[from] aril_compiler::CompileError),

    /// The engine reported a failure during compile or evaluate
    #[error("Engine error: {0}")]
    Engine(String),

    /// The shared engine-state lock was poisoned by a panicking holder
    #[error("Engine state lock poisoned")]
    Poisoned,
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
