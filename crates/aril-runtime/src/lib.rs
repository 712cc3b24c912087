//! aril runtime - adapter to the external execution engine
//!
//! The engine that compiles and evaluates target-IR text lives outside
//! this workspace. This crate owns the boundary: an opaque
//! `EngineState` handle, a process-wide create-if-absent factory for
//! it, and the `submit`/`invoke` forwarding calls.

pub mod adapter;
pub mod engine;
pub mod error;

// Re-export main types
pub use adapter::{invoke, submit, CompiledFunction};
pub use engine::{shared_state, EngineState, ExecutionEngine, SharedEngineState};
pub use error::{Result, RuntimeError};
