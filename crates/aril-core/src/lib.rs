//! aril core - shared types for the aril array-language frontend
//!
//! This crate provides the fundamental types used across the aril workspace:
//! - Source AST definitions (the tree handed to us by the host parser)
//! - IR tree definitions (the tree we hand to the serializer)
//! - Value types crossing the engine boundary
//! - Error types

pub mod ast;
pub mod error;
pub mod ir;
pub mod value;

// Re-export commonly used types
pub use error::CoreError;
pub use ir::IrNode;
pub use value::Value;
