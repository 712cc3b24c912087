//! aril compiler - source AST to target-IR transduction
//!
//! This crate turns a source function's AST into the textual,
//! symbolically-annotated IR the execution engine consumes. The
//! pipeline is a single synchronous pass: dispatch per node kind,
//! track first-binding vs rebinding through a flat symbol table,
//! build the IR tree, then serialize it.

pub mod error;
pub mod pretty;
pub mod serializer;
pub mod symbols;
pub mod transducer;
pub mod unit;

// Re-export main types
pub use error::{CompileError, Result};
pub use symbols::SymbolTable;
pub use transducer::Transducer;
pub use unit::{TranslationUnit, UnitOptions};
