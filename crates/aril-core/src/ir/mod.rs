//! Intermediate Representation (IR) for aril
//!
//! The IR is the tree handed to the serializer: a nested structure of
//! leaves, calls and transparent groups mirroring the target's textual
//! call syntax.

pub mod node;

pub use node::IrNode;
