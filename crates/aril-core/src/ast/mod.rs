//! Abstract Syntax Tree (AST) definitions for aril
//!
//! This module contains the source-side node definitions the transducer
//! consumes. The tree is produced by the host-language parser, which is
//! outside this workspace; every node arrives carrying its source
//! position (line, column).

pub mod node;
pub mod operator;

pub use node::{AccessContext, Constant, Node, Param, Parameters, Span};
pub use operator::{BinaryOp, BoolOpKind, CompareOp, UnaryOpKind};
