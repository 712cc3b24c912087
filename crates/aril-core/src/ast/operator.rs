//! Operator tokens for aril source expressions
//!
//! Each supported token maps to a fixed primitive name in the target IR.
//! Tokens that the target has no primitive for (`in`, `is`, unary plus)
//! still exist here so the transducer can reject them by name.

use serde::{Deserialize, Serialize};

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// Division (/)
    Div,
    /// Exponentiation (**)
    Pow,
}

impl BinaryOp {
    /// The primitive name this operator lowers to
    pub fn token(&self) -> &'static str {
        match self {
            BinaryOp::Add => "__add",
            BinaryOp::Sub => "__sub",
            BinaryOp::Mul => "__mul",
            BinaryOp::Div => "__div",
            BinaryOp::Pow => "power",
        }
    }
}

/// Boolean connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoolOpKind {
    /// Logical AND
    And,
    /// Logical OR
    Or,
}

impl BoolOpKind {
    /// The primitive name this connective lowers to
    pub fn token(&self) -> &'static str {
        match self {
            BoolOpKind::And => "__and",
            BoolOpKind::Or => "__or",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOpKind {
    /// Unary plus (+x) - no target primitive, always rejected
    UAdd,
    /// Unary minus (-x)
    USub,
    /// Logical NOT
    Not,
}

impl UnaryOpKind {
    /// The primitive name this operator lowers to, if one exists
    pub fn token(&self) -> Option<&'static str> {
        match self {
            UnaryOpKind::UAdd => None,
            UnaryOpKind::USub => Some("__minus"),
            UnaryOpKind::Not => Some("__not"),
        }
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    /// Equal (==)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Le,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Ge,
    /// Membership (in) - no target primitive, always rejected
    In,
    /// Negated membership (not in) - always rejected
    NotIn,
    /// Identity (is) - always rejected
    Is,
    /// Negated identity (is not) - always rejected
    IsNot,
}

impl CompareOp {
    /// The primitive name this comparison lowers to, if one exists
    pub fn token(&self) -> Option<&'static str> {
        match self {
            CompareOp::Eq => Some("__eq"),
            CompareOp::Ne => Some("__ne"),
            CompareOp::Lt => Some("__lt"),
            CompareOp::Le => Some("__le"),
            CompareOp::Gt => Some("__gt"),
            CompareOp::Ge => Some("__ge"),
            CompareOp::In | CompareOp::NotIn | CompareOp::Is | CompareOp::IsNot => None,
        }
    }

    /// Source-level spelling, used in diagnostics
    pub fn keyword(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::In => "in",
            CompareOp::NotIn => "not in",
            CompareOp::Is => "is",
            CompareOp::IsNot => "is not",
        }
    }
}
