//! Source AST nodes
//!
//! `Node` is a closed sum type over every source-node kind the frontend
//! recognizes. The transducer matches over it exhaustively, so adding a
//! kind here forces a handler to exist.

use super::operator::{BinaryOp, BoolOpKind, CompareOp, UnaryOpKind};
use serde::{Deserialize, Serialize};

/// A source position as reported by the host parser
///
/// Lines are 1-based, columns 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

impl Span {
    /// Create a new span
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Named constants of the source language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constant {
    /// The null value, rendered `nil`
    Nil,
    /// Boolean true
    True,
    /// Boolean false
    False,
}

impl Constant {
    /// The target-IR spelling of this constant
    pub fn keyword(&self) -> &'static str {
        match self {
            Constant::Nil => "nil",
            Constant::True => "true",
            Constant::False => "false",
        }
    }
}

/// Whether a subscript reads or writes the subscripted value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessContext {
    /// The subscript appears in an expression
    Load,
    /// The subscript is an assignment target
    Store,
}

/// A single formal parameter
///
/// Type annotations from the source are ignored and not represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub span: Span,
    pub name: String,
}

impl Param {
    /// Create a new parameter
    pub fn new(span: Span, name: impl Into<String>) -> Self {
        Self {
            span,
            name: name.into(),
        }
    }
}

/// The formal parameter list of a function or lambda
///
/// `vararg`/`kwarg` capture variadic parameters so the transducer can
/// reject them; they are never translated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub args: Vec<Param>,
    pub vararg: Option<Param>,
    pub kwarg: Option<Param>,
}

impl Parameters {
    /// A plain positional parameter list
    pub fn positional(args: Vec<Param>) -> Self {
        Self {
            args,
            vararg: None,
            kwarg: None,
        }
    }

    /// True when the list declares a variadic parameter
    pub fn is_variadic(&self) -> bool {
        self.vararg.is_some() || self.kwarg.is_some()
    }
}

/// A source AST node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Numeric literal, kept in its exact textual form
    Num { span: Span, literal: String },

    /// String literal (unquoted content)
    Str { span: Span, value: String },

    /// Named constant (nil/true/false)
    Constant { span: Span, value: Constant },

    /// A variable reference
    Name { span: Span, id: String },

    /// Attribute access (e.g. `np.sqrt`); the receiver is discarded
    Attribute {
        span: Span,
        value: Box<Node>,
        attr: String,
    },

    /// Binary arithmetic operation
    BinOp {
        span: Span,
        left: Box<Node>,
        op: BinaryOp,
        right: Box<Node>,
    },

    /// Boolean connective over two or more operands
    BoolOp {
        span: Span,
        op: BoolOpKind,
        values: Vec<Node>,
    },

    /// Unary operation
    UnaryOp {
        span: Span,
        op: UnaryOpKind,
        operand: Box<Node>,
    },

    /// Comparison, possibly chained (`a < b < c`)
    Compare {
        span: Span,
        left: Box<Node>,
        ops: Vec<CompareOp>,
        comparators: Vec<Node>,
    },

    /// Function call
    Call {
        span: Span,
        func: Box<Node>,
        args: Vec<Node>,
    },

    /// Assignment statement
    Assign {
        span: Span,
        targets: Vec<Node>,
        value: Box<Node>,
    },

    /// Augmented assignment (`x += e`)
    AugAssign {
        span: Span,
        target: Box<Node>,
        op: BinaryOp,
        value: Box<Node>,
    },

    /// Conditional statement
    If {
        span: Span,
        test: Box<Node>,
        body: Vec<Node>,
        orelse: Vec<Node>,
    },

    /// While loop
    While {
        span: Span,
        test: Box<Node>,
        body: Vec<Node>,
    },

    /// For loop over an iteration space
    For {
        span: Span,
        target: Box<Node>,
        iter: Box<Node>,
        body: Vec<Node>,
    },

    /// Function definition
    FunctionDef {
        span: Span,
        name: String,
        params: Parameters,
        body: Vec<Node>,
    },

    /// Lambda expression
    Lambda {
        span: Span,
        params: Parameters,
        body: Box<Node>,
    },

    /// Return statement; only meaningful in tail position
    Return {
        span: Span,
        value: Option<Box<Node>>,
    },

    /// Expression statement
    Expr { span: Span, value: Box<Node> },

    /// Subscript (`a[...]`)
    Subscript {
        span: Span,
        value: Box<Node>,
        index: Box<Node>,
        ctx: AccessContext,
    },

    /// Plain index inside a subscript
    Index { span: Span, value: Box<Node> },

    /// Slice inside a subscript; absent bounds get defaults
    Slice {
        span: Span,
        lower: Option<Box<Node>>,
        upper: Option<Box<Node>>,
        step: Option<Box<Node>>,
    },

    /// Multi-dimensional slice inside a subscript
    ExtSlice { span: Span, dims: Vec<Node> },

    /// Tuple display
    Tuple { span: Span, elts: Vec<Node> },

    /// List display
    List { span: Span, elts: Vec<Node> },
}

impl Node {
    /// The source position of this node
    pub fn span(&self) -> Span {
        match self {
            Node::Num { span, .. }
            | Node::Str { span, .. }
            | Node::Constant { span, .. }
            | Node::Name { span, .. }
            | Node::Attribute { span, .. }
            | Node::BinOp { span, .. }
            | Node::BoolOp { span, .. }
            | Node::UnaryOp { span, .. }
            | Node::Compare { span, .. }
            | Node::Call { span, .. }
            | Node::Assign { span, .. }
            | Node::AugAssign { span, .. }
            | Node::If { span, .. }
            | Node::While { span, .. }
            | Node::For { span, .. }
            | Node::FunctionDef { span, .. }
            | Node::Lambda { span, .. }
            | Node::Return { span, .. }
            | Node::Expr { span, .. }
            | Node::Subscript { span, .. }
            | Node::Index { span, .. }
            | Node::Slice { span, .. }
            | Node::ExtSlice { span, .. }
            | Node::Tuple { span, .. }
            | Node::List { span, .. } => *span,
        }
    }

    /// Create a numeric literal node
    pub fn num(span: Span, literal: impl Into<String>) -> Self {
        Node::Num {
            span,
            literal: literal.into(),
        }
    }

    /// Create a string literal node
    pub fn str(span: Span, value: impl Into<String>) -> Self {
        Node::Str {
            span,
            value: value.into(),
        }
    }

    /// Create a named-constant node
    pub fn constant(span: Span, value: Constant) -> Self {
        Node::Constant { span, value }
    }

    /// Create a name node
    pub fn name(span: Span, id: impl Into<String>) -> Self {
        Node::Name {
            span,
            id: id.into(),
        }
    }

    /// Create an attribute-access node
    pub fn attribute(span: Span, value: Node, attr: impl Into<String>) -> Self {
        Node::Attribute {
            span,
            value: Box::new(value),
            attr: attr.into(),
        }
    }

    /// Create a binary operation node
    pub fn binop(span: Span, left: Node, op: BinaryOp, right: Node) -> Self {
        Node::BinOp {
            span,
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Create a boolean connective node
    pub fn boolop(span: Span, op: BoolOpKind, values: Vec<Node>) -> Self {
        Node::BoolOp { span, op, values }
    }

    /// Create a unary operation node
    pub fn unaryop(span: Span, op: UnaryOpKind, operand: Node) -> Self {
        Node::UnaryOp {
            span,
            op,
            operand: Box::new(operand),
        }
    }

    /// Create a comparison node
    pub fn compare(span: Span, left: Node, ops: Vec<CompareOp>, comparators: Vec<Node>) -> Self {
        Node::Compare {
            span,
            left: Box::new(left),
            ops,
            comparators,
        }
    }

    /// Create a call node
    pub fn call(span: Span, func: Node, args: Vec<Node>) -> Self {
        Node::Call {
            span,
            func: Box::new(func),
            args,
        }
    }

    /// Create an assignment node
    pub fn assign(span: Span, targets: Vec<Node>, value: Node) -> Self {
        Node::Assign {
            span,
            targets,
            value: Box::new(value),
        }
    }

    /// Create an augmented-assignment node
    pub fn aug_assign(span: Span, target: Node, op: BinaryOp, value: Node) -> Self {
        Node::AugAssign {
            span,
            target: Box::new(target),
            op,
            value: Box::new(value),
        }
    }

    /// Create a conditional node
    pub fn if_stmt(span: Span, test: Node, body: Vec<Node>, orelse: Vec<Node>) -> Self {
        Node::If {
            span,
            test: Box::new(test),
            body,
            orelse,
        }
    }

    /// Create a while-loop node
    pub fn while_loop(span: Span, test: Node, body: Vec<Node>) -> Self {
        Node::While {
            span,
            test: Box::new(test),
            body,
        }
    }

    /// Create a for-loop node
    pub fn for_loop(span: Span, target: Node, iter: Node, body: Vec<Node>) -> Self {
        Node::For {
            span,
            target: Box::new(target),
            iter: Box::new(iter),
            body,
        }
    }

    /// Create a function-definition node
    pub fn function_def(
        span: Span,
        name: impl Into<String>,
        params: Parameters,
        body: Vec<Node>,
    ) -> Self {
        Node::FunctionDef {
            span,
            name: name.into(),
            params,
            body,
        }
    }

    /// Create a lambda node
    pub fn lambda(span: Span, params: Parameters, body: Node) -> Self {
        Node::Lambda {
            span,
            params,
            body: Box::new(body),
        }
    }

    /// Create a return node
    pub fn return_stmt(span: Span, value: Option<Node>) -> Self {
        Node::Return {
            span,
            value: value.map(Box::new),
        }
    }

    /// Create an expression-statement node
    pub fn expr(span: Span, value: Node) -> Self {
        Node::Expr {
            span,
            value: Box::new(value),
        }
    }

    /// Create a subscript node
    pub fn subscript(span: Span, value: Node, index: Node, ctx: AccessContext) -> Self {
        Node::Subscript {
            span,
            value: Box::new(value),
            index: Box::new(index),
            ctx,
        }
    }

    /// Create a plain-index node
    pub fn index(span: Span, value: Node) -> Self {
        Node::Index {
            span,
            value: Box::new(value),
        }
    }

    /// Create a slice node
    pub fn slice(
        span: Span,
        lower: Option<Node>,
        upper: Option<Node>,
        step: Option<Node>,
    ) -> Self {
        Node::Slice {
            span,
            lower: lower.map(Box::new),
            upper: upper.map(Box::new),
            step: step.map(Box::new),
        }
    }

    /// Create a multi-dimensional slice node
    pub fn ext_slice(span: Span, dims: Vec<Node>) -> Self {
        Node::ExtSlice { span, dims }
    }

    /// Create a tuple node
    pub fn tuple(span: Span, elts: Vec<Node>) -> Self {
        Node::Tuple { span, elts }
    }

    /// Create a list node
    pub fn list(span: Span, elts: Vec<Node>) -> Self {
        Node::List { span, elts }
    }
}
