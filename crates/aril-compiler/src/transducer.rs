//! The rule dispatcher and per-kind transformation rules
//!
//! `Transducer::transduce` matches exhaustively over the source node
//! kinds, so a new or renamed kind fails to compile instead of failing
//! at runtime. The transducer owns the unit's symbol table and mutates
//! it while recursing; everything else is a pure tree fold.

use crate::error::{CompileError, Result};
use crate::symbols::{base_name, tag, SymbolTable};
use aril_core::ast::{AccessContext, Node, Parameters};
use aril_core::ir::IrNode;

/// Canonical primitive names for identifiers the target spells differently
///
/// Primarily maps numeric-library method names onto target primitives,
/// plus the host's print function.
fn primitive_name(name: &str) -> &str {
    match name {
        "det" => "determinant",
        "diagonal" => "diag",
        "print" => "cout",
        "sqrt" => "square_root",
        other => other,
    }
}

/// AST-to-IR transducer for one translation unit
pub struct Transducer {
    symbols: SymbolTable,
}

impl Transducer {
    /// Create a transducer with an empty symbol table
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
        }
    }

    /// The unit's symbol table
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Apply the rule registered for this node's kind
    pub fn transduce(&mut self, node: &Node) -> Result<IrNode> {
        match node {
            Node::Num { literal, .. } => Ok(IrNode::leaf(literal.clone())),

            Node::Str { value, .. } => Ok(IrNode::leaf(format!("\"{value}\""))),

            Node::Constant { span, value } => Ok(IrNode::leaf(tag(value.keyword(), *span))),

            Node::Name { span, id } => Ok(IrNode::leaf(tag(primitive_name(id), *span))),

            // The receiver only names a namespace the target does not
            // have; it is dropped and the attribute stands alone.
            Node::Attribute { attr, .. } => Ok(IrNode::leaf(primitive_name(attr).to_string())),

            Node::BinOp {
                left, op, right, ..
            } => {
                let left = self.transduce(left)?;
                let right = self.transduce(right)?;
                Ok(IrNode::call(op.token(), vec![left, right]))
            }

            Node::BoolOp { op, values, .. } => {
                let values = self.transduce_all(values)?;
                Ok(IrNode::call(op.token(), values))
            }

            Node::UnaryOp { span, op, operand } => {
                let token = op
                    .token()
                    .ok_or_else(|| CompileError::unsupported("unary plus", *span))?;
                let operand = self.transduce(operand)?;
                Ok(IrNode::call(token, vec![operand]))
            }

            Node::Compare {
                span,
                left,
                ops,
                comparators,
            } => self.compare(*span, left, ops, comparators),

            Node::Call { func, args, .. } => {
                let head = match self.transduce(func)? {
                    IrNode::Leaf(text) => text,
                    _ => {
                        return Err(CompileError::unsupported(
                            "calling a computed expression",
                            func.span(),
                        ))
                    }
                };
                let args = self.transduce_all(args)?;
                Ok(IrNode::call(head, args))
            }

            Node::Assign {
                span,
                targets,
                value,
            } => self.assign(*span, targets, value),

            Node::AugAssign {
                span,
                target,
                op,
                value,
            } => {
                let head = tag("store", *span);
                let target = self.transduce(target)?;
                let value = self.transduce(value)?;
                let combined = IrNode::call(op.token(), vec![target.clone(), value]);
                Ok(IrNode::call(head, vec![target, combined]))
            }

            Node::If {
                span,
                test,
                body,
                orelse,
            } => {
                let head = tag("if", *span);
                let test = self.transduce(test)?;
                let body = self.block(body)?;
                let orelse = self.block(orelse)?;
                Ok(IrNode::call(head, vec![test, body, orelse]))
            }

            Node::While {
                span, test, body, ..
            } => {
                let head = tag("while", *span);
                let test = IrNode::block(vec![self.transduce(test)?]);
                let body = self.block(body)?;
                Ok(IrNode::call(head, vec![test, body]))
            }

            Node::For {
                span,
                target,
                iter,
                body,
            } => self.for_loop(*span, target, iter, body),

            Node::FunctionDef {
                span,
                name,
                params,
                body,
            } => {
                let args = self.parameters(params)?;
                let head = tag("define", *span);
                let symbol = IrNode::leaf(tag(name, *span));
                let body = self.block(body)?;
                if args.is_empty() {
                    Ok(IrNode::call(head, vec![symbol, body]))
                } else {
                    Ok(IrNode::call(head, vec![symbol, IrNode::group(args), body]))
                }
            }

            Node::Lambda { span, params, body } => {
                let args = self.parameters(params)?;
                let head = tag("lambda", *span);
                let body = IrNode::block(vec![self.transduce(body)?]);
                if args.is_empty() {
                    Ok(IrNode::call(head, vec![body]))
                } else {
                    Ok(IrNode::call(head, vec![IrNode::group(args), body]))
                }
            }

            // Only a trailing return is meaningful: its value becomes
            // the final expression of the enclosing block.
            Node::Return { span, value } => match value {
                Some(value) => self.transduce(value),
                None => Err(CompileError::unsupported("return without a value", *span)),
            },

            Node::Expr { value, .. } => self.transduce(value),

            Node::Subscript {
                span,
                value,
                index,
                ctx,
            } => {
                let (base, mut dims) = self.flatten_subscript(value)?;
                dims.push(self.transduce(index)?);
                match ctx {
                    AccessContext::Load => Ok(IrNode::call(
                        tag("slice", *span),
                        vec![base, IrNode::group(dims)],
                    )),
                    AccessContext::Store => {
                        Ok(IrNode::group(vec![base, IrNode::group(dims)]))
                    }
                }
            }

            Node::Index { value, .. } => self.transduce(value),

            Node::Slice {
                lower, upper, step, ..
            } => {
                let lower = self.transduce_or(lower.as_deref(), "0")?;
                let upper = self.transduce_or(upper.as_deref(), "nil")?;
                let step = self.transduce_or(step.as_deref(), "1")?;
                Ok(IrNode::call("make_list", vec![lower, upper, step]))
            }

            Node::ExtSlice { dims, .. } => Ok(IrNode::group(self.transduce_all(dims)?)),

            Node::Tuple { elts, .. } => Ok(IrNode::group(self.transduce_all(elts)?)),

            Node::List { span, elts } => {
                let elements = self.transduce_all(elts)?;
                Ok(IrNode::call(tag("make_list", *span), elements))
            }
        }
    }

    /// Transduce a statement list into a `block(...)` form
    fn block(&mut self, stmts: &[Node]) -> Result<IrNode> {
        Ok(IrNode::block(self.transduce_all(stmts)?))
    }

    fn transduce_all(&mut self, nodes: &[Node]) -> Result<Vec<IrNode>> {
        nodes.iter().map(|n| self.transduce(n)).collect()
    }

    fn transduce_or(&mut self, node: Option<&Node>, default: &str) -> Result<IrNode> {
        match node {
            Some(node) => self.transduce(node),
            None => Ok(IrNode::leaf(default)),
        }
    }

    /// Validate a parameter list and register its names as defined
    ///
    /// Registration happens before the body is walked, so the first
    /// assignment to a parameter is a store, never a define.
    fn parameters(&mut self, params: &Parameters) -> Result<Vec<IrNode>> {
        if let Some(p) = params.vararg.as_ref().or(params.kwarg.as_ref()) {
            return Err(CompileError::unsupported("variadic parameters", p.span));
        }
        Ok(params
            .args
            .iter()
            .map(|p| {
                self.symbols.define(&p.name);
                IrNode::leaf(p.name.clone())
            })
            .collect())
    }

    /// Canonicalize a comparison, chained or not
    ///
    /// A chain `a < b < c` becomes nested conjunctions built right to
    /// left: `__and(__lt(b, c), __lt(a, b))`. A single comparison stays
    /// a bare binary call.
    fn compare(
        &mut self,
        span: aril_core::ast::Span,
        left: &Node,
        ops: &[aril_core::ast::CompareOp],
        comparators: &[Node],
    ) -> Result<IrNode> {
        if ops.is_empty() || ops.len() != comparators.len() {
            return Err(CompileError::unsupported("malformed comparison", span));
        }
        for op in ops {
            if op.token().is_none() {
                return Err(CompileError::unsupported(
                    format!("`{}` comparison", op.keyword()),
                    span,
                ));
            }
        }

        let mut operands = Vec::with_capacity(comparators.len() + 1);
        operands.push(self.transduce(left)?);
        for comparator in comparators {
            operands.push(self.transduce(comparator)?);
        }

        let mut pairs = Vec::with_capacity(ops.len());
        for (i, op) in ops.iter().enumerate() {
            // token presence checked above
            let token = op
                .token()
                .ok_or_else(|| CompileError::unsupported("malformed comparison", span))?;
            pairs.push(IrNode::call(
                token,
                vec![operands[i].clone(), operands[i + 1].clone()],
            ));
        }

        let mut rest = pairs.into_iter().rev();
        let first = match rest.next() {
            Some(pair) => pair,
            None => return Err(CompileError::unsupported("malformed comparison", span)),
        };
        Ok(rest.fold(first, |acc, pair| IrNode::call("__and", vec![acc, pair])))
    }

    /// Transduce an assignment, deciding define vs store for the target
    fn assign(
        &mut self,
        span: aril_core::ast::Span,
        targets: &[Node],
        value: &Node,
    ) -> Result<IrNode> {
        let target = match targets {
            [single] => single,
            [] => return Err(CompileError::unsupported("assignment without a target", span)),
            _ => return Err(CompileError::unsupported("chained assignment", span)),
        };
        if matches!(target, Node::Tuple { .. }) {
            return Err(CompileError::unsupported(
                "tuple-target assignment",
                target.span(),
            ));
        }

        let target_ir = self.transduce(target)?;
        let op = match &target_ir {
            // A plain name: first binding defines, every later one stores.
            IrNode::Leaf(symbol) => {
                let base = base_name(symbol).to_string();
                if self.symbols.is_defined(&base) {
                    tag("store", target.span())
                } else {
                    self.symbols.define(&base);
                    tag("define", target.span())
                }
            }
            // An indexed write never introduces a binding.
            _ => tag("store", target.span()),
        };

        let value = self.transduce(value)?;
        Ok(IrNode::call(op, vec![target_ir, value]))
    }

    /// Desugar a for loop into a map / parallel_map application
    fn for_loop(
        &mut self,
        span: aril_core::ast::Span,
        target: &Node,
        iter: &Node,
        body: &[Node],
    ) -> Result<IrNode> {
        let target_ir = self.transduce(target)?;
        let iter_ir = self.transduce(iter)?;

        // The iteration space's head token selects the mapping variant.
        let (iter_head_base, map_name) = match &iter_ir {
            IrNode::Call { head, .. } => {
                let base = base_name(head).to_string();
                let map_name = match base.as_str() {
                    "make_list" | "range" => "map",
                    "prange" => "parallel_map",
                    other => {
                        return Err(CompileError::unsupported(
                            format!("iteration space `{other}`"),
                            iter.span(),
                        ))
                    }
                };
                (base, map_name)
            }
            _ => {
                return Err(CompileError::unsupported(
                    "iteration over a non-range expression",
                    iter.span(),
                ))
            }
        };

        // The engine only knows ordinary ranges; the parallel-range
        // token survives solely in the chosen mapping variant.
        let iter_ir = match iter_ir {
            IrNode::Call { head, args } if iter_head_base == "prange" => IrNode::Call {
                head: head.replacen("prange", "range", 1),
                args,
            },
            other => other,
        };

        let body = self.block(body)?;
        let lambda = IrNode::call("lambda", vec![target_ir, body]);
        Ok(IrNode::call(tag(map_name, span), vec![lambda, iter_ir]))
    }

    /// Flatten a chain of subscripts into a base value plus one dim list
    fn flatten_subscript(&mut self, node: &Node) -> Result<(IrNode, Vec<IrNode>)> {
        match node {
            Node::Subscript { value, index, .. } => {
                let (base, mut dims) = self.flatten_subscript(value)?;
                dims.push(self.transduce(index)?);
                Ok((base, dims))
            }
            other => Ok((self.transduce(other)?, Vec::new())),
        }
    }
}

impl Default for Transducer {
    fn default() -> Self {
        Self::new()
    }
}
