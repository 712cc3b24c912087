//! Chained comparisons keep their meaning after canonicalization
//!
//! A chain over numeric literals is transduced, then the produced IR
//! tree is evaluated with a minimal interpreter for the comparison and
//! conjunction primitives and checked against evaluating the chain
//! directly.

use aril_compiler::Transducer;
use aril_core::ast::{CompareOp, Node, Span};
use aril_core::ir::IrNode;

fn sp(column: u32) -> Span {
    Span::new(1, column)
}

/// Build `v0 op0 v1 op1 v2 ...` over numeric literals
fn chain(values: &[f64], ops: &[CompareOp]) -> Node {
    assert_eq!(values.len(), ops.len() + 1);
    let mut nums = values
        .iter()
        .enumerate()
        .map(|(i, v)| Node::num(sp(i as u32 * 4), format!("{v}")));
    let left = nums.next().expect("at least one operand");
    Node::compare(sp(0), left, ops.to_vec(), nums.collect())
}

fn apply(op: CompareOp, a: f64, b: f64) -> bool {
    match op {
        CompareOp::Eq => a == b,
        CompareOp::Ne => a != b,
        CompareOp::Lt => a < b,
        CompareOp::Le => a <= b,
        CompareOp::Gt => a > b,
        CompareOp::Ge => a >= b,
        _ => panic!("not a numeric comparison"),
    }
}

/// Reference semantics: every adjacent pair must hold
fn eval_chain(values: &[f64], ops: &[CompareOp]) -> bool {
    ops.iter()
        .enumerate()
        .all(|(i, op)| apply(*op, values[i], values[i + 1]))
}

/// Evaluate the canonicalized IR over numeric leaves
fn eval_ir(node: &IrNode) -> bool {
    fn number(node: &IrNode) -> f64 {
        match node {
            IrNode::Leaf(text) => text.parse().expect("numeric leaf"),
            _ => panic!("expected a numeric leaf"),
        }
    }

    match node {
        IrNode::Call { head, args } => match head.as_str() {
            "__and" => args.iter().all(eval_ir),
            "__eq" => number(&args[0]) == number(&args[1]),
            "__ne" => number(&args[0]) != number(&args[1]),
            "__lt" => number(&args[0]) < number(&args[1]),
            "__le" => number(&args[0]) <= number(&args[1]),
            "__gt" => number(&args[0]) > number(&args[1]),
            "__ge" => number(&args[0]) >= number(&args[1]),
            other => panic!("unexpected head `{other}`"),
        },
        _ => panic!("expected a call"),
    }
}

fn count_heads(node: &IrNode, target: &str) -> usize {
    match node {
        IrNode::Call { head, args } => {
            let own = usize::from(head == target);
            own + args.iter().map(|a| count_heads(a, target)).sum::<usize>()
        }
        IrNode::Group(items) => items.iter().map(|i| count_heads(i, target)).sum(),
        IrNode::Leaf(_) => 0,
    }
}

#[test]
fn test_two_op_chain_matches_direct_evaluation() {
    let cases: &[&[f64]] = &[&[1.0, 2.0, 3.0], &[2.0, 2.0, 1.0], &[3.0, 1.0, 2.0]];
    for values in cases {
        let ops = [CompareOp::Lt, CompareOp::Lt];
        let node = chain(values, &ops);
        let ir = Transducer::new().transduce(&node).unwrap();

        assert_eq!(eval_ir(&ir), eval_chain(values, &ops), "values {values:?}");
    }
}

#[test]
fn test_mixed_op_chain_matches_direct_evaluation() {
    let ops = [CompareOp::Le, CompareOp::Lt, CompareOp::Ne];
    let cases: &[&[f64]] = &[
        &[1.0, 1.0, 2.0, 3.0],
        &[1.0, 1.0, 2.0, 2.0],
        &[1.0, 0.0, 2.0, 3.0],
        &[5.0, 5.0, 6.0, 0.0],
    ];
    for values in cases {
        let node = chain(values, &ops);
        let ir = Transducer::new().transduce(&node).unwrap();

        assert_eq!(eval_ir(&ir), eval_chain(values, &ops), "values {values:?}");
    }
}

#[test]
fn test_chain_shape_n_pairs_n_minus_one_conjunctions() {
    for n in 2..=5usize {
        let values: Vec<f64> = (0..=n).map(|i| i as f64).collect();
        let ops = vec![CompareOp::Lt; n];
        let node = chain(&values, &ops);
        let ir = Transducer::new().transduce(&node).unwrap();

        assert_eq!(count_heads(&ir, "__lt"), n);
        assert_eq!(count_heads(&ir, "__and"), n - 1);
    }
}
