//! IR tree to target-IR text
//!
//! A pure structural fold: calls render as `head(arg, arg, ...)`,
//! transparent groups as bare comma lists, leaves as themselves.
//! Deterministic; child order is never changed.

use aril_core::ir::IrNode;

/// Render an IR tree to target-IR text
pub fn serialize(node: &IrNode) -> String {
    match node {
        IrNode::Leaf(text) => text.clone(),
        IrNode::Call { head, args } => {
            let args: Vec<String> = args.iter().map(serialize).collect();
            format!("{}({})", head, args.join(", "))
        }
        IrNode::Group(items) => {
            let items: Vec<String> = items.iter().map(serialize).collect();
            items.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_renders_as_itself() {
        assert_eq!(serialize(&IrNode::leaf("x$2$11")), "x$2$11");
    }

    #[test]
    fn test_call_renders_head_and_args() {
        let node = IrNode::call("__add", vec![IrNode::leaf("a"), IrNode::leaf("1")]);
        assert_eq!(serialize(&node), "__add(a, 1)");
    }

    #[test]
    fn test_empty_call() {
        assert_eq!(serialize(&IrNode::block(vec![])), "block()");
    }

    #[test]
    fn test_group_is_transparent() {
        let node = IrNode::call(
            "define$1$0",
            vec![
                IrNode::leaf("f$1$0"),
                IrNode::group(vec![IrNode::leaf("x"), IrNode::leaf("y")]),
                IrNode::block(vec![IrNode::leaf("x$2$4")]),
            ],
        );
        // the parameter group flattens into the surrounding comma list
        assert_eq!(serialize(&node), "define$1$0(f$1$0, x, y, block(x$2$4))");
    }

    #[test]
    fn test_nested_groups_flatten() {
        let node = IrNode::group(vec![
            IrNode::leaf("a"),
            IrNode::group(vec![IrNode::leaf("b"), IrNode::leaf("c")]),
        ]);
        assert_eq!(serialize(&node), "a, b, c");
    }

    #[test]
    fn test_deeply_nested_calls() {
        let node = IrNode::call(
            "__and",
            vec![
                IrNode::call("__lt", vec![IrNode::leaf("b"), IrNode::leaf("c")]),
                IrNode::call("__lt", vec![IrNode::leaf("a"), IrNode::leaf("b")]),
            ],
        );
        assert_eq!(serialize(&node), "__and(__lt(b, c), __lt(a, b))");
    }
}
