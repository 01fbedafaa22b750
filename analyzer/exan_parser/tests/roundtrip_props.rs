//! Property tests for the conversion/tree round trips.

use exan_ast::ExprNode;
use exan_lexer::OpKind;
use proptest::prelude::*;

fn operand() -> impl Strategy<Value = char> {
    prop_oneof![
        proptest::char::range('a', 'z'),
        proptest::char::range('A', 'Z'),
        proptest::char::range('0', '9'),
    ]
}

fn op_kind() -> impl Strategy<Value = OpKind> {
    prop_oneof![
        Just(OpKind::Plus),
        Just(OpKind::Minus),
        Just(OpKind::Star),
        Just(OpKind::Slash),
        Just(OpKind::Caret),
    ]
}

fn expr_tree() -> impl Strategy<Value = ExprNode> {
    let leaf = operand().prop_map(ExprNode::operand);
    leaf.prop_recursive(6, 48, 2, |inner| {
        (op_kind(), inner.clone(), inner)
            .prop_map(|(op, left, right)| ExprNode::binary(op, left, right))
    })
}

proptest! {
    /// A postfix rendering analyzed back into a tree post-orders to the
    /// same sequence.
    #[test]
    fn postfix_round_trips_exactly(tree in expr_tree()) {
        let postfix = tree.to_postfix();
        let analysis = exan_parser::analyze(&postfix).expect("valid postfix");
        prop_assert_eq!(analysis.root.to_postfix(), postfix);
    }

    /// A prefix rendering converted to postfix and rebuilt pre-orders to
    /// the same sequence.
    #[test]
    fn prefix_round_trips_exactly(tree in expr_tree()) {
        let prefix = tree.to_prefix();
        let analysis = exan_parser::analyze(&prefix).expect("valid prefix");
        prop_assert_eq!(analysis.root.to_prefix(), prefix);
    }

    /// The canonical fully parenthesized infix form rebuilds the exact
    /// same tree.
    #[test]
    fn canonical_infix_rebuilds_the_same_tree(tree in expr_tree()) {
        let infix = tree.to_infix();
        let analysis = exan_parser::analyze(&infix).expect("valid infix");
        prop_assert_eq!(analysis.root, tree);
    }

    /// Round trips preserve the structural invariant: internal nodes
    /// always carry two children, leaves none.
    #[test]
    fn rebuilt_trees_keep_the_shape_invariant(tree in expr_tree()) {
        fn check(node: &ExprNode) -> bool {
            match node {
                ExprNode::Operand(_) => true,
                ExprNode::Binary(b) => check(&b.left) && check(&b.right),
            }
        }
        let analysis = exan_parser::analyze(&tree.to_postfix()).expect("valid postfix");
        prop_assert!(check(&analysis.root));
    }
}
