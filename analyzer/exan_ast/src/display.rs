//! Text rendering for expression trees.

use std::fmt;

use crate::ast::ExprNode;

impl fmt::Display for ExprNode {
    /// Displays the canonical infix form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_infix())
    }
}

/// Render the tree as a text diagram, one node per line.
///
/// The right subtree is drawn above its parent and the left subtree
/// below, with `┌──`/`└──` connectors and `│` continuation lines:
///
/// ```text
/// │   ┌── b
/// └── +
///     └── a
/// ```
pub fn render_diagram(root: &ExprNode) -> String {
    let mut out = String::new();
    draw(root, "", true, &mut out);
    out
}

fn draw(node: &ExprNode, prefix: &str, is_tail: bool, out: &mut String) {
    if let ExprNode::Binary(binary) = node {
        let above = format!("{prefix}{}", if is_tail { "│   " } else { "    " });
        draw(&binary.right, &above, false, out);
    }

    out.push_str(prefix);
    out.push_str(if is_tail { "└── " } else { "┌── " });
    out.push(node.label());
    out.push('\n');

    if let ExprNode::Binary(binary) = node {
        let below = format!("{prefix}{}", if is_tail { "    " } else { "│   " });
        draw(&binary.left, &below, true, out);
    }
}
