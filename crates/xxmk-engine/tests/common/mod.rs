#![allow(dead_code)]

use xxmk_engine::{Ast, MarkdownParser, NodeRef, NodeType, Position};

/// Parses `src` with every built-in matcher and checks the tree is well formed.
pub fn parse(src: &str) -> Ast {
    let _ = env_logger::builder().is_test(true).try_init();
    let ast = MarkdownParser::full().parse(src).unwrap();
    check_tree(src, &ast);
    ast
}

/// Root coverage, containment, ordering and sibling links.
pub fn check_tree(src: &str, ast: &Ast) {
    let root = ast.root();
    assert_eq!(root.start(), Position::default());
    assert_eq!(root.end(), Position::default().advanced(src));

    for node in ast.iter() {
        let mut prev: Option<NodeRef<'_>> = None;
        for child in node.children() {
            assert_eq!(child.parent().map(|p| p.id()), Some(node.id()));
            assert_eq!(child.left_sibling().map(|s| s.id()), prev.map(|p| p.id()));
            assert!(node.start() <= child.start() && child.end() <= node.end());
            if let Some(p) = prev {
                assert!(p.end() <= child.start(), "{p:?} overlaps {child:?}");
            }
            prev = Some(child);
        }
    }
}

/// Every node of the given kind name, in pre-order.
pub fn collect<'a>(ast: &'a Ast, name: &str) -> Vec<NodeRef<'a>> {
    ast.iter().filter(|n| n.kind().name() == name).collect()
}

pub fn first_child_text<'s>(node: NodeRef<'_>, src: &'s str) -> &'s str {
    node.child(0).map(|c| c.text(src)).unwrap_or_default()
}

pub fn is_leaf_text(node: NodeRef<'_>) -> bool {
    node.kind() == &NodeType::Text && node.child_count() == 0
}
