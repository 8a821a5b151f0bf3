use super::tree::{Ast, NodeId, NodeRef};

/// A movable position in an [`Ast`] for sibling-oriented walks.
///
/// Every `goto_*` method returns `false` and leaves the cursor unchanged when
/// the move is not possible.
#[derive(Clone)]
pub struct TreeCursor<'a> {
    ast: &'a Ast,
    node: NodeId,
}

impl<'a> TreeCursor<'a> {
    pub fn new(node: NodeRef<'a>) -> Self {
        Self {
            ast: node.tree(),
            node: node.id(),
        }
    }

    pub fn at_root(ast: &'a Ast) -> Self {
        Self {
            ast,
            node: ast.root_id(),
        }
    }

    pub fn node(&self) -> NodeRef<'a> {
        self.ast.get(self.node)
    }

    /// Index of the current node among its parent's children.
    pub fn index_in_parent(&self) -> Option<usize> {
        let parent = self.node().parent()?;
        parent.children().position(|c| c.id() == self.node)
    }

    fn go(&mut self, to: Option<NodeRef<'a>>) -> bool {
        match to {
            Some(n) => {
                self.node = n.id();
                true
            }
            None => false,
        }
    }

    pub fn goto_next_sibling(&mut self) -> bool {
        let next = self.node().right_sibling();
        self.go(next)
    }

    pub fn goto_prev_sibling(&mut self) -> bool {
        let prev = self.node().left_sibling();
        self.go(prev)
    }

    pub fn goto_first_child(&mut self) -> bool {
        let first = self.node().child(0);
        self.go(first)
    }

    pub fn goto_parent(&mut self) -> bool {
        let parent = self.node().parent();
        self.go(parent)
    }

    /// Moves right to the first sibling whose type name is `name`, looking
    /// only at siblings strictly before `stop` (or to the end when `stop` is
    /// `None`). The current node itself is not considered.
    pub fn goto_sibling_of_kind(&mut self, name: &str, stop: Option<NodeId>) -> bool {
        let mut next = self.node().right_sibling();
        while let Some(n) = next {
            if Some(n.id()) == stop {
                return false;
            }
            if n.kind().name() == name {
                self.node = n.id();
                return true;
            }
            next = n.right_sibling();
        }
        false
    }
}
