use std::fmt;

use crate::error::ParseFault;
use crate::position::Position;

use super::node_type::NodeType;

/// An owned syntax tree node, as built by matchers.
///
/// Equality is structural: kinds (with their fields) and children are
/// compared, positions are not.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeType,
    pub start: Position,
    pub end: Position,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeType, start: Position, end: Position) -> Self {
        Self {
            kind,
            start,
            end,
            children: vec![],
        }
    }

    pub fn with_children(
        kind: NodeType,
        start: Position,
        end: Position,
        children: Vec<Node>,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            children,
        }
    }

    /// A Text leaf covering `[start, end)`.
    pub fn text(start: Position, end: Position) -> Self {
        Self::new(NodeType::Text, start, end)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slices this node's source text out of `src`.
    pub fn source<'s>(&self, src: &'s str) -> &'s str {
        &src[self.start.offset..self.end.offset]
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.children == other.children
    }
}

impl Eq for Node {}

/// Index of a node inside an [`Ast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone)]
struct AstNode {
    kind: NodeType,
    start: Position,
    end: Position,
    parent: Option<NodeId>,
    left_sibling: Option<NodeId>,
    right_sibling: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A parsed document with parent and sibling links.
///
/// Nodes are stored in pre-order, so the root is always `NodeId(0)` and a
/// node's descendants follow it contiguously.
#[derive(Debug, Clone)]
pub struct Ast {
    nodes: Vec<AstNode>,
}

impl Ast {
    /// Freezes an owned tree, linking every node to its parent and
    /// siblings and checking the ordering and containment invariants.
    pub fn from_node(root: Node) -> Result<Self, ParseFault> {
        let mut nodes = Vec::new();
        flatten(root, None, None, &mut nodes);
        let ast = Self { nodes };
        ast.validate()?;
        Ok(ast)
    }

    /// Rebuilds the owned form of this tree.
    pub fn to_node(&self) -> Node {
        self.thaw(self.root_id())
    }

    fn thaw(&self, id: NodeId) -> Node {
        let n = &self.nodes[id.0];
        Node::with_children(
            n.kind.clone(),
            n.start,
            n.end,
            n.children.iter().map(|c| self.thaw(*c)).collect(),
        )
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root(&self) -> NodeRef<'_> {
        self.get(self.root_id())
    }

    /// # Panics
    /// Panics if `id` does not belong to this tree.
    pub fn get(&self, id: NodeId) -> NodeRef<'_> {
        assert!(id.0 < self.nodes.len(), "node id {} out of range", id.0);
        NodeRef { ast: self, id }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(|i| NodeRef {
            ast: self,
            id: NodeId(i),
        })
    }

    /// Calls `f` on every node, parents before children, children in order.
    pub fn pre_visit<F>(&self, mut f: F)
    where
        F: FnMut(NodeRef<'_>),
    {
        self.iter().for_each(|n| f(n));
    }

    fn validate(&self) -> Result<(), ParseFault> {
        for (i, n) in self.nodes.iter().enumerate() {
            let fault = |reason: String| ParseFault::TreeInvariant { node: i, reason };
            if n.start.offset > n.end.offset {
                return Err(fault(format!("start {} after end {}", n.start, n.end)));
            }
            let mut prev: Option<NodeId> = None;
            for (at, c) in n.children.iter().enumerate() {
                let child = &self.nodes[c.0];
                let next = n.children.get(at + 1).copied();
                if child.parent != Some(NodeId(i))
                    || child.left_sibling != prev
                    || child.right_sibling != next
                {
                    return Err(fault(format!("child {} is mislinked", c.0)));
                }
                if child.start.offset < n.start.offset || child.end.offset > n.end.offset {
                    return Err(fault(format!(
                        "child {} at {}..{} escapes parent {}..{}",
                        c.0, child.start, child.end, n.start, n.end
                    )));
                }
                if let Some(p) = prev
                    && self.nodes[p.0].end.offset > child.start.offset
                {
                    return Err(fault(format!("child {} overlaps child {}", c.0, p.0)));
                }
                prev = Some(*c);
            }
        }
        Ok(())
    }
}

fn flatten(node: Node, parent: Option<NodeId>, left: Option<NodeId>, out: &mut Vec<AstNode>) {
    let id = NodeId(out.len());
    out.push(AstNode {
        kind: node.kind,
        start: node.start,
        end: node.end,
        parent,
        left_sibling: left,
        right_sibling: None,
        children: Vec::with_capacity(node.children.len()),
    });
    let mut prev: Option<NodeId> = None;
    for child in node.children {
        let child_id = NodeId(out.len());
        flatten(child, Some(id), prev, out);
        if let Some(p) = prev {
            out[p.0].right_sibling = Some(child_id);
        }
        out[id.0].children.push(child_id);
        prev = Some(child_id);
    }
}

impl PartialEq for Ast {
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}

impl Eq for Ast {}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = vec![0usize; self.nodes.len()];
        for (i, n) in self.iter().enumerate() {
            if let Some(p) = n.parent() {
                depth[i] = depth[p.id().0] + 1;
            }
            if i > 0 {
                writeln!(f)?;
                write!(f, "{}|-", "  ".repeat(depth[i]))?;
            }
            write!(f, "{}{}", n.kind(), n.start())?;
        }
        Ok(())
    }
}

/// A borrowed handle to one node of an [`Ast`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    ast: &'a Ast,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn raw(&self) -> &'a AstNode {
        &self.ast.nodes[self.id.0]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The tree this node belongs to.
    pub fn tree(&self) -> &'a Ast {
        self.ast
    }

    pub fn kind(&self) -> &'a NodeType {
        &self.raw().kind
    }

    pub fn start(&self) -> Position {
        self.raw().start
    }

    pub fn end(&self) -> Position {
        self.raw().end
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.raw().parent.map(|id| self.ast.get(id))
    }

    pub fn left_sibling(&self) -> Option<NodeRef<'a>> {
        self.raw().left_sibling.map(|id| self.ast.get(id))
    }

    pub fn right_sibling(&self) -> Option<NodeRef<'a>> {
        self.raw().right_sibling.map(|id| self.ast.get(id))
    }

    pub fn child_count(&self) -> usize {
        self.raw().children.len()
    }

    pub fn child(&self, i: usize) -> Option<NodeRef<'a>> {
        self.raw().children.get(i).map(|id| self.ast.get(*id))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let ast = self.ast;
        self.raw().children.iter().map(move |id| ast.get(*id))
    }

    /// Slices this node's source text out of `src`.
    pub fn text<'s>(&self, src: &'s str) -> &'s str {
        &src[self.start().offset..self.end().offset]
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
            && self.child_count() == other.child_count()
            && self.children().zip(other.children()).all(|(a, b)| a == b)
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id.0)
            .field("kind", self.kind())
            .field("start", &self.start())
            .field("end", &self.end())
            .finish()
    }
}
