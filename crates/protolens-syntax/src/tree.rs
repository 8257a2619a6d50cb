use std::fmt;
use std::ops::Index;

use serde::Serialize;
use text_size::{TextRange, TextSize};

/// Node kinds that can be stored in a [`Tree`].
pub trait TreeKind: fmt::Debug {
    fn root() -> Self;

    fn comment() -> Self;

    fn is_comment(&self) -> bool;

    fn label(&self) -> &'static str;

    /// Writes the kind's payload for the debug rendering, each field preceded
    /// by a space.
    fn fmt_payload(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: Self = Self(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    kind: K,
    range: TextRange,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl<K> Node<K> {
    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn start(&self) -> TextSize {
        self.range.start()
    }

    pub fn end(&self) -> TextSize {
        self.range.end()
    }

    /// Non-owning back reference; `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena of nodes. Ownership flows strictly from parents to children; the
/// root is always [`NodeId::ROOT`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<K> {
    nodes: Vec<Node<K>>,
}

impl<K: TreeKind> Tree<K> {
    /// Creates a tree whose root spans the whole text.
    pub fn new(text_len: TextSize) -> Self {
        let root = Node {
            kind: K::root(),
            range: TextRange::up_to(text_len),
            parent: None,
            children: Vec::new(),
        };
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> &K {
        &self.node(id).kind
    }

    pub fn range(&self, id: NodeId) -> TextRange {
        self.node(id).range
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.last().copied()
    }

    /// `id` followed by its parent chain up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), |&id| self.parent(id))
    }

    /// Pre-order traversal starting at (and including) `id`.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![id];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.children(id).iter().rev());
            Some(id)
        })
    }

    /// The smallest node whose range contains `offset`, falling back to the
    /// root when no child does.
    pub fn node_at_offset(&self, offset: TextSize) -> NodeId {
        let mut current = self.root();

        loop {
            let smallest = self
                .children(current)
                .iter()
                .copied()
                .filter(|&child| self.range(child).contains(offset))
                .min_by_key(|&child| self.range(child).len());

            match smallest {
                Some(child) => current = child,
                None => return current,
            }
        }
    }

    /// Inserts a new node into `parent`'s children at `index`.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        kind: K,
        range: TextRange,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { kind, range, parent: Some(parent), children: Vec::new() });
        self.nodes[parent.index()].children.insert(index, id);
        id
    }

    pub fn push_child(&mut self, parent: NodeId, kind: K, range: TextRange) -> NodeId {
        let index = self.children(parent).len();
        self.insert_child(parent, index, kind, range)
    }

    pub fn set_end(&mut self, id: NodeId, end: TextSize) {
        let node = &mut self.nodes[id.index()];
        debug_assert!(node.range.start() <= end);
        node.range = TextRange::new(node.range.start(), end);
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let node = self.node(id);
        write!(
            f,
            "{:indent$}{}@{}..{}",
            "",
            node.kind.label(),
            u32::from(node.start()),
            u32::from(node.end()),
            indent = depth * 2
        )?;
        node.kind.fmt_payload(f)?;
        writeln!(f)?;

        for &child in &node.children {
            self.fmt_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl<K: TreeKind> Index<NodeId> for Tree<K> {
    type Output = Node<K>;

    fn index(&self, id: NodeId) -> &Node<K> {
        self.node(id)
    }
}

/// Indented rendering of the whole tree, one node per line.
impl<K: TreeKind> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, self.root(), 0)
    }
}
