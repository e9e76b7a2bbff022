//! Doubly-linked node backed by an arena of handles.
//!
//! Variables:
//!   nodes : Vec<LinkNode<T>>  — slab owning every node
//!   id    : NodeId            — index into nodes, stable for the arena's life
//!
//! Equations:
//!   alloc(x):   nodes.push(unlinked node x), returns NodeId(len-1)   O(1)
//!   link(a, b): nodes[a].next = b,  nodes[b].prev = a                O(1)
//!   invariant:  a.next == Some(b)  =>  b.prev == Some(a)
//!
//! Handles instead of owning cross-references: the arena owns all nodes,
//! so chains cannot form reference cycles and dropping the arena drops
//! every chain at once.

/// Handle to a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// A value with optional forward and backward links to sibling nodes.
/// Both links are absent at construction; list containers are out of scope,
/// links are assigned through [`NodeArena::link`].
#[derive(Debug)]
pub struct LinkNode<T> {
    pub value: T,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

pub struct NodeArena<T> {
    nodes: Vec<LinkNode<T>>,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocate a new unlinked node holding `value`.
    pub fn alloc(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(LinkNode { value, next: None, prev: None });
        id
    }

    /// Link `a` forward to `b` and `b` backward to `a` in one step, so the
    /// next/prev invariant holds by construction.
    pub fn link(&mut self, a: NodeId, b: NodeId) {
        self.nodes[a.0].next = Some(b);
        self.nodes[b.0].prev = Some(a);
    }

    pub fn get(&self, id: NodeId) -> &LinkNode<T> {
        &self.nodes[id.0]
    }
    pub fn get_mut(&mut self, id: NodeId) -> &mut LinkNode<T> {
        &mut self.nodes[id.0]
    }
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next
    }
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].prev
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
