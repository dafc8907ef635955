use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;

use crate::Dist;

/// Position of a node in its tree's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// Arena slot: one key plus at most one child per distance.
///
/// Children are sparse, so they live in an ordered map rather than a vector indexed by distance.
pub(crate) struct BkNode<K> {
    key: K,
    children: BTreeMap<Dist, NodeId>,
}

impl<K> BkNode<K> {
    pub(crate) fn new(key: K) -> BkNode<K> {
        BkNode {
            key,
            children: BTreeMap::new(),
        }
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn has_child_at(&self, dist: Dist) -> bool {
        self.children.contains_key(&dist)
    }

    pub(crate) fn child_at(&self, dist: Dist) -> Option<NodeId> {
        self.children.get(&dist).copied()
    }

    pub(crate) fn set_child_node(&mut self, dist: Dist, node: NodeId) {
        assert!(!self.has_child_at(dist));
        self.children.insert(dist, node);
    }
}

/// A read-only view of one node of a [`BkTree`](crate::BkTree).
///
/// Views borrow the tree, so the tree cannot be modified while any of them is alive.
pub struct NodeRef<'t, K> {
    nodes: &'t [BkNode<K>],
    id: NodeId,
}

impl<'t, K> Clone for NodeRef<'t, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'t, K> Copy for NodeRef<'t, K> {}

impl<'t, K> NodeRef<'t, K> {
    pub(crate) fn new(nodes: &'t [BkNode<K>], id: NodeId) -> Self {
        NodeRef { nodes, id }
    }

    fn node(&self) -> &'t BkNode<K> {
        &self.nodes[self.id.0]
    }

    /// The key held by this node.
    pub fn element(&self) -> &'t K {
        self.node().key()
    }

    /// The child attached at exactly `dist` from this node, if any.
    pub fn child_at(&self, dist: Dist) -> Option<NodeRef<'t, K>> {
        self.node()
            .child_at(dist)
            .map(|id| NodeRef::new(self.nodes, id))
    }

    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    /// Children in increasing order of distance.
    pub fn children(&self) -> impl Iterator<Item = (Dist, NodeRef<'t, K>)> + 't {
        let nodes = self.nodes;
        self.node()
            .children
            .iter()
            .map(move |(&dist, &id)| (dist, NodeRef::new(nodes, id)))
    }

    /// Children whose distance lies in `min..=max`.
    pub fn children_between(
        &self,
        min: Dist,
        max: Dist,
    ) -> impl Iterator<Item = (Dist, NodeRef<'t, K>)> + 't {
        let nodes = self.nodes;
        self.node()
            .children
            .range(min..)
            .take_while(move |(dist, _)| **dist <= max)
            .map(move |(&dist, &id)| (dist, NodeRef::new(nodes, id)))
    }
}

/// Renders the node and everything below it. This recurses once per level, so a degenerate
/// (very deep) tree can exhaust the stack; it is meant for diagnostics only.
impl<'t, K> Debug for NodeRef<'t, K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_map()
            .entry(self.element(), &DebugChildren(*self))
            .finish()
    }
}

struct DebugChildren<'t, K>(NodeRef<'t, K>);

impl<'t, K: Debug> Debug for DebugChildren<'t, K> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_map().entries(self.0.children()).finish()
    }
}
