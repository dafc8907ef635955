use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;

use crate::bknode::{BkNode, NodeId, NodeRef};
use crate::error::Result;
use crate::metric::{checked_distance, Metric};

use super::find::BkSearcher;
use super::preorder::BkPreOrder;

/// Burkhard-Keller tree over keys of type `K`, ordered by the metric `M`.
///
/// Nodes live in an arena owned by the tree; each node owns at most one child per distance. The
/// first inserted key is the root, and the shape is fixed by the metric and the insertion order.
/// Nothing is ever removed or rebalanced.
pub struct BkTree<K, M> {
    nodes: Vec<BkNode<K>>,
    max_depth: usize,
    metric: M,
}

impl<K, M> BkTree<K, M> {
    pub fn new(metric: M) -> Self {
        BkTree {
            nodes: Vec::new(),
            max_depth: 0,
            metric,
        }
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeRef::new(&self.nodes, NodeId(0)))
        }
    }

    /// Number of distinct keys in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges between the root and the deepest node.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Walk the tree, parents before children, closer children before farther ones.
    pub fn preorder(&self) -> BkPreOrder<'_, K> {
        BkPreOrder::new(self.root())
    }

    pub fn searcher(&self) -> BkSearcher<'_, K, M> {
        BkSearcher::new(self)
    }
}

impl<K, M> BkTree<K, M>
where
    K: PartialEq + Debug,
    M: Metric<K>,
{
    /// Add a key to the tree.
    ///
    /// Returns `Ok(false)` without touching the tree when an equal key sits on the path the key
    /// would be inserted along. Fails, again without touching the tree, if the metric hands back
    /// a negative distance on the way down.
    ///
    /// Example:
    ///   let mut tree = BkTree::new(StrLenMetric);
    ///
    ///   tree.insert("book")?;
    ///   tree.insert("nook")?;
    ///   tree.insert("books")?;
    pub fn insert(&mut self, key: K) -> Result<bool> {
        if self.nodes.is_empty() {
            self.nodes.push(BkNode::new(key));
            return Ok(true);
        }

        let mut cur = NodeId(0);
        let mut insert_depth = 0;
        loop {
            let node = &self.nodes[cur.0];
            if *node.key() == key {
                return Ok(false);
            }
            let dist = checked_distance(&self.metric, node.key(), &key)?;
            insert_depth += 1;

            // Descend while the slot at this distance is taken.
            match node.child_at(dist) {
                Some(child) => cur = child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(BkNode::new(key));
                    self.nodes[cur.0].set_child_node(dist, child);
                    if self.max_depth < insert_depth {
                        self.max_depth = insert_depth;
                    }
                    return Ok(true);
                }
            }
        }
    }

    /// Insert each key in turn, returning how many were new.
    ///
    /// Stops at the first error; keys inserted before it stay in the tree.
    pub fn insert_all<I>(&mut self, keys: I) -> Result<usize>
    where
        I: IntoIterator<Item = K>,
    {
        let mut added = 0;
        for key in keys {
            if self.insert(key)? {
                added += 1;
            }
        }
        Ok(added)
    }
}

impl<K, M> Debug for BkTree<K, M>
where
    K: Debug,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("BkTree")
            .field("node_count", &self.len())
            .field("max_depth", &self.max_depth)
            .field("root", &self.root())
            .finish()
    }
}

/// Trees are equal when they have the same shape and equal keys in corresponding nodes. The
/// metrics are not compared.
impl<K, M> PartialEq for BkTree<K, M>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut stack = match (self.root(), other.root()) {
            (None, None) => return true,
            (Some(a), Some(b)) => vec![(a, b)],
            _ => return false,
        };
        while let Some((a, b)) = stack.pop() {
            if a.element() != b.element() || a.child_count() != b.child_count() {
                return false;
            }
            for ((da, ca), (db, cb)) in a.children().zip(b.children()) {
                if da != db {
                    return false;
                }
                stack.push((ca, cb));
            }
        }
        true
    }
}

impl<K: Eq, M> Eq for BkTree<K, M> {}
