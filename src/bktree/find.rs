use std::collections::VecDeque;
use std::fmt::Debug;

use serde_derive::Serialize;

use crate::bknode::NodeRef;
use crate::error::{BkError, Result};
use crate::metric::{checked_distance, Metric};
use crate::Dist;

use super::bktree::BkTree;

/// A key found by a search, with its distance from the query.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Match<'t, K> {
    element: &'t K,
    distance: Dist,
}

impl<'t, K> Clone for Match<'t, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'t, K> Copy for Match<'t, K> {}

impl<'t, K> Match<'t, K> {
    pub fn new(element: &'t K, distance: Dist) -> Self {
        Match { element, distance }
    }

    pub fn element(&self) -> &'t K {
        self.element
    }

    pub fn distance(&self) -> Dist {
        self.distance
    }
}

/// Range queries over a finished tree.
///
/// A searcher only reads the tree, so any number of them may share one tree across threads.
#[derive(Derivative)]
#[derivative(Debug(bound = "K: Debug"))]
pub struct BkSearcher<'t, K, M> {
    tree: &'t BkTree<K, M>,
}

impl<'t, K, M> Clone for BkSearcher<'t, K, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'t, K, M> Copy for BkSearcher<'t, K, M> {}

impl<'t, K, M> BkSearcher<'t, K, M> {
    pub fn new(tree: &'t BkTree<K, M>) -> Self {
        BkSearcher { tree }
    }

    pub fn tree(&self) -> &'t BkTree<K, M> {
        self.tree
    }
}

impl<'t, K, M> BkSearcher<'t, K, M>
where
    K: Debug,
    M: Metric<K>,
{
    /// Every key within `tolerance` of `needle`, in no particular order. Each key appears once.
    ///
    /// A negative tolerance is rejected before the tree is touched. A negative distance from the
    /// metric aborts the whole search; no partial result is returned.
    pub fn search(&self, needle: &K, tolerance: i64) -> Result<Vec<Match<'t, K>>> {
        if tolerance < 0 {
            return Err(BkError::NegativeTolerance { tolerance });
        }
        BkFind::new(self.tree.metric(), self.tree.root(), tolerance as Dist, needle).collect()
    }
}

// Breadth-first walk that only enters children whose edge distance could, by the triangle
// inequality, lead to a key within tolerance of the needle.
struct BkFind<'t, 'q, K, M> {
    metric: &'t M,
    needle: &'q K,
    tolerance: Dist,
    queue: VecDeque<NodeRef<'t, K>>,
}

impl<'t, 'q, K, M> BkFind<'t, 'q, K, M>
where
    K: Debug,
    M: Metric<K>,
{
    fn new(metric: &'t M, root: Option<NodeRef<'t, K>>, tolerance: Dist, needle: &'q K) -> Self {
        BkFind {
            metric,
            needle,
            tolerance,
            queue: root.into_iter().collect(),
        }
    }
}

impl<'t, 'q, K, M> Iterator for BkFind<'t, 'q, K, M>
where
    K: Debug,
    M: Metric<K>,
{
    type Item = Result<Match<'t, K>>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(candidate) = self.queue.pop_front() {
            let dist = match checked_distance(self.metric, candidate.element(), self.needle) {
                Ok(dist) => dist,
                Err(err) => {
                    self.queue.clear();
                    return Some(Err(err));
                }
            };

            // Enqueue the children.
            let min = dist.saturating_sub(self.tolerance);
            let max = dist.saturating_add(self.tolerance);
            self.queue
                .extend(candidate.children_between(min, max).map(|(_, child)| child));

            // And maybe yield this node.
            if dist <= self.tolerance {
                return Some(Ok(Match::new(candidate.element(), dist)));
            }
        }
        None
    }
}
