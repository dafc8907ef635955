use std::option::Option;
use std::vec::Vec;

use crate::bknode::NodeRef;
use crate::Dist;

/// One node as seen by [`BkPreOrder`].
#[derive(Debug, PartialEq, Eq)]
pub struct PreOrderEntry<'t, K> {
    /// Edge distance from the parent; `None` for the root.
    pub dist: Option<Dist>,
    /// Edges between the root and this node.
    pub depth: usize,
    pub child_count: usize,
    pub element: &'t K,
}

#[derive(Debug)]
struct BkPreOrderEntry<'t, K> {
    dist: Option<Dist>,
    depth: usize,
    node: NodeRef<'t, K>,
}

/// Iterative pre-order walk; children are visited in increasing order of distance.
pub struct BkPreOrder<'t, K> {
    stack: Vec<BkPreOrderEntry<'t, K>>,
}

impl<'t, K> BkPreOrder<'t, K> {
    pub(crate) fn new(root: Option<NodeRef<'t, K>>) -> BkPreOrder<'t, K> {
        BkPreOrder {
            stack: root
                .into_iter()
                .map(|node| BkPreOrderEntry {
                    dist: None,
                    depth: 0,
                    node,
                })
                .collect(),
        }
    }
}

impl<'t, K> Iterator for BkPreOrder<'t, K> {
    type Item = PreOrderEntry<'t, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        let children: Vec<(Dist, NodeRef<'t, K>)> = entry.node.children().collect();
        // Pushed farthest first so the closest child is popped next.
        for &(dist, node) in children.iter().rev() {
            self.stack.push(BkPreOrderEntry {
                dist: Some(dist),
                depth: entry.depth + 1,
                node,
            });
        }
        Some(PreOrderEntry {
            dist: entry.dist,
            depth: entry.depth,
            child_count: children.len(),
            element: entry.node.element(),
        })
    }
}
