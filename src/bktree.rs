/***
 * let mut tree = BkTree::new(StrLenMetric);
 * tree.insert_all(vec!["book", "nook", "books"])?;
 * let matches = tree.searcher().search(&"hook", 1)?;
*/

mod bktree;
mod find;
mod preorder;

pub use bktree::BkTree;
pub use find::{BkSearcher, Match};
pub use preorder::{BkPreOrder, PreOrderEntry};
