//! Burkhard-Keller trees: range search over any metric space.
//!
//! Build a [`BkTree`] by inserting keys one at a time, then ask a [`BkSearcher`] for every key
//! within some distance of a query. The triangle inequality lets the search skip whole subtrees
//! instead of comparing the query against every key.

mod bknode;
mod bktree;
mod error;
pub mod input;
pub mod metric;

pub use bknode::NodeRef;
pub use bktree::{BkPreOrder, BkSearcher, BkTree, Match, PreOrderEntry};
pub use error::{BkError, Result};
pub use metric::hamming::HammingMetric;
pub use metric::levenshtein::LevenshteinMetric;
pub use metric::strlen::StrLenMetric;
pub use metric::Metric;

/// Distance between two keys, as stored on tree edges and reported in matches.
pub type Dist = u64;

#[macro_use]
extern crate derivative;

#[cfg(test)]
mod tests {
    use crate::{BkError, BkTree, StrLenMetric};

    #[test]
    fn can_build_and_search_words() {
        let mut tree = BkTree::new(StrLenMetric);
        tree.insert_all(vec![
            "book", "books", "nook", "nooks", "b", "boo", "bo", "bookies",
        ])
        .unwrap();
        let mut matches: Vec<(&str, u64)> = tree
            .searcher()
            .search(&"hook", 1)
            .unwrap()
            .into_iter()
            .map(|m| (*m.element(), m.distance()))
            .collect();
        matches.sort();
        assert_eq!(
            vec![
                ("boo", 1),
                ("book", 0),
                ("books", 1),
                ("nook", 0),
                ("nooks", 1)
            ],
            matches
        );
    }

    #[test]
    fn duplicates_do_not_grow_the_tree() {
        let mut tree = BkTree::new(StrLenMetric);
        assert_eq!(Ok(2), tree.insert_all(vec!["book", "nook", "book", "nook"]));
        assert_eq!(2, tree.len());
    }

    #[test]
    fn only_key_matches_itself_at_zero() {
        let mut tree = BkTree::new(StrLenMetric);
        tree.insert("book").unwrap();
        let matches = tree.searcher().search(&"book", 0).unwrap();
        assert_eq!(1, matches.len());
        assert_eq!("book", *matches[0].element());
        assert_eq!(0, matches[0].distance());
    }

    #[test]
    fn negative_metric_is_caught_on_both_paths() {
        let mut tree: BkTree<&str, _> = BkTree::new(|_: &&str, _: &&str| -1i64);
        tree.insert("first").unwrap();
        assert!(matches!(
            tree.insert("second"),
            Err(BkError::IllegalMetric { .. })
        ));
        assert!(matches!(
            tree.searcher().search(&"query", 0),
            Err(BkError::IllegalMetric { .. })
        ));
    }
}
