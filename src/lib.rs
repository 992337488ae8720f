//! A multi-way prefix tree (trie) for storing strings, with membership
//! queries and prefix completion whose cost depends only on the length of
//! the query and the number of matching results, never on the total number
//! of stored strings. The tree's height is bounded by the longest stored
//! string, which makes it a good fit for spell-checking and autocompletion
//! over large word lists.
//!
//! ```
//! use prefix_tree::PrefixTree;
//!
//! let mut tree: PrefixTree = ["ABC", "ABD", "XYZ"].into_iter().collect();
//! tree.insert("A");
//!
//! assert!(tree.contains("A"));
//! assert!(!tree.contains("AB"));
//! assert_eq!(tree.complete("AB"), vec!["ABC", "ABD"]);
//! assert_eq!(tree.strings(), vec!["A", "ABC", "ABD", "XYZ"]);
//! ```

pub mod node;
pub mod tree;

pub use node::Node;
pub use tree::PrefixTree;
