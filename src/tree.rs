use std::fmt;

use tracing::trace;

use crate::node::Node;

/// A multi-way prefix tree over stored strings, supporting exact membership
/// queries and retrieval of every stored string starting with a given prefix.
///
/// The cost of each operation depends only on the length of the query and
/// the size of the matched subtree, never on the total number of stored
/// strings, which makes the tree effective for spell-checking and
/// autocompletion. Each string is stored as a path of symbols from the root
/// to a node marked terminal.
#[derive(Debug, Default)]
pub struct PrefixTree {
    // The root carries no symbol and is terminal only if the empty string
    // was inserted.
    root: Node,
    // The number of distinct strings stored, not the number of nodes.
    size: usize,
}

impl PrefixTree {
    /// Creates a new, empty prefix tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of distinct strings stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if no strings are stored.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts `word` into the tree.
    ///
    /// Creates one node per trailing symbol of `word` not already on a
    /// stored path, then marks the final node terminal. Re-inserting a
    /// stored string changes nothing. The empty string is valid input and
    /// marks the root itself.
    pub fn insert(&mut self, word: &str) {
        let (_, matched) = self.deepest_match(word);

        // Walk the matched prefix again, mutably this time, then chain one
        // new node per remaining symbol.
        let mut node = &mut self.root;
        for (depth, symbol) in word.chars().enumerate() {
            node = if depth < matched {
                node.get_child_mut(symbol)
                    .expect("the walk matched a child for this symbol")
            } else {
                node.add_child(symbol, Node::new(symbol))
            };
        }

        // Size counts strings, not nodes: only a node newly marked terminal
        // represents a string the tree didn't already store.
        if node.mark_terminal() {
            self.size += 1;
        }
        trace!("insert({:?}): size now {}", word, self.size);
    }

    /// Returns `true` if `word` itself is stored in the tree.
    ///
    /// A string that only exists as an interior path of longer stored
    /// strings is not a member.
    pub fn contains(&self, word: &str) -> bool {
        let (node, matched) = self.deepest_match(word);
        node.is_terminal() && matched == word.chars().count()
    }

    /// Returns every stored string that starts with `prefix`, in ascending
    /// lexicographic order.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let (start, matched) = self.deepest_match(prefix);
        // Nothing is stored below a prefix the walk could not fully
        // consume. The empty prefix always matches the root.
        if matched < prefix.chars().count() {
            return Vec::new();
        }

        let mut completions = Vec::new();
        // Iterative depth-first traversal. Each entry carries the string
        // spelled by the path from the tree root down to its node, so
        // reconstruction is independent of the order entries are popped.
        let mut stack = vec![(start, prefix.to_owned())];
        while let Some((node, path)) = stack.pop() {
            if node.child_count() > 0 {
                for (symbol, child) in node.children() {
                    let mut branch = path.clone();
                    branch.push(symbol);
                    stack.push((child, branch));
                }
            }
            if node.is_terminal() {
                completions.push(path);
            }
        }

        // Ordering is part of the contract.
        completions.sort();
        trace!("complete({:?}): {} completion(s)", prefix, completions.len());
        completions
    }

    /// Returns every string stored in the tree, in ascending lexicographic
    /// order.
    pub fn strings(&self) -> Vec<String> {
        self.complete("")
    }

    /// Follows `query` down from the root for as long as each symbol has a
    /// matching child, returning the deepest node reached and the number of
    /// symbols matched.
    ///
    /// Every public operation starts here. The walk never allocates nodes
    /// and never mutates the tree.
    fn deepest_match(&self, query: &str) -> (&Node, usize) {
        let mut node = &self.root;
        let mut matched = 0;
        for symbol in query.chars() {
            match node.get_child(symbol) {
                Some(child) => {
                    node = child;
                    matched += 1;
                }
                None => break,
            }
        }
        (node, matched)
    }
}

impl fmt::Display for PrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrefixTree({:?})", self.strings())
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(strings: I) -> Self {
        let mut tree = Self::new();
        tree.extend(strings);
        tree
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, strings: I) {
        for string in strings {
            self.insert(string.as_ref());
        }
    }
}
