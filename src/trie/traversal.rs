use std::iter::FusedIterator;

use super::node::{TrieNode, Variant};

const TRAVERSAL_STACK_CAPACITY: usize = 64;

/// A node waiting to be visited, the edge leading to it, and the byte length
/// of the path above that edge.
type Pending<'a, V> = (&'a TrieNode<V>, Option<char>, usize);

/// Depth-first walk over the words below a node.
/// Uses an explicit stack and a single path buffer, so long words cost neither
/// recursion nor a path copy per level; each call to `Store::words` or
/// `Store::prefix` starts a fresh, independent walk.
#[derive(Debug)]
pub struct Words<'a, V: Variant> {
    stack: Vec<Pending<'a, V>>,
    path: String,
}

impl<'a, V: Variant> Words<'a, V> {
    pub(crate) fn from_node(node: &'a TrieNode<V>, path: String) -> Self {
        let mut stack = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);
        stack.push((node, None, path.len()));
        Self { stack, path }
    }

    pub(crate) fn empty() -> Self {
        Self {
            stack: Vec::new(),
            path: String::new(),
        }
    }
}

impl<V: Variant> Iterator for Words<'_, V> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((node, edge, depth)) = self.stack.pop() {
            self.path.truncate(depth);
            if let Some(ch) = edge {
                self.path.push(ch);
            }

            let here = self.path.len();
            // reversed so the smallest code point is popped first
            for (ch, child) in node.sorted_children().into_iter().rev() {
                self.stack.push((child, Some(ch), here));
            }

            if node.is_end() {
                return Some(self.path.clone());
            }
        }
        None
    }
}

impl<V: Variant> FusedIterator for Words<'_, V> {}

#[cfg(test)]
mod tests {
    use crate::trie::Trie;

    #[test]
    fn yields_words_in_code_point_order() {
        let trie = Trie::from_words(["b", "ab", "a", "abc", "é"]);
        let words: Vec<String> = trie.words().collect();
        assert_eq!(words, vec!["a", "ab", "abc", "b", "é"]);
    }

    #[test]
    fn empty_walk_yields_nothing() {
        let trie = Trie::from_words(["word"]);
        assert_eq!(trie.prefix("x").next(), None);
    }

    #[test]
    fn walks_are_independent() {
        let trie = Trie::from_words(["one", "two"]);
        let mut first = trie.words();
        assert_eq!(first.next().as_deref(), Some("one"));
        assert_eq!(trie.words().count(), 2);
        assert_eq!(first.next().as_deref(), Some("two"));
    }

    #[test]
    fn backtracks_path_across_siblings() {
        let trie = Trie::from_words(["ab", "abcd", "ax", "é日", "éz"]);
        let words: Vec<String> = trie.prefix("").collect();
        assert_eq!(words, vec!["ab", "abcd", "ax", "é日", "éz"]);
        assert_eq!(trie.prefix("é").collect::<Vec<_>>(), vec!["é日", "éz"]);
    }

    #[test]
    fn walks_long_words() {
        let word = "q".repeat(100_000);
        let trie = Trie::from_words([word.as_str(), "q"]);
        let words: Vec<String> = trie.words().collect();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1], word);
    }
}
