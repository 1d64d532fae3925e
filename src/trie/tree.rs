use smallvec::SmallVec;
use std::fmt::Debug;
use std::sync::Arc;

use super::node::{Counted, Plain, Tagged, TrieNode, Variant};
use super::traversal::Words;
use crate::pattern::{CompiledPattern, PatternResult};

pub type Trie = Store<Plain>;
pub type CountTrie = Store<Counted>;
pub type IdTrie<I> = Store<Tagged<I>>;

type PathChars = SmallVec<[char; 32]>;

/// A persistent trie version.
///
/// Inserting returns a new version. Only the nodes along the inserted word are
/// copied; every other subtree is shared with the previous version through `Arc`,
/// so cloning a `Store` or keeping old versions around is cheap and readers of
/// one version never observe later inserts.
#[derive(Debug, Clone)]
pub struct Store<V: Variant> {
    root: Arc<TrieNode<V>>,
    len: usize,
}

impl<V: Variant> Default for Store<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> Store<V> {
    pub fn new() -> Self {
        Self {
            root: Arc::new(TrieNode::default()),
            len: 0,
        }
    }

    /// Number of distinct words stored in this version.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root(&self) -> &TrieNode<V> {
        &self.root
    }

    /// True when both versions are backed by the very same root node.
    pub fn same_version(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    pub fn contains(&self, word: &str) -> bool {
        tracing::event!(tracing::Level::TRACE, operation = "contains", word = %word);
        self.root.descend(word).is_some_and(TrieNode::is_end)
    }

    /// Every stored word, in ascending code-point order.
    #[tracing::instrument(level = "trace", skip(self), fields(len = self.len as u64))]
    pub fn words(&self) -> Words<'_, V> {
        Words::from_node(&self.root, String::new())
    }

    /// Stored words starting with `prefix`; empty when the prefix is not a path.
    #[tracing::instrument(level = "trace", skip(self, prefix), fields(prefix = %prefix))]
    pub fn prefix(&self, prefix: &str) -> Words<'_, V> {
        match self.root.descend(prefix) {
            Some(node) => Words::from_node(node, prefix.to_string()),
            None => Words::empty(),
        }
    }

    /// Parses `pattern` and returns every stored word it matches.
    pub fn pattern(&self, pattern: &str) -> PatternResult<Vec<String>> {
        let compiled = CompiledPattern::compile(pattern)?;
        Ok(compiled.matches(self))
    }

    pub(crate) fn with_mark(&self, word: &str, mark: V::Mark) -> Self {
        tracing::event!(tracing::Level::TRACE, operation = "insert", word = %word);
        let chars: PathChars = word.chars().collect();
        let (root, fresh) = insert_path(&self.root, &chars, mark);

        Self {
            root: Arc::new(root),
            len: if fresh { self.len + 1 } else { self.len },
        }
    }
}

impl<V: Variant<Mark = ()>> Store<V> {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new().insert_all(words)
    }

    pub fn insert(&self, word: &str) -> Self {
        self.with_mark(word, ())
    }

    pub fn insert_all<I, S>(&self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .fold(self.clone(), |acc, word| acc.insert(word.as_ref()))
    }
}

impl<V: Variant<Mark = ()>, S: AsRef<str>> FromIterator<S> for Store<V> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_words(iter)
    }
}

impl Store<Counted> {
    /// Number of stored words starting with `prefix`; 0 when unreachable.
    pub fn prefix_count(&self, prefix: &str) -> usize {
        tracing::event!(tracing::Level::TRACE, operation = "prefix_count", prefix = %prefix);
        self.root
            .descend(prefix)
            .map_or(0, |node| node.annotation().words())
    }
}

impl<I: Clone + Debug> Store<Tagged<I>> {
    /// Stores `word` with `id`, replacing the id of an already stored word.
    pub fn insert_with_id(&self, word: &str, id: I) -> Self {
        self.with_mark(word, id)
    }

    pub fn insert_all_with_id<W, S>(&self, words: W, id: I) -> Self
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().fold(self.clone(), |acc, word| {
            acc.insert_with_id(word.as_ref(), id.clone())
        })
    }

    pub fn lookup(&self, word: &str) -> Option<&I> {
        tracing::event!(tracing::Level::TRACE, operation = "lookup", word = %word);
        self.root.descend(word).and_then(TrieNode::mark)
    }
}

/// Copies `root` and the nodes below it along `word`, sharing all other children.
/// Returns the copy and whether a new word was stored.
///
/// The existing nodes along `word` are collected first; the copies are then
/// rebuilt from the end of the word back up to the root.
fn insert_path<V: Variant>(
    root: &TrieNode<V>,
    word: &[char],
    mark: V::Mark,
) -> (TrieNode<V>, bool) {
    // shorter than `word` + 1 when the word leaves the existing trie
    let mut existing: Vec<&TrieNode<V>> = Vec::with_capacity(word.len() + 1);
    existing.push(root);
    for &ch in word {
        match existing.last().and_then(|node| node.child(ch)) {
            Some(child) => existing.push(child),
            None => break,
        }
    }

    let copy_at = |depth: usize| -> TrieNode<V> {
        existing
            .get(depth)
            .map(|node| TrieNode::clone(node))
            .unwrap_or_default()
    };

    let mut current = copy_at(word.len());
    let fresh = current.mark.replace(mark).is_none();

    // counts only grow for new words so duplicates keep the subtree invariant
    if fresh {
        current.annotation.record_word();
    }

    for (depth, &ch) in word.iter().enumerate().rev() {
        let mut parent = copy_at(depth);
        parent.children.insert(ch, Arc::new(current));
        if fresh {
            parent.annotation.record_word();
        }
        current = parent;
    }

    (current, fresh)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_arc<V: Variant>(store: &Store<V>, ch: char) -> Arc<TrieNode<V>> {
        store
            .root
            .children
            .get(&ch)
            .cloned()
            .expect("child should exist")
    }

    #[test]
    fn insert_shares_untouched_subtrees() {
        let before = Trie::from_words(["apple", "banana"]);
        let after = before.insert("apricot");

        assert!(Arc::ptr_eq(&child_arc(&before, 'b'), &child_arc(&after, 'b')));
        assert!(!Arc::ptr_eq(&child_arc(&before, 'a'), &child_arc(&after, 'a')));
        assert!(!before.contains("apricot"));
        assert!(after.contains("apricot"));
    }

    #[test]
    fn counts_hold_subtree_invariant() {
        fn check(node: &TrieNode<Counted>) -> usize {
            let below: usize = node.children.values().map(|child| check(child)).sum();
            let expected = below + usize::from(node.is_end());
            assert_eq!(node.annotation().words(), expected);
            expected
        }

        let trie = CountTrie::from_words(["a", "ab", "abc", "abd", "b", "ab"]);
        assert_eq!(check(trie.root()), 5);
    }

    #[test]
    fn duplicate_insert_keeps_len() {
        let trie = Trie::from_words(["same", "same", "same"]);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn long_word_insert_counts_every_node() {
        let word = "b".repeat(100_000);
        let trie = CountTrie::new().insert("a").insert(&word).insert(&word[..50_000]);

        assert_eq!(trie.len(), 3);
        assert_eq!(trie.prefix_count(""), 3);
        assert_eq!(trie.prefix_count("b"), 2);
        assert_eq!(trie.prefix_count(&word[..50_001]), 1);
        assert_eq!(trie.prefix_count(&word), 1);
    }

    #[test]
    fn dropping_a_version_keeps_shared_long_paths() {
        let word = "z".repeat(100_000);
        let base = Trie::new().insert(&word);
        let next = base.insert("other");

        drop(base);
        assert!(next.contains(&word));
        drop(next);
    }
}
