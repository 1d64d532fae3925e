use parking_lot::RwLock;
use std::fmt::Debug;

use crate::pattern::PatternResult;
use crate::trie::{Store, Tagged, Variant};

/// A mutable slot holding the latest version of a persistent trie.
///
/// Writers are serialized by the lock; readers take a snapshot, which is an
/// `Arc` clone of the current root, and query it without holding the lock.
#[derive(Debug, Default)]
pub struct SharedTrie<V: Variant> {
    current: RwLock<Store<V>>,
}

impl<V: Variant> SharedTrie<V> {
    pub fn new(initial: Store<V>) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub fn snapshot(&self) -> Store<V> {
        self.current.read().clone()
    }

    /// Replaces the current version with `f(current)` and returns the new version.
    pub fn update<F>(&self, f: F) -> Store<V>
    where
        F: FnOnce(&Store<V>) -> Store<V>,
    {
        let mut guard = self.current.write();
        let next = f(&*guard);
        *guard = next.clone();
        next
    }

    /// Installs `next` and returns the version it replaced.
    pub fn replace(&self, next: Store<V>) -> Store<V> {
        std::mem::replace(&mut *self.current.write(), next)
    }

    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, word: &str) -> bool {
        self.snapshot().contains(word)
    }

    pub fn pattern(&self, pattern: &str) -> PatternResult<Vec<String>> {
        self.snapshot().pattern(pattern)
    }
}

impl<V: Variant<Mark = ()>> SharedTrie<V> {
    pub fn insert(&self, word: &str) -> Store<V> {
        tracing::event!(tracing::Level::TRACE, operation = "shared_insert", word = %word);
        self.update(|trie| trie.insert(word))
    }

    pub fn insert_all<W, S>(&self, words: W) -> Store<V>
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.update(|trie| trie.insert_all(words))
    }
}

impl<I: Clone + Debug> SharedTrie<Tagged<I>> {
    pub fn insert_with_id(&self, word: &str, id: I) -> Store<Tagged<I>> {
        tracing::event!(tracing::Level::TRACE, operation = "shared_insert_with_id", word = %word);
        self.update(|trie| trie.insert_with_id(word, id))
    }
}

impl<V: Variant> From<Store<V>> for SharedTrie<V> {
    fn from(store: Store<V>) -> Self {
        Self::new(store)
    }
}
