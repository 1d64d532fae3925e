use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;

pub(crate) type ChildMap<V> = FastHashMap<char, Arc<TrieNode<V>>>;
pub(crate) type SortedChildren<'a, V> = SmallVec<[(char, &'a TrieNode<V>); 8]>;

/// Bookkeeping attached to every node of a trie, selected once per trie type.
pub trait Variant: Clone + Default + Debug {
    /// Payload stored at nodes where a complete word ends.
    type Mark: Clone + Debug;

    /// Called bottom-up on each node of an insertion path that stored a new word.
    #[inline(always)]
    fn record_word(&mut self) {}
}

/// Presence-only end markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

impl Variant for Plain {
    type Mark = ();
}

/// Subtree word counts on every node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counted {
    words: usize,
}

impl Counted {
    /// Number of stored words whose path passes through (or ends at) this node.
    pub fn words(&self) -> usize {
        self.words
    }
}

impl Variant for Counted {
    type Mark = ();

    #[inline(always)]
    fn record_word(&mut self) {
        self.words += 1;
    }
}

/// End markers carrying a caller-supplied identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged<I>(PhantomData<I>);

impl<I> Default for Tagged<I> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<I: Clone + Debug> Variant for Tagged<I> {
    type Mark = I;
}

#[derive(Debug, Clone)]
pub struct TrieNode<V: Variant> {
    pub(crate) children: ChildMap<V>,
    pub(crate) mark: Option<V::Mark>,
    pub(crate) annotation: V,
}

impl<V: Variant> Default for TrieNode<V> {
    fn default() -> Self {
        Self {
            children: ChildMap::default(),
            mark: None,
            annotation: V::default(),
        }
    }
}

/// Unlinks uniquely owned descendants one at a time so that dropping a
/// version holding a long word does not recurse once per code point.
impl<V: Variant> Drop for TrieNode<V> {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }

        let mut pending: Vec<Arc<TrieNode<V>>> =
            self.children.drain().map(|(_, child)| child).collect();
        while let Some(child) = pending.pop() {
            // shared children stay alive in another version
            if let Ok(mut node) = Arc::try_unwrap(child) {
                pending.extend(node.children.drain().map(|(_, grandchild)| grandchild));
            }
        }
    }
}

impl<V: Variant> TrieNode<V> {
    #[inline]
    pub fn child(&self, ch: char) -> Option<&TrieNode<V>> {
        self.children.get(&ch).map(|child| child.as_ref())
    }

    #[inline]
    pub fn mark(&self) -> Option<&V::Mark> {
        self.mark.as_ref()
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.mark.is_some()
    }

    #[inline]
    pub fn annotation(&self) -> &V {
        &self.annotation
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Follows `path` one code point at a time; `None` as soon as an edge is missing.
    pub fn descend(&self, path: &str) -> Option<&TrieNode<V>> {
        path.chars().try_fold(self, |node, ch| node.child(ch))
    }

    /// Children in ascending code-point order.
    pub(crate) fn sorted_children(&self) -> SortedChildren<'_, V> {
        let mut out: SortedChildren<'_, V> = self
            .children
            .iter()
            .map(|(ch, child)| (*ch, child.as_ref()))
            .collect();
        out.sort_unstable_by_key(|(ch, _)| *ch);
        out
    }
}
