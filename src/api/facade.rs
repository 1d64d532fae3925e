use std::fmt::Debug;

use super::options::{TrieKind, TrieOptions, TrieOptionsError};
use super::TrieResult;
use crate::pattern::PatternResult;
use crate::trie::{CountTrie, IdTrie, Store, Tagged, Trie, Variant};

/// A trie whose variant was chosen at runtime from `TrieOptions`.
#[derive(Debug, Clone)]
pub enum AnyTrie<I = u64>
where
    I: Clone + Debug,
{
    Plain(Trie),
    Counted(CountTrie),
    Tagged(IdTrie<I>),
}

impl<I: Clone + Debug> AnyTrie<I> {
    pub fn kind(&self) -> TrieKind {
        match self {
            Self::Plain(_) => TrieKind::Plain,
            Self::Counted(_) => TrieKind::Counted,
            Self::Tagged(_) => TrieKind::Tagged,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Plain(trie) => trie.len(),
            Self::Counted(trie) => trie.len(),
            Self::Tagged(trie) => trie.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, word: &str) -> bool {
        match self {
            Self::Plain(trie) => trie.contains(word),
            Self::Counted(trie) => trie.contains(word),
            Self::Tagged(trie) => trie.contains(word),
        }
    }

    pub fn prefix(&self, prefix: &str) -> Vec<String> {
        match self {
            Self::Plain(trie) => trie.prefix(prefix).collect(),
            Self::Counted(trie) => trie.prefix(prefix).collect(),
            Self::Tagged(trie) => trie.prefix(prefix).collect(),
        }
    }

    pub fn enumerate(&self) -> Vec<String> {
        self.prefix("")
    }

    /// Inserts `word` into a plain or count trie. Id tries need an id and
    /// report `IdRequired`.
    pub fn insert(&self, word: &str) -> Result<Self, TrieOptionsError> {
        match self {
            Self::Plain(trie) => Ok(Self::Plain(trie.insert(word))),
            Self::Counted(trie) => Ok(Self::Counted(trie.insert(word))),
            Self::Tagged(_) => Err(TrieOptionsError::IdRequired { words: 1 }),
        }
    }

    pub fn insert_all<W, S>(&self, words: W) -> Result<Self, TrieOptionsError>
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self {
            Self::Plain(trie) => Ok(Self::Plain(trie.insert_all(words))),
            Self::Counted(trie) => Ok(Self::Counted(trie.insert_all(words))),
            Self::Tagged(trie) => match words.into_iter().count() {
                0 => Ok(Self::Tagged(trie.clone())),
                provided => Err(TrieOptionsError::IdRequired { words: provided }),
            },
        }
    }

    /// Inserts `word` with `id` into an id trie; other variants report `IdUnsupported`.
    pub fn insert_with_id(&self, word: &str, id: I) -> Result<Self, TrieOptionsError> {
        match self {
            Self::Tagged(trie) => Ok(Self::Tagged(trie.insert_with_id(word, id))),
            _ => Err(TrieOptionsError::IdUnsupported { kind: self.kind() }),
        }
    }

    pub fn insert_all_with_id<W, S>(&self, words: W, id: I) -> Result<Self, TrieOptionsError>
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self {
            Self::Tagged(trie) => Ok(Self::Tagged(trie.insert_all_with_id(words, id))),
            _ => Err(TrieOptionsError::IdUnsupported { kind: self.kind() }),
        }
    }

    /// The id stored for `word`; `None` when absent or when this is not an id trie.
    pub fn lookup(&self, word: &str) -> Option<&I> {
        match self {
            Self::Tagged(trie) => trie.lookup(word),
            _ => None,
        }
    }

    /// `None` unless this is a count trie.
    pub fn prefix_count(&self, prefix: &str) -> Option<usize> {
        match self {
            Self::Counted(trie) => Some(trie.prefix_count(prefix)),
            _ => None,
        }
    }

    pub fn pattern(&self, pattern: &str) -> PatternResult<Vec<String>> {
        match self {
            Self::Plain(trie) => trie.pattern(pattern),
            Self::Counted(trie) => trie.pattern(pattern),
            Self::Tagged(trie) => trie.pattern(pattern),
        }
    }

    pub fn as_plain(&self) -> Option<&Trie> {
        match self {
            Self::Plain(trie) => Some(trie),
            _ => None,
        }
    }

    pub fn as_counted(&self) -> Option<&CountTrie> {
        match self {
            Self::Counted(trie) => Some(trie),
            _ => None,
        }
    }

    pub fn as_tagged(&self) -> Option<&IdTrie<I>> {
        match self {
            Self::Tagged(trie) => Some(trie),
            _ => None,
        }
    }
}

/// An empty plain trie.
pub fn construct() -> Trie {
    Trie::new()
}

/// Builds the variant selected by `options` and fills it with `words`.
/// Id tries must start empty and be filled through `insert_with_id`.
#[tracing::instrument(level = "trace", skip(words), fields(kind = ?options.kind()))]
pub fn construct_with<I, W, S>(words: W, options: &TrieOptions) -> TrieResult<AnyTrie<I>>
where
    I: Clone + Debug,
    W: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    options.validate()?;

    let trie = match options.kind() {
        TrieKind::Plain => AnyTrie::Plain(Trie::from_words(words)),
        TrieKind::Counted => AnyTrie::Counted(CountTrie::from_words(words)),
        TrieKind::Tagged => {
            let provided = words.into_iter().count();
            if provided > 0 {
                return Err(TrieOptionsError::IdRequired { words: provided }.into());
            }
            AnyTrie::Tagged(IdTrie::new())
        }
    };

    Ok(trie)
}

pub fn insert<V: Variant<Mark = ()>>(trie: &Store<V>, word: &str) -> Store<V> {
    trie.insert(word)
}

pub fn insert_all<V, W, S>(trie: &Store<V>, words: W) -> Store<V>
where
    V: Variant<Mark = ()>,
    W: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    trie.insert_all(words)
}

pub fn insert_with_id<I: Clone + Debug>(trie: &IdTrie<I>, word: &str, id: I) -> IdTrie<I> {
    trie.insert_with_id(word, id)
}

/// Inserts every word with the same `id`.
pub fn insert_all_with_id<I, W, S>(trie: &IdTrie<I>, words: W, id: I) -> IdTrie<I>
where
    I: Clone + Debug,
    W: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    trie.insert_all_with_id(words, id)
}

pub fn contains<V: Variant>(trie: &Store<V>, word: &str) -> bool {
    trie.contains(word)
}

pub fn lookup<'a, I: Clone + Debug>(trie: &'a Store<Tagged<I>>, word: &str) -> Option<&'a I> {
    trie.lookup(word)
}

pub fn prefix<V: Variant>(trie: &Store<V>, prefix: &str) -> Vec<String> {
    trie.prefix(prefix).collect()
}

pub fn prefix_count(trie: &CountTrie, prefix: &str) -> usize {
    trie.prefix_count(prefix)
}

pub fn enumerate<V: Variant>(trie: &Store<V>) -> Vec<String> {
    trie.words().collect()
}

pub fn pattern<V: Variant>(trie: &Store<V>, pattern: &str) -> PatternResult<Vec<String>> {
    trie.pattern(pattern)
}
