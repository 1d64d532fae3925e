//! Persistent Unicode tries with prefix queries and a glob-like pattern
//! language supporting named back-reference captures.
//!
//! ```
//! use pattern_trie_rs::Trie;
//!
//! let trie = Trie::from_words(["apple", "apply", "ape", "ample"]);
//! let mut matches = trie.pattern("*{1}{1}**").expect("pattern should parse");
//! matches.sort();
//! assert_eq!(matches, vec!["apple", "apply"]);
//! ```

pub mod api;
pub mod pattern;
pub mod trie;

pub use api::{
    AnyTrie, SharedTrie, TrieError, TrieKind, TrieOptions, TrieOptionsBuilder, TrieOptionsError,
    TrieResult,
};
pub use pattern::{CompiledPattern, PatternError, PatternResult, PatternToken};
pub use trie::{CountTrie, IdTrie, Store, Trie, Words};
