mod node;
mod traversal;
mod tree;

pub use node::{Counted, Plain, Tagged, TrieNode, Variant};
pub use traversal::Words;
pub use tree::{CountTrie, IdTrie, Store, Trie};
