mod errors;
mod facade;
mod options;
mod service;

pub use errors::{TrieError, TrieResult};
pub use facade::{
    AnyTrie, construct, construct_with, contains, enumerate, insert, insert_all,
    insert_all_with_id, insert_with_id, lookup, pattern, prefix, prefix_count,
};
pub use options::{TrieKind, TrieOptions, TrieOptionsBuilder, TrieOptionsError};
pub use service::SharedTrie;
