use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TrieKind {
    #[default]
    Plain,
    Counted,
    Tagged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TrieOptions {
    pub with_counter: bool,
    pub with_id: bool,
}

impl TrieOptions {
    pub fn builder() -> TrieOptionsBuilder {
        TrieOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), TrieOptionsError> {
        if self.with_counter && self.with_id {
            return Err(TrieOptionsError::ConflictingVariants);
        }
        Ok(())
    }

    pub fn kind(&self) -> TrieKind {
        if self.with_counter {
            TrieKind::Counted
        } else if self.with_id {
            TrieKind::Tagged
        } else {
            TrieKind::Plain
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct TrieOptionsBuilder {
    options: TrieOptions,
}

impl TrieOptionsBuilder {
    pub fn with_counter(mut self, value: bool) -> Self {
        self.options.with_counter = value;
        self
    }

    pub fn with_id(mut self, value: bool) -> Self {
        self.options.with_id = value;
        self
    }

    pub fn build(self) -> Result<TrieOptions, TrieOptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrieOptionsError {
    #[error("with_counter and with_id select different trie variants; enable at most one")]
    ConflictingVariants,
    #[error("id tries are populated with insert_with_id; got {words} words without an id")]
    IdRequired { words: usize },
    #[error("{kind:?} tries do not store ids; construct with with_id to use insert_with_id")]
    IdUnsupported { kind: TrieKind },
}
