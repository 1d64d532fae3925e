use super::options::TrieOptionsError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrieError {
    #[error(transparent)]
    Options(#[from] TrieOptionsError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type TrieResult<T> = Result<T, TrieError>;
