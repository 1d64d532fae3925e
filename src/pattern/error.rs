use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Inclusion,
    Exclusion,
    Capture,
}

impl GroupKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inclusion => "inclusion",
            Self::Exclusion => "exclusion",
            Self::Capture => "capture",
        }
    }

    pub fn terminator(self) -> char {
        match self {
            Self::Inclusion | Self::Exclusion => ']',
            Self::Capture => '}',
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureDefect {
    EmptyName,
    /// Content between a capture's nested group and its closing brace.
    TrailingContent { found: char, column: usize },
    InvalidNameCharacter { found: char, column: usize },
}

impl fmt::Display for CaptureDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("empty name"),
            Self::TrailingContent { found, column } => {
                write!(f, "unexpected {found} at column {column}, expecting }}")
            }
            Self::InvalidNameCharacter { found, column } => {
                write!(f, "{found} at column {column} is not allowed in a capture name")
            }
        }
    }
}

/// Pattern syntax errors. Columns are 1-indexed and counted in code points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Dangling group ({kind}) starting at column {column}, expecting {expecting}")]
    DanglingGroup {
        kind: GroupKind,
        column: usize,
        expecting: char,
    },
    #[error("Malformed capture starting at column {column}: {defect}")]
    MalformedCapture { column: usize, defect: CaptureDefect },
    #[error(
        "Malformed group ({kind}) starting at column {column}: {found} at column {found_column} is not allowed in a charset"
    )]
    MalformedGroup {
        kind: GroupKind,
        column: usize,
        found: char,
        found_column: usize,
    },
    #[error("Empty group ({kind}) starting at column {column}")]
    EmptyGroup { kind: GroupKind, column: usize },
    #[error("Unexpected {found} at column {column} outside of any group")]
    UnexpectedCloser { found: char, column: usize },
}

impl PatternError {
    /// Column of the construct the error is about.
    pub fn column(&self) -> usize {
        match self {
            Self::DanglingGroup { column, .. }
            | Self::MalformedCapture { column, .. }
            | Self::MalformedGroup { column, .. }
            | Self::EmptyGroup { column, .. }
            | Self::UnexpectedCloser { column, .. } => *column,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Self::DanglingGroup { .. } => "dangling_group",
            Self::MalformedCapture { .. } => "malformed_capture",
            Self::MalformedGroup { .. } => "malformed_group",
            Self::EmptyGroup { .. } => "empty_group",
            Self::UnexpectedCloser { .. } => "unexpected_closer",
        }
    }
}

pub type PatternResult<T> = Result<T, PatternError>;
