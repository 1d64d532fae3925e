use smallvec::SmallVec;
use std::sync::Arc;

pub type CaptureName = Arc<str>;

/// Sorted, deduplicated set of code points from a `[...]` group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharSet {
    members: SmallVec<[char; 8]>,
}

impl CharSet {
    pub fn new<I>(members: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut members: SmallVec<[char; 8]> = members.into_iter().collect();
        members.sort_unstable();
        members.dedup();
        Self { members }
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.members.binary_search(&ch).is_ok()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.members.iter().copied()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// One match instruction of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    Literal(char),
    Wildcard,
    Inclusion(CharSet),
    Exclusion(CharSet),
    /// Any code point on first use, then the bound code point.
    Capture(CaptureName),
    /// The set only constrains the first use of `name`.
    CapturedInclusion {
        name: CaptureName,
        set: CharSet,
    },
    CapturedExclusion {
        name: CaptureName,
        set: CharSet,
    },
}

impl PatternToken {
    pub fn capture_name(&self) -> Option<&str> {
        match self {
            Self::Capture(name)
            | Self::CapturedInclusion { name, .. }
            | Self::CapturedExclusion { name, .. } => Some(&**name),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    pub fn literal(&self) -> Option<char> {
        match self {
            Self::Literal(ch) => Some(*ch),
            _ => None,
        }
    }
}
