use bitflags::bitflags;
use smallvec::SmallVec;

use super::token::PatternToken;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PatternShape: u8 {
        /// Wildcards, inclusion or exclusion groups.
        const SCANS = 0b00000001;
        const CAPTURES = 0b00000010;
        /// At least one capture name is used more than once.
        const BACKREFERENCES = 0b00000100;
    }
}

impl PatternShape {
    pub fn of(tokens: &[PatternToken]) -> Self {
        let mut shape = PatternShape::empty();
        let mut seen: SmallVec<[&str; 4]> = SmallVec::new();

        for token in tokens {
            match token {
                PatternToken::Literal(_) => {}
                PatternToken::Wildcard
                | PatternToken::Inclusion(_)
                | PatternToken::Exclusion(_) => shape.insert(PatternShape::SCANS),
                _ => {
                    shape.insert(PatternShape::CAPTURES);
                    if let Some(name) = token.capture_name() {
                        if seen.contains(&name) {
                            shape.insert(PatternShape::BACKREFERENCES);
                        } else {
                            seen.push(name);
                        }
                    }
                }
            }
        }

        shape
    }

    /// Only literal tokens: the pattern names exactly one word.
    #[inline]
    pub fn is_literal(self) -> bool {
        self.is_empty()
    }
}
