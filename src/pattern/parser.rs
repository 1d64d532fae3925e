use memchr::{memchr2, memchr3};
use smallvec::SmallVec;
use std::sync::Arc;

use super::error::{CaptureDefect, GroupKind};
use super::token::{CharSet, PatternToken};
use super::{PatternError, PatternResult};

const WILDCARD: char = '*';
const GROUP_OPEN: char = '[';
const GROUP_CLOSE: char = ']';
const NEGATION: char = '^';
const CAPTURE_OPEN: char = '{';
const CAPTURE_CLOSE: char = '}';

#[tracing::instrument(level = "trace", skip(pattern), fields(pattern = %pattern))]
pub fn parse_pattern(pattern: &str) -> PatternResult<Vec<PatternToken>> {
    if is_plain_literal(pattern) {
        return Ok(pattern.chars().map(PatternToken::Literal).collect());
    }

    PatternParser::new(pattern).parse()
}

/// True when `pattern` holds no metacharacter at all. ASCII bytes never occur
/// inside multi-byte UTF-8 sequences, so a byte scan is exact.
fn is_plain_literal(pattern: &str) -> bool {
    let bytes = pattern.as_bytes();
    memchr3(b'*', b'[', b'{', bytes).is_none() && memchr2(b']', b'}', bytes).is_none()
}

struct Group {
    kind: GroupKind,
    set: CharSet,
}

impl Group {
    fn into_token(self) -> PatternToken {
        match self.kind {
            GroupKind::Exclusion => PatternToken::Exclusion(self.set),
            _ => PatternToken::Inclusion(self.set),
        }
    }

    fn into_capture(self, name: Arc<str>) -> PatternToken {
        match self.kind {
            GroupKind::Exclusion => PatternToken::CapturedExclusion {
                name,
                set: self.set,
            },
            _ => PatternToken::CapturedInclusion {
                name,
                set: self.set,
            },
        }
    }
}

struct PatternParser {
    chars: Vec<char>,
    index: usize,
}

impl PatternParser {
    fn new(pattern: &str) -> Self {
        Self {
            chars: pattern.chars().collect(),
            index: 0,
        }
    }

    fn parse(mut self) -> PatternResult<Vec<PatternToken>> {
        let mut tokens = Vec::with_capacity(self.chars.len());

        while let Some(ch) = self.peek() {
            let token = match ch {
                WILDCARD => {
                    self.next();
                    PatternToken::Wildcard
                }
                GROUP_OPEN => self.parse_group()?.into_token(),
                CAPTURE_OPEN => self.parse_capture()?,
                GROUP_CLOSE | CAPTURE_CLOSE => {
                    return Err(PatternError::UnexpectedCloser {
                        found: ch,
                        column: self.column(),
                    });
                }
                _ => {
                    self.next();
                    PatternToken::Literal(ch)
                }
            };
            tokens.push(token);
        }

        Ok(tokens)
    }

    fn parse_group(&mut self) -> PatternResult<Group> {
        let column = self.column();
        self.expect(GROUP_OPEN);

        let kind = if self.peek() == Some(NEGATION) {
            self.next();
            GroupKind::Exclusion
        } else {
            GroupKind::Inclusion
        };

        let mut members: SmallVec<[char; 8]> = SmallVec::new();
        loop {
            let found_column = self.column();
            match self.next() {
                None => {
                    return Err(PatternError::DanglingGroup {
                        kind,
                        column,
                        expecting: kind.terminator(),
                    });
                }
                Some(GROUP_CLOSE) => break,
                Some(found @ (WILDCARD | GROUP_OPEN | CAPTURE_OPEN | CAPTURE_CLOSE)) => {
                    return Err(PatternError::MalformedGroup {
                        kind,
                        column,
                        found,
                        found_column,
                    });
                }
                Some(ch) => members.push(ch),
            }
        }

        if members.is_empty() {
            return Err(PatternError::EmptyGroup { kind, column });
        }

        Ok(Group {
            kind,
            set: CharSet::new(members),
        })
    }

    fn parse_capture(&mut self) -> PatternResult<PatternToken> {
        let column = self.column();
        self.expect(CAPTURE_OPEN);

        let dangling = PatternError::DanglingGroup {
            kind: GroupKind::Capture,
            column,
            expecting: GroupKind::Capture.terminator(),
        };

        let mut name = String::new();
        let mut group = None;
        loop {
            match self.peek() {
                None => return Err(dangling),
                Some(CAPTURE_CLOSE) => {
                    self.next();
                    break;
                }
                Some(GROUP_OPEN) => {
                    group = Some(self.parse_group()?);
                    let found_column = self.column();
                    match self.next() {
                        Some(CAPTURE_CLOSE) => break,
                        None => return Err(dangling),
                        Some(found) => {
                            return Err(PatternError::MalformedCapture {
                                column,
                                defect: CaptureDefect::TrailingContent {
                                    found,
                                    column: found_column,
                                },
                            });
                        }
                    }
                }
                Some(found @ (WILDCARD | CAPTURE_OPEN | GROUP_CLOSE)) => {
                    return Err(PatternError::MalformedCapture {
                        column,
                        defect: CaptureDefect::InvalidNameCharacter {
                            found,
                            column: self.column(),
                        },
                    });
                }
                Some(ch) => {
                    name.push(ch);
                    self.next();
                }
            }
        }

        if name.is_empty() {
            return Err(PatternError::MalformedCapture {
                column,
                defect: CaptureDefect::EmptyName,
            });
        }

        let name: Arc<str> = Arc::from(name);
        Ok(match group {
            Some(group) => group.into_capture(name),
            None => PatternToken::Capture(name),
        })
    }

    /// 1-indexed code-point column of the next unread character.
    fn column(&self) -> usize {
        self.index + 1
    }

    fn expect(&mut self, expected: char) {
        let actual = self.next();
        debug_assert_eq!(Some(expected), actual);
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.index += 1;
        }
        ch
    }
}
