use smallvec::SmallVec;

use super::analysis::PatternShape;
use super::token::{CaptureName, CharSet, PatternToken};
use crate::trie::{TrieNode, Variant};

pub type Binding = (CaptureName, char);

/// Capture name to code point bindings of one search branch.
///
/// Bindings are values: binding a name returns a new map for the branch that
/// took the code point, leaving the caller's map untouched for its siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: SmallVec<[Binding; 4]>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<char> {
        self.entries
            .iter()
            .find(|(bound, _)| bound.as_ref() == name)
            .map(|(_, ch)| *ch)
    }

    pub fn bind(&self, name: &CaptureName, ch: char) -> Self {
        let mut next = self.clone();
        next.entries.push((name.clone(), ch));
        next
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

enum Filter<'t> {
    Any,
    In(&'t CharSet),
    NotIn(&'t CharSet),
}

impl Filter<'_> {
    #[inline]
    fn admits(&self, ch: char) -> bool {
        match self {
            Filter::Any => true,
            Filter::In(set) => set.contains(ch),
            Filter::NotIn(set) => !set.contains(ch),
        }
    }
}

enum Step<'t> {
    Exact(char),
    Scan {
        filter: Filter<'t>,
        binds: Option<&'t CaptureName>,
    },
}

fn plan<'t>(token: &'t PatternToken, bindings: &Bindings) -> Step<'t> {
    let (name, filter) = match token {
        PatternToken::Literal(ch) => return Step::Exact(*ch),
        PatternToken::Wildcard => {
            return Step::Scan {
                filter: Filter::Any,
                binds: None,
            };
        }
        PatternToken::Inclusion(set) => {
            return Step::Scan {
                filter: Filter::In(set),
                binds: None,
            };
        }
        PatternToken::Exclusion(set) => {
            return Step::Scan {
                filter: Filter::NotIn(set),
                binds: None,
            };
        }
        PatternToken::Capture(name) => (name, Filter::Any),
        PatternToken::CapturedInclusion { name, set } => (name, Filter::In(set)),
        PatternToken::CapturedExclusion { name, set } => (name, Filter::NotIn(set)),
    };

    // a bound capture ignores its set
    match bindings.get(name) {
        Some(ch) => Step::Exact(ch),
        None => Step::Scan {
            filter,
            binds: Some(name),
        },
    }
}

const SEARCH_STACK_CAPACITY: usize = 64;

/// One pending branch of the search: the node reached through `edge`, the
/// byte length of the path above that edge, the next token to apply and the
/// bindings made along the way.
struct Frame<'n, V: Variant> {
    node: &'n TrieNode<V>,
    edge: Option<char>,
    depth: usize,
    next: usize,
    bindings: Bindings,
}

/// Every word reachable from `root` along a path consistent with `tokens`.
#[tracing::instrument(level = "trace", skip(root, tokens), fields(tokens = tokens.len() as u64))]
pub fn match_tokens<V: Variant>(root: &TrieNode<V>, tokens: &[PatternToken]) -> Vec<String> {
    match_shaped(root, tokens, PatternShape::of(tokens))
}

/// Depth-first search driven by an explicit stack, so neither long patterns
/// nor long words grow the call stack. Branches are explored in ascending
/// code-point order.
///
/// Bindings are only recorded when some capture name is used more than once;
/// otherwise no later token can read them.
pub(crate) fn match_shaped<V: Variant>(
    root: &TrieNode<V>,
    tokens: &[PatternToken],
    shape: PatternShape,
) -> Vec<String> {
    let records = shape.contains(PatternShape::BACKREFERENCES);
    let mut out = Vec::new();
    let mut path = String::new();
    let mut stack = Vec::with_capacity(SEARCH_STACK_CAPACITY);
    stack.push(Frame {
        node: root,
        edge: None,
        depth: 0,
        next: 0,
        bindings: Bindings::new(),
    });

    while let Some(Frame {
        node,
        edge,
        depth,
        next,
        bindings,
    }) = stack.pop()
    {
        path.truncate(depth);
        if let Some(ch) = edge {
            path.push(ch);
        }

        let Some(token) = tokens.get(next) else {
            if node.is_end() {
                out.push(path.clone());
            }
            continue;
        };

        let here = path.len();
        match plan(token, &bindings) {
            Step::Exact(ch) => {
                if let Some(child) = node.child(ch) {
                    stack.push(Frame {
                        node: child,
                        edge: Some(ch),
                        depth: here,
                        next: next + 1,
                        bindings,
                    });
                }
            }
            Step::Scan { filter, binds } => {
                // reversed so the smallest code point is popped first
                for (ch, child) in node.sorted_children().into_iter().rev() {
                    if !filter.admits(ch) {
                        continue;
                    }
                    let bindings = match binds {
                        Some(name) if records => bindings.bind(name, ch),
                        _ => bindings.clone(),
                    };
                    stack.push(Frame {
                        node: child,
                        edge: Some(ch),
                        depth: here,
                        next: next + 1,
                        bindings,
                    });
                }
            }
        }
    }

    tracing::event!(tracing::Level::TRACE, operation = "match_tokens", matches = out.len() as u64);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn bind_leaves_parent_untouched() {
        let name: CaptureName = Arc::from("x");
        let parent = Bindings::new();
        let child = parent.bind(&name, 'q');

        assert!(parent.is_empty());
        assert_eq!(child.get("x"), Some('q'));
        assert_eq!(child.len(), 1);
    }

    #[test]
    fn bound_capture_ignores_its_set() {
        let name: CaptureName = Arc::from("x");
        let token = PatternToken::CapturedInclusion {
            name: name.clone(),
            set: CharSet::new(['a']),
        };
        let bindings = Bindings::new().bind(&name, 'z');

        assert!(matches!(plan(&token, &bindings), Step::Exact('z')));
    }

    #[test]
    fn single_use_captures_skip_bindings() {
        let trie = crate::trie::Trie::from_words(["ab", "ba", "aa"]);
        let tokens = crate::pattern::parse_pattern("{x}{y}").unwrap();
        let shape = PatternShape::of(&tokens);

        assert!(!shape.contains(PatternShape::BACKREFERENCES));
        assert_eq!(match_shaped(trie.root(), &tokens, shape), vec!["aa", "ab", "ba"]);
    }

    #[test]
    fn long_patterns_run_without_recursion() {
        let word = "a".repeat(100_000);
        let trie = crate::trie::Trie::from_words([word.as_str(), "ab"]);

        let wildcards = vec![PatternToken::Wildcard; 100_000];
        assert_eq!(match_tokens(trie.root(), &wildcards), vec![word.clone()]);

        let name: CaptureName = Arc::from("c");
        let repeated = vec![PatternToken::Capture(name); 100_000];
        assert_eq!(match_tokens(trie.root(), &repeated), vec![word]);
    }
}
