use super::analysis::PatternShape;
use super::matcher::match_shaped;
use super::parser::parse_pattern;
use super::token::PatternToken;
use super::PatternResult;
use crate::trie::{Store, Variant};

/// A parsed pattern that can be run against any number of tries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: Box<str>,
    tokens: Vec<PatternToken>,
    shape: PatternShape,
}

impl CompiledPattern {
    pub fn compile(pattern: &str) -> PatternResult<Self> {
        let tokens = parse_pattern(pattern)?;
        let shape = PatternShape::of(&tokens);
        debug_assert!(
            !shape.is_literal() || spells_source(&tokens, pattern),
            "literal tokens must spell the source pattern"
        );

        Ok(Self {
            source: pattern.into(),
            tokens,
            shape,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    pub fn shape(&self) -> PatternShape {
        self.shape
    }

    #[tracing::instrument(level = "trace", skip(self, store), fields(pattern = %self.source, shape = ?self.shape))]
    pub fn matches<V: Variant>(&self, store: &Store<V>) -> Vec<String> {
        if self.shape.is_literal() {
            return if store.contains(&self.source) {
                vec![self.source.to_string()]
            } else {
                Vec::new()
            };
        }

        match_shaped(store.root(), &self.tokens, self.shape)
    }
}

/// True when `tokens` are the literal code points of `source`, in order.
fn spells_source(tokens: &[PatternToken], source: &str) -> bool {
    tokens.iter().map(PatternToken::literal).eq(source.chars().map(Some))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_patterns_spell_their_source() {
        for source in ["", "ape", "äöü", "a^b", "日本"] {
            let compiled = CompiledPattern::compile(source).unwrap();
            assert!(compiled.shape().is_literal());
            assert!(spells_source(compiled.tokens(), compiled.source()));
        }
    }

    #[test]
    fn scanning_patterns_do_not_spell_their_source() {
        let compiled = CompiledPattern::compile("a*").unwrap();
        assert!(!compiled.shape().is_literal());
        assert!(!spells_source(compiled.tokens(), compiled.source()));
    }
}
