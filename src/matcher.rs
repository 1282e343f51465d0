use crate::wordmap::WordMap;
use std::sync::Arc;
use tracing::warn;

/// Decides whether `typed` is acceptable progress towards `expected`.
///
/// Comparison is exact. Trimming or case folding belongs to the caller.
pub trait MatchWord {
    fn match_word(&self, expected: &str, typed: &str) -> bool;
}

/// Lapwing rule: `typed` must be one of the precomputed intermediate texts
/// for `expected`.
#[derive(Debug, Clone, Default)]
pub struct PrefixSetMatcher {
    word_map: Arc<WordMap>,
}

impl PrefixSetMatcher {
    pub fn new(word_map: Arc<WordMap>) -> Self {
        Self { word_map }
    }

    pub fn word_map(&self) -> &WordMap {
        &self.word_map
    }
}

impl MatchWord for PrefixSetMatcher {
    fn match_word(&self, expected: &str, typed: &str) -> bool {
        match self.word_map.prefixes(expected) {
            Some(prefixes) => prefixes.iter().any(|p| p == typed),
            None => {
                warn!(
                    "Word '{}' is missing from the word map; regenerate it from the drill data",
                    expected
                );
                false
            }
        }
    }
}

/// Mejiro rule: `typed` must be a literal prefix of `expected`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralPrefixMatcher;

impl MatchWord for LiteralPrefixMatcher {
    fn match_word(&self, expected: &str, typed: &str) -> bool {
        expected.starts_with(typed)
    }
}

/// The closed set of matching strategies a system can use.
#[derive(Debug, Clone)]
pub enum Matcher {
    PrefixSet(PrefixSetMatcher),
    LiteralPrefix(LiteralPrefixMatcher),
}

impl MatchWord for Matcher {
    fn match_word(&self, expected: &str, typed: &str) -> bool {
        match self {
            Self::PrefixSet(m) => m.match_word(expected, typed),
            Self::LiteralPrefix(m) => m.match_word(expected, typed),
        }
    }
}
