use crate::error::{DrillError, DrillResult};
use crate::layouts::{BuiltinLayout, KeyLayout};
use crate::matcher::{LiteralPrefixMatcher, MatchWord, Matcher, PrefixSetMatcher};
use crate::stroke::{self, Outline, PressMatrix};
use crate::wordmap::WordMap;
use std::str::FromStr;
use std::sync::Arc;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum SystemId {
    Lapwing,
    Mejiro,
}

impl SystemId {
    /// Like `FromStr`, but reports failures as `DrillError::UnknownSystem`.
    pub fn parse(name: &str) -> DrillResult<Self> {
        Self::from_str(name).map_err(|_| DrillError::UnknownSystem(name.to_string()))
    }

    pub fn builtin_layout(&self) -> BuiltinLayout {
        match self {
            Self::Lapwing => BuiltinLayout::UniV4,
            Self::Mejiro => BuiltinLayout::Mejiro31,
        }
    }

    pub fn footer(&self) -> &'static str {
        match self {
            Self::Lapwing => {
                "This is a third-party app for Lapwing for Beginners (https://lapwing.aerick.ca/). Every lesson data comes from the book."
            }
            Self::Mejiro => {
                "This is a third-party app for the Mejiro system (https://github.com/JEEBIS27/Plover_Mejiro)."
            }
        }
    }
}

/// Everything a front-end needs for one steno system.
#[derive(Debug, Clone)]
pub struct StenoSystem {
    pub id: SystemId,
    pub layout: KeyLayout,
    pub matcher: Matcher,
    pub footer: &'static str,
}

impl StenoSystem {
    /// Builds `id`; only Lapwing consults `word_map`.
    pub fn new(id: SystemId, word_map: Arc<WordMap>) -> Self {
        match id {
            SystemId::Lapwing => Self::lapwing(word_map),
            SystemId::Mejiro => Self::mejiro(),
        }
    }

    pub fn lapwing(word_map: Arc<WordMap>) -> Self {
        let id = SystemId::Lapwing;
        Self {
            id,
            layout: id.builtin_layout().layout(),
            matcher: Matcher::PrefixSet(PrefixSetMatcher::new(word_map)),
            footer: id.footer(),
        }
    }

    pub fn mejiro() -> Self {
        let id = SystemId::Mejiro;
        Self {
            id,
            layout: id.builtin_layout().layout(),
            matcher: Matcher::LiteralPrefix(LiteralPrefixMatcher),
            footer: id.footer(),
        }
    }

    pub fn decode(&self, stroke: &str) -> PressMatrix {
        stroke::decode(&self.layout, stroke)
    }

    pub fn decode_outline(&self, outline: &Outline) -> Vec<PressMatrix> {
        stroke::decode_outline(&self.layout, outline)
    }
}

impl MatchWord for StenoSystem {
    fn match_word(&self, expected: &str, typed: &str) -> bool {
        self.matcher.match_word(expected, typed)
    }
}
