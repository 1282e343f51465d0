use crate::dictionary::StenoDictionary;
use crate::error::DrillResult;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Read;
use tracing::{debug, info};

/// Word -> text a steno writer may legitimately show while still on the way
/// to that word (translations of the prefixes of its outlines).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordMap(HashMap<String, Vec<String>>);

impl WordMap {
    pub fn new(entries: HashMap<String, Vec<String>>) -> Self {
        Self(entries)
    }

    pub fn from_json_str(content: &str) -> DrillResult<Self> {
        let map: Self = serde_json::from_str(content)?;
        debug!("Loaded word map with {} words", map.len());
        Ok(map)
    }

    pub fn from_reader<R: Read>(reader: R) -> DrillResult<Self> {
        let map: Self = serde_json::from_reader(reader)?;
        debug!("Loaded word map with {} words", map.len());
        Ok(map)
    }

    /// Serializes with sorted keys so regenerated files diff cleanly.
    pub fn to_json_string(&self) -> DrillResult<String> {
        let sorted: BTreeMap<&String, &Vec<String>> = self.0.iter().collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }

    pub fn prefixes(&self, word: &str) -> Option<&[String]> {
        self.0.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds the map for `words` from a steno dictionary.
    ///
    /// For every outline of a word, each leading run of strokes is looked up
    /// and its translation, if any, becomes an acceptable intermediate text.
    pub fn generate<S: AsRef<str>>(dictionary: &StenoDictionary, words: &[S]) -> Self {
        let unique: BTreeSet<&str> = words.iter().map(AsRef::as_ref).collect();
        info!("Generating word map for {} words", unique.len());

        let entries: HashMap<String, Vec<String>> = unique
            .into_par_iter()
            .map(|word| {
                let mut translations = BTreeSet::new();
                for outline in dictionary.reverse_lookup(word) {
                    for n in 1..=outline.len() {
                        if let Some(t) = dictionary.lookup(&outline.prefix(n)) {
                            translations.insert(t.to_string());
                        }
                    }
                }
                (word.to_string(), translations.into_iter().collect())
            })
            .collect();

        Self(entries)
    }
}
