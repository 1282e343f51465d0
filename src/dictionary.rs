use crate::error::DrillResult;
use crate::stroke::Outline;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;

/// Plover-style JSON dictionary: `{"TKPWAOD/PWAOEU": "goodbye", ...}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "HashMap<String, String>")]
pub struct StenoDictionary {
    entries: HashMap<Outline, String>,
    reverse: HashMap<String, Vec<Outline>>,
}

impl From<HashMap<String, String>> for StenoDictionary {
    fn from(raw: HashMap<String, String>) -> Self {
        let mut entries = HashMap::with_capacity(raw.len());
        let mut reverse: HashMap<String, Vec<Outline>> = HashMap::new();

        for (steno, translation) in raw {
            let outline = Outline::parse(&steno);
            if outline.is_empty() {
                continue;
            }
            reverse
                .entry(translation.clone())
                .or_default()
                .push(outline.clone());
            entries.insert(outline, translation);
        }

        for outlines in reverse.values_mut() {
            outlines.sort();
        }

        Self { entries, reverse }
    }
}

impl StenoDictionary {
    pub fn from_json_str(content: &str) -> DrillResult<Self> {
        let dict: Self = serde_json::from_str(content)?;
        debug!("Loaded steno dictionary with {} entries", dict.len());
        Ok(dict)
    }

    pub fn from_reader<R: Read>(reader: R) -> DrillResult<Self> {
        let dict: Self = serde_json::from_reader(reader)?;
        debug!("Loaded steno dictionary with {} entries", dict.len());
        Ok(dict)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, outline: &Outline) -> Option<&str> {
        self.entries.get(outline).map(String::as_str)
    }

    /// Every outline that translates to `translation`, in sorted order.
    pub fn reverse_lookup(&self, translation: &str) -> &[Outline] {
        self.reverse.get(translation).map_or(&[], Vec::as_slice)
    }
}
