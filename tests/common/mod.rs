#![allow(dead_code)]

use std::collections::HashMap;
use steno_drill::drill::DrillItem;
use steno_drill::layouts::{BuiltinLayout, KeyLayout};
use steno_drill::stroke::decode;
use steno_drill::wordmap::WordMap;

pub fn uni_v4() -> KeyLayout {
    BuiltinLayout::UniV4.layout()
}

pub fn mejiro31() -> KeyLayout {
    BuiltinLayout::Mejiro31.layout()
}

/// Pressed cells of `stroke` as sorted `(row, col)` pairs.
pub fn pressed_cells(layout: &KeyLayout, stroke: &str) -> Vec<(usize, usize)> {
    let mut cells: Vec<(usize, usize)> = decode(layout, stroke)
        .pressed()
        .map(|p| (p.row, p.col))
        .collect();
    cells.sort();
    cells
}

pub fn word_map(entries: &[(&str, &[&str])]) -> WordMap {
    let map: HashMap<String, Vec<String>> = entries
        .iter()
        .map(|(word, prefixes)| {
            (
                word.to_string(),
                prefixes.iter().map(|p| p.to_string()).collect(),
            )
        })
        .collect();
    WordMap::new(map)
}

pub fn items(pairs: &[(&str, &str)]) -> Vec<DrillItem> {
    pairs
        .iter()
        .map(|(word, outline)| DrillItem::new(word, outline))
        .collect()
}
