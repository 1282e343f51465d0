use crate::layouts::{KeyLayout, KeyPos};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strokes written in succession to produce one translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline(pub Vec<String>);

impl Outline {
    /// Splits `TKPWAOD/PWAOEU` style text on `/`.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::default();
        }
        Self(text.split('/').map(|s| s.trim().to_string()).collect())
    }

    pub fn strokes(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first `n` strokes.
    pub fn prefix(&self, n: usize) -> Self {
        Self(self.0.iter().take(n).cloned().collect())
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

/// Which keys of a layout are held for one stroke. Same shape as the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PressMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl PressMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    pub fn for_layout(layout: &KeyLayout) -> Self {
        Self::new(layout.rows(), layout.cols())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `None` when `row` is outside the matrix.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.rows {
            return None;
        }
        self.cells.get(row * self.cols..(row + 1) * self.cols)
    }

    pub fn is_pressed(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, pos: KeyPos, pressed: bool) {
        if pos.row < self.rows && pos.col < self.cols {
            self.cells[pos.row * self.cols + pos.col] = pressed;
        }
    }

    pub fn get(&self, pos: KeyPos) -> bool {
        self.is_pressed(pos.row, pos.col)
    }

    pub fn pressed(&self) -> impl Iterator<Item = KeyPos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, p)| **p)
            .map(move |(i, _)| KeyPos::new(i / self.cols, i % self.cols))
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&p| p).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Resolves a stroke such as `TPH-PL` to the keys held on `layout`.
///
/// Characters are matched greedily along the layout's scan order, so a letter
/// present on both banks lands on the left bank unless something already
/// pushed the cursor past it. `-` jumps to the right-hand bank. Characters
/// that cannot be placed end the scan without error.
pub fn decode(layout: &KeyLayout, stroke: &str) -> PressMatrix {
    let mut pressed = PressMatrix::for_layout(layout);
    if stroke.is_empty() {
        return pressed;
    }

    let order = &layout.scan_order;
    let mut cursor = 0;

    'chars: for c in stroke.chars() {
        if cursor >= order.len() {
            break;
        }
        if c == '-' {
            cursor = cursor.max(layout.rhs_boundary);
            continue;
        }
        while cursor < order.len() {
            let pos = order[cursor];
            cursor += 1;
            if label_is(layout.label(pos), c) {
                pressed.set(pos, true);
                continue 'chars;
            }
        }
    }

    apply_links(layout, &mut pressed);
    pressed
}

/// One press matrix per stroke, in outline order.
pub fn decode_outline(layout: &KeyLayout, outline: &Outline) -> Vec<PressMatrix> {
    outline
        .strokes()
        .iter()
        .map(|stroke| decode(layout, stroke))
        .collect()
}

fn label_is(label: &str, c: char) -> bool {
    let mut chars = label.chars();
    chars.next() == Some(c) && chars.next().is_none()
}

fn apply_links(layout: &KeyLayout, pressed: &mut PressMatrix) {
    for link in &layout.links {
        let any = link.cells.iter().any(|&pos| pressed.get(pos));
        for &pos in &link.cells {
            pressed.set(pos, any);
        }
    }
}
