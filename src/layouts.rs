use crate::error::{DrillError, DrillResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

/// A cell address in a layout grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeyPos {
    pub row: usize,
    pub col: usize,
}

impl KeyPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Cells that draw one logical key in several places.
/// After decoding, the group is OR'd and written back to every member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyLink {
    pub cells: Vec<KeyPos>,
}

/// Physical key chart of a steno machine plus the data the decoder needs.
///
/// `grid` uses the empty string for blank board space. `scan_order` lists the
/// keys in steno order; letters that occur on both banks are told apart by
/// their position in it. `rhs_boundary` is the first scan slot of the
/// right-hand bank, where a literal `-` moves the cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyLayout {
    pub name: String,
    pub grid: Vec<Vec<String>>,
    pub scan_order: Vec<KeyPos>,
    pub rhs_boundary: usize,
    #[serde(default)]
    pub links: Vec<KeyLink>,
}

impl KeyLayout {
    /// Builds a layout from space-separated row strings, `_` marking blank cells.
    pub fn from_rows(
        name: &str,
        rows: &[&str],
        scan_order: &[(usize, usize)],
        rhs_boundary: usize,
        links: &[&[(usize, usize)]],
    ) -> Self {
        let grid = rows
            .iter()
            .map(|row| {
                row.split_whitespace()
                    .map(|token| match token {
                        "_" => String::new(),
                        label => label.to_string(),
                    })
                    .collect()
            })
            .collect();

        Self {
            name: name.to_string(),
            grid,
            scan_order: scan_order
                .iter()
                .map(|&(row, col)| KeyPos::new(row, col))
                .collect(),
            rhs_boundary,
            links: links
                .iter()
                .map(|group| KeyLink {
                    cells: group
                        .iter()
                        .map(|&(row, col)| KeyPos::new(row, col))
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn from_json_str(content: &str) -> DrillResult<Self> {
        let layout: Self = serde_json::from_str(content)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DrillResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Label at `pos`, or `""` for blank or out-of-range cells.
    pub fn label(&self, pos: KeyPos) -> &str {
        self.grid
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .map_or("", String::as_str)
    }

    pub fn is_blank(&self, pos: KeyPos) -> bool {
        self.label(pos).is_empty()
    }

    fn contains(&self, pos: KeyPos) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    pub fn validate(&self) -> DrillResult<()> {
        let cols = self.cols();
        if self.grid.is_empty() || cols == 0 {
            return Err(DrillError::Validation(format!(
                "Layout '{}' has an empty grid",
                self.name
            )));
        }
        if let Some(i) = self.grid.iter().position(|row| row.len() != cols) {
            return Err(DrillError::Validation(format!(
                "Layout '{}' row {} has {} cells, expected {}",
                self.name,
                i,
                self.grid[i].len(),
                cols
            )));
        }

        let mut seen = HashSet::new();
        for (slot, &pos) in self.scan_order.iter().enumerate() {
            if !self.contains(pos) {
                return Err(DrillError::Validation(format!(
                    "Layout '{}' scan slot {} points outside the grid at ({}, {})",
                    self.name, slot, pos.row, pos.col
                )));
            }
            if self.is_blank(pos) {
                return Err(DrillError::Validation(format!(
                    "Layout '{}' scan slot {} points at blank cell ({}, {})",
                    self.name, slot, pos.row, pos.col
                )));
            }
            if !seen.insert(pos) {
                return Err(DrillError::Validation(format!(
                    "Layout '{}' scans cell ({}, {}) twice",
                    self.name, pos.row, pos.col
                )));
            }
        }

        if self.rhs_boundary > self.scan_order.len() {
            return Err(DrillError::Validation(format!(
                "Layout '{}' right-hand boundary {} exceeds scan length {}",
                self.name,
                self.rhs_boundary,
                self.scan_order.len()
            )));
        }

        for (i, link) in self.links.iter().enumerate() {
            if link.cells.len() < 2 {
                return Err(DrillError::Validation(format!(
                    "Layout '{}' link group {} needs at least two cells",
                    self.name, i
                )));
            }
            if let Some(pos) = link
                .cells
                .iter()
                .find(|&&pos| !self.contains(pos) || self.is_blank(pos))
            {
                return Err(DrillError::Validation(format!(
                    "Layout '{}' link group {} references unusable cell ({}, {})",
                    self.name, i, pos.row, pos.col
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum BuiltinLayout {
    UniV4,
    Mejiro31,
}

//   0 1 2 3 4 5 6 7 8 9 A B
// 0 # T P H * _ * F P L T D
// 1 S K W R _ _ _ R B G S Z
// 2 _ _ # A O _ E U # _ _ _
const UNI_V4_ROWS: [&str; 3] = [
    "# T P H * _ * F P L T D",
    "S K W R _ _ _ R B G S Z",
    "_ _ # A O _ E U # _ _ _",
];

// #STKPWHR #AO* EU# FRPBLGTSDZ
const UNI_V4_SCAN: [(usize, usize); 25] = [
    (0, 0),  // #
    (1, 0),  // S
    (0, 1),  // T
    (1, 1),  // K
    (0, 2),  // P
    (1, 2),  // W
    (0, 3),  // H
    (1, 3),  // R
    (2, 2),  // #
    (2, 3),  // A
    (2, 4),  // O
    (0, 4),  // *
    (2, 6),  // E  <- right-hand boundary
    (2, 7),  // U
    (2, 8),  // #
    (0, 7),  // F
    (1, 7),  // R
    (0, 8),  // P
    (1, 8),  // B
    (0, 9),  // L
    (1, 9),  // G
    (0, 10), // T
    (1, 10), // S
    (0, 11), // D
    (1, 11), // Z
];

const UNI_V4_RHS: usize = 12;

const UNI_V4_LINKS: [&[(usize, usize)]; 2] = [
    &[(0, 4), (0, 6)],         // *
    &[(0, 0), (2, 2), (2, 8)], // #
];

//   0 1 2 3 4 5 6 7 8 9 A B C
// 0 # S T Y I U _ U I Y T S *
// 1 _ _ K N A U _ U A N K _ _
// 2 _ _ _ _ n _ _ n _ _ _ _ _
// 3 _ _ _ _ t k _ k t _ _ _ _
// `#`, `S` and `*` are drawn tall and `n` wide, so their neighbours stay blank.
const MEJIRO31_ROWS: [&str; 4] = [
    "# S T Y I U _ U I Y T S *",
    "_ _ K N A U _ U A N K _ _",
    "_ _ _ _ n _ _ n _ _ _ _ _",
    "_ _ _ _ t k _ k t _ _ _ _",
];

const MEJIRO31_SCAN: [(usize, usize); 24] = [
    (0, 0),  // #
    (0, 1),  // S
    (0, 2),  // T
    (1, 2),  // K
    (0, 3),  // Y
    (1, 3),  // N
    (0, 4),  // I
    (1, 4),  // A
    (0, 5),  // U
    (2, 4),  // n
    (3, 4),  // t
    (3, 5),  // k
    (0, 11), // S  <- right-hand boundary
    (0, 10), // T
    (1, 10), // K
    (0, 9),  // Y
    (1, 9),  // N
    (0, 8),  // I
    (1, 8),  // A
    (0, 7),  // U
    (2, 7),  // n
    (3, 8),  // t
    (3, 7),  // k
    (0, 12), // *
];

const MEJIRO31_RHS: usize = 12;

// `U` spans both upper rows on each side.
const MEJIRO31_LINKS: [&[(usize, usize)]; 2] = [&[(0, 5), (1, 5)], &[(0, 7), (1, 7)]];

impl BuiltinLayout {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::UniV4 => "Uni V4",
            Self::Mejiro31 => "Mejiro-31",
        }
    }

    pub fn layout(&self) -> KeyLayout {
        match self {
            Self::UniV4 => KeyLayout::from_rows(
                self.display_name(),
                &UNI_V4_ROWS,
                &UNI_V4_SCAN,
                UNI_V4_RHS,
                &UNI_V4_LINKS,
            ),
            Self::Mejiro31 => KeyLayout::from_rows(
                self.display_name(),
                &MEJIRO31_ROWS,
                &MEJIRO31_SCAN,
                MEJIRO31_RHS,
                &MEJIRO31_LINKS,
            ),
        }
    }
}
