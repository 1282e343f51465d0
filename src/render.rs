use crate::layouts::{KeyLayout, KeyPos};
use crate::stroke::PressMatrix;

/// Turns decoded strokes into something a front-end can show.
pub trait OutlineRenderer {
    type Output;

    fn render_outline(&self, layout: &KeyLayout, strokes: &[PressMatrix]) -> Self::Output;
}

/// Plain-text chord diagrams, one grid per stroke laid side by side.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    pub released: char,
    pub gap: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            released: '-',
            gap: "    ".to_string(),
        }
    }
}

impl TextRenderer {
    pub fn render_stroke(&self, layout: &KeyLayout, pressed: &PressMatrix) -> Vec<String> {
        (0..layout.rows())
            .map(|row| {
                (0..layout.cols())
                    .map(|col| {
                        let pos = KeyPos::new(row, col);
                        let label = layout.label(pos);
                        if label.is_empty() {
                            " ".to_string()
                        } else if pressed.get(pos) {
                            label.to_string()
                        } else {
                            self.released.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl OutlineRenderer for TextRenderer {
    type Output = Vec<String>;

    fn render_outline(&self, layout: &KeyLayout, strokes: &[PressMatrix]) -> Vec<String> {
        let grids: Vec<Vec<String>> = strokes
            .iter()
            .map(|pressed| self.render_stroke(layout, pressed))
            .collect();

        (0..layout.rows())
            .map(|row| {
                grids
                    .iter()
                    .map(|grid| grid[row].as_str())
                    .collect::<Vec<_>>()
                    .join(&self.gap)
            })
            .collect()
    }
}
