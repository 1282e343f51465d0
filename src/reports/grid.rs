use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use steno_drill::layouts::{KeyLayout, KeyPos};
use steno_drill::stroke::PressMatrix;

/// Key chart with every label shown.
pub fn print_layout(layout: &KeyLayout) {
    println!("\nLayout: {}", layout.name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in &layout.grid {
        let cells: Vec<Cell> = row
            .iter()
            .map(|label| Cell::new(label).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

/// Chord diagram: held keys keep their label, released keys show `-`.
pub fn print_stroke(layout: &KeyLayout, stroke: &str, pressed: &PressMatrix) {
    println!("\nStroke: {}", stroke);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in 0..layout.rows() {
        let cells: Vec<Cell> = (0..layout.cols())
            .map(|col| {
                let pos = KeyPos::new(row, col);
                let label = layout.label(pos);
                let cell = if label.is_empty() {
                    Cell::new("")
                } else if pressed.get(pos) {
                    Cell::new(label)
                        .fg(Color::Red)
                        .add_attribute(Attribute::Bold)
                } else {
                    Cell::new("-")
                };
                cell.set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}
