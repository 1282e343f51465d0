mod grid;

pub use self::grid::{print_layout as print_layout_grid, print_stroke as print_stroke_grid};
