use crate::reports;
use clap::Args;
use steno_drill::error::DrillResult;
use steno_drill::render::{OutlineRenderer, TextRenderer};
use steno_drill::stroke::Outline;
use steno_drill::system::SystemId;

#[derive(Args, Debug, Clone)]
pub struct StrokeArgs {
    #[arg(short, long, value_parser = SystemId::parse)]
    pub system: SystemId,

    /// Outline such as `TKPWAOD/PWAOEU`
    pub outline: String,

    /// Print plain text diagrams instead of tables
    #[arg(long, default_value_t = false)]
    pub plain: bool,
}

pub fn run(args: StrokeArgs) -> DrillResult<()> {
    let system = super::load_system(args.system, None)?;
    let outline = Outline::parse(&args.outline);
    let strokes = system.decode_outline(&outline);

    if args.plain {
        let renderer = TextRenderer::default();
        for line in renderer.render_outline(&system.layout, &strokes) {
            println!("{}", line.trim_end());
        }
        return Ok(());
    }

    for (stroke, pressed) in outline.strokes().iter().zip(&strokes) {
        reports::print_stroke_grid(&system.layout, stroke, pressed);
    }
    Ok(())
}
