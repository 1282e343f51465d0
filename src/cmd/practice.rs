use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use steno_drill::config::Config;
use steno_drill::drill::parse_drill;
use steno_drill::error::DrillResult;
use steno_drill::render::{OutlineRenderer, TextRenderer};
use steno_drill::session::{DrillSession, Judgement};
use steno_drill::system::SystemId;

#[derive(Args, Debug, Clone)]
pub struct PracticeArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long, value_parser = SystemId::parse)]
    pub system: SystemId,

    /// Word map JSON (Lapwing)
    #[arg(short, long)]
    pub word_map: Option<PathBuf>,

    /// Drill file: `word<TAB>OUTLINE` per line
    pub drill: PathBuf,
}

pub fn run(args: PracticeArgs, config: Config) -> DrillResult<()> {
    let system = super::load_system(args.system, args.word_map.as_deref())?;
    let items = parse_drill(BufReader::new(File::open(&args.drill)?))?;
    let mut session = DrillSession::new(items, &config.session);
    let renderer = TextRenderer::default();

    println!("{}", system.footer);
    println!("Type the word and press Enter. `:next`, `:prev`, `:reset`, `:quit`.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    // The completed screen keeps accepting :prev / :reset until :quit or EOF.
    loop {
        match session.current() {
            Some(item) => println!(
                "[{} / {}] {}",
                session.position() + 1,
                session.len(),
                item.word
            ),
            None => println!("[{} / {}] Completed!", session.len(), session.len()),
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            ":quit" => break,
            ":next" => session.next(),
            ":prev" => session.prev(),
            ":reset" => session.reset(),
            typed => match session.judge(&system, typed) {
                Judgement::Complete => println!("✔"),
                Judgement::InProgress => {}
                Judgement::Wrong => {
                    if let Some(strokes) = session.hint(&system.layout) {
                        for row in renderer.render_outline(&system.layout, &strokes) {
                            println!("  {}", row.trim_end());
                        }
                    }
                }
            },
        }
    }
    Ok(())
}
