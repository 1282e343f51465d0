use clap::Args;
use std::path::PathBuf;
use steno_drill::error::DrillResult;
use steno_drill::matcher::MatchWord;
use steno_drill::system::SystemId;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[arg(short, long, value_parser = SystemId::parse)]
    pub system: SystemId,

    /// Word map JSON (Lapwing)
    #[arg(short, long)]
    pub word_map: Option<PathBuf>,

    pub expected: String,

    #[arg(default_value = "")]
    pub typed: String,
}

pub fn run(args: CheckArgs) -> DrillResult<()> {
    let system = super::load_system(args.system, args.word_map.as_deref())?;
    let verdict = if args.typed == args.expected || system.match_word(&args.expected, &args.typed) {
        "match"
    } else {
        "no match"
    };
    println!("{}", verdict);
    Ok(())
}
