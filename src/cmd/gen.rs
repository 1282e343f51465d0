use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use steno_drill::dictionary::StenoDictionary;
use steno_drill::drill::parse_drill;
use steno_drill::error::DrillResult;
use steno_drill::wordmap::WordMap;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenArgs {
    /// Plover JSON dictionary
    #[arg(short, long)]
    pub dictionary: PathBuf,

    /// Drill files whose words get an entry
    #[arg(required = true)]
    pub drills: Vec<PathBuf>,
}

pub fn run(args: GenArgs) -> DrillResult<()> {
    info!("📖 Loading Dictionary: {}", args.dictionary.display());
    let dictionary = StenoDictionary::from_reader(BufReader::new(File::open(&args.dictionary)?))?;

    let mut words = Vec::new();
    for path in &args.drills {
        info!("📂 Collecting words in {}", path.display());
        let items = parse_drill(BufReader::new(File::open(path)?))?;
        words.extend(items.into_iter().map(|item| item.word));
    }

    let map = WordMap::generate(&dictionary, &words);
    println!("{}", map.to_json_string()?);
    Ok(())
}
