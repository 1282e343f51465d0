use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use steno_drill::config::Config;
use steno_drill::error::DrillResult;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with session settings; command-line flags win
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported steno systems and their key charts
    Systems(cmd::systems::SystemsArgs),
    /// Show which keys an outline presses
    Stroke(cmd::stroke::StrokeArgs),
    /// Judge typed text against an expected word
    Check(cmd::check::CheckArgs),
    /// Build a word map from a steno dictionary and drill files
    Gen(cmd::gen::GenArgs),
    /// Run a drill on the terminal
    Practice(cmd::practice::PracticeArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &clap::ArgMatches) -> DrillResult<()> {
    match cli.command {
        Commands::Systems(args) => {
            cmd::systems::run(args);
            Ok(())
        }
        Commands::Stroke(args) => cmd::stroke::run(args),
        Commands::Check(args) => cmd::check::run(args),
        Commands::Gen(args) => cmd::gen::run(args),
        Commands::Practice(args) => {
            let config = match &cli.config {
                Some(path) => {
                    info!("⚙️  Loading Config from: {}", path.display());
                    let mut file_config = Config::load_from_file(path)?;
                    if let Some(sub_matches) = matches.subcommand_matches("practice") {
                        file_config.merge_from_cli(&args.config, sub_matches);
                    }
                    file_config
                }
                None => args.config.clone(),
            };
            cmd::practice::run(args, config)
        }
    }
}
