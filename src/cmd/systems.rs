use crate::reports;
use clap::Args;
use std::sync::Arc;
use steno_drill::system::{StenoSystem, SystemId};
use steno_drill::wordmap::WordMap;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct SystemsArgs {
    /// Only show systems whose name contains this text
    #[arg(short, long)]
    pub filter: Option<String>,
}

pub fn run(args: SystemsArgs) {
    println!("\n🗂  === STENO SYSTEMS === 🗂");
    for id in SystemId::iter() {
        let name = id.to_string();
        if let Some(ref filter) = args.filter {
            if !name.contains(&filter.to_lowercase()) {
                continue;
            }
        }

        let system = StenoSystem::new(id, Arc::new(WordMap::default()));
        println!("\n{} ({})", name, system.layout.name);
        println!("{}", system.footer);
        reports::print_layout_grid(&system.layout);
    }
}
