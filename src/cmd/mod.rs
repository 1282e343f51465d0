pub mod check;
pub mod gen;
pub mod practice;
pub mod stroke;
pub mod systems;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use steno_drill::error::DrillResult;
use steno_drill::system::{StenoSystem, SystemId};
use steno_drill::wordmap::WordMap;
use tracing::{info, warn};

/// Builds `id`, loading the word map when one is given.
pub fn load_system(id: SystemId, word_map: Option<&Path>) -> DrillResult<StenoSystem> {
    let map = match word_map {
        Some(path) => {
            info!("📂 Loading Word Map: {}", path.display());
            WordMap::from_reader(BufReader::new(File::open(path)?))?
        }
        None => {
            if id == SystemId::Lapwing {
                warn!("⚠️  No word map given. Only complete words will be accepted.");
            }
            WordMap::default()
        }
    };
    Ok(StenoSystem::new(id, Arc::new(map)))
}
