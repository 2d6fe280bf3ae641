pub mod config;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use config::LensConfig;

/// Read a scenario file; omitted sections fall back to their defaults
pub fn load_config(path: &Path) -> Result<LensConfig> {
    let file = File::open(path)
        .with_context(|| format!("failed to open scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg: LensConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", path.display()))?;

    log::info!("loaded scenario {}", path.display());
    Ok(cfg)
}
