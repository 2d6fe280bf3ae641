use lensim::{load_config, LensConfig, LensingScene};
use lensim::{BevyRenderer, SceneRenderer};

use clap::Parser;
use anyhow::Result;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "black_hole.yaml")]
    file_name: String,

    /// Ignore the scenario file and use the built-in constants
    #[arg(long)]
    defaults: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<LensConfig> {
    if args.defaults {
        log::info!("using built-in scenario");
        return Ok(LensConfig::default());
    }

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    load_config(&config_path)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let cfg = load_scenario(&args)?;

    let scene = LensingScene::build(&cfg);
    BevyRenderer.render(scene)
}
