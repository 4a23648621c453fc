use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use blocky_blocks::Palette;
use blocky_runtime::ChunkManager;
use blocky_world::World;

mod config;
mod session;

use config::BlockyConfig;

/// Headless driver: builds the chunk registry and runs a scripted edit session.
#[derive(Parser, Debug)]
#[command(name = "blocky", version, about)]
struct Args {
    /// Path to a blocky.toml
    #[arg(long, default_value = "blocky.toml")]
    config: PathBuf,
    /// World seed (overrides config)
    #[arg(long)]
    seed: Option<i32>,
    /// Chunk grid radius (overrides config)
    #[arg(long)]
    radius: Option<i32>,
    /// Number of scripted add/remove edits to run
    #[arg(long, default_value_t = 4)]
    edits: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run(Args::parse()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut cfg = if args.config.exists() {
        log::info!("loading {}", args.config.display());
        BlockyConfig::from_path(&args.config)?
    } else {
        log::info!("{} not found; using defaults", args.config.display());
        BlockyConfig::from_toml_str("")?
    };
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(radius) = args.radius {
        cfg.runtime.grid_radius = radius;
    }

    let palette = match &cfg.palette {
        Some(path) => Palette::from_path(path)?,
        None => Palette::builtin()?,
    };
    let world = World::new(cfg.seed, cfg.world.clone());
    let radius = cfg.runtime.grid_radius;
    let mut chunks = ChunkManager::new(world, Arc::new(palette), cfg.runtime.clone());
    chunks.initialize(radius);

    let scene = chunks.mesh();
    log::info!(
        "scene: {} parts, {} triangles",
        scene.parts.len(),
        scene.triangle_count()
    );
    let collision = chunks.collision_mesh().triangle_count();
    log::info!(
        "collision: {} triangles, {} doors",
        collision,
        chunks.doors().count()
    );

    let report = session::run_edits(&mut chunks, args.edits);
    log::info!(
        "session: {} added, {} removed, {} rejected; {} blocks",
        report.added,
        report.removed,
        report.rejected,
        chunks.block_count()
    );
    Ok(())
}
