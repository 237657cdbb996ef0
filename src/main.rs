use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use sidescroller::entity::{Camera, InputState, Key, Player};
use sidescroller::render::render_svg;
use sidescroller::{GameConfig, World};
use std::path::PathBuf;

/// Headless runner: steps the world with a fixed set of held keys
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// World seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Keys held for the whole run, e.g. `ArrowRight,Space`
    #[arg(long, value_delimiter = ',')]
    hold: Vec<Key>,

    /// Config file name, RON format (extension optional)
    #[arg(long, default_value = "config")]
    config: String,

    /// Write the final frame as SVG
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Print the final state as RON
    #[arg(long)]
    summary: bool,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    player: Player,
    camera: Camera,
    loaded_chunks: Vec<i32>,
    blocks: usize,
    grounded: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut config = GameConfig::load_from(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }

    let input = InputState::holding(args.hold.iter().copied());
    log::info!("Starting sidescroller: {} frames, holding {:?}", args.frames, args.hold);

    let mut world = World::new(&config);
    let mut grounded = false;
    for _ in 0..args.frames {
        let report = world.step(&input);
        grounded = report.physics.grounded();

        if report.frame % 60 == 0 {
            log::info!(
                "Frame {}: player at ({:.1}, {:.1}), chunks {:?}",
                report.frame,
                world.player.position.x,
                world.player.position.y,
                world.loaded_chunks()
            );
        }
    }

    if let Some(path) = &args.svg {
        std::fs::write(path, render_svg(&world.snapshot()))
            .with_context(|| format!("Failed to write SVG to {:?}", path))?;
        log::info!("Wrote final frame to {:?}", path);
    }

    if args.summary {
        let summary = RunSummary {
            seed: world.seed(),
            frames: world.frame(),
            player: world.player,
            camera: world.camera,
            loaded_chunks: world.loaded_chunks(),
            blocks: world.chunk_manager().block_count(),
            grounded,
        };
        let text = ron::ser::to_string_pretty(&summary, ron::ser::PrettyConfig::default())
            .context("Failed to serialize run summary")?;
        println!("{}", text);
    }

    Ok(())
}
