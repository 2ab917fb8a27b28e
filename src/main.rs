//! # Burrow Main Entry Point
//!
//! Lays out a single level into the in-memory world and prints an ASCII
//! snapshot, for eyeballing layouts and tuning configurations offline.

use burrow::{
    generation::utils, BoardComposer, BoardConfig, BurrowResult, Generator, Position,
    SpawnedWorld, TileCategory,
};
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Command line arguments for the Burrow layout preview.
#[derive(Parser, Debug)]
#[command(name = "burrow")]
#[command(about = "A tile-based survival roguelike with procedurally scattered boards")]
#[command(version)]
struct Args {
    /// Random seed for board layout
    #[arg(short, long)]
    seed: Option<u64>,

    /// Level number to lay out (drives enemy count)
    #[arg(short, long, default_value_t = 1)]
    level: i32,

    /// Override the number of board rows
    #[arg(long)]
    rows: Option<i32>,

    /// Override the number of board columns
    #[arg(long)]
    columns: Option<i32>,

    /// Load the board configuration from a JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the placement log to a JSON file
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> BurrowResult<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.as_str()),
    )
    .init();

    info!("Starting Burrow v{}", burrow::VERSION);

    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => BoardConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(columns) = args.columns {
        config.columns = columns;
    }

    let mut rng = utils::create_rng(&config);
    let mut world = SpawnedWorld::new();
    let mut composer = BoardComposer::new();
    composer.generate(&config, args.level, &mut rng, &mut world)?;

    if let Some(path) = &args.dump {
        fs::write(path, serde_json::to_string_pretty(&world.snapshot())?)?;
        info!("placement log written to {}", path.display());
    }

    print_snapshot(&config, args.level, &world);
    Ok(())
}

/// Renders the recorded placements as a character grid plus a summary.
///
/// Later placements overwrite earlier ones in the grid, matching the order
/// objects stack on the board: background first, then scatter, then exit.
fn print_snapshot(config: &BoardConfig, level: i32, world: &SpawnedWorld) {
    let width = (config.columns + 2) as usize;
    let height = (config.rows + 2) as usize;
    let mut grid = vec![vec![' '; width]; height];

    for object in world.objects() {
        let Position { x, y } = object.position;
        let row = (y + 1) as usize;
        let column = (x + 1) as usize;
        grid[row][column] = category_glyph(object.kind.category);
    }

    // y grows upward, so the top printed row is the highest y.
    for row in grid.iter().rev() {
        println!("{}", row.iter().collect::<String>());
    }

    println!();
    println!(
        "seed {} | level {} | {}x{} board",
        config.seed, level, config.rows, config.columns
    );
    for category in [
        TileCategory::Floor,
        TileCategory::OuterWall,
        TileCategory::Wall,
        TileCategory::Food,
        TileCategory::Enemy,
        TileCategory::Exit,
    ] {
        println!(
            "{:>10}: {}",
            category.name(),
            world.count_in_category(category)
        );
    }
}

fn category_glyph(category: TileCategory) -> char {
    match category {
        TileCategory::Floor => '.',
        TileCategory::OuterWall => '#',
        TileCategory::Wall => '+',
        TileCategory::Food => '%',
        TileCategory::Enemy => 'g',
        TileCategory::Exit => '>',
    }
}
