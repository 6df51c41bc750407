use anyhow::Result;
use clap::Parser;
use maze_core::{Cell, MazeGenerator, MazePlacement, WallGrid, plan_placement};
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 25)]
    width: usize,
    #[arg(long, default_value_t = 15)]
    height: usize,
    /// Emit a machine-readable snapshot instead of the ASCII view.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct MazeSnapshot {
    seed: u64,
    width: usize,
    height: usize,
    start: (i32, i32),
    item: (i32, i32),
    fingerprint: String,
    rows: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let grid = MazeGenerator::new(args.width, args.height)
        .generate(&mut rng)
        .map_err(|error| anyhow::anyhow!("maze generation failed: {error:?}"))?;
    let placement = plan_placement(&grid, &mut rng);

    if args.json {
        let snapshot = MazeSnapshot {
            seed: args.seed,
            width: grid.width(),
            height: grid.height(),
            start: (placement.start.x, placement.start.y),
            item: (placement.item.x, placement.item.y),
            fingerprint: format!("0x{:016x}", grid.fingerprint()),
            rows: ascii_rows(&grid, placement),
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    for row in ascii_rows(&grid, placement) {
        println!("{row}");
    }
    println!("seed: {}", args.seed);
    println!(
        "start: ({}, {})  item: ({}, {})",
        placement.start.x, placement.start.y, placement.item.x, placement.item.y
    );
    println!("fingerprint: 0x{:016x}", grid.fingerprint());
    Ok(())
}

fn ascii_rows(grid: &WallGrid, placement: MazePlacement) -> Vec<String> {
    (0..grid.height() as i32)
        .map(|y| {
            (0..grid.width() as i32)
                .map(|x| {
                    let cell = Cell { x, y };
                    if cell == placement.start {
                        'S'
                    } else if cell == placement.item {
                        'I'
                    } else if grid.is_wall(cell) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect()
}
