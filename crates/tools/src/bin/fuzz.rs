use anyhow::Result;
use clap::Parser;
use maze_core::{
    MazeGenerator, PursuitController, Vec2, hits_wall, is_reachable, plan_placement, world_to_cell,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 20_000)]
    ticks: u32,
}

const CELL_SIZE: f32 = 32.0;
const AGENT_SIZE: f32 = 20.0;
const AGENT_SPEED: f32 = 120.0;
const TICK_SECONDS: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    let args = Args::parse();
    println!("Starting maze soak on seed {} for {} ticks...", args.seed, args.ticks);

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let grid = MazeGenerator::new(25, 15)
        .generate(&mut rng)
        .map_err(|error| anyhow::anyhow!("maze generation failed: {error:?}"))?;
    let placement = plan_placement(&grid, &mut rng);

    assert!(grid.is_passage(placement.start), "Invariant failed: start on a wall");
    assert!(grid.is_passage(placement.item), "Invariant failed: item on a wall");
    assert!(
        is_reachable(placement.start, placement.item, &grid),
        "Invariant failed: item unreachable from start"
    );

    let agent_size = Vec2::splat(AGENT_SIZE);
    let mut agent_position = Vec2::new(
        (placement.start.x as f32 + 0.5) * CELL_SIZE - AGENT_SIZE * 0.5,
        (placement.start.y as f32 + 0.5) * CELL_SIZE - AGENT_SIZE * 0.5,
    );
    let mut enemy = PursuitController::new();
    let mut steer = ChaCha8Rng::seed_from_u64(args.seed ^ 0x5EED);
    let mut heading = random_cardinal(&mut steer);
    let mut activations = 0_u32;
    let mut was_active = false;

    for _ in 0..args.ticks {
        if steer.next_u64() % 30 == 0 {
            heading = random_cardinal(&mut steer);
        }

        // Axis-separated agent walk through the shared corner test.
        let step = heading * (AGENT_SPEED * TICK_SECONDS);
        let horizontal = Vec2::new(agent_position.x + step.x, agent_position.y);
        if hits_wall(horizontal, agent_size, &grid, CELL_SIZE) {
            heading = random_cardinal(&mut steer);
        } else {
            agent_position = horizontal;
        }
        let vertical = Vec2::new(agent_position.x, agent_position.y + step.y);
        if !hits_wall(vertical, agent_size, &grid, CELL_SIZE) {
            agent_position = vertical;
        }

        enemy.update(TICK_SECONDS, &mut agent_position, agent_size, &grid, CELL_SIZE, &mut rng);

        if enemy.is_active() {
            assert!(
                !hits_wall(enemy.position(), enemy.collision_size(), &grid, CELL_SIZE),
                "Invariant failed: enemy inside a wall"
            );
        }
        if enemy.is_active() && !was_active {
            activations += 1;
        }
        was_active = enemy.is_active();

        assert!(
            !hits_wall(agent_position, agent_size, &grid, CELL_SIZE),
            "Invariant failed: agent inside a wall"
        );
        let agent_cell = world_to_cell(agent_position + agent_size * 0.5, CELL_SIZE);
        assert!(grid.in_bounds(agent_cell), "Invariant failed: agent left the grid");
    }

    println!("Soak complete: {} ticks, {} enemy activations.", args.ticks, activations);
    Ok(())
}

fn random_cardinal(rng: &mut ChaCha8Rng) -> Vec2 {
    match rng.next_u64() % 4 {
        0 => Vec2::new(1.0, 0.0),
        1 => Vec2::new(-1.0, 0.0),
        2 => Vec2::new(0.0, 1.0),
        _ => Vec2::new(0.0, -1.0),
    }
}
