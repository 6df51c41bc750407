use app::level::{CELL_SIZE, MAZE_HEIGHT, MAZE_WIDTH, MazeLevel, PLAYER_COLLISION_SIZE};
use app::seed::{generate_runtime_seed, resolve_seed_from_args};
use macroquad::prelude::{
    BLACK, Conf, DARKGRAY, GOLD, KeyCode, MAROON, SKYBLUE, WHITE, clear_background,
    draw_rectangle, draw_text, get_frame_time, is_key_down, is_key_pressed, next_frame,
};
use maze_core::{Cell, Vec2};

const HUD_HEIGHT: i32 = 40;
const ITEM_DRAW_SIZE: f32 = 12.0;

fn window_conf() -> Conf {
    Conf {
        window_title: app::APP_NAME.to_owned(),
        window_width: MAZE_WIDTH as i32 * CELL_SIZE as i32,
        window_height: MAZE_HEIGHT as i32 * CELL_SIZE as i32 + HUD_HEIGHT,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut seed = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(seed) => seed,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let mut level = match MazeLevel::new(seed) {
        Ok(level) => level,
        Err(error) => {
            eprintln!("maze setup failed: {error:?}");
            std::process::exit(2);
        }
    };

    loop {
        if is_key_pressed(KeyCode::R) {
            seed = generate_runtime_seed();
            if let Ok(next_level) = MazeLevel::new(seed) {
                level = next_level;
            }
        }

        let dt = get_frame_time();
        level.update(dt, input_direction());

        clear_background(BLACK);
        draw_walls(&level);
        draw_entities(&level);
        draw_hud(&level, seed);

        next_frame().await
    }
}

fn input_direction() -> Vec2 {
    let mut direction = Vec2::ZERO;
    if is_key_down(KeyCode::Left) || is_key_down(KeyCode::A) {
        direction.x -= 1.0;
    }
    if is_key_down(KeyCode::Right) || is_key_down(KeyCode::D) {
        direction.x += 1.0;
    }
    if is_key_down(KeyCode::Up) || is_key_down(KeyCode::W) {
        direction.y -= 1.0;
    }
    if is_key_down(KeyCode::Down) || is_key_down(KeyCode::S) {
        direction.y += 1.0;
    }
    direction
}

fn draw_walls(level: &MazeLevel) {
    for y in 0..level.grid.height() as i32 {
        for x in 0..level.grid.width() as i32 {
            if level.grid.is_wall(Cell { x, y }) {
                draw_rectangle(
                    x as f32 * CELL_SIZE,
                    y as f32 * CELL_SIZE,
                    CELL_SIZE,
                    CELL_SIZE,
                    DARKGRAY,
                );
            }
        }
    }
}

fn draw_entities(level: &MazeLevel) {
    if !level.item_collected {
        let item = level.placement.item;
        draw_rectangle(
            (item.x as f32 + 0.5) * CELL_SIZE - ITEM_DRAW_SIZE * 0.5,
            (item.y as f32 + 0.5) * CELL_SIZE - ITEM_DRAW_SIZE * 0.5,
            ITEM_DRAW_SIZE,
            ITEM_DRAW_SIZE,
            GOLD,
        );
    }

    draw_rectangle(
        level.player_position.x,
        level.player_position.y,
        PLAYER_COLLISION_SIZE,
        PLAYER_COLLISION_SIZE,
        SKYBLUE,
    );

    if level.enemy.is_active() {
        let enemy_position = level.enemy.position();
        let enemy_size = level.enemy.collision_size();
        draw_rectangle(enemy_position.x, enemy_position.y, enemy_size.x, enemy_size.y, MAROON);
    }
}

fn draw_hud(level: &MazeLevel, seed: u64) {
    let baseline = MAZE_HEIGHT as f32 * CELL_SIZE + 26.0;
    let status = if level.item_collected { "item collected" } else { "find the item" };
    draw_text(&format!("seed {seed}  |  {status}  |  R: new maze"), 8.0, baseline, 20.0, WHITE);
}
