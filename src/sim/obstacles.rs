//! Procedural platform generation
//!
//! Obstacles are appended front-to-back with uniformly drawn width, height and
//! gap, so the sequence never overlaps in x. Generation is pure: it mutates
//! the sequence in place and has no failure modes.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::config::GameConfig;

/// Bottom edge of the fixed starting platform sits 30 units above the floor
const INITIAL_PLATFORM_HEIGHT: f32 = 30.0;
/// Starting platform is nudged right so the player never starts off-screen
const INITIAL_PLATFORM_X: f32 = 50.0;

/// Push the fixed starting platform the player spawns on.
///
/// Must be called before `generate_initial`; the rest of the course is laid
/// out relative to it.
pub fn seed_initial_platform(obstacles: &mut Vec<Obstacle>, config: &GameConfig) -> Obstacle {
    let platform = Obstacle {
        x: INITIAL_PLATFORM_X,
        y: config.height - INITIAL_PLATFORM_HEIGHT,
        width: config.initial_platform_width,
        height: INITIAL_PLATFORM_HEIGHT,
    };
    obstacles.push(platform);
    platform
}

/// Fill the course from the end of the starting platform out to 3x screen
/// width.
pub fn generate_initial(obstacles: &mut Vec<Obstacle>, rng: &mut Pcg32, config: &GameConfig) {
    let mut last_x = config.initial_platform_width;

    while last_x < config.width * 3.0 {
        let width = rng.random_range(config.min_obstacle_width..=config.max_obstacle_width);
        let height = rng.random_range(config.min_obstacle_height..=config.max_obstacle_height);
        let gap = rng.random_range(config.min_obstacle_distance..=config.max_obstacle_distance);

        last_x += gap;
        obstacles.push(Obstacle {
            x: last_x,
            y: config.height - height,
            width,
            height,
        });
        last_x += width;
    }

    log::debug!("Generated initial course of {} obstacles", obstacles.len());
}

/// Append exactly one obstacle past the current trailing one.
///
/// Called when the leading obstacle is recycled; the caller guarantees the
/// sequence is non-empty.
pub fn append_next(obstacles: &mut Vec<Obstacle>, rng: &mut Pcg32, config: &GameConfig) {
    let Some(last) = obstacles.last().copied() else {
        log::debug!("append_next on empty course; nothing to extend");
        return;
    };

    let width = rng.random_range(config.min_obstacle_width..=config.max_obstacle_width);
    let height = rng.random_range(config.min_obstacle_height..=config.max_obstacle_height);
    let gap = rng.random_range(config.min_obstacle_distance..=config.max_obstacle_distance);

    obstacles.push(Obstacle {
        x: last.x + last.width + gap,
        y: config.height - height,
        width,
        height,
    });
}
