//! Per-frame simulation tick
//!
//! Advances the game deterministically: one external frame trigger, one tick,
//! no dt parameter — all rates are per-tick. Ticks outside Running are
//! physics no-ops.

use super::state::{GamePhase, GameState};
use super::{collision, obstacles, tether};

impl GameState {
    /// Advance one frame of simulation.
    ///
    /// Tick order while Running: score, scroll, recycle, gravity, tether,
    /// vertical integration, collision resolution, horizontal world-shift,
    /// game-over check. Horizontal motion is expressed as world movement:
    /// residual `vel.x` shifts obstacles and anchor, never the player.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }

        self.score += 1;

        // Scroll the world left under the fixed player
        let scroll = self.config.scroll_speed;
        for obstacle in &mut self.obstacles {
            obstacle.x -= scroll;
        }
        if self.tether.active {
            self.tether.anchor.x -= scroll;
        }

        // Recycle the leading obstacle once fully off-screen, one-for-one
        if self.obstacles.first().is_some_and(|o| o.right() < 0.0) {
            self.obstacles.remove(0);
            obstacles::append_next(&mut self.obstacles, &mut self.rng, &self.config);
            log::debug!("Recycled leading obstacle");
        }

        // Gravity only while airborne and untethered; the tether replaces it
        // with its own force model
        if !self.player.on_ground && !self.tether.active {
            self.player.vel.y += self.config.gravity;
        }

        if self.tether.active {
            tether::update(&mut self.player, &mut self.tether, self.input, &self.config);
        }

        // Integrate vertical position; x stays fixed in the scroll frame
        let prev = self.player.pos;
        self.player.pos.y += self.player.vel.y;

        collision::resolve_platform_contacts(prev, &mut self.player, &self.obstacles);
        collision::clamp_world_ceiling(&mut self.player, &self.config);

        // Residual horizontal velocity becomes world movement, then dies
        let vx = self.player.vel.x;
        if vx != 0.0 {
            for obstacle in &mut self.obstacles {
                obstacle.x -= vx;
            }
            if self.tether.active {
                self.tether.anchor.x -= vx;
            }
            self.player.vel.x = 0.0;
        }

        if self.tether.active {
            self.tether.start = self.player.pos;
        }

        if collision::is_game_over(&self.player, &self.obstacles, &self.config) {
            self.phase = GamePhase::GameOver;
            log::info!("Game over at score {}", self.score);
        }
    }
}
