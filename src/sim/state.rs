//! Game state and core simulation types
//!
//! One `GameState` value owns everything the simulation touches. The shell
//! holds it, drives `tick`, and polls `score`/`phase` for the HUD.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::{obstacles, tether};
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a start trigger (initial state, also after reset)
    NotRunning,
    /// Active gameplay
    Running,
    /// Run ended; reset returns to NotRunning
    GameOver,
}

/// Logical input signals fed in by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    /// Shorten the tether (climb)
    Up,
    /// Lengthen the tether (descend)
    Down,
}

/// Latest input flag values; read once per use-site inside a tick
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputState {
    pub climb: bool,
    pub descend: bool,
}

/// The swinging player
///
/// The x coordinate is fixed in the scroll frame: horizontal velocity is
/// expressed as world movement and zeroed every tick after it is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub on_ground: bool,
}

impl Player {
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn left_edge(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// A platform segment
///
/// `y` is the BOTTOM edge in screen coordinates (+y down); the walkable top
/// surface is `y - height`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge, world coordinate
    pub x: f32,
    /// Bottom edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Walkable top surface
    #[inline]
    pub fn top(&self) -> f32 {
        self.y - self.height
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Whether a point lies inside the obstacle body (tether anchors accept
    /// the full rectangle, not just the top surface)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.top() && point.y <= self.y
    }

    /// Horizontal overlap against a circle of the given center x and radius
    #[inline]
    pub fn overlaps_x(&self, center_x: f32, radius: f32) -> bool {
        center_x + radius > self.x && center_x - radius < self.right()
    }
}

/// The elastic web connecting the player to an anchor
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tether {
    pub active: bool,
    /// Player end, refreshed to the player position every tick while active
    pub start: Vec2,
    /// Anchor end, a world coordinate that scrolls with the world
    pub anchor: Vec2,
    /// Target length, adjusted by climb/descend input
    pub length: f32,
    /// Length captured at attachment (informational; refreshed on input release)
    pub initial_length: f32,
}

impl Default for Tether {
    fn default() -> Self {
        Self {
            active: false,
            start: Vec2::ZERO,
            anchor: Vec2::ZERO,
            length: 0.0,
            initial_length: 0.0,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG driving obstacle generation
    pub rng: Pcg32,
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Ticks survived this run
    pub score: u64,
    pub player: Player,
    pub tether: Tether,
    /// Ordered by x, front-to-back; insertion order is scroll order
    pub obstacles: Vec<Obstacle>,
    #[serde(default)]
    pub input: InputState,
}

impl GameState {
    /// Create a fresh game with the given seed
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            phase: GamePhase::NotRunning,
            score: 0,
            player: Player {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                radius: 0.0,
                on_ground: false,
            },
            tether: Tether::default(),
            obstacles: Vec::new(),
            input: InputState::default(),
        };
        state.seed_world();
        state
    }

    /// (Re)build the world: starting platform, generated obstacles, player on
    /// the platform top, tether and input cleared.
    fn seed_world(&mut self) {
        self.obstacles.clear();
        let initial = obstacles::seed_initial_platform(&mut self.obstacles, &self.config);
        obstacles::generate_initial(&mut self.obstacles, &mut self.rng, &self.config);

        let radius = self.config.player_radius();
        self.player = Player {
            pos: Vec2::new(100.0, initial.top() - radius),
            vel: Vec2::ZERO,
            radius,
            on_ground: true,
        };
        self.tether = Tether::default();
        self.input = InputState::default();
        self.score = 0;
    }

    /// Transition NotRunning -> Running
    pub fn request_start(&mut self) {
        if self.phase == GamePhase::NotRunning {
            self.phase = GamePhase::Running;
            log::info!("Run started (seed {})", self.seed);
        }
    }

    /// Reinitialize all state and return to NotRunning.
    ///
    /// The RNG is reseeded from the run seed, so reset replays the same
    /// obstacle course.
    pub fn request_reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.phase = GamePhase::NotRunning;
        self.seed_world();
        log::info!("Game reset");
    }

    /// Update an input flag; takes effect on the next tick
    pub fn set_input(&mut self, signal: InputSignal, pressed: bool) {
        match signal {
            InputSignal::Up => self.input.climb = pressed,
            InputSignal::Down => self.input.descend = pressed,
        }
    }

    /// Attempt to attach the tether at a world/screen point.
    ///
    /// Valid anchors are the ceiling line or a point inside some obstacle's
    /// rectangle; anything else is a silent no-op. Ignored unless Running.
    /// Re-attaching while already attached is allowed and replaces the anchor.
    pub fn request_attach(&mut self, point: Vec2) {
        if self.phase != GamePhase::Running {
            return;
        }
        let Some(anchor) = tether::find_anchor(point, &self.obstacles, &self.config) else {
            log::debug!("Attach rejected at ({:.1}, {:.1})", point.x, point.y);
            return;
        };

        let distance = self.player.pos.distance(anchor);
        self.tether = Tether {
            active: true,
            start: self.player.pos,
            anchor,
            length: distance,
            initial_length: distance,
        };
        log::debug!("Tether attached, length {distance:.1}");
    }

    /// Deactivate the tether. The last length is left stale but inert.
    pub fn request_detach(&mut self) {
        self.tether.active = false;
        self.tether.initial_length = 0.0;
        log::debug!("Tether released");
    }
}
