//! Presentation-free frame description
//!
//! The simulation never touches canvas or DOM types. Each frame it is
//! projected into a `Frame`, and whatever implements `RenderPort` decides how
//! to put that on screen. The wasm shell draws it with Canvas2D.

use glam::Vec2;

use crate::sim::{GamePhase, GameState};

/// An axis-aligned rectangle, top-left origin (screen coordinates, +y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Screen dimensions
    pub width: f32,
    pub height: f32,
    /// Ceiling band from y=0 down to this line
    pub ceiling_height: f32,
    /// Platform bodies in draw order
    pub obstacles: Vec<Rect>,
    /// Tether line from player to anchor, when attached
    pub tether: Option<(Vec2, Vec2)>,
    pub player_pos: Vec2,
    pub player_radius: f32,
    pub on_ground: bool,
    pub score: u64,
    pub phase: GamePhase,
}

impl Frame {
    /// Project the current game state into a drawable description
    pub fn from_state(state: &GameState) -> Self {
        let obstacles = state
            .obstacles
            .iter()
            .map(|o| Rect {
                x: o.x,
                y: o.top(),
                width: o.width,
                height: o.height,
            })
            .collect();

        let tether = state
            .tether
            .active
            .then_some((state.tether.start, state.tether.anchor));

        Self {
            width: state.config.width,
            height: state.config.height,
            ceiling_height: state.config.ceiling_height,
            obstacles,
            tether,
            player_pos: state.player.pos,
            player_radius: state.player.radius,
            on_ground: state.player.on_ground,
            score: state.score,
            phase: state.phase,
        }
    }
}

/// Output port injected by the hosting shell
pub trait RenderPort {
    fn draw(&mut self, frame: &Frame);
}
