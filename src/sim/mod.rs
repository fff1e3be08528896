//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per external frame trigger, run to completion
//! - Seeded RNG only
//! - One `GameState` value, no ambient globals
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod state;
pub mod tether;
pub mod tick;

pub use collision::{Contact, is_game_over, resolve_platform_contacts};
pub use state::{GamePhase, GameState, InputSignal, InputState, Obstacle, Player, Tether};
pub use tether::find_anchor;
