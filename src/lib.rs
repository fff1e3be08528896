//! Web Swing - a side-scrolling web-swinging platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tether physics, collisions, game state)
//! - `config`: Data-driven game dimensions and tuning
//! - `render`: Presentation-free frame description and the rendering port

pub mod config;
pub mod render;
pub mod sim;

pub use config::GameConfig;
pub use render::{Frame, RenderPort};
pub use sim::{GamePhase, GameState, InputSignal};
