//! Game dimensions and tuning
//!
//! One validated `GameConfig` value is handed to the simulation at init and
//! never mutated afterwards. Out-of-range values (negative sizes, inverted
//! min/max ranges) are a caller contract violation.

use serde::{Deserialize, Serialize};

/// Fixed per-tick simulation rates. These are tied to the per-frame tick and
/// are not data-driven.
pub mod rates {
    /// Tether shortening per tick while the climb input is held
    pub const CLIMB_RATE: f32 = 8.0;
    /// Tether lengthening per tick while the descend input is held
    pub const DESCEND_RATE: f32 = 2.0;
    /// Climbing never takes the tether below this length
    pub const MIN_TETHER_LENGTH: f32 = 50.0;
    /// Spring constant for the tether pull force
    pub const TETHER_SPRING: f32 = 0.1;
    /// Velocity damping applied every tick the tether is taut (air resistance)
    pub const TETHER_DAMPING: f32 = 0.98;
    /// Fraction of gravity applied along the swing tangent while airborne
    pub const PENDULUM_FACTOR: f32 = 0.5;
    /// Proximity to an obstacle side that is lethal while airborne
    pub const SIDE_KILL_TOLERANCE: f32 = 5.0;
}

/// Static game configuration (screen, physics, obstacle ranges)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Screen width in world units (world x scrolls, screen x is fixed)
    pub width: f32,
    /// Screen height; falling past it ends the run
    pub height: f32,
    /// Downward acceleration per tick while airborne and untethered
    pub gravity: f32,
    /// World scroll per tick while running
    pub scroll_speed: f32,
    /// Width of the fixed starting platform
    pub initial_platform_width: f32,
    /// Player diameter (radius = size / 2)
    pub player_size: f32,
    /// Gap range between consecutive obstacles
    pub min_obstacle_distance: f32,
    pub max_obstacle_distance: f32,
    /// Obstacle body height range
    pub min_obstacle_height: f32,
    pub max_obstacle_height: f32,
    /// Obstacle width range
    pub min_obstacle_width: f32,
    pub max_obstacle_width: f32,
    /// World ceiling line; the player is clamped below it and the tether can
    /// anchor on it
    pub ceiling_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            gravity: 0.5,
            scroll_speed: 3.0,
            initial_platform_width: 400.0,
            player_size: 30.0,
            min_obstacle_distance: 100.0,
            max_obstacle_distance: 300.0,
            min_obstacle_height: 50.0,
            max_obstacle_height: 150.0,
            min_obstacle_width: 100.0,
            max_obstacle_width: 250.0,
            ceiling_height: 50.0,
        }
    }
}

impl GameConfig {
    /// Player collision radius
    #[inline]
    pub fn player_radius(&self) -> f32 {
        self.player_size / 2.0
    }

    /// Parse a config from JSON, falling back to defaults on failure.
    ///
    /// The shell uses this to load tuning overrides; a malformed document is
    /// not fatal.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Invalid config JSON, using defaults: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let config = GameConfig::default();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.player_radius(), 15.0);
    }

    #[test]
    fn test_from_json_roundtrip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed = GameConfig::from_json(&json);
        assert_eq!(parsed.scroll_speed, config.scroll_speed);
        assert_eq!(parsed.ceiling_height, config.ceiling_height);
    }

    #[test]
    fn test_from_json_garbage_falls_back() {
        let parsed = GameConfig::from_json("not json at all");
        assert_eq!(parsed.width, 800.0);
    }
}
