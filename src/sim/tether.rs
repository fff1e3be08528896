//! Tether (web) physics
//!
//! The tricky part of the swing mechanic: a spring pull toward the anchor
//! plus a tangential pseudo-gravity term that turns radial spring motion into
//! a pendulum. Active only while attached.

use glam::Vec2;

use super::state::{InputState, Obstacle, Player, Tether};
use crate::config::{GameConfig, rates};

/// Validate an attach request.
///
/// A point on or above the ceiling line anchors at the ceiling (x preserved,
/// y clamped to the line). Otherwise the first obstacle in sequence order
/// whose body contains the point anchors at the point itself.
pub fn find_anchor(point: Vec2, obstacles: &[Obstacle], config: &GameConfig) -> Option<Vec2> {
    if point.y <= config.ceiling_height {
        return Some(Vec2::new(point.x, config.ceiling_height));
    }
    obstacles
        .iter()
        .find(|o| o.contains_point(point))
        .map(|_| point)
}

/// Advance the tether and the player's velocity by one tick.
///
/// Length adjustment always runs; the force model is skipped entirely when
/// the player sits exactly on the anchor (zero distance).
pub fn update(player: &mut Player, tether: &mut Tether, input: InputState, config: &GameConfig) {
    let delta = tether.anchor - player.pos;
    let dist_sq = delta.length_squared();
    let distance = dist_sq.sqrt();

    if input.climb && tether.length > rates::MIN_TETHER_LENGTH {
        tether.length = (tether.length - rates::CLIMB_RATE).max(rates::MIN_TETHER_LENGTH);
    } else if input.descend {
        tether.length += rates::DESCEND_RATE;
    } else if !input.climb && dist_sq > 0.0 {
        // No input: freeze the tether at its measured length. This is what
        // halts ascent the instant the climb key is released.
        tether.length = distance;
        tether.initial_length = distance;
    }

    if dist_sq <= 0.0 {
        return;
    }

    let normal = delta / distance;
    let stretch = distance - tether.length;

    // Taut tether always pulls; slack tether only bends the path while
    // airborne (grounded slack is suppressed, no force)
    let force = if stretch > 0.0 || (stretch < 0.0 && !player.on_ground) {
        stretch * rates::TETHER_SPRING
    } else {
        0.0
    };
    if force != 0.0 {
        player.vel += normal * force;
    }

    // Air resistance, both components, every taut/slack tick
    player.vel *= rates::TETHER_DAMPING;

    if !player.on_ground {
        let tangent = Vec2::new(-normal.y, normal.x);
        player.vel += tangent * (config.gravity * rates::PENDULUM_FACTOR);
    }
}
