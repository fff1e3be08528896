//! Player-vs-platform collision resolution and the lethal terminal pass
//!
//! A discrete per-tick sweep against the obstacle sequence: obstacles are
//! scanned in insertion order and the first one satisfying any contact
//! condition wins. Tunneling through thin obstacles at high relative speed is
//! an accepted limitation of the discrete sweep, not something to patch over.
//!
//! Side contact is handled twice on purpose: the sweep here BLOCKS motion,
//! while `is_game_over` treats side proximity as lethal when airborne. Both
//! paths are reachable and behaviorally distinct (block vs death).

use glam::Vec2;

use super::state::{Obstacle, Player};
use crate::config::{GameConfig, rates};

/// The single contact a sweep resolved, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Snapped onto a platform top; grounded, vertical velocity zeroed
    Landed,
    /// Bumped the underside of a platform top while moving up
    CeilingBump,
    /// Stopped against a vertical face; horizontal velocity zeroed
    SideBlocked,
}

/// Resolve at most one platform contact for this tick.
///
/// `prev` is the player position before vertical integration; the crossing
/// conditions compare previous and current edges against the platform
/// surfaces. Clears `on_ground` before the sweep and re-sets it on landing.
pub fn resolve_platform_contacts(
    prev: Vec2,
    player: &mut Player,
    obstacles: &[Obstacle],
) -> Option<Contact> {
    player.on_ground = false;

    for obstacle in obstacles {
        let top = obstacle.top();

        if obstacle.overlaps_x(player.pos.x, player.radius) {
            // Landing: bottom crossed the top surface while falling
            if prev.y + player.radius <= top && player.bottom() >= top && player.vel.y >= 0.0 {
                player.pos.y = top - player.radius;
                player.vel.y = 0.0;
                player.on_ground = true;
                return Some(Contact::Landed);
            }

            // Ceiling bump: top crossed the surface from below while rising
            if prev.y - player.radius >= top && player.top() <= top && player.vel.y < 0.0 {
                player.pos.y = top + player.radius;
                player.vel.y = 0.0;
                return Some(Contact::CeilingBump);
            }
        }

        // Side block: vertical overlap with the obstacle body, previous edge
        // outside the face, current edge past it
        if player.bottom() > top && player.top() < obstacle.y {
            if prev.x - player.radius >= obstacle.right() && player.left_edge() <= obstacle.right()
            {
                player.pos.x = obstacle.right() + player.radius;
                player.vel.x = 0.0;
                return Some(Contact::SideBlocked);
            }

            if prev.x + player.radius <= obstacle.x && player.right_edge() >= obstacle.x {
                player.pos.x = obstacle.x - player.radius;
                player.vel.x = 0.0;
                return Some(Contact::SideBlocked);
            }
        }
    }

    None
}

/// Unconditional world-ceiling clamp: the player never pokes above the
/// ceiling line.
pub fn clamp_world_ceiling(player: &mut Player, config: &GameConfig) {
    if player.top() < config.ceiling_height {
        player.pos.y = config.ceiling_height + player.radius;
        player.vel.y = 0.0;
    }
}

/// Terminal-state pass, separate from contact resolution.
///
/// The run ends when the player falls past the screen bottom, or — only
/// while airborne — when a horizontal edge sits within the kill tolerance of
/// an obstacle's vertical side while vertically overlapping its body.
pub fn is_game_over(player: &Player, obstacles: &[Obstacle], config: &GameConfig) -> bool {
    if player.bottom() > config.height {
        return true;
    }

    if player.on_ground {
        return false;
    }

    for obstacle in obstacles {
        if player.bottom() > obstacle.top() && player.top() < obstacle.y {
            if (player.right_edge() - obstacle.x).abs() < rates::SIDE_KILL_TOLERANCE {
                return true;
            }
            if (player.left_edge() - obstacle.right()).abs() < rates::SIDE_KILL_TOLERANCE {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f32 = 15.0;

    fn platform() -> Obstacle {
        // Body spans y 450..550, top surface at 450
        Obstacle {
            x: 200.0,
            y: 550.0,
            width: 150.0,
            height: 100.0,
        }
    }

    fn player_at(x: f32, y: f32, vel: Vec2) -> Player {
        Player {
            pos: Vec2::new(x, y),
            vel,
            radius: RADIUS,
            on_ground: false,
        }
    }

    #[test]
    fn test_landing_snaps_and_grounds() {
        let obstacles = [platform()];
        // Falling across the top surface: prev bottom 445, current bottom 465
        let prev = Vec2::new(250.0, 430.0);
        let mut player = player_at(250.0, 450.0, Vec2::new(0.0, 20.0));

        let contact = resolve_platform_contacts(prev, &mut player, &obstacles);

        assert_eq!(contact, Some(Contact::Landed));
        assert_eq!(player.bottom(), 450.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(player.on_ground);
    }

    #[test]
    fn test_landing_is_idempotent_for_resting_player() {
        let obstacles = [platform()];
        let mut player = player_at(250.0, 435.0, Vec2::ZERO);
        player.on_ground = true;
        let prev = player.pos;

        let contact = resolve_platform_contacts(prev, &mut player, &obstacles);

        assert_eq!(contact, Some(Contact::Landed));
        assert_eq!(player.pos, prev);
        assert!(player.on_ground);
    }

    #[test]
    fn test_ceiling_bump_zeroes_vertical_velocity_only() {
        let obstacles = [platform()];
        // Rising into the top surface from below: prev top 470, current top 445
        let prev = Vec2::new(250.0, 485.0);
        let mut player = player_at(250.0, 460.0, Vec2::new(0.0, -25.0));

        let contact = resolve_platform_contacts(prev, &mut player, &obstacles);

        assert_eq!(contact, Some(Contact::CeilingBump));
        assert_eq!(player.top(), 450.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(!player.on_ground);
    }

    #[test]
    fn test_side_block_snaps_to_face_and_zeroes_vx() {
        let obstacles = [platform()];
        // Vertically inside the body, left edge crossing the right face
        let prev = Vec2::new(370.0, 500.0);
        let mut player = player_at(360.0, 500.0, Vec2::new(-10.0, 0.0));

        let contact = resolve_platform_contacts(prev, &mut player, &obstacles);

        assert_eq!(contact, Some(Contact::SideBlocked));
        assert_eq!(player.left_edge(), 350.0);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_first_obstacle_in_sequence_wins() {
        let a = platform();
        let mut b = platform();
        b.x = 210.0; // Overlapping body, would also match
        let obstacles = [a, b];

        let prev = Vec2::new(250.0, 430.0);
        let mut player = player_at(250.0, 450.0, Vec2::new(0.0, 20.0));
        let contact = resolve_platform_contacts(prev, &mut player, &obstacles);

        // Resolution stopped at the first hit; result reflects obstacle `a`
        assert_eq!(contact, Some(Contact::Landed));
        assert_eq!(player.bottom(), a.top());
    }

    #[test]
    fn test_no_contact_in_open_air() {
        let obstacles = [platform()];
        let prev = Vec2::new(100.0, 200.0);
        let mut player = player_at(100.0, 205.0, Vec2::new(0.0, 5.0));

        assert_eq!(
            resolve_platform_contacts(prev, &mut player, &obstacles),
            None
        );
        assert!(!player.on_ground);
    }

    #[test]
    fn test_world_ceiling_clamps_from_below() {
        let config = GameConfig::default();
        let mut player = player_at(100.0, 40.0, Vec2::new(0.0, -8.0));

        clamp_world_ceiling(&mut player, &config);

        assert_eq!(player.top(), config.ceiling_height);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_fall_past_screen_bottom_is_lethal() {
        let config = GameConfig::default();
        let player = player_at(100.0, 590.0, Vec2::ZERO);
        assert!(is_game_over(&player, &[], &config));
    }

    #[test]
    fn test_airborne_side_proximity_is_lethal() {
        let config = GameConfig::default();
        let obstacles = [platform()];
        // Right edge 3 units short of the left face, body overlap
        let player = player_at(182.0, 500.0, Vec2::ZERO);
        assert!(is_game_over(&player, &obstacles, &config));
    }

    #[test]
    fn test_grounded_side_proximity_is_not_lethal() {
        let config = GameConfig::default();
        let obstacles = [platform()];
        let mut player = player_at(182.0, 500.0, Vec2::ZERO);
        player.on_ground = true;
        assert!(!is_game_over(&player, &obstacles, &config));
    }

    #[test]
    fn test_side_proximity_without_vertical_overlap_is_safe() {
        let config = GameConfig::default();
        let obstacles = [platform()];
        // Horizontally adjacent to the face but above the body
        let player = player_at(182.0, 400.0, Vec2::ZERO);
        assert!(!is_game_over(&player, &obstacles, &config));
    }
}
