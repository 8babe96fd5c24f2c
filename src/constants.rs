//! Tunable constants for volleyball
//!
//! All gameplay values are defined here for easy tweaking. Court geometry
//! uses world units with the origin at centre court.

use bevy::prelude::*;

// =============================================================================
// COURT DIMENSIONS
// =============================================================================

pub const COURT_WIDTH: f32 = 1200.0;
pub const COURT_HEIGHT: f32 = 650.0;
pub const COURT_HALF_WIDTH: f32 = COURT_WIDTH / 2.0;
pub const COURT_HALF_HEIGHT: f32 = COURT_HEIGHT / 2.0;

/// Top surface of the sand, 1/22 of the court height above the bottom edge
pub const GROUND_TOP_Y: f32 = -COURT_HALF_HEIGHT + COURT_HEIGHT / 22.0;
pub const GROUND_THICKNESS: f32 = 20.0;
pub const WALL_THICKNESS: f32 = 20.0;

/// Net rises from the floor to 7/24 of the court height
pub const NET_TOP_Y: f32 = -COURT_HALF_HEIGHT + 7.0 * COURT_HEIGHT / 24.0;
pub const NET_THICKNESS: f32 = 10.0;

// =============================================================================
// PHYSICS CONSTANTS
// =============================================================================

pub const GRAVITY: Vec2 = Vec2::new(0.0, -900.0);
/// Rule systems tick at the original simulation rate
pub const RULE_TICK_HZ: f64 = 50.0;

pub const PLAYER_RADIUS: f32 = 55.0;
pub const BALL_RADIUS: f32 = 30.0;

pub const MOVE_SPEED: f32 = 350.0;
pub const JUMP_VELOCITY: f32 = 550.0;
/// A player this close above their spawn height while falling counts as landed
pub const LANDING_EPSILON: f32 = 20.0;

pub const BALL_RESTITUTION: f32 = 0.9;
/// Speed cap applied to the ball every tick
pub const BALL_MAX_SPEED: f32 = 1200.0;

// =============================================================================
// MATCH RULES
// =============================================================================

/// Consecutive touches allowed before the next one forfeits the rally
pub const BOUNCE_LIMIT: u32 = 3;
/// First score to reach this wins (overridable from settings)
pub const DEFAULT_WIN_SCORE: u32 = 15;
/// Fixed ticks of the scripted break between a point and the next serve
pub const BREAK_TICKS: u32 = 20;

// =============================================================================
// SPAWN POSITIONS
// =============================================================================

/// Players start 1/24 of the court width in from their back wall
pub const PLAYER_SPAWN_X: f32 = COURT_HALF_WIDTH - COURT_WIDTH / 24.0 - PLAYER_RADIUS;
pub const PLAYER_SPAWN_Y: f32 = GROUND_TOP_Y + PLAYER_RADIUS;

/// Serve drop point: a sixth of the court out from the net, above head height
pub const SERVE_X: f32 = COURT_WIDTH / 4.0 - COURT_WIDTH / 12.0;
pub const SERVE_Y: f32 = COURT_HEIGHT / 13.0;

// =============================================================================
// COLORS
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::srgb(0.53, 0.75, 0.92); // Beach sky
pub const SAND_COLOR: Color = Color::srgb(0.87, 0.77, 0.55);
pub const NET_COLOR: Color = Color::srgb(0.95, 0.95, 0.95);
pub const LEFT_PLAYER_COLOR: Color = Color::srgb(0.85, 0.25, 0.2);
pub const RIGHT_PLAYER_COLOR: Color = Color::srgb(0.2, 0.35, 0.85);
pub const BALL_COLOR: Color = Color::srgb(0.98, 0.85, 0.2);

pub const TEXT_PRIMARY: Color = Color::srgb(0.1, 0.1, 0.1);
pub const TEXT_ALERT: Color = Color::srgb(0.85, 0.1, 0.1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_clears_the_sand() {
        assert!(NET_TOP_Y > GROUND_TOP_Y);
    }

    #[test]
    fn spawns_sit_inside_the_court() {
        assert!(PLAYER_SPAWN_X + PLAYER_RADIUS < COURT_HALF_WIDTH);
        assert!(SERVE_X < COURT_HALF_WIDTH && SERVE_X > 0.0);
        assert!(PLAYER_SPAWN_Y - PLAYER_RADIUS >= GROUND_TOP_Y - 0.001);
    }
}
