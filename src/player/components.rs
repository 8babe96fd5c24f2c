//! Player-related components

use bevy::prelude::*;
use serde::Serialize;

use crate::constants::*;

/// Marker for player entities
#[derive(Component)]
pub struct Player;

/// Which half of the court a player defends
#[derive(Component, Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Spawn position for this side's player
    pub fn spawn_position(self) -> Vec2 {
        match self {
            Side::Left => Vec2::new(-PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            Side::Right => Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
        }
    }

    /// Where the ball is parked when this side serves
    pub fn serve_position(self) -> Vec2 {
        match self {
            Side::Left => Vec2::new(-SERVE_X, SERVE_Y),
            Side::Right => Vec2::new(SERVE_X, SERVE_Y),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Whether the player is on the sand (jump allowed)
#[derive(Component)]
pub struct Grounded(pub bool);

impl Default for Grounded {
    fn default() -> Self {
        Self(true)
    }
}

/// Consecutive touches since the ball last changed possession.
/// A fourth touch forfeits the rally.
#[derive(Component, Default, Debug)]
pub struct BounceCounter(u32);

impl BounceCounter {
    /// Record one touch and return the new count
    pub fn record_touch(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    pub fn count(&self) -> u32 {
        self.0
    }

    /// True once the player has touched the ball more times than allowed
    pub fn over_limit(&self) -> bool {
        self.0 > BOUNCE_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourth_touch_is_a_fault() {
        let mut counter = BounceCounter::default();
        for _ in 0..BOUNCE_LIMIT {
            counter.record_touch();
            assert!(!counter.over_limit());
        }
        counter.record_touch();
        assert!(counter.over_limit());
    }

    #[test]
    fn reset_clears_the_fault() {
        let mut counter = BounceCounter::default();
        for _ in 0..=BOUNCE_LIMIT {
            counter.record_touch();
        }
        assert!(counter.over_limit());
        counter.reset();
        assert_eq!(counter.count(), 0);
        assert!(!counter.over_limit());
    }

    #[test]
    fn sides_mirror() {
        assert_eq!(Side::Left.other(), Side::Right);
        assert_eq!(
            Side::Left.spawn_position().x,
            -Side::Right.spawn_position().x
        );
        assert_eq!(
            Side::Left.serve_position().x,
            -Side::Right.serve_position().x
        );
    }
}
