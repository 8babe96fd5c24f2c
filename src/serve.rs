//! Scripted break between a point and the next serve
//!
//! When a rally ends the court goes quiet for a fixed number of rule ticks:
//! avatars and ball stay drawn frozen where the rally left them while their
//! bodies are disabled, then everything is reset, the ball is parked asleep
//! at the server's position, and the win check runs.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::ball::{Ball, place_for_serve};
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::input::PlayerInput;
use crate::pause::PauseState;
use crate::player::{BounceCounter, Grounded, Player, Side};
use crate::scoring::{Score, ServingSide};
use crate::settings::CurrentSettings;

/// Resource tracking the post-point break
#[derive(Resource)]
pub struct PointBreak {
    /// Whether a break is in progress
    pub active: bool,
    /// Rule ticks left before the next serve
    ticks_remaining: u32,
    /// Whether the bodies have been frozen for this break yet
    frozen: bool,
}

impl Default for PointBreak {
    fn default() -> Self {
        Self {
            active: false,
            ticks_remaining: 0,
            frozen: false,
        }
    }
}

impl PointBreak {
    /// Begin a break of the standard length
    pub fn start(&mut self) {
        self.active = true;
        self.ticks_remaining = BREAK_TICKS;
        self.frozen = false;
    }

    /// Count one tick down; returns true when the break just finished
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
        if self.ticks_remaining == 0 {
            self.active = false;
            true
        } else {
            false
        }
    }

    pub fn ticks_remaining(&self) -> u32 {
        self.ticks_remaining
    }
}

/// Run condition: a break is in progress
pub fn in_break(point_break: Res<PointBreak>) -> bool {
    point_break.active
}

/// Run condition: live play (no break in progress)
pub fn not_in_break(point_break: Res<PointBreak>) -> bool {
    !point_break.active
}

/// Drive the break: freeze the bodies where the rally left them on the
/// first tick, then count down and stage the next serve. Runs on the fixed
/// rule tick while a break is active and the game is not paused.
pub fn run_break(
    mut commands: Commands,
    mut point_break: ResMut<PointBreak>,
    mut pause: ResMut<PauseState>,
    mut input: ResMut<PlayerInput>,
    mut bus: ResMut<EventBus>,
    score: Res<Score>,
    serving: Res<ServingSide>,
    settings: Res<CurrentSettings>,
    mut players: Query<
        (
            Entity,
            &Side,
            &mut Transform,
            &mut Velocity,
            &mut Grounded,
            &mut BounceCounter,
        ),
        With<Player>,
    >,
    mut balls: Query<
        (Entity, &mut Transform, &mut Velocity, &mut Sleeping),
        (With<Ball>, Without<Player>),
    >,
) {
    if !point_break.frozen {
        point_break.frozen = true;
        input.clear();
        // Bodies stay drawn at their rally-end positions for the break
        for (entity, _, _, mut velocity, _, _) in &mut players {
            velocity.linvel = Vec2::ZERO;
            commands.entity(entity).insert(RigidBodyDisabled);
        }
        for (entity, _, mut velocity, _) in &mut balls {
            velocity.linvel = Vec2::ZERO;
            velocity.angvel = 0.0;
            commands.entity(entity).insert(RigidBodyDisabled);
        }
    }

    if !point_break.tick() {
        return;
    }

    // Break over: reset the court for the next serve
    for (entity, side, mut transform, mut velocity, mut grounded, mut counter) in &mut players {
        let spawn = side.spawn_position();
        transform.translation.x = spawn.x;
        transform.translation.y = spawn.y;
        velocity.linvel = Vec2::ZERO;
        grounded.0 = true;
        counter.reset();
        commands.entity(entity).remove::<RigidBodyDisabled>();
    }

    for (entity, mut transform, mut velocity, mut sleeping) in &mut balls {
        place_for_serve(serving.0, &mut transform, &mut velocity, &mut sleeping);
        commands.entity(entity).remove::<RigidBodyDisabled>();
    }

    if let Some(winner) = score.winner(settings.settings.win_score) {
        pause.declare_winner(winner);
        bus.emit(GameEvent::MatchEnd {
            winner,
            score_left: score.left,
            score_right: score.right,
        });
        info!(
            "Match over: {} player wins {}:{}",
            winner, score.left, score.right
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn break_runs_for_the_standard_length() {
        let mut point_break = PointBreak::default();
        point_break.start();
        assert!(point_break.active);

        for _ in 0..BREAK_TICKS - 1 {
            assert!(!point_break.tick());
            assert!(point_break.active);
        }
        assert!(point_break.tick());
        assert!(!point_break.active);
    }

    #[test]
    fn tick_is_a_noop_when_inactive() {
        let mut point_break = PointBreak::default();
        assert!(!point_break.tick());
        assert_eq!(point_break.ticks_remaining(), 0);
    }

    #[test]
    fn restarting_a_break_rewinds_the_timer() {
        let mut point_break = PointBreak::default();
        point_break.start();
        point_break.tick();
        point_break.start();
        assert_eq!(point_break.ticks_remaining(), BREAK_TICKS);
    }
}
