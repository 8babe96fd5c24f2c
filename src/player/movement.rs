//! Player spawning and movement systems
//!
//! Players are dynamic rigid bodies with locked rotation; movement writes
//! their linear velocity directly so the physics engine handles contacts
//! with the ball and the court.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::audio::SoundEffects;
use crate::constants::*;
use crate::input::PlayerInput;

use super::{BounceCounter, Grounded, Player, Side};

/// Spawn one player on each side of the net
pub fn spawn_players(commands: &mut Commands) {
    for (side, color) in [
        (Side::Left, LEFT_PLAYER_COLOR),
        (Side::Right, RIGHT_PLAYER_COLOR),
    ] {
        let spawn = side.spawn_position();
        commands.spawn((
            Sprite::from_color(color, Vec2::splat(2.0 * PLAYER_RADIUS)),
            Transform::from_xyz(spawn.x, spawn.y, 1.0),
            Player,
            side,
            Grounded::default(),
            BounceCounter::default(),
            RigidBody::Dynamic,
            Collider::ball(PLAYER_RADIUS),
            LockedAxes::ROTATION_LOCKED,
            Velocity::zero(),
            Friction::coefficient(0.2),
            Restitution::coefficient(0.0),
        ));
    }
}

/// Apply buffered input to player velocities. Runs on the fixed rule tick.
pub fn apply_movement(
    mut commands: Commands,
    mut input: ResMut<PlayerInput>,
    sounds: Option<Res<SoundEffects>>,
    mut players: Query<(&Side, &mut Velocity, &mut Grounded), With<Player>>,
) {
    for (side, mut velocity, mut grounded) in &mut players {
        let controls = input.side_mut(*side);

        velocity.linvel.x = controls.move_x * MOVE_SPEED;

        if controls.take_jump() && grounded.0 {
            velocity.linvel.y = JUMP_VELOCITY;
            grounded.0 = false;
            if let Some(sounds) = &sounds {
                commands.spawn((AudioPlayer::new(sounds.jump.clone()), PlaybackSettings::DESPAWN));
            }
        }
    }
}

/// Mark a player grounded once they have fallen back to spawn height
pub fn detect_landing(mut players: Query<(&Transform, &Velocity, &mut Grounded), With<Player>>) {
    for (transform, velocity, mut grounded) in &mut players {
        if !grounded.0
            && velocity.linvel.y <= 0.0
            && transform.translation.y <= PLAYER_SPAWN_Y + LANDING_EPSILON
        {
            grounded.0 = true;
        }
    }
}

/// Keep each player on their half: blocked at the net and at the back wall
pub fn clamp_to_court(
    mut players: Query<(&Side, &mut Transform, &mut Velocity), With<Player>>,
) {
    let net_block = NET_THICKNESS / 2.0 + 1.3 * PLAYER_RADIUS;
    let wall_block = COURT_HALF_WIDTH - PLAYER_RADIUS;

    for (side, mut transform, mut velocity) in &mut players {
        let (min_x, max_x) = match side {
            Side::Left => (-wall_block, -net_block),
            Side::Right => (net_block, wall_block),
        };

        let x = transform.translation.x;
        if x < min_x {
            transform.translation.x = min_x;
            velocity.linvel.x = velocity.linvel.x.max(0.0);
        } else if x > max_x {
            transform.translation.x = max_x;
            velocity.linvel.x = velocity.linvel.x.min(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_block_keeps_halves_apart() {
        let net_block = NET_THICKNESS / 2.0 + 1.3 * PLAYER_RADIUS;
        // A right player clamped at the net must not overlap a clamped left player
        assert!(net_block * 2.0 > 2.0 * PLAYER_RADIUS);
    }
}
