//! Ball module - spawning, speed cap, and serve placement
//!
//! The ball is a dynamic circle owned by the physics engine: restitution
//! and CCD come from Rapier. The only per-tick bookkeeping this module does
//! is the speed cap the original game applied after every step.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::constants::*;
use crate::player::Side;

/// Marker for the ball entity
#[derive(Component)]
pub struct Ball;

/// Spawn the ball parked at the opening server's serve position.
/// It sleeps there until the first touch wakes it.
pub fn spawn_ball(commands: &mut Commands, serving: Side) {
    let serve = serving.serve_position();
    commands.spawn((
        Sprite::from_color(BALL_COLOR, Vec2::splat(2.0 * BALL_RADIUS)),
        Transform::from_xyz(serve.x, serve.y, 2.0),
        Ball,
        RigidBody::Dynamic,
        Collider::ball(BALL_RADIUS),
        Velocity::zero(),
        Restitution {
            coefficient: BALL_RESTITUTION,
            combine_rule: CoefficientCombineRule::Max,
        },
        Friction::coefficient(0.4),
        Ccd::enabled(),
        ActiveEvents::COLLISION_EVENTS,
        Sleeping {
            sleeping: true,
            ..Sleeping::default()
        },
    ));
}

/// Clamp a velocity to the ball's speed cap
pub fn clamp_speed(linvel: Vec2) -> Vec2 {
    let speed = linvel.length();
    if speed > BALL_MAX_SPEED {
        linvel * (BALL_MAX_SPEED / speed)
    } else {
        linvel
    }
}

/// Cap the ball's speed every rule tick
pub fn clamp_ball_speed(mut balls: Query<&mut Velocity, With<Ball>>) {
    for mut velocity in &mut balls {
        let capped = clamp_speed(velocity.linvel);
        if capped != velocity.linvel {
            velocity.linvel = capped;
        }
    }
}

/// Park the ball asleep at the serving side's serve position
pub fn place_for_serve(
    serving: Side,
    transform: &mut Transform,
    velocity: &mut Velocity,
    sleeping: &mut Sleeping,
) {
    let serve = serving.serve_position();
    transform.translation.x = serve.x;
    transform.translation.y = serve.y;
    transform.rotation = Quat::IDENTITY;
    velocity.linvel = Vec2::ZERO;
    velocity.angvel = 0.0;
    sleeping.sleeping = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_cap_preserves_direction() {
        let fast = Vec2::new(3000.0, -4000.0);
        let capped = clamp_speed(fast);
        assert!((capped.length() - BALL_MAX_SPEED).abs() < 0.001);
        assert!(capped.normalize().dot(fast.normalize()) > 0.999);
    }

    #[test]
    fn slow_ball_is_untouched() {
        let slow = Vec2::new(100.0, 50.0);
        assert_eq!(clamp_speed(slow), slow);
    }

    #[test]
    fn serve_placement_freezes_the_ball() {
        let mut transform = Transform::from_xyz(123.0, 456.0, 2.0);
        let mut velocity = Velocity {
            linvel: Vec2::new(500.0, -200.0),
            angvel: 3.0,
        };
        let mut sleeping = Sleeping::default();

        place_for_serve(Side::Left, &mut transform, &mut velocity, &mut sleeping);

        assert_eq!(transform.translation.x, -SERVE_X);
        assert_eq!(transform.translation.y, SERVE_Y);
        assert_eq!(velocity.linvel, Vec2::ZERO);
        assert!(sleeping.sleeping);
    }
}
