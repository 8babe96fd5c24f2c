//! Court geometry - sand, walls, ceiling, and net
//!
//! All pieces are fixed colliders. The two sand segments carry their side
//! so the scoring system can tell whose ground the ball touched.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::constants::*;
use crate::player::Side;

/// Sand segment; the ball touching it ends the rally against this side
#[derive(Component, Clone, Copy)]
pub struct Ground(pub Side);

/// Marker for net, walls, and ceiling (ball contact plays a bounce)
#[derive(Component)]
pub struct Frame;

/// Spawn the two sand segments, one per half
pub fn spawn_grounds(commands: &mut Commands) {
    let half_span = COURT_HALF_WIDTH / 2.0;
    let center_y = GROUND_TOP_Y - GROUND_THICKNESS / 2.0;

    for side in [Side::Left, Side::Right] {
        let center_x = match side {
            Side::Left => -half_span,
            Side::Right => half_span,
        };
        commands.spawn((
            Sprite::from_color(SAND_COLOR, Vec2::new(COURT_HALF_WIDTH, GROUND_THICKNESS)),
            Transform::from_xyz(center_x, center_y, 0.0),
            Ground(side),
            RigidBody::Fixed,
            Collider::cuboid(half_span, GROUND_THICKNESS / 2.0),
        ));
    }
}

/// Spawn the side walls and ceiling just outside the visible court
pub fn spawn_walls(commands: &mut Commands) {
    let wall_x = COURT_HALF_WIDTH + WALL_THICKNESS / 2.0;
    for x in [-wall_x, wall_x] {
        commands.spawn((
            Transform::from_xyz(x, 0.0, 0.0),
            Frame,
            RigidBody::Fixed,
            Collider::cuboid(WALL_THICKNESS / 2.0, COURT_HEIGHT),
        ));
    }

    commands.spawn((
        Transform::from_xyz(0.0, COURT_HALF_HEIGHT + WALL_THICKNESS / 2.0, 0.0),
        Frame,
        RigidBody::Fixed,
        Collider::cuboid(COURT_HALF_WIDTH, WALL_THICKNESS / 2.0),
    ));
}

/// Spawn the net at centre court
pub fn spawn_net(commands: &mut Commands) {
    let net_height = NET_TOP_Y + COURT_HALF_HEIGHT;
    let center_y = (NET_TOP_Y - COURT_HALF_HEIGHT) / 2.0;

    commands.spawn((
        Sprite::from_color(NET_COLOR, Vec2::new(NET_THICKNESS, net_height)),
        Transform::from_xyz(0.0, center_y, 0.5),
        Frame,
        RigidBody::Fixed,
        Collider::cuboid(NET_THICKNESS / 2.0, net_height / 2.0),
    ));
}

/// Spawn the whole court
pub fn spawn_court(commands: &mut Commands) {
    spawn_grounds(commands);
    spawn_walls(commands);
    spawn_net(commands);
}
