//! Physics engine setup
//!
//! Thin wrapper around Rapier: the engine owns integration, collision
//! detection, restitution, and sleep/wake. This module only sets the court
//! gravity; everything else uses engine defaults.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::constants::GRAVITY;

pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))
            .add_systems(Update, configure_gravity);
    }
}

/// Set court gravity once the Rapier context entity exists.
/// The context is spawned by the plugin, so this cannot run in Startup.
fn configure_gravity(mut done: Local<bool>, mut rapier_config: Query<&mut RapierConfiguration>) {
    if *done {
        return;
    }
    if let Ok(mut config) = rapier_config.single_mut() {
        config.gravity = Vect::new(GRAVITY.x, GRAVITY.y);
        *done = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_initializes() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(PhysicsSetupPlugin);
        app.update();
    }
}
