//! Pause, win hold, and restart
//!
//! Pausing freezes the physics pipeline and gates the gameplay systems.
//! A win is a pause that only R (restart) or Esc can leave.

use bevy::prelude::*;
use bevy_rapier2d::prelude::RapierConfiguration;

use crate::events::{EventBus, GameEvent};
use crate::input::PlayerInput;
use crate::player::Side;
use crate::scoring::{Score, ServingSide};
use crate::serve::PointBreak;

/// Resource tracking pause and match-over state
#[derive(Resource, Default)]
pub struct PauseState {
    pub paused: bool,
    /// Set once a side reaches the winning score; locks the pause until restart
    pub winner: Option<Side>,
}

impl PauseState {
    /// Toggle pause; ignored once a winner exists. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        if self.winner.is_none() {
            self.paused = !self.paused;
        }
        self.paused
    }

    /// Lock play with a winner on the board
    pub fn declare_winner(&mut self, side: Side) {
        self.winner = Some(side);
        self.paused = true;
    }

    /// Clear the winner and resume (used by restart)
    pub fn clear(&mut self) {
        self.winner = None;
        self.paused = false;
    }
}

/// Run condition: play is not paused
pub fn playing(pause: Res<PauseState>) -> bool {
    !pause.paused
}

/// Handle the control keys: P pause/resume, R restart after a win, Esc quit
pub fn handle_control_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut pause: ResMut<PauseState>,
    mut score: ResMut<Score>,
    mut serving: ResMut<ServingSide>,
    mut point_break: ResMut<PointBreak>,
    mut input: ResMut<PlayerInput>,
    mut bus: ResMut<EventBus>,
    mut exit: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::KeyP) && pause.winner.is_none() {
        if pause.toggle() {
            input.clear();
            bus.emit(GameEvent::Paused);
            info!("Paused");
        } else {
            bus.emit(GameEvent::Resumed);
            info!("Resumed");
        }
    }

    if keyboard.just_pressed(KeyCode::KeyR) && pause.winner.is_some() {
        score.reset();
        pause.clear();
        input.clear();
        // A fresh match opens like the first: the right player serves.
        // The break restages the court and parks the ball for them.
        if serving.0 != Side::Right {
            serving.0 = Side::Right;
            bus.emit(GameEvent::ServeChange { side: Side::Right });
        }
        point_break.start();
        bus.emit(GameEvent::ScoresReset);
        info!("Match restarted");
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

/// Mirror the pause state into the physics pipeline
pub fn apply_pause_to_physics(
    pause: Res<PauseState>,
    mut rapier_config: Query<&mut RapierConfiguration>,
) {
    if !pause.is_changed() {
        return;
    }
    if let Ok(mut config) = rapier_config.single_mut() {
        config.physics_pipeline_active = !pause.paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_until_a_winner_locks_it() {
        let mut pause = PauseState::default();
        assert!(pause.toggle());
        assert!(!pause.toggle());

        pause.declare_winner(Side::Left);
        assert!(pause.paused);
        // P must not resume a finished match
        assert!(pause.toggle());
        assert!(pause.paused);
    }

    #[test]
    fn clear_releases_the_win_hold() {
        let mut pause = PauseState::default();
        pause.declare_winner(Side::Right);
        pause.clear();
        assert!(!pause.paused);
        assert_eq!(pause.winner, None);
    }
}
