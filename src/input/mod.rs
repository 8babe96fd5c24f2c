//! Input module - buffered per-side controls
//!
//! The right player uses the arrow keys, the left player WASD. Jump presses
//! accumulate until the fixed rule tick consumes them so a press between
//! ticks is never lost.

use bevy::prelude::*;

use crate::player::Side;

/// Buffered controls for one player
#[derive(Default)]
pub struct SideControls {
    /// Horizontal axis, -1.0 to 1.0 (overwritten every frame)
    pub move_x: f32,
    jump_buffered: bool,
}

impl SideControls {
    pub fn press_jump(&mut self) {
        self.jump_buffered = true;
    }

    /// Consume a buffered jump press
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_buffered)
    }
}

/// Buffered input state for both players
#[derive(Resource, Default)]
pub struct PlayerInput {
    pub left: SideControls,
    pub right: SideControls,
}

impl PlayerInput {
    pub fn side_mut(&mut self, side: Side) -> &mut SideControls {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Drop all buffered state (used when play is interrupted)
    pub fn clear(&mut self) {
        self.left = SideControls::default();
        self.right = SideControls::default();
    }
}

/// Runs in Update to capture movement and jump state before the rule tick
pub fn capture_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    // Right player: arrow keys. Opposing keys cancel out.
    let mut right_x = 0.0;
    if keyboard.pressed(KeyCode::ArrowLeft) {
        right_x -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        right_x += 1.0;
    }
    input.right.move_x = right_x;

    if keyboard.just_pressed(KeyCode::ArrowUp) {
        input.right.press_jump();
    }

    // Left player: WASD
    let mut left_x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) {
        left_x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        left_x += 1.0;
    }
    input.left.move_x = left_x;

    if keyboard.just_pressed(KeyCode::KeyW) {
        input.left.press_jump();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_press_is_consumed_once() {
        let mut controls = SideControls::default();
        controls.press_jump();
        assert!(controls.take_jump());
        assert!(!controls.take_jump());
    }

    #[test]
    fn clear_drops_buffered_jumps() {
        let mut input = PlayerInput::default();
        input.left.press_jump();
        input.right.move_x = 1.0;
        input.clear();
        assert!(!input.left.take_jump());
        assert_eq!(input.right.move_x, 0.0);
    }
}
