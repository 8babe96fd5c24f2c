//! Pause/win overlays and the key-help corner text

use bevy::audio::AudioSinkPlayback;
use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::audio::MusicPlayer;
use crate::constants::*;
use crate::pause::PauseState;
use crate::player::Side;

/// Which overlay element an entity is
#[derive(Component, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Pause,
    Winner,
    RestartPrompt,
    QuitPrompt,
}

/// Key-help lines in the top-right corner
#[derive(Component)]
pub struct HelpText;

/// Spawn all overlay texts, hidden until their state applies
pub fn spawn_overlays(commands: &mut Commands) {
    commands.spawn((
        Text2d::new("PAUSE"),
        TextFont {
            font_size: 120.0,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
        TextColor(TEXT_ALERT),
        Transform::from_xyz(0.0, 0.0, 10.0),
        Visibility::Hidden,
        Overlay::Pause,
    ));

    commands.spawn((
        Text2d::new(""),
        TextFont {
            font_size: 80.0,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
        TextColor(TEXT_ALERT),
        Transform::from_xyz(0.0, 0.0, 10.0),
        Visibility::Hidden,
        Overlay::Winner,
    ));

    commands.spawn((
        Text2d::new("PRESS R TO RESTART GAME"),
        TextFont {
            font_size: 40.0,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
        TextColor(TEXT_ALERT),
        Transform::from_xyz(0.0, -0.15 * COURT_HEIGHT, 10.0),
        Visibility::Hidden,
        Overlay::RestartPrompt,
    ));

    commands.spawn((
        Text2d::new("PRESS ESC TO QUIT GAME"),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
        TextColor(TEXT_ALERT),
        Transform::from_xyz(0.0, -0.25 * COURT_HEIGHT, 10.0),
        Visibility::Hidden,
        Overlay::QuitPrompt,
    ));

    commands.spawn((
        Text2d::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Right),
        TextColor(TEXT_PRIMARY),
        Anchor::TopRight,
        Transform::from_xyz(COURT_HALF_WIDTH - 16.0, COURT_HALF_HEIGHT - 12.0, 10.0),
        HelpText,
    ));
}

/// Show and hide overlays to match the pause/win state
pub fn update_overlays(
    pause: Res<PauseState>,
    mut overlays: Query<(&Overlay, &mut Visibility, &mut Text2d)>,
) {
    if !pause.is_changed() {
        return;
    }

    let game_over = pause.winner.is_some();
    for (overlay, mut visibility, mut text) in &mut overlays {
        let visible = match overlay {
            Overlay::Pause => pause.paused && !game_over,
            Overlay::Winner => game_over,
            Overlay::RestartPrompt => game_over,
            Overlay::QuitPrompt => game_over,
        };
        *visibility = if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };

        if *overlay == Overlay::Winner
            && let Some(winner) = pause.winner
        {
            text.0 = match winner {
                Side::Left => "LEFT PLAYER WON".to_string(),
                Side::Right => "RIGHT PLAYER WON".to_string(),
            };
        }
    }
}

/// Keep the help lines in sync with pause and music state
pub fn update_help_text(
    pause: Res<PauseState>,
    music: Query<&AudioSink, With<MusicPlayer>>,
    mut help: Query<&mut Text2d, With<HelpText>>,
) {
    let Ok(mut text) = help.single_mut() else {
        return;
    };

    let pause_line = if pause.paused {
        "P - RESUME"
    } else {
        "P - PAUSE"
    };
    let music_line = match music.single() {
        Ok(sink) if !sink.is_paused() => "V - MUSIC OFF",
        _ => "V - MUSIC ON",
    };

    let content = format!("{pause_line}\n{music_line}\nESC - QUIT");
    if text.0 != content {
        text.0 = content;
    }
}
