//! HUD components and systems (score display)

use bevy::prelude::*;

use crate::constants::*;
use crate::player::Side;
use crate::scoring::Score;

/// Centre score line component
#[derive(Component)]
pub struct ScoreText;

/// Spawn the score line above the net
pub fn spawn_score_text(commands: &mut Commands) {
    commands.spawn((
        Text2d::new("0:0"),
        TextFont {
            font_size: 56.0,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
        TextColor(TEXT_PRIMARY),
        Transform::from_xyz(0.0, COURT_HEIGHT / 4.0, 10.0),
        ScoreText,
    ));
}

/// Refresh the score line; a dominant side tints the text their color
pub fn update_score_text(
    score: Res<Score>,
    mut text_query: Query<(&mut Text2d, &mut TextColor), With<ScoreText>>,
) {
    if !score.is_changed() {
        return;
    }
    let Ok((mut text, mut color)) = text_query.single_mut() else {
        return;
    };

    text.0 = format!("{}:{}", score.left, score.right);
    *color = TextColor(match score.dominant() {
        Some(Side::Left) => LEFT_PLAYER_COLOR,
        Some(Side::Right) => RIGHT_PLAYER_COLOR,
        None => TEXT_PRIMARY,
    });
}
