//! Scoring module - touch bookkeeping and rally-end detection
//!
//! Collision events from the physics engine drive everything here: a touch
//! increments the toucher's bounce counter and resets the opponent's, sand
//! contact or an over-limit touch ends the rally, and the point winner takes
//! the next serve.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::audio::SoundEffects;
use crate::ball::Ball;
use crate::court::{Frame, Ground};
use crate::events::{EventBus, GameEvent};
use crate::player::{BounceCounter, Player, Side};
use crate::serve::PointBreak;

/// Match score, one counter per side
#[derive(Resource, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// The side leading by more than one point, if any
    pub fn dominant(&self) -> Option<Side> {
        if self.left > self.right + 1 {
            Some(Side::Left)
        } else if self.right > self.left + 1 {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// The side that has reached the winning score, if any
    pub fn winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
    }
}

/// Which side serves the next rally. The point winner takes the serve;
/// the right player opens the match.
#[derive(Resource)]
pub struct ServingSide(pub Side);

impl Default for ServingSide {
    fn default() -> Self {
        Self(Side::Right)
    }
}

/// Consume physics contact events: touch bookkeeping, bounce sounds, and
/// rally-end detection. Runs on the fixed rule tick during live play.
pub fn process_contacts(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    mut score: ResMut<Score>,
    mut serving: ResMut<ServingSide>,
    mut point_break: ResMut<PointBreak>,
    mut bus: ResMut<EventBus>,
    sounds: Option<Res<SoundEffects>>,
    balls: Query<Entity, With<Ball>>,
    mut players: Query<(&Side, &mut BounceCounter), With<Player>>,
    grounds: Query<&Ground>,
    frames: Query<(), With<Frame>>,
) {
    let Ok(ball) = balls.single() else {
        return;
    };

    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        // Only contacts involving the ball matter
        let other = if *a == ball {
            *b
        } else if *b == ball {
            *a
        } else {
            continue;
        };

        if point_break.active {
            continue;
        }

        if let Ok(ground) = grounds.get(other) {
            // Sand touch: the defending side loses the rally
            play_bounce(&mut commands, &sounds);
            end_rally(
                ground.0.other(),
                false,
                &mut score,
                &mut serving,
                &mut point_break,
                &mut bus,
                &mut players,
            );
            continue;
        }

        let touch = players.get_mut(other).ok().map(|(toucher_side, mut counter)| {
            let touches = counter.record_touch();
            (*toucher_side, touches, counter.over_limit())
        });
        if let Some((side, touches, fault)) = touch {
            bus.emit(GameEvent::Touch {
                player: side,
                touches,
            });
            play_bounce(&mut commands, &sounds);

            // Possession changed: the opponent's run of touches is over
            for (other_side, mut other_counter) in &mut players {
                if *other_side != side {
                    other_counter.reset();
                }
            }

            if fault {
                end_rally(
                    side.other(),
                    true,
                    &mut score,
                    &mut serving,
                    &mut point_break,
                    &mut bus,
                    &mut players,
                );
            }
            continue;
        }

        if frames.get(other).is_ok() {
            bus.emit(GameEvent::FrameBounce);
            play_bounce(&mut commands, &sounds);
        }
    }
}

/// Award the point, hand the serve to the winner, and start the break
fn end_rally(
    scorer: Side,
    fault: bool,
    score: &mut Score,
    serving: &mut ServingSide,
    point_break: &mut PointBreak,
    bus: &mut EventBus,
    players: &mut Query<(&Side, &mut BounceCounter), With<Player>>,
) {
    score.award(scorer);
    if serving.0 != scorer {
        serving.0 = scorer;
        bus.emit(GameEvent::ServeChange { side: scorer });
    }
    for (_, mut counter) in players.iter_mut() {
        counter.reset();
    }

    bus.emit(GameEvent::PointScored {
        side: scorer,
        score_left: score.left,
        score_right: score.right,
        fault,
    });
    info!(
        "Point to {} ({}). Score {}:{}",
        scorer,
        if fault { "illegal touch" } else { "ground touch" },
        score.left,
        score.right
    );

    point_break.start();
}

fn play_bounce(commands: &mut Commands, sounds: &Option<Res<SoundEffects>>) {
    if let Some(sounds) = sounds {
        commands.spawn((
            AudioPlayer::new(sounds.bounce.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_and_winner() {
        let mut score = Score::default();
        for _ in 0..14 {
            score.award(Side::Left);
        }
        assert_eq!(score.winner(15), None);
        score.award(Side::Left);
        assert_eq!(score.winner(15), Some(Side::Left));
        assert_eq!(score.get(Side::Left), 15);
        assert_eq!(score.get(Side::Right), 0);
    }

    #[test]
    fn dominance_needs_a_two_point_lead() {
        let mut score = Score::default();
        score.award(Side::Right);
        assert_eq!(score.dominant(), None);
        score.award(Side::Right);
        assert_eq!(score.dominant(), Some(Side::Right));
        score.award(Side::Left);
        assert_eq!(score.dominant(), None);
    }

    #[test]
    fn reset_clears_both_sides() {
        let mut score = Score { left: 7, right: 12 };
        score.reset();
        assert_eq!(score.left, 0);
        assert_eq!(score.right, 0);
    }

    #[test]
    fn right_player_opens_the_match() {
        assert_eq!(ServingSide::default().0, Side::Right);
    }
}
