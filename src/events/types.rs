//! Event type definitions for the match log

use serde::Serialize;

use crate::player::Side;

/// All match events that can be logged
#[derive(Debug, Clone, Serialize)]
pub enum GameEvent {
    /// Ball touched a player (consecutive touch count after the touch)
    Touch { player: Side, touches: u32 },
    /// Ball bounced off the net, a wall, or the ceiling
    FrameBounce,
    /// Rally ended and a point was awarded.
    /// `fault` is true when the loser exceeded the touch limit.
    PointScored {
        side: Side,
        score_left: u32,
        score_right: u32,
        fault: bool,
    },
    /// Serve moved to the given side
    ServeChange { side: Side },
    /// Game paused by the player
    Paused,
    /// Game resumed
    Resumed,
    /// Match ended
    MatchEnd {
        winner: Side,
        score_left: u32,
        score_right: u32,
    },
    /// Scores cleared for a fresh match
    ScoresReset,
    /// Background music toggled
    MusicToggled { playing: bool },
}
