//! Volleyball - a two-player local arcade volleyball game built with Bevy
//!
//! Two circular avatars bounce a ball over a net; a point is scored when
//! the ball touches the opponent's sand or a player exceeds the
//! consecutive-touch limit. Rigid-body simulation is owned by Rapier; this
//! crate is the orchestration around it: input, score/serve state, the
//! scripted break between points, and rendering composition.

// Core modules
pub mod audio;
pub mod constants;
pub mod events;
pub mod pause;
pub mod physics;
pub mod serve;
pub mod settings;

// Game logic modules
pub mod ball;
pub mod court;
pub mod input;
pub mod player;
pub mod scoring;
pub mod ui;

// Re-export commonly used types for convenience
pub use audio::{MusicPlayer, SoundEffects};
pub use ball::Ball;
pub use constants::*;
pub use court::{Frame, Ground};
pub use events::{BusEvent, EventBus, GameEvent};
pub use input::PlayerInput;
pub use pause::PauseState;
pub use player::{BounceCounter, Grounded, Player, Side};
pub use scoring::{Score, ServingSide};
pub use serve::PointBreak;
pub use settings::{CurrentSettings, InitSettings};
pub use ui::{HelpText, Overlay, ScoreText};
