//! Music and sound effects
//!
//! Background music loops from startup (volume from settings); V toggles it.
//! Bounce and jump effects are fire-and-forget entities spawned by the
//! systems that detect those moments.

use bevy::audio::{AudioSinkPlayback, Volume};
use bevy::prelude::*;

use crate::events::{EventBus, GameEvent};
use crate::settings::CurrentSettings;

pub const MAIN_MUSIC: &str = "sounds/main_music.ogg";
pub const BOUNCE_SOUND: &str = "sounds/bounce.ogg";
pub const JUMP_SOUND: &str = "sounds/jump.ogg";

/// Handles for the short effects, loaded once at startup
#[derive(Resource)]
pub struct SoundEffects {
    pub bounce: Handle<AudioSource>,
    pub jump: Handle<AudioSource>,
}

/// Marker for the looping music entity
#[derive(Component)]
pub struct MusicPlayer;

/// Load effect handles and start the music loop
pub fn setup_audio(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<CurrentSettings>,
) {
    commands.insert_resource(SoundEffects {
        bounce: asset_server.load(BOUNCE_SOUND),
        jump: asset_server.load(JUMP_SOUND),
    });

    commands.spawn((
        AudioPlayer::new(asset_server.load(MAIN_MUSIC)),
        PlaybackSettings {
            paused: !settings.settings.music_enabled,
            volume: Volume::Linear(settings.settings.music_volume),
            ..PlaybackSettings::LOOP
        },
        MusicPlayer,
    ));
}

/// V toggles the music and persists the choice
pub fn toggle_music(
    keyboard: Res<ButtonInput<KeyCode>>,
    music: Query<&AudioSink, With<MusicPlayer>>,
    mut settings: ResMut<CurrentSettings>,
    mut bus: ResMut<EventBus>,
) {
    if !keyboard.just_pressed(KeyCode::KeyV) {
        return;
    }
    let Ok(sink) = music.single() else {
        return;
    };

    let playing = sink.is_paused();
    if playing {
        sink.play();
    } else {
        sink.pause();
    }

    settings.settings.music_enabled = playing;
    settings.mark_dirty();
    bus.emit(GameEvent::MusicToggled { playing });
    info!("Music {}", if playing { "on" } else { "off" });
}
