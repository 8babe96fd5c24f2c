//! Volleyball - two-player local arcade volleyball
//!
//! Main entry point: app setup and system registration.

use bevy::prelude::*;
use volleyball::{
    BACKGROUND_COLOR, CurrentSettings, EventBus, PauseState, PlayerInput, PointBreak,
    RULE_TICK_HZ, Score, ServingSide, audio, ball, court, events, input, pause,
    physics::PhysicsSetupPlugin, player, scoring, serve, settings::save_settings_system, ui,
};

fn main() {
    // Load persistent settings (defaults if the file doesn't exist)
    let current_settings = CurrentSettings::default();

    // Save on first run so the file exists for editing
    if let Err(e) = current_settings.settings.save() {
        warn!("Failed to save initial settings: {}", e);
    }

    let window_width = current_settings.settings.window_width;
    let window_height = current_settings.settings.window_height;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                resolution: bevy::window::WindowResolution::new(window_width, window_height),
                title: "Volleyball".into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsSetupPlugin)
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(current_settings)
        .insert_resource(Time::<Fixed>::from_hz(RULE_TICK_HZ))
        .init_resource::<PlayerInput>()
        .init_resource::<Score>()
        .init_resource::<ServingSide>()
        .init_resource::<PointBreak>()
        .init_resource::<PauseState>()
        .init_resource::<EventBus>()
        .add_systems(Startup, (setup, audio::setup_audio))
        // Controls: movement capture only during live play, control keys always
        .add_systems(Update, input::capture_input.run_if(pause::playing))
        .add_systems(
            Update,
            (
                pause::handle_control_keys,
                pause::apply_pause_to_physics,
                audio::toggle_music,
            ),
        )
        // HUD and overlays
        .add_systems(
            Update,
            (ui::update_score_text, ui::update_overlays, ui::update_help_text),
        )
        // Event bus bookkeeping
        .add_systems(
            Update,
            (events::update_event_bus_time, events::log_events).chain(),
        )
        // Rule tick: movement, clamps, speed cap, then contact processing
        .add_systems(
            FixedUpdate,
            (
                player::apply_movement,
                player::detect_landing,
                player::clamp_to_court,
                ball::clamp_ball_speed,
                scoring::process_contacts,
            )
                .chain()
                .run_if(pause::playing)
                .run_if(serve::not_in_break),
        )
        // Post-point break runs on the same tick while play is suspended
        .add_systems(
            FixedUpdate,
            serve::run_break
                .run_if(pause::playing)
                .run_if(serve::in_break),
        )
        // Settings persistence - save when dirty
        .add_systems(Update, save_settings_system)
        .run();
}

/// Spawn camera, court, players, ball, and UI texts
fn setup(mut commands: Commands, serving: Res<ServingSide>) {
    commands.spawn(Camera2d);

    court::spawn_court(&mut commands);
    player::spawn_players(&mut commands);
    ball::spawn_ball(&mut commands, serving.0);

    ui::spawn_score_text(&mut commands);
    ui::spawn_overlays(&mut commands);
}
