use bevy::prelude::*;
use tr_core::TrailTint;

pub mod movement;
pub mod trail_render;

pub use trail_render::{RenderedTrail, TrailMarker};

/// Player sprite size in logical pixels.
pub const PLAYER_SIZE: Vec2 = Vec2::new(16.0, 24.0);

/// Player marker component.
#[derive(Component)]
pub struct Player;

/// Marker component for the floor sprite.
#[derive(Component)]
pub struct Ground;

/// Tint decided by the most recent horizontal step.
#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct CurrentTint(pub TrailTint);

/// Set while a UI widget has keyboard focus; key presses then skip the player.
#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct UiKeyboardFocus(pub bool);

/// Player plugin for Trailrun.
/// Handles keyboard capture, the per-frame movement update and trail rendering.
pub struct TrPlayerPlugin;

impl Plugin for TrPlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentTint>()
            .init_resource::<UiKeyboardFocus>()
            .init_resource::<RenderedTrail>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, (
                movement::capture_keys,
                movement::reset_player,
                movement::apply_variant_change,
                movement::advance_player,
                trail_render::record_trail,
                movement::sync_player_transform,
                trail_render::render_trail,
            ).chain());
    }
}

/// Spawn the player on the floor at the origin, plus the floor itself.
pub fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Sprite {
            color: Color::srgb(0.2, 0.6, 1.0),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, PLAYER_SIZE.y / 2.0, 2.0),
        tr_core::Motion::default(),
        Player,
    ));

    commands.spawn((
        Sprite {
            color: Color::srgb(0.3, 0.3, 0.3),
            custom_size: Some(Vec2::new(4096.0, 4.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -2.0, 0.0),
        Ground,
    ));

    info!("Spawned player at origin");
}
