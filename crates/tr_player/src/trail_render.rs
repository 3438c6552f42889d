use bevy::prelude::*;
use tr_core::{Motion, MotionTuning, Trail};

use crate::{CurrentTint, Player, PLAYER_SIZE};

/// Side length of a trail marker sprite.
const MARKER_SIZE: f32 = 4.0;

/// Marker component for trail point sprites.
#[derive(Component)]
pub struct TrailMarker;

/// Trail generation the marker sprites were last built from.
#[derive(Resource, Default)]
pub struct RenderedTrail {
    generation: Option<u64>,
}

/// System that appends the player's position to the trail.
pub fn record_trail(
    tuning: Res<MotionTuning>,
    tint: Res<CurrentTint>,
    mut trail: ResMut<Trail>,
    query: Query<&Motion, With<Player>>,
) {
    if trail.max_len() != tuning.trail_max_length {
        trail.set_max_len(tuning.trail_max_length);
    }

    for motion in &query {
        trail.record(motion.position, tint.0);
    }
}

/// System that rebuilds trail marker sprites, only when the trail changed.
pub fn render_trail(
    mut commands: Commands,
    trail: Res<Trail>,
    mut rendered: ResMut<RenderedTrail>,
    markers: Query<Entity, With<TrailMarker>>,
) {
    if rendered.generation == Some(trail.generation()) {
        return;
    }
    rendered.generation = Some(trail.generation());

    for entity in &markers {
        commands.entity(entity).despawn();
    }

    for (i, point) in trail.iter().enumerate() {
        commands.spawn((
            Sprite {
                color: point.tint.color().with_alpha(trail.fade(i)),
                custom_size: Some(Vec2::splat(MARKER_SIZE)),
                ..default()
            },
            Transform::from_xyz(point.position.x, point.position.y + PLAYER_SIZE.y / 2.0, 1.0),
            TrailMarker,
        ));
    }
}
