use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Which movement rules the player follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementVariant {
    /// Left/right only, the player never leaves the floor.
    Horizontal,
    /// Left/right plus jumping under gravity.
    #[default]
    Jumping,
}

impl MovementVariant {
    /// Get the display name for UI.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Horizontal => "Horizontal",
            Self::Jumping => "Jumping",
        }
    }

    /// Get all variants in order.
    pub fn all() -> &'static [MovementVariant] {
        &[Self::Horizontal, Self::Jumping]
    }
}

/// Movement constants, editable at runtime and stored as RON.
///
/// Rates are expressed per 60 Hz frame: a `delta` of `1.0` is one
/// frame at 60 frames per second.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionTuning {
    /// Active movement rules.
    pub variant: MovementVariant,
    /// Multiplier applied to acceleration, deceleration and max speed.
    pub game_speed: f32,
    /// Velocity gained per frame while a direction is held.
    pub acceleration: f32,
    /// Velocity lost per frame while braking or turning around.
    pub deceleration: f32,
    /// Horizontal speed limit.
    pub max_speed: f32,
    /// Downward acceleration per frame while airborne.
    pub gravity: f32,
    /// Upward velocity applied when a jump triggers.
    pub jump_speed: f32,
    /// Floor height.
    pub ground_y: f32,
    /// Height above the floor at which a released jump key re-arms jumping.
    pub rearm_height: f32,
    /// Maximum number of trail entries kept.
    pub trail_max_length: usize,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            variant: MovementVariant::default(),
            game_speed: 1.0,
            acceleration: 1.0,
            deceleration: 2.0,
            max_speed: 5.0,
            gravity: 0.5,
            jump_speed: 10.0,
            ground_y: 0.0,
            rearm_height: 0.0,
            trail_max_length: 50,
        }
    }
}

impl MotionTuning {
    /// Acceleration scaled by game speed.
    pub fn scaled_acceleration(&self) -> f32 {
        self.acceleration * self.game_speed
    }

    /// Deceleration scaled by game speed.
    pub fn scaled_deceleration(&self) -> f32 {
        self.deceleration * self.game_speed
    }

    /// Max speed scaled by game speed.
    pub fn scaled_max_speed(&self) -> f32 {
        self.max_speed * self.game_speed
    }
}
