use bevy::prelude::*;

use crate::input::{ActiveKeys, Key};
use crate::tuning::{MotionTuning, MovementVariant};

/// Colour class of a trail entry, decided by what the horizontal
/// step did on the frame the entry was recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrailTint {
    /// Exactly one direction key was driving the player.
    Lime,
    /// No direction, or both: braking toward a standstill.
    Red,
    /// Velocity hit the speed limit.
    #[default]
    Silver,
}

impl TrailTint {
    /// CSS colour name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lime => "lime",
            Self::Red => "red",
            Self::Silver => "silver",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Lime => Color::srgb(0.0, 1.0, 0.0),
            Self::Red => Color::srgb(1.0, 0.0, 0.0),
            Self::Silver => Color::srgb(0.75, 0.75, 0.75),
        }
    }
}

/// Clamp `value` into `[min, max]`, reporting whether it was clamped.
pub fn cap(value: f32, min: f32, max: f32) -> (f32, bool) {
    if value < min {
        (min, true)
    } else if value > max {
        (max, true)
    } else {
        (value, false)
    }
}

/// Kinematic state of the player.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Jump legality. Cleared by a jump, set again by releasing
    /// the jump key near the ground.
    pub can_jump: bool,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            can_jump: true,
        }
    }
}

impl Motion {
    pub fn is_grounded(&self, tuning: &MotionTuning) -> bool {
        self.position.y <= tuning.ground_y
    }

    /// Advance one frame under the given variant's rules.
    pub fn step(&mut self, keys: &ActiveKeys, tuning: &MotionTuning, delta: f32) -> TrailTint {
        let tint = self.step_horizontal(keys, tuning, delta);
        if tuning.variant == MovementVariant::Jumping {
            self.step_vertical(keys, tuning, delta);
        }
        tint
    }

    /// Accelerate, brake and cap horizontal velocity, then move.
    pub fn step_horizontal(&mut self, keys: &ActiveKeys, tuning: &MotionTuning, delta: f32) -> TrailTint {
        let acceleration = tuning.scaled_acceleration();
        let deceleration = tuning.scaled_deceleration();
        let max_speed = tuning.scaled_max_speed();

        let moving_right = self.velocity.x > 0.0;
        let moving_left = self.velocity.x < 0.0;

        let mut tint = if keys.exclusively(Key::Left, Key::Right) {
            // Turning around brakes harder than accelerating
            let rate = if moving_right { deceleration } else { acceleration };
            self.velocity.x -= rate * delta;
            TrailTint::Lime
        } else if keys.exclusively(Key::Right, Key::Left) {
            let rate = if moving_left { deceleration } else { acceleration };
            self.velocity.x += rate * delta;
            TrailTint::Lime
        } else {
            if moving_right {
                self.velocity.x = (self.velocity.x - deceleration * delta).max(0.0);
            } else if moving_left {
                self.velocity.x = (self.velocity.x + deceleration * delta).min(0.0);
            }
            TrailTint::Red
        };

        let (vx, capped) = cap(self.velocity.x, -max_speed, max_speed);
        self.velocity.x = vx;
        if capped {
            tint = TrailTint::Silver;
        }

        self.position.x += self.velocity.x;
        tint
    }

    /// Jump, fall under gravity and clamp to the floor.
    pub fn step_vertical(&mut self, keys: &ActiveKeys, tuning: &MotionTuning, delta: f32) {
        let jump_held = keys.jump_held();

        if self.is_grounded(tuning) && self.can_jump && jump_held {
            self.velocity.y = tuning.jump_speed;
            self.can_jump = false;
        } else if !self.is_grounded(tuning) {
            self.velocity.y -= tuning.gravity * delta;
        }

        self.position.y += self.velocity.y;
        if self.position.y <= tuning.ground_y {
            self.position.y = tuning.ground_y;
            self.velocity.y = 0.0;
        }

        if !jump_held && self.position.y <= tuning.ground_y + tuning.rearm_height {
            self.can_jump = true;
        }
    }
}
