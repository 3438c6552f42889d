use bevy::prelude::*;
use serde::{Serialize, Serializer};

use crate::motion::Motion;

#[derive(Serialize)]
struct VectorJson {
    #[serde(serialize_with = "whole_as_integer")]
    x: f32,
    #[serde(serialize_with = "whole_as_integer")]
    y: f32,
}

impl From<Vec2> for VectorJson {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Whole numbers print without a fraction (`0`, not `0.0`), and `-0` prints as `0`.
fn whole_as_integer<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f32 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f32(*value)
    }
}

fn vector_json(v: Vec2) -> String {
    serde_json::to_string(&VectorJson::from(v)).unwrap_or_else(|_| format!("{{\"x\":{},\"y\":{}}}", v.x, v.y))
}

/// Two-line status readout of position and velocity as JSON objects.
pub fn status_text(motion: &Motion) -> String {
    format!(
        "position: {}\nvelocity: {}",
        vector_json(motion.position),
        vector_json(motion.velocity)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lists_position_then_velocity() {
        let motion = Motion {
            position: Vec2::new(12.5, 3.0),
            velocity: Vec2::new(-2.5, 0.5),
            can_jump: true,
        };

        let text = status_text(&motion);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "position: {\"x\":12.5,\"y\":3}");
        assert_eq!(lines[1], "velocity: {\"x\":-2.5,\"y\":0.5}");
    }

    #[test]
    fn idle_status_has_no_fractions() {
        let text = status_text(&Motion::default());
        assert_eq!(text, "position: {\"x\":0,\"y\":0}\nvelocity: {\"x\":0,\"y\":0}");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        let motion = Motion {
            velocity: Vec2::new(-0.0, -4.0),
            ..default()
        };
        assert!(status_text(&motion).ends_with("velocity: {\"x\":0,\"y\":-4}"));
    }
}
