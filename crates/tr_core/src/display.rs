use bevy::prelude::*;

/// Mapping between logical (CSS-style) pixels and the physical pixels
/// of the backing surface on high-density displays.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct SurfaceScale {
    logical_size: Vec2,
    pixel_ratio: f32,
}

impl Default for SurfaceScale {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 1.0)
    }
}

impl SurfaceScale {
    /// A ratio that is not finite or not positive falls back to 1.
    pub fn new(logical_size: Vec2, pixel_ratio: f32) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            logical_size,
            pixel_ratio,
        }
    }

    pub fn logical_size(&self) -> Vec2 {
        self.logical_size
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Backing surface size in whole physical pixels.
    pub fn physical_size(&self) -> UVec2 {
        (self.logical_size * self.pixel_ratio).round().max(Vec2::ZERO).as_uvec2()
    }

    /// Scale a drawing coordinate from logical to physical pixels.
    pub fn to_physical(&self, point: Vec2) -> Vec2 {
        point * self.pixel_ratio
    }
}
