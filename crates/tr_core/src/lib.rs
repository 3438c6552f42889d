use bevy::prelude::*;

pub mod display;
pub mod frame;
pub mod input;
pub mod motion;
pub mod status;
pub mod trail;
pub mod tuning;

pub use display::SurfaceScale;
pub use frame::{frame_delta, FrameClock, FRAME_DURATION_MS};
pub use input::{ActiveKeys, HeldKeys, Key};
pub use motion::{cap, Motion, TrailTint};
pub use status::status_text;
pub use trail::{Trail, TrailPoint};
pub use tuning::{MotionTuning, MovementVariant};

/// Core plugin providing the shared simulation resources for Trailrun.
pub struct TrCorePlugin;

impl Plugin for TrCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionTuning>()
            .init_resource::<ActiveKeys>()
            .init_resource::<SurfaceScale>();

        let max_len = app.world().resource::<MotionTuning>().trail_max_length;
        app.insert_resource(Trail::with_capacity(max_len));
    }
}
