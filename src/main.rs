use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized, WindowScaleFactorChanged};
use tr_core::SurfaceScale;
use tr_persistence::{load_or_default, tuning_path};

const WINDOW_WIDTH: f32 = 1024.0;
const WINDOW_HEIGHT: f32 = 512.0;

/// Camera height above the floor, so the floor sits in the lower third.
const CAMERA_Y: f32 = WINDOW_HEIGHT / 6.0;

fn main() {
    let tuning = load_or_default(&tuning_path());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Trailrun".into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.1)))
        .insert_resource(tuning)
        .add_plugins((
            tr_core::TrCorePlugin,
            tr_player::TrPlayerPlugin,
            tr_hud::TrHudPlugin,
        ))
        .add_systems(Startup, (setup_camera, init_surface_scale))
        .add_systems(Update, track_surface_scale)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(0.0, CAMERA_Y, 0.0)));
}

fn surface_scale(window: &Window) -> SurfaceScale {
    SurfaceScale::new(Vec2::new(window.width(), window.height()), window.scale_factor())
}

/// Seed the surface scale from the primary window.
fn init_surface_scale(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scale: ResMut<SurfaceScale>,
) {
    if let Ok(window) = windows.get_single() {
        *scale = surface_scale(window);
        info!(
            "Surface {}x{} at pixel ratio {}",
            scale.physical_size().x,
            scale.physical_size().y,
            scale.pixel_ratio()
        );
    }
}

/// Keep the surface scale current when the window moves between displays or resizes.
fn track_surface_scale(
    mut resized: EventReader<WindowResized>,
    mut rescaled: EventReader<WindowScaleFactorChanged>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scale: ResMut<SurfaceScale>,
) {
    let events = resized.read().count() + rescaled.read().count();
    if events == 0 {
        return;
    }

    if let Ok(window) = windows.get_single() {
        let next = surface_scale(window);
        if next != *scale {
            debug!("Surface scale now {:?}", next);
            *scale = next;
        }
    }
}
