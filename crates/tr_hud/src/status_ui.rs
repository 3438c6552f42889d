use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use tr_core::{status_text, Motion, MotionTuning, SurfaceScale, Trail};
use tr_player::Player;

/// System to render the status readout in the top-left corner.
pub fn status_ui_system(
    mut contexts: EguiContexts,
    tuning: Res<MotionTuning>,
    trail: Res<Trail>,
    scale: Res<SurfaceScale>,
    time: Res<Time>,
    query: Query<&Motion, With<Player>>,
) {
    let Ok(motion) = query.get_single() else { return };

    egui::Window::new("Status")
        .anchor(egui::Align2::LEFT_TOP, [8.0, 8.0])
        .collapsible(true)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.monospace(status_text(motion));
            ui.separator();

            let ground = if motion.is_grounded(&tuning) { "grounded" } else { "airborne" };
            ui.label(format!("State: {}", ground));
            ui.label(format!("Can jump: {}", motion.can_jump));
            ui.label(format!("Trail: {}/{}", trail.len(), trail.max_len()));

            ui.add_space(8.0);
            let logical = scale.logical_size();
            let physical = scale.physical_size();
            ui.label(format!(
                "Surface: {:.0}x{:.0} @{:.2}x ({}x{} px)",
                logical.x, logical.y, scale.pixel_ratio(), physical.x, physical.y
            ));

            let delta = time.delta_secs();
            if delta > 0.0 {
                ui.label(format!("FPS: {:.1}", 1.0 / delta));
            }
        });
}
