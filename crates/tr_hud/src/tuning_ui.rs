use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use tr_core::{MotionTuning, MovementVariant};
use tr_persistence::{load_tuning, save_tuning, tuning_path};

/// Seconds a status message stays on screen.
const MESSAGE_SECS: f64 = 3.0;

/// Resource for tracking UI state in the tuning panel.
#[derive(Resource)]
pub struct TuningUiState {
    /// Whether the panel is visible. Toggled with F1.
    pub visible: bool,
    /// Status message and the time it was posted.
    pub status_message: Option<(String, f64)>,
}

impl Default for TuningUiState {
    fn default() -> Self {
        Self {
            visible: true,
            status_message: None,
        }
    }
}

impl TuningUiState {
    fn post(&mut self, message: String, now: f64) {
        self.status_message = Some((message, now));
    }

    /// The current message, if it hasn't expired yet.
    pub fn message(&self, now: f64) -> Option<&str> {
        match &self.status_message {
            Some((text, posted)) if now - posted < MESSAGE_SECS => Some(text.as_str()),
            _ => None,
        }
    }
}

/// System that toggles the tuning panel with F1.
pub fn toggle_tuning_ui(keyboard: Res<ButtonInput<KeyCode>>, mut ui_state: ResMut<TuningUiState>) {
    if keyboard.just_pressed(KeyCode::F1) {
        ui_state.visible = !ui_state.visible;
    }
}

/// System to render the tuning panel.
pub fn tuning_ui_system(
    mut contexts: EguiContexts,
    mut tuning: ResMut<MotionTuning>,
    mut ui_state: ResMut<TuningUiState>,
    time: Res<Time>,
) {
    if !ui_state.visible {
        return;
    }
    let now = time.elapsed_secs_f64();

    egui::SidePanel::right("tuning_panel")
        .default_width(200.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Tuning");
            ui.separator();

            ui.label("Variant:");
            ui.horizontal(|ui| {
                for variant in MovementVariant::all() {
                    let selected = tuning.variant == *variant;
                    if ui.selectable_label(selected, variant.name()).clicked() && !selected {
                        tuning.variant = *variant;
                    }
                }
            });
            ui.add_space(8.0);

            ui.collapsing("Horizontal", |ui| {
                ui.add(egui::Slider::new(&mut tuning.game_speed, 0.1..=4.0).text("Game speed"));
                ui.add(egui::Slider::new(&mut tuning.acceleration, 0.1..=5.0).text("Acceleration"));
                ui.add(egui::Slider::new(&mut tuning.deceleration, 0.1..=10.0).text("Deceleration"));
                ui.add(egui::Slider::new(&mut tuning.max_speed, 1.0..=20.0).text("Max speed"));
            });

            ui.collapsing("Jumping", |ui| {
                ui.add(egui::Slider::new(&mut tuning.gravity, 0.05..=2.0).text("Gravity"));
                ui.add(egui::Slider::new(&mut tuning.jump_speed, 1.0..=30.0).text("Jump speed"));
                ui.add(egui::Slider::new(&mut tuning.rearm_height, 0.0..=50.0).text("Re-arm height"));
            });

            ui.collapsing("Trail", |ui| {
                ui.add(egui::Slider::new(&mut tuning.trail_max_length, 0..=500).text("Length"));
            });

            ui.add_space(16.0);
            ui.separator();

            if ui.button("Reset to defaults").clicked() {
                *tuning = MotionTuning::default();
                ui_state.post("Defaults restored".to_string(), now);
            }

            ui.horizontal(|ui| {
                let path = tuning_path();
                if ui.button("Save").clicked() {
                    match save_tuning(&path, &tuning) {
                        Ok(()) => ui_state.post(format!("Saved {}", path.display()), now),
                        Err(e) => {
                            warn!("Failed to save tuning: {}", e);
                            ui_state.post(format!("Save failed: {}", e), now);
                        }
                    }
                }
                if ui.button("Load").clicked() {
                    match load_tuning(&path) {
                        Ok(loaded) => {
                            *tuning = loaded;
                            ui_state.post(format!("Loaded {}", path.display()), now);
                        }
                        Err(e) => {
                            warn!("Failed to load tuning: {}", e);
                            ui_state.post(format!("Load failed: {}", e), now);
                        }
                    }
                }
            });

            if let Some(message) = ui_state.message(now) {
                ui.add_space(8.0);
                ui.label(message);
            }

            ui.add_space(16.0);
            ui.separator();
            ui.label("Controls:");
            ui.label("  Arrows / WASD - Move");
            ui.label("  Space / Up - Jump");
            ui.label("  R - Reset");
            ui.label("  F1 - Toggle panel");
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_expire() {
        let mut state = TuningUiState::default();
        assert_eq!(state.message(0.0), None);

        state.post("Saved".to_string(), 10.0);
        assert_eq!(state.message(11.0), Some("Saved"));
        assert_eq!(state.message(10.0 + MESSAGE_SECS), None);
    }

    #[test]
    fn panel_starts_visible() {
        assert!(TuningUiState::default().visible);
    }
}
