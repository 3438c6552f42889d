use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin};
use tr_player::UiKeyboardFocus;

pub mod status_ui;
pub mod tuning_ui;

pub use tuning_ui::TuningUiState;

/// HUD plugin for Trailrun.
/// Provides the egui status readout and the live tuning panel.
pub struct TrHudPlugin;

impl Plugin for TrHudPlugin {
    fn build(&self, app: &mut App) {
        // Only add EguiPlugin if not already added
        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin);
        }

        app.init_resource::<TuningUiState>()
            .add_systems(Update, track_ui_keyboard_focus.before(tr_player::movement::capture_keys))
            .add_systems(Update, (
                tuning_ui::toggle_tuning_ui,
                tuning_ui::tuning_ui_system,
                status_ui::status_ui_system,
            ).chain());
    }
}

/// System that tells the player plugin when egui is using the keyboard,
/// e.g. while a slider has focus.
pub fn track_ui_keyboard_focus(mut contexts: EguiContexts, mut focus: ResMut<UiKeyboardFocus>) {
    let wants_keyboard = contexts.ctx_mut().wants_keyboard_input();
    if focus.0 != wants_keyboard {
        focus.0 = wants_keyboard;
    }
}
