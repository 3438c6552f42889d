use bevy::prelude::*;
use bevy::window::WindowFocused;
use tr_core::{frame_delta, ActiveKeys, Key, Motion, MotionTuning, MovementVariant, Trail};

use crate::{CurrentTint, Player, UiKeyboardFocus, PLAYER_SIZE};

/// System that mirrors key press/release events into [`ActiveKeys`].
///
/// Presses are ignored while a UI widget owns the keyboard. Releases
/// always go through so no key stays stuck.
pub fn capture_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    ui_focus: Res<UiKeyboardFocus>,
    mut focus_events: EventReader<WindowFocused>,
    mut keys: ResMut<ActiveKeys>,
) {
    if !ui_focus.0 {
        for code in keyboard.get_just_pressed() {
            if let Some(key) = Key::from_key_code(*code) {
                keys.press(key);
            }
        }
    }

    for code in keyboard.get_just_released() {
        let Some(key) = Key::from_key_code(*code) else { continue };
        // An alias of the same key may still be down
        if !keyboard.any_pressed(key.key_codes().iter().copied()) {
            keys.release(key);
        }
    }

    // Release events are lost while unfocused
    for event in focus_events.read() {
        if !event.focused {
            keys.clear();
        }
    }
}

/// System to put the player back at the origin with R.
pub fn reset_player(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut trail: ResMut<Trail>,
    mut query: Query<&mut Motion, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }

    for mut motion in &mut query {
        *motion = Motion::default();
    }
    trail.clear();
    info!("Reset player");
}

/// System that drops the player onto the floor when jumping is switched off.
pub fn apply_variant_change(
    tuning: Res<MotionTuning>,
    mut last_variant: Local<Option<MovementVariant>>,
    mut query: Query<&mut Motion, With<Player>>,
) {
    if *last_variant == Some(tuning.variant) {
        return;
    }

    if last_variant.is_some() {
        info!("Movement variant: {}", tuning.variant.name());
    }
    *last_variant = Some(tuning.variant);

    if tuning.variant == MovementVariant::Horizontal {
        for mut motion in &mut query {
            motion.position.y = tuning.ground_y;
            motion.velocity.y = 0.0;
            motion.can_jump = true;
        }
    }
}

/// System that runs one movement step per frame.
pub fn advance_player(
    time: Res<Time>,
    keys: Res<ActiveKeys>,
    tuning: Res<MotionTuning>,
    mut tint: ResMut<CurrentTint>,
    mut query: Query<&mut Motion, With<Player>>,
) {
    let delta = frame_delta(time.delta());
    for mut motion in &mut query {
        tint.0 = motion.step(&keys, &tuning, delta);
    }
}

/// System that places the player sprite with its feet on the simulated position.
pub fn sync_player_transform(mut query: Query<(&Motion, &mut Transform), With<Player>>) {
    for (motion, mut transform) in &mut query {
        transform.translation.x = motion.position.x;
        transform.translation.y = motion.position.y + PLAYER_SIZE.y / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tr_core::TrCorePlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(TrCorePlugin)
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<Time>()
            .init_resource::<CurrentTint>()
            .init_resource::<UiKeyboardFocus>()
            .add_event::<WindowFocused>()
            .add_systems(Update, (
                capture_keys,
                reset_player,
                apply_variant_change,
                advance_player,
                sync_player_transform,
            ).chain());
        app
    }

    fn spawn_test_player(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((Motion::default(), Transform::default(), Player))
            .id()
    }

    fn press(app: &mut App, code: KeyCode) {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.clear();
        input.press(code);
    }

    fn release(app: &mut App, code: KeyCode) {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.clear();
        input.release(code);
    }

    fn advance_one_frame(app: &mut App) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_micros(16_667));
        app.update();
    }

    #[test]
    fn key_events_update_active_keys() {
        let mut app = test_app();

        press(&mut app, KeyCode::ArrowLeft);
        app.update();
        assert!(app.world().resource::<ActiveKeys>().is_held(Key::Left));

        release(&mut app, KeyCode::ArrowLeft);
        app.update();
        assert!(app.world().resource::<ActiveKeys>().is_empty());
    }

    #[test]
    fn releasing_one_alias_keeps_key_held() {
        let mut app = test_app();

        {
            let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            input.press(KeyCode::ArrowLeft);
            input.press(KeyCode::KeyA);
        }
        app.update();
        assert!(app.world().resource::<ActiveKeys>().is_held(Key::Left));

        release(&mut app, KeyCode::KeyA);
        app.update();
        assert!(app.world().resource::<ActiveKeys>().is_held(Key::Left));

        release(&mut app, KeyCode::ArrowLeft);
        app.update();
        assert!(!app.world().resource::<ActiveKeys>().is_held(Key::Left));
    }

    #[test]
    fn ui_focus_blocks_presses_but_not_releases() {
        let mut app = test_app();

        press(&mut app, KeyCode::ArrowRight);
        app.update();
        assert!(app.world().resource::<ActiveKeys>().is_held(Key::Right));

        app.insert_resource(UiKeyboardFocus(true));
        press(&mut app, KeyCode::ArrowLeft);
        app.update();
        assert!(!app.world().resource::<ActiveKeys>().is_held(Key::Left));

        release(&mut app, KeyCode::ArrowRight);
        app.update();
        assert!(app.world().resource::<ActiveKeys>().is_empty());
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut app = test_app();

        press(&mut app, KeyCode::Escape);
        app.update();
        assert!(app.world().resource::<ActiveKeys>().is_empty());
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut app = test_app();

        press(&mut app, KeyCode::ArrowRight);
        app.update();
        app.world_mut().send_event(WindowFocused {
            window: Entity::PLACEHOLDER,
            focused: false,
        });
        app.update();
        assert!(app.world().resource::<ActiveKeys>().is_empty());
    }

    #[test]
    fn holding_right_moves_player_right() {
        let mut app = test_app();
        let player = spawn_test_player(&mut app);

        press(&mut app, KeyCode::ArrowRight);
        advance_one_frame(&mut app);

        let motion = app.world().get::<Motion>(player).unwrap();
        assert!((motion.velocity.x - 1.0).abs() < 0.01);
        assert!(motion.position.x > 0.0);

        let transform = app.world().get::<Transform>(player).unwrap();
        assert_eq!(transform.translation.x, motion.position.x);
        assert_eq!(transform.translation.y, PLAYER_SIZE.y / 2.0);
        assert_eq!(app.world().resource::<CurrentTint>().0, tr_core::TrailTint::Lime);
    }

    #[test]
    fn switching_to_horizontal_grounds_player() {
        let mut app = test_app();
        let player = spawn_test_player(&mut app);

        press(&mut app, KeyCode::Space);
        advance_one_frame(&mut app);
        assert!(app.world().get::<Motion>(player).unwrap().position.y > 0.0);

        app.world_mut().resource_mut::<MotionTuning>().variant = MovementVariant::Horizontal;
        advance_one_frame(&mut app);

        let motion = app.world().get::<Motion>(player).unwrap();
        assert_eq!(motion.position.y, 0.0);
        assert_eq!(motion.velocity.y, 0.0);
        assert!(motion.can_jump);
    }

    #[test]
    fn reset_returns_to_origin() {
        let mut app = test_app();
        let player = spawn_test_player(&mut app);

        press(&mut app, KeyCode::ArrowRight);
        advance_one_frame(&mut app);
        advance_one_frame(&mut app);
        release(&mut app, KeyCode::ArrowRight);
        advance_one_frame(&mut app);
        assert!(app.world().get::<Motion>(player).unwrap().position.x > 0.0);

        press(&mut app, KeyCode::KeyR);
        advance_one_frame(&mut app);

        let motion = app.world().get::<Motion>(player).unwrap();
        assert_eq!(motion.velocity, Vec2::ZERO);
        assert_eq!(motion.position, Vec2::ZERO);
    }
}
