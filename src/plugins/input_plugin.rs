use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::game::{
    events::IntentMessage,
    facing::{CursorHit, CursorTarget},
};

use super::game_plugin::CharacterSet;

/// Keyboard / mouse bindings for the named input actions.
const MOVE_FORWARD: (KeyCode, KeyCode) = (KeyCode::KeyW, KeyCode::KeyS);
const MOVE_RIGHT: (KeyCode, KeyCode) = (KeyCode::KeyD, KeyCode::KeyA);
const CHANGE_TO_SPRINT: KeyCode = KeyCode::ShiftLeft;
const CHANGE_TO_WALK: KeyCode = KeyCode::AltLeft;
const AIM_EVENT: MouseButton = MouseButton::Right;

/// Marks the camera used to resolve the cursor into the world.
#[derive(Component)]
pub struct MainCamera;

/// Turns device input into [`IntentMessage`]s and the [`CursorTarget`].
pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (read_movement_input, update_cursor_target).in_set(CharacterSet::InputSet),
        );
    }
}

fn axis(keyboard: &ButtonInput<KeyCode>, (positive, negative): (KeyCode, KeyCode)) -> f32 {
    let mut value = 0.0;
    if keyboard.pressed(positive) {
        value += 1.0;
    }
    if keyboard.pressed(negative) {
        value -= 1.0;
    }
    value
}

/// Press / release edges of `button` this frame. When both happened, the edge
/// matching the current held state comes last.
fn edges<T>(input: &ButtonInput<T>, button: T) -> impl Iterator<Item = bool>
where
    T: Copy + Eq + std::hash::Hash + Send + Sync + 'static,
{
    let pressed = input.just_pressed(button).then_some(true);
    let released = input.just_released(button).then_some(false);
    let (first, last) = if input.pressed(button) {
        (released, pressed)
    } else {
        (pressed, released)
    };
    first.into_iter().chain(last)
}

/// Axes every frame, actions only on press / release edges.
fn read_movement_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut writer: MessageWriter<IntentMessage>,
) {
    writer.write(IntentMessage::AxisForward(axis(&keyboard, MOVE_FORWARD)));
    writer.write(IntentMessage::AxisStrafe(axis(&keyboard, MOVE_RIGHT)));

    for held in edges(&keyboard, CHANGE_TO_SPRINT) {
        writer.write(IntentMessage::Sprint(held));
    }
    for held in edges(&keyboard, CHANGE_TO_WALK) {
        writer.write(IntentMessage::Walk(held));
    }
    for held in edges(&mouse, AIM_EVENT) {
        writer.write(IntentMessage::Aim(held));
    }
}

/// Project the cursor onto the ground plane. Cursor outside the window → no hit.
fn update_cursor_target(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut target: ResMut<CursorTarget>,
) {
    target.hit = None;

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(point) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    target.hit = Some(CursorHit { point });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_keys_cancel() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyW);
        assert_eq!(axis(&keyboard, MOVE_FORWARD), 1.0);
        keyboard.press(KeyCode::KeyS);
        assert_eq!(axis(&keyboard, MOVE_FORWARD), 0.0);
        keyboard.release(KeyCode::KeyW);
        assert_eq!(axis(&keyboard, MOVE_FORWARD), -1.0);
    }

    #[test]
    fn edges_report_press_and_release() {
        let mut mouse = ButtonInput::<MouseButton>::default();
        assert_eq!(edges(&mouse, AIM_EVENT).count(), 0);
        mouse.press(AIM_EVENT);
        assert_eq!(edges(&mouse, AIM_EVENT).collect::<Vec<_>>(), vec![true]);
        mouse.clear();
        assert_eq!(edges(&mouse, AIM_EVENT).count(), 0);
        mouse.release(AIM_EVENT);
        assert_eq!(edges(&mouse, AIM_EVENT).collect::<Vec<_>>(), vec![false]);
    }

    #[test]
    fn tap_within_one_frame_yields_both_edges() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(CHANGE_TO_WALK);
        keyboard.release(CHANGE_TO_WALK);
        assert_eq!(
            edges(&keyboard, CHANGE_TO_WALK).collect::<Vec<_>>(),
            vec![true, false]
        );
    }

    #[test]
    fn release_and_repress_within_one_frame_ends_held() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(CHANGE_TO_WALK);
        keyboard.clear();
        keyboard.release(CHANGE_TO_WALK);
        keyboard.press(CHANGE_TO_WALK);
        assert!(keyboard.pressed(CHANGE_TO_WALK));
        assert_eq!(
            edges(&keyboard, CHANGE_TO_WALK).collect::<Vec<_>>(),
            vec![false, true]
        );
    }
}
