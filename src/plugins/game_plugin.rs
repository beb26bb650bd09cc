use bevy::prelude::*;

use crate::config::tuning::Tuning;
use crate::game::{
    events::{IntentMessage, MovementStateChanged},
    facing::{self, CursorTarget},
    intent, movement_state, physics,
};

// ── SystemSets (strict Update ordering) ─────────────────────────────

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CharacterSet {
    /// Raw input → intent messages + cursor target.
    InputSet,
    /// Intent messages → latch → movement state → actuator speed.
    IntentSet,
    /// Axis values → actuator → transform.
    MovementSet,
    /// Cursor target → yaw.
    FacingSet,
}

/// Character simulation. Needs a [`Tuning`] resource; input comes from
/// [`IntentMessage`]s and the [`CursorTarget`] resource.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<IntentMessage>();
        app.add_message::<MovementStateChanged>();
        app.init_resource::<CursorTarget>();

        app.configure_sets(
            Update,
            (
                CharacterSet::InputSet,
                CharacterSet::IntentSet,
                CharacterSet::MovementSet,
                CharacterSet::FacingSet,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                movement_state::refresh_speeds_on_tuning_change
                    .run_if(resource_changed::<Tuning>),
                intent::apply_intent_messages,
            )
                .chain()
                .in_set(CharacterSet::IntentSet),
        );

        app.add_systems(
            Update,
            (physics::apply_movement_input, physics::integrate_movement)
                .chain()
                .in_set(CharacterSet::MovementSet),
        );

        app.add_systems(Update, facing::face_cursor.in_set(CharacterSet::FacingSet));

        // ── Always-on ───────────────────────────────────────────────────
        app.add_systems(Update, tuning_reload_input);
    }
}

/// Reload tuning with F5.
fn tuning_reload_input(keyboard: Option<Res<ButtonInput<KeyCode>>>, mut tuning: ResMut<Tuning>) {
    if keyboard.is_some_and(|k| k.just_pressed(KeyCode::F5)) {
        tuning.reload();
    }
}
