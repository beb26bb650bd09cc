use bevy::prelude::*;

use super::components::{CharacterMovement, PlayerControlled};
use super::events::{IntentMessage, MovementStateChanged};
use super::movement_state::{MovementSpeedTable, MovementState, change_movement_state};
use crate::config::tuning::Tuning;

/// Input intent: latched from input messages, read by the movement systems.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementIntent {
    pub sprint_held: bool,
    pub walk_held: bool,
    pub aim_held: bool,
    /// Forward axis value, unclamped.
    pub axis_forward: f32,
    /// Strafe (right) axis value, unclamped.
    pub axis_strafe: f32,
}

impl MovementIntent {
    pub fn set_sprint(&mut self, held: bool) {
        self.sprint_held = held;
    }

    pub fn set_walk(&mut self, held: bool) {
        self.walk_held = held;
    }

    pub fn set_aim(&mut self, held: bool) {
        self.aim_held = held;
    }

    pub fn set_axis_forward(&mut self, value: f32) {
        self.axis_forward = value;
    }

    pub fn set_axis_strafe(&mut self, value: f32) {
        self.axis_strafe = value;
    }
}

/// Latch one input message. Button edges always recompute the movement
/// state, even when the flag already had that value.
///
/// Returns the previous state if the edge caused a transition.
pub fn apply_intent_message(
    message: IntentMessage,
    intent: &mut MovementIntent,
    state: &mut MovementState,
    movement: &mut CharacterMovement,
    speeds: &MovementSpeedTable,
) -> Option<MovementState> {
    match message {
        IntentMessage::AxisForward(v) => {
            intent.set_axis_forward(v);
            return None;
        }
        IntentMessage::AxisStrafe(v) => {
            intent.set_axis_strafe(v);
            return None;
        }
        IntentMessage::Sprint(held) => intent.set_sprint(held),
        IntentMessage::Walk(held) => intent.set_walk(held),
        IntentMessage::Aim(held) => intent.set_aim(held),
    }
    change_movement_state(intent, state, movement, speeds)
}

/// IntentSet: latch every input message on the player's character, in arrival order.
pub fn apply_intent_messages(
    mut messages: MessageReader<IntentMessage>,
    tuning: Res<Tuning>,
    mut query: Query<
        (Entity, &mut MovementIntent, &mut MovementState, &mut CharacterMovement),
        With<PlayerControlled>,
    >,
    mut changed: MessageWriter<MovementStateChanged>,
) {
    for message in messages.read() {
        for (entity, mut intent, mut state, mut movement) in &mut query {
            let Some(from) = apply_intent_message(
                *message,
                &mut intent,
                &mut state,
                &mut movement,
                &tuning.speeds,
            ) else {
                continue;
            };
            info!(
                "[Movement] {:?}: {} -> {} (max_speed={:.0})",
                entity,
                from.display_name(),
                state.display_name(),
                movement.max_speed
            );
            changed.write(MovementStateChanged {
                entity,
                from,
                to: *state,
                max_speed: movement.max_speed,
            });
        }
    }
}
