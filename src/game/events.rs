use bevy::prelude::*;

use super::movement_state::MovementState;

/// Named input events delivered to the controlled character.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum IntentMessage {
    /// `ChangeToSprint` pressed / released.
    Sprint(bool),
    /// `ChangeToWalk` pressed / released.
    Walk(bool),
    /// `AimEvent` pressed / released.
    Aim(bool),
    /// `MoveForward` axis value, sent every frame.
    AxisForward(f32),
    /// `MoveRight` axis value, sent every frame.
    AxisStrafe(f32),
}

/// Emitted when a character's movement state actually changes.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct MovementStateChanged {
    pub entity: Entity,
    pub from: MovementState,
    pub to: MovementState,
    pub max_speed: f32,
}
