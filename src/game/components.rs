use bevy::prelude::*;

use super::intent::MovementIntent;
use super::movement_state::{MovementSpeedTable, MovementState};

// ── Marker components ───────────────────────────────────────────────

#[derive(Component)]
pub struct Character;

/// Receives the local player's input messages.
#[derive(Component)]
pub struct PlayerControlled;

// ── Movement actuator ───────────────────────────────────────────────

/// Consumes movement input each frame and moves the owning transform.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct CharacterMovement {
    /// Speed reached at full input, world units per second.
    pub max_speed: f32,
    /// Input accumulated this frame; cleared by the integration step.
    pub pending_input: Vec2,
    /// Velocity applied during the last integration step.
    pub velocity: Vec2,
}

impl CharacterMovement {
    pub fn new(max_speed: f32) -> Self {
        Self {
            max_speed,
            pending_input: Vec2::ZERO,
            velocity: Vec2::ZERO,
        }
    }

    pub fn add_movement_input(&mut self, direction: Vec2, scale: f32) {
        self.pending_input += direction * scale;
    }

    /// Turn the pending input into a velocity and return the displacement for `dt`.
    pub fn consume_input(&mut self, dt: f32) -> Vec2 {
        let input = self.pending_input.clamp_length_max(1.0);
        self.pending_input = Vec2::ZERO;
        self.velocity = input * self.max_speed;
        self.velocity * dt
    }
}

/// Components for a character that starts in the default (Run) state.
pub fn character_bundle(speeds: &MovementSpeedTable) -> impl Bundle {
    (
        Character,
        MovementIntent::default(),
        MovementState::default(),
        CharacterMovement::new(speeds.speed_for(MovementState::default())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_input_is_clamped_to_max_speed() {
        let mut movement = CharacterMovement::new(600.0);
        movement.add_movement_input(Vec2::Y, 1.0);
        movement.add_movement_input(Vec2::X, 1.0);
        let step = movement.consume_input(0.5);
        assert!((movement.velocity.length() - 600.0).abs() < 1e-3);
        assert!((step.length() - 300.0).abs() < 1e-3);
        assert_eq!(movement.pending_input, Vec2::ZERO);
    }

    #[test]
    fn partial_input_scales_speed() {
        let mut movement = CharacterMovement::new(200.0);
        movement.add_movement_input(Vec2::Y, 0.5);
        movement.consume_input(1.0);
        assert_eq!(movement.velocity, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn no_input_stops() {
        let mut movement = CharacterMovement::new(200.0);
        movement.velocity = Vec2::X;
        assert_eq!(movement.consume_input(1.0), Vec2::ZERO);
        assert_eq!(movement.velocity, Vec2::ZERO);
    }
}
