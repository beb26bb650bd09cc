use bevy::prelude::*;

use super::components::*;
use super::intent::MovementIntent;

/// Screen-up on the top-down camera.
pub const WORLD_FORWARD: Vec2 = Vec2::Y;
/// Screen-right on the top-down camera.
pub const WORLD_RIGHT: Vec2 = Vec2::X;

/// MovementSet: feed the latched axis values into the actuator.
pub fn apply_movement_input(
    mut query: Query<(&MovementIntent, &mut CharacterMovement), With<Character>>,
) {
    for (intent, mut movement) in &mut query {
        movement.add_movement_input(WORLD_FORWARD, intent.axis_forward);
        movement.add_movement_input(WORLD_RIGHT, intent.axis_strafe);
    }
}

/// MovementSet: integrate pending input → velocity → position.
pub fn integrate_movement(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &mut CharacterMovement), With<Character>>,
) {
    let dt = time.delta_secs();
    for (mut transform, mut movement) in &mut query {
        let step = movement.consume_input(dt);
        transform.translation.x += step.x;
        transform.translation.y += step.y;
    }
}
