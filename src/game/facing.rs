use bevy::prelude::*;

use super::components::*;

/// World point under the pointer, rewritten every frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorTarget {
    pub hit: Option<CursorHit>,
}

/// Ground-plane point under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorHit {
    pub point: Vec2,
}

/// Yaw (radians about +Z, 0 = facing +X) that looks from `origin` at `target`.
pub fn look_at_yaw(origin: Vec2, target: Vec2) -> f32 {
    let d = target - origin;
    d.y.atan2(d.x)
}

/// Yaw-only rotation; pitch and roll stay zero.
pub fn yaw_rotation(yaw: f32) -> Quat {
    Quat::from_rotation_z(yaw)
}

/// FacingSet: snap each character to face the cursor hit. No hit → keep the last rotation.
pub fn face_cursor(
    target: Res<CursorTarget>,
    mut query: Query<&mut Transform, (With<Character>, With<PlayerControlled>)>,
) {
    let Some(hit) = target.hit else {
        return;
    };
    for mut transform in &mut query {
        let yaw = look_at_yaw(transform.translation.truncate(), hit.point);
        transform.rotation = yaw_rotation(yaw);
    }
}
