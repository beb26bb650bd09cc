use bevy::camera::ScalingMode;
use bevy::prelude::*;

use crate::config::tuning::Tuning;
use crate::game::components::*;

use super::input_plugin::MainCamera;

/// Camera, ground and the player character with its placeholder visuals.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene);
    }
}

fn setup_scene(
    mut commands: Commands,
    tuning: Res<Tuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn((
        Camera2d,
        MainCamera,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::WindowSize,
            scale: tuning.camera_scale.max(0.01),
            ..OrthographicProjection::default_2d()
        }),
    ));

    let ground_mesh = meshes.add(Rectangle::new(4000.0, 4000.0));
    commands.spawn((
        Mesh2d(ground_mesh),
        MeshMaterial2d(materials.add(Color::srgba(0.15, 0.15, 0.2, 1.0))),
        Transform::from_translation(Vec3::new(0.0, 0.0, -1.0)),
    ));

    let radius = tuning.character_radius;
    let body_mesh = meshes.add(Circle::new(radius));
    let marker_len = tuning.facing_marker_len;
    let marker_mesh = meshes.add(Rectangle::new(marker_len, tuning.facing_marker_thickness));

    commands
        .spawn((
            character_bundle(&tuning.speeds),
            PlayerControlled,
            Mesh2d(body_mesh),
            MeshMaterial2d(materials.add(Color::srgb(0.2, 0.6, 1.0))),
            Transform::default(),
        ))
        .with_children(|parent| {
            // Points along local +X, which is yaw 0.
            parent.spawn((
                Mesh2d(marker_mesh),
                MeshMaterial2d(materials.add(Color::srgb(0.9, 0.9, 1.0))),
                Transform::from_translation(Vec3::new(radius + marker_len * 0.5, 0.0, 0.5)),
            ));
        });
}
