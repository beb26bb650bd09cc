use bevy::prelude::*;

use tds_character::config::tuning::Tuning;
use tds_character::plugins::{
    game_plugin::GamePlugin, input_plugin::PlayerInputPlugin, scene_plugin::ScenePlugin,
};

fn main() {
    let tuning = Tuning::load_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Top Down Character".into(),
                resolution: (1280u32, 720u32).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(tuning)
        .add_plugins(GamePlugin)
        .add_plugins(PlayerInputPlugin)
        .add_plugins(ScenePlugin)
        .run();
}
