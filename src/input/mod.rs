use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::sets::GameSet;

/// Keyboard intent sampled once per render frame. Directions report the
/// held state; `jump` latches on press and stays set until the simulation
/// consumes it, so a tap can never fall between two fixed ticks.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct InputIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    pub quit: bool,
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputIntent>().add_systems(
            Update,
            (sample_input, quit_on_request).chain().in_set(GameSet::Input),
        );
    }
}

pub fn sample_input(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<InputIntent>) {
    intent.left = keys.pressed(KeyCode::ArrowLeft) || keys.pressed(KeyCode::KeyA);
    intent.right = keys.pressed(KeyCode::ArrowRight) || keys.pressed(KeyCode::KeyD);
    intent.up = keys.pressed(KeyCode::ArrowUp) || keys.pressed(KeyCode::KeyW);
    intent.down = keys.pressed(KeyCode::ArrowDown) || keys.pressed(KeyCode::KeyS);
    if keys.just_pressed(KeyCode::Space) {
        intent.jump = true;
    }
    if keys.just_pressed(KeyCode::Escape) {
        intent.quit = true;
    }
}

fn quit_on_request(intent: Res<InputIntent>, mut exit: MessageWriter<AppExit>) {
    if intent.quit {
        exit.write(AppExit::Success);
    }
}
