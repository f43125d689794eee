mod camera;
mod collision;
mod input;
mod player;
mod registry;
mod sets;
mod stage;
#[cfg(test)]
mod test_helpers;
mod ui;

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use sets::GameSet;
use stage::SCREEN_SIZE;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Tilestep".into(),
                        resolution: (SCREEN_SIZE.x as u32, SCREEN_SIZE.y as u32).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .insert_resource(Time::<Fixed>::from_hz(60.0))
        .configure_sets(FixedUpdate, (GameSet::Control, GameSet::Physics).chain())
        .configure_sets(
            Update,
            (
                GameSet::Input,
                GameSet::Camera,
                GameSet::Visuals,
                GameSet::Ui,
            )
                .chain(),
        )
        .add_plugins(registry::RegistryPlugin)
        .add_plugins(stage::StagePlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(camera::CameraPlugin)
        .add_plugins(input::InputPlugin)
        .add_plugins(ui::UiPlugin)
        .run();
}
