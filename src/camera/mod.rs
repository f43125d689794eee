use bevy::prelude::*;

use crate::stage::SCREEN_SIZE;

/// World-to-screen scroll offset: a thing at world (x, y) appears on
/// screen at (x - anchor.x, y - anchor.y). The walk policy drives the X
/// component; Y is carried but never scrolled.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Anchor>()
            .add_systems(Startup, spawn_camera);
    }
}

/// Fixed camera over the logical screen surface. Scrolling happens by
/// moving the layer roots, not the camera.
fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(SCREEN_SIZE.x / 2.0, SCREEN_SIZE.y / 2.0, 0.0),
    ));
}
