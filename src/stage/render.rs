use bevy::prelude::*;

use crate::camera::Anchor;
use crate::registry::stage::StageConfig;
use crate::registry::tiles::TilePalette;

use super::layer::TileLayer;
use super::{render_translation, StageMap};

/// Root entity of one rendered layer; the cell quads are its children.
#[derive(Component)]
pub struct LayerRoot;

// Draw order, back to front.
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_COLLIDERS: f32 = 1.0;
pub const Z_PLAYER: f32 = 2.0;
pub const Z_FOREGROUND: f32 = 3.0;

/// (Re)spawn the three layer quad trees. Runs when the stage map is first
/// inserted and again whenever a reload replaces it.
pub fn sync_stage(
    mut commands: Commands,
    stage: Res<StageMap>,
    config: Res<StageConfig>,
    palette: Res<TilePalette>,
    roots: Query<Entity, With<LayerRoot>>,
) {
    for entity in &roots {
        commands.entity(entity).despawn();
    }

    spawn_layer(&mut commands, &stage.background, &config, &palette, Z_BACKGROUND);
    spawn_layer(&mut commands, &stage.colliders, &config, &palette, Z_COLLIDERS);
    spawn_layer(&mut commands, &stage.foreground, &config, &palette, Z_FOREGROUND);
    info!(
        "Stage spawned: {}x{} cells",
        stage.background.width(),
        stage.background.height()
    );
}

fn spawn_layer(
    commands: &mut Commands,
    layer: &TileLayer,
    config: &StageConfig,
    palette: &TilePalette,
    z: f32,
) {
    let size = Vec2::splat(config.tile_size);
    commands
        .spawn((LayerRoot, Transform::from_xyz(0.0, 0.0, z), Visibility::default()))
        .with_children(|parent| {
            for (col, row, id) in layer.cells() {
                let pos = Vec2::new(
                    col as f32 * config.tile_size,
                    row as f32 * config.tile_size,
                );
                parent.spawn((
                    Sprite::from_color(palette.color_of(id), size),
                    Transform::from_translation(render_translation(pos, size).extend(0.0)),
                ));
            }
        });
}

/// Scroll the layer roots by the negated anchor. Children keep their
/// world-derived offsets; only the roots move.
pub fn apply_anchor(anchor: Res<Anchor>, mut roots: Query<&mut Transform, With<LayerRoot>>) {
    for mut transform in &mut roots {
        transform.translation.x = -anchor.x;
        transform.translation.y = anchor.y;
    }
}
