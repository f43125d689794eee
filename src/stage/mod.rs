pub mod colliders;
pub mod layer;
pub mod render;

use bevy::prelude::*;

use crate::registry::AppState;
use crate::sets::GameSet;

use layer::TileLayer;

/// Logical screen surface in pixels. The window resolution and the walk
/// policy's center split both derive from it.
pub const SCREEN_SIZE: Vec2 = Vec2::new(800.0, 600.0);

/// Convert a screen-space rectangle (top-left corner, Y down) into the
/// render translation of its center (Y up). The only place the two
/// coordinate conventions meet.
pub fn render_translation(pos: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(pos.x + size.x / 2.0, SCREEN_SIZE.y - pos.y - size.y / 2.0)
}

/// The three parsed layers of the current stage.
#[derive(Resource)]
pub struct StageMap {
    pub background: TileLayer,
    pub colliders: TileLayer,
    pub foreground: TileLayer,
}

/// Horizontal scroll limit for the current stage.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct StageBounds {
    pub max_anchor_x: f32,
}

impl StageBounds {
    pub fn from_layer(layer: &TileLayer, tile_size: f32, screen_width: f32) -> Self {
        Self {
            max_anchor_x: (layer.pixel_width(tile_size) - screen_width).max(0.0),
        }
    }
}

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                render::sync_stage.run_if(resource_exists_and_changed::<StageMap>),
                render::apply_anchor.in_set(GameSet::Camera),
            )
                .run_if(in_state(AppState::InGame)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_translation_flips_y() {
        // A 32px tile whose top-left sits at screen (96, 128).
        let t = render_translation(Vec2::new(96.0, 128.0), Vec2::splat(32.0));
        assert_eq!(t, Vec2::new(112.0, 456.0));
    }

    #[test]
    fn render_translation_puts_screen_origin_top_left() {
        let t = render_translation(Vec2::ZERO, Vec2::splat(32.0));
        assert_eq!(t, Vec2::new(16.0, SCREEN_SIZE.y - 16.0));
    }

    #[test]
    fn bounds_from_a_wide_layer() {
        let layer = TileLayer::parse(&format!("1{}", ",1".repeat(39))).unwrap();
        let bounds = StageBounds::from_layer(&layer, 32.0, SCREEN_SIZE.x);
        assert_eq!(bounds.max_anchor_x, 480.0);
    }

    #[test]
    fn bounds_clamp_to_zero_for_narrow_layers() {
        let layer = TileLayer::parse("1,1,1").unwrap();
        let bounds = StageBounds::from_layer(&layer, 32.0, SCREEN_SIZE.x);
        assert_eq!(bounds.max_anchor_x, 0.0);
    }
}
