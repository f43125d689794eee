use bevy::prelude::*;

use crate::collision::BoundingBox;

use super::layer::TileLayer;

/// A fixed square collider occupying one cell of the collision layer.
#[derive(Debug, Clone, Copy)]
pub struct StaticCollider {
    pub bounds: BoundingBox,
    /// World position of the top-left corner.
    pub pos: Vec2,
}

/// Every collider on the current stage, in layer scan order. Rebuilt
/// whenever the collision layer is (re)loaded, immutable in between.
#[derive(Resource, Default)]
pub struct Colliders(pub Vec<StaticCollider>);

impl Colliders {
    /// One collider per non-empty cell. Which tile a cell holds does not
    /// matter here; only its emptiness does.
    pub fn from_layer(layer: &TileLayer, tile_size: f32) -> Self {
        let colliders = layer
            .cells()
            .map(|(col, row, _id)| StaticCollider {
                bounds: BoundingBox::new(tile_size, tile_size),
                pos: Vec2::new(col as f32 * tile_size, row as f32 * tile_size),
            })
            .collect();
        Self(colliders)
    }
}
