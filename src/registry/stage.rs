use bevy::prelude::*;

/// Stage parameters loaded from RON.
#[derive(Resource, Debug, Clone)]
pub struct StageConfig {
    pub tile_size: f32,
    /// Screen-space spawn position of the actor's top-left corner.
    pub spawn_x: f32,
    pub spawn_y: f32,
}
