use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

use crate::stage::layer::TileLayer;

use super::player::FrameCounts;
use super::tiles::TileDef;

/// Asset loaded from player.def.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct PlayerDefAsset {
    pub speed: f32,
    pub gravity: f32,
    pub jump_speed: f32,
    pub jump_decay: f32,
    pub size: f32,
    pub walk_frame_ticks: u32,
    pub frames: FrameCounts,
}

/// Asset loaded from stage.config.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct StageConfigAsset {
    pub tile_size: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

/// Asset loaded from tiles.palette.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct TilePaletteAsset {
    pub tiles: Vec<TileDef>,
}

/// Asset loaded from a map layer CSV file.
#[derive(Asset, TypePath, Debug, Clone)]
pub struct TileLayerAsset {
    pub layer: TileLayer,
}
