//! Hot-reload systems for registry assets.

use bevy::asset::AssetEvent;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::stage::colliders::Colliders;
use crate::stage::{StageBounds, StageMap, SCREEN_SIZE};

use super::assets::{PlayerDefAsset, StageConfigAsset, TileLayerAsset, TilePaletteAsset};
use super::player::PlayerConfig;
use super::stage::StageConfig;
use super::tiles::TilePalette;
use super::RegistryHandles;

pub(crate) fn hot_reload_player(
    mut events: MessageReader<AssetEvent<PlayerDefAsset>>,
    handles: Res<RegistryHandles>,
    assets: Res<Assets<PlayerDefAsset>>,
    mut config: ResMut<PlayerConfig>,
) {
    for event in events.read() {
        if let AssetEvent::Modified { id } = event
            && *id == handles.player.id()
            && let Some(asset) = assets.get(&handles.player)
        {
            config.speed = asset.speed;
            config.gravity = asset.gravity;
            config.jump_speed = asset.jump_speed;
            config.jump_decay = asset.jump_decay;
            config.size = asset.size;
            config.walk_frame_ticks = asset.walk_frame_ticks;
            config.frames = asset.frames.clone();
            info!(
                "Hot-reloaded PlayerConfig: speed={}, gravity={}, jump={}",
                asset.speed, asset.gravity, asset.jump_speed
            );
        }
    }
}

pub(crate) fn hot_reload_stage(
    mut events: MessageReader<AssetEvent<StageConfigAsset>>,
    handles: Res<RegistryHandles>,
    assets: Res<Assets<StageConfigAsset>>,
    mut config: ResMut<StageConfig>,
    mut stage: ResMut<StageMap>,
    mut colliders: ResMut<Colliders>,
    mut bounds: ResMut<StageBounds>,
) {
    for event in events.read() {
        if let AssetEvent::Modified { id } = event
            && *id == handles.stage.id()
            && let Some(asset) = assets.get(&handles.stage)
        {
            config.tile_size = asset.tile_size;
            config.spawn_x = asset.spawn_x;
            config.spawn_y = asset.spawn_y;

            // Tile size feeds the collider grid and the scroll limit, so
            // both are rebuilt; marking the map changed respawns the quads.
            *colliders = Colliders::from_layer(&stage.colliders, config.tile_size);
            *bounds = StageBounds::from_layer(&stage.background, config.tile_size, SCREEN_SIZE.x);
            stage.set_changed();
            info!("Hot-reloaded StageConfig: tile_size={}", asset.tile_size);
        }
    }
}

pub(crate) fn hot_reload_palette(
    mut events: MessageReader<AssetEvent<TilePaletteAsset>>,
    handles: Res<RegistryHandles>,
    assets: Res<Assets<TilePaletteAsset>>,
    mut palette: ResMut<TilePalette>,
    mut stage: ResMut<StageMap>,
) {
    for event in events.read() {
        if let AssetEvent::Modified { id } = event
            && *id == handles.palette.id()
            && let Some(asset) = assets.get(&handles.palette)
        {
            *palette = TilePalette::from_defs(asset.tiles.clone());
            stage.set_changed();
            info!("Hot-reloaded TilePalette ({} tiles)", asset.tiles.len());
        }
    }
}

pub(crate) fn hot_reload_layers(
    mut events: MessageReader<AssetEvent<TileLayerAsset>>,
    handles: Res<RegistryHandles>,
    assets: Res<Assets<TileLayerAsset>>,
    config: Res<StageConfig>,
    mut stage: ResMut<StageMap>,
    mut colliders: ResMut<Colliders>,
    mut bounds: ResMut<StageBounds>,
) {
    for event in events.read() {
        if let AssetEvent::Modified { id } = event {
            let ours = *id == handles.background.id()
                || *id == handles.colliders.id()
                || *id == handles.foreground.id();
            if ours
                && let (Some(bg), Some(col), Some(fg)) = (
                    assets.get(&handles.background),
                    assets.get(&handles.colliders),
                    assets.get(&handles.foreground),
                )
            {
                *stage = StageMap {
                    background: bg.layer.clone(),
                    colliders: col.layer.clone(),
                    foreground: fg.layer.clone(),
                };
                *colliders = Colliders::from_layer(&stage.colliders, config.tile_size);
                *bounds =
                    StageBounds::from_layer(&stage.background, config.tile_size, SCREEN_SIZE.x);
                info!("Hot-reloaded stage layers ({} colliders)", colliders.0.len());
            }
        }
    }
}
