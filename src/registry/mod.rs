pub mod assets;
pub mod hot_reload;
pub mod loader;
pub mod player;
pub mod stage;
pub mod tiles;

use bevy::prelude::*;

use crate::stage::colliders::Colliders;
use crate::stage::{StageBounds, StageMap, SCREEN_SIZE};

use assets::{PlayerDefAsset, StageConfigAsset, TileLayerAsset, TilePaletteAsset};
use loader::{CsvLayerLoader, RonLoader};
use player::PlayerConfig;
use stage::StageConfig;
use tiles::TilePalette;

/// Application state: Loading waits for assets, InGame runs gameplay.
#[derive(States, Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    InGame,
}

/// Handles to every registry asset. Kept alive for the whole run so
/// hot-reload events can be matched back to their source.
#[derive(Resource)]
pub struct RegistryHandles {
    pub player: Handle<PlayerDefAsset>,
    pub stage: Handle<StageConfigAsset>,
    pub palette: Handle<TilePaletteAsset>,
    pub background: Handle<TileLayerAsset>,
    pub colliders: Handle<TileLayerAsset>,
    pub foreground: Handle<TileLayerAsset>,
}

pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_asset::<PlayerDefAsset>()
            .init_asset::<StageConfigAsset>()
            .init_asset::<TilePaletteAsset>()
            .init_asset::<TileLayerAsset>()
            .register_asset_loader(RonLoader::<PlayerDefAsset>::new(&["def.ron"]))
            .register_asset_loader(RonLoader::<StageConfigAsset>::new(&["config.ron"]))
            .register_asset_loader(RonLoader::<TilePaletteAsset>::new(&["palette.ron"]))
            .register_asset_loader(CsvLayerLoader)
            .add_systems(Startup, start_loading)
            .add_systems(Update, check_loading.run_if(in_state(AppState::Loading)))
            .add_systems(
                Update,
                (
                    hot_reload::hot_reload_player,
                    hot_reload::hot_reload_stage,
                    hot_reload::hot_reload_palette,
                    hot_reload::hot_reload_layers,
                )
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let player = asset_server.load::<PlayerDefAsset>("data/player.def.ron");
    let stage = asset_server.load::<StageConfigAsset>("data/stage.config.ron");
    let palette = asset_server.load::<TilePaletteAsset>("data/tiles.palette.ron");
    let background = asset_server.load::<TileLayerAsset>("maps/level1/background.csv");
    let colliders = asset_server.load::<TileLayerAsset>("maps/level1/colliders.csv");
    let foreground = asset_server.load::<TileLayerAsset>("maps/level1/foreground.csv");
    commands.insert_resource(RegistryHandles {
        player,
        stage,
        palette,
        background,
        colliders,
        foreground,
    });
}

#[allow(clippy::too_many_arguments)]
fn check_loading(
    mut commands: Commands,
    handles: Res<RegistryHandles>,
    player_assets: Res<Assets<PlayerDefAsset>>,
    stage_assets: Res<Assets<StageConfigAsset>>,
    palette_assets: Res<Assets<TilePaletteAsset>>,
    layer_assets: Res<Assets<TileLayerAsset>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let (Some(player), Some(stage), Some(palette), Some(bg), Some(col), Some(fg)) = (
        player_assets.get(&handles.player),
        stage_assets.get(&handles.stage),
        palette_assets.get(&handles.palette),
        layer_assets.get(&handles.background),
        layer_assets.get(&handles.colliders),
        layer_assets.get(&handles.foreground),
    ) else {
        return; // not loaded yet
    };

    // Build resources from loaded assets
    commands.insert_resource(PlayerConfig {
        speed: player.speed,
        gravity: player.gravity,
        jump_speed: player.jump_speed,
        jump_decay: player.jump_decay,
        size: player.size,
        walk_frame_ticks: player.walk_frame_ticks,
        frames: player.frames.clone(),
    });
    commands.insert_resource(StageConfig {
        tile_size: stage.tile_size,
        spawn_x: stage.spawn_x,
        spawn_y: stage.spawn_y,
    });
    commands.insert_resource(TilePalette::from_defs(palette.tiles.clone()));

    let map = StageMap {
        background: bg.layer.clone(),
        colliders: col.layer.clone(),
        foreground: fg.layer.clone(),
    };
    commands.insert_resource(Colliders::from_layer(&map.colliders, stage.tile_size));
    commands.insert_resource(StageBounds::from_layer(
        &map.background,
        stage.tile_size,
        SCREEN_SIZE.x,
    ));
    commands.insert_resource(map);

    next_state.set(AppState::InGame);
    info!("All registry assets loaded, entering InGame state");
}
