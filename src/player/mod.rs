pub mod animation;
pub mod resolve;
pub mod state;

use bevy::prelude::*;

use crate::collision::Contact;
use crate::registry::player::PlayerConfig;
use crate::registry::stage::StageConfig;
use crate::registry::AppState;
use crate::sets::GameSet;
use crate::stage::render::Z_PLAYER;
use crate::stage::render_translation;

use animation::CharacterFrames;
use state::Motion;

#[derive(Component)]
pub struct Player;

/// Screen-space position of the actor's top-left corner. Y grows
/// downward; the anchor converts this to world space.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct ScreenPos {
    pub x: f32,
    pub y: f32,
}

impl ScreenPos {
    pub fn vec(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Contacts found by the most recent resolution pass. Overwritten every
/// tick; the debug display reads it.
#[derive(Resource, Default)]
pub struct FrameContacts(pub Vec<Contact>);

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameContacts>()
            .add_systems(
                OnEnter(AppState::InGame),
                (animation::load_character_frames, spawn_player).chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    state::apply_intent.in_set(GameSet::Control),
                    resolve::update_player.in_set(GameSet::Physics),
                )
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(
                Update,
                animation::sync_player_sprite
                    .in_set(GameSet::Visuals)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

fn spawn_player(
    mut commands: Commands,
    config: Res<PlayerConfig>,
    stage_config: Res<StageConfig>,
    frames: Res<CharacterFrames>,
) {
    let pos = ScreenPos {
        x: stage_config.spawn_x,
        y: stage_config.spawn_y,
    };
    let size = Vec2::splat(config.size);

    commands.spawn((
        Player,
        pos,
        Motion::default(),
        Sprite::from_image(frames.standing.first().cloned().unwrap_or_default()),
        Transform::from_translation(render_translation(pos.vec(), size).extend(Z_PLAYER)),
    ));
}
