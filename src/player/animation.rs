use bevy::prelude::*;

use crate::registry::player::PlayerConfig;
use crate::stage::render::Z_PLAYER;
use crate::stage::render_translation;

use super::state::{Facing, Motion, MotionState};
use super::{Player, ScreenPos};

/// Loaded animation frame handles, one list per motion state.
#[derive(Resource)]
pub struct CharacterFrames {
    pub standing: Vec<Handle<Image>>,
    pub walking: Vec<Handle<Image>>,
    pub jumping: Vec<Handle<Image>>,
    pub crouching: Vec<Handle<Image>>,
}

impl CharacterFrames {
    pub fn for_state(&self, state: MotionState) -> &[Handle<Image>] {
        match state {
            MotionState::Standing => &self.standing,
            MotionState::Walking => &self.walking,
            MotionState::Jumping => &self.jumping,
            MotionState::Crouching => &self.crouching,
        }
    }
}

/// Load character animation frames (runs once on InGame enter, before
/// spawn_player). Frame counts come from the player definition; files
/// follow the `<state>_<index>.png` naming.
pub fn load_character_frames(
    mut commands: Commands,
    config: Res<PlayerConfig>,
    asset_server: Res<AssetServer>,
) {
    let load = |state: &str, count: u32| -> Vec<Handle<Image>> {
        (0..count)
            .map(|i| asset_server.load(format!("characters/ranger/{state}_{i}.png")))
            .collect()
    };
    commands.insert_resource(CharacterFrames {
        standing: load("standing", config.frames.standing),
        walking: load("walking", config.frames.walking),
        jumping: load("jumping", config.frames.jumping),
        crouching: load("crouching", config.frames.crouching),
    });
}

/// Mirror the simulation onto the sprite: position, current frame and
/// facing. The left-facing frames are the right-facing ones flipped.
pub fn sync_player_sprite(
    config: Res<PlayerConfig>,
    frames: Res<CharacterFrames>,
    mut query: Query<(&ScreenPos, &Motion, &mut Sprite, &mut Transform), With<Player>>,
) {
    let Ok((pos, motion, mut sprite, mut transform)) = query.single_mut() else {
        return;
    };

    let size = Vec2::splat(config.size);
    transform.translation = render_translation(pos.vec(), size).extend(Z_PLAYER);

    let list = frames.for_state(motion.state);
    if let Some(handle) = list.get(motion.frame).or_else(|| list.first()) {
        sprite.image = handle.clone();
    }
    sprite.flip_x = motion.facing == Facing::Left;
}
