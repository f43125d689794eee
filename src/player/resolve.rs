use bevy::prelude::*;

use crate::camera::Anchor;
use crate::collision::{BoundingBox, Contact, Side};
use crate::registry::player::PlayerConfig;
use crate::registry::stage::StageConfig;
use crate::stage::colliders::Colliders;

use super::state::{GroundState, Motion, MotionState};
use super::{FrameContacts, Player, ScreenPos};

/// One fixed simulation tick: decay the jump, fall, then resolve against
/// the stage side by side in a fixed order (bottom, top, right, left).
/// Within a side only the first contact snaps; later ones are recorded
/// but apply no further correction, so straddling two tiles corrects
/// exactly once.
pub fn update_player(
    config: Res<PlayerConfig>,
    stage_config: Res<StageConfig>,
    colliders: Res<Colliders>,
    anchor: Res<Anchor>,
    mut contacts: ResMut<FrameContacts>,
    mut query: Query<(&mut ScreenPos, &mut Motion), With<Player>>,
) {
    let Ok((mut pos, mut motion)) = query.single_mut() else {
        return;
    };

    if motion.state == MotionState::Jumping {
        motion.decay_jump(config.jump_decay);
    }
    pos.y += config.gravity + motion.jump_vel;

    // In the air until a bottom contact proves otherwise.
    motion.ground = GroundState::Air;

    let bbox = BoundingBox::new(config.size, config.size);
    let ts = stage_config.tile_size;
    contacts.0.clear();

    // --- Bottom ---
    let found = scan(Side::Bottom, &bbox, &pos, &anchor, &colliders);
    let mut snapped = false;
    for contact in &found {
        motion.ground = GroundState::Grounded;
        if motion.state == MotionState::Jumping {
            motion.reset_frame();
            motion.jump_vel = 0.0;
            motion.state = MotionState::Standing;
        }
        if !snapped {
            snap_to_grid(&mut pos, contact.side, config.size, ts);
            snapped = true;
        }
    }
    contacts.0.extend(found);

    // --- Top ---
    let found = scan(Side::Top, &bbox, &pos, &anchor, &colliders);
    let mut snapped = false;
    for contact in &found {
        if motion.state == MotionState::Jumping {
            motion.reset_frame();
            motion.jump_vel = 0.0;
            motion.state = MotionState::Standing;
        }
        if !snapped {
            snap_to_grid(&mut pos, contact.side, config.size, ts);
            snapped = true;
        }
    }
    contacts.0.extend(found);

    // --- Right, then left ---
    for side in [Side::Right, Side::Left] {
        let found = scan(side, &bbox, &pos, &anchor, &colliders);
        let mut snapped = false;
        for contact in &found {
            if !snapped {
                snap_to_grid(&mut pos, contact.side, config.size, ts);
                snapped = true;
            }
        }
        contacts.0.extend(found);
    }
}

/// Run one side's directional test against every stage collider, with the
/// actor's screen position lifted into world space by the anchor.
fn scan(
    side: Side,
    bbox: &BoundingBox,
    pos: &ScreenPos,
    anchor: &Anchor,
    colliders: &Colliders,
) -> Vec<Contact> {
    let world = Vec2::new(pos.x + anchor.x, pos.y + anchor.y);
    let mut found = Vec::new();
    for collider in &colliders.0 {
        found.extend(bbox.contact(side, world, &collider.bounds, collider.pos));
    }
    found
}

/// Move the crossing edge back onto the nearest tile boundary.
pub fn snap_to_grid(pos: &mut ScreenPos, side: Side, size: f32, tile: f32) {
    match side {
        Side::Bottom => pos.y -= (pos.y + size).rem_euclid(tile),
        Side::Top => pos.y += tile - pos.y.rem_euclid(tile),
        Side::Left => pos.x += tile - pos.x.rem_euclid(tile),
        Side::Right => pos.x -= (pos.x + size).rem_euclid(tile),
    }
}
