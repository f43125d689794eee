use bevy::prelude::*;

use crate::camera::Anchor;
use crate::player::FrameContacts;
use crate::stage::render_translation;

/// Outline every collider the actor touched this tick in red, the way
/// the original debug display marked them.
pub fn draw_contact_overlay(
    contacts: Res<FrameContacts>,
    anchor: Res<Anchor>,
    mut gizmos: Gizmos,
) {
    for contact in &contacts.0 {
        let size = Vec2::new(contact.rect.w, contact.rect.h);
        let screen = Vec2::new(contact.rect.x - anchor.x, contact.rect.y - anchor.y);
        gizmos.rect_2d(
            Isometry2d::from_translation(render_translation(screen, size)),
            size,
            Color::srgb(1.0, 0.2, 0.2),
        );
    }
}
