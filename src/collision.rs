//! Directional AABB tests in screen space: Y grows downward and a box's
//! position is its top-left corner.

use bevy::math::Vec2;

/// Size of a collision box. Position-less; the owner supplies the world
/// position at query time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub width: f32,
    pub height: f32,
}

/// Which edge of the moving box crossed into the target.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// A rectangle in world pixels, carried on contacts for debug drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// One detected overlap. Produced fresh per query, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub side: Side,
    /// Signed offset from the crossing edge to the crossed target edge.
    /// Added to the position along the contact axis it brings the two
    /// edges flush.
    pub depth: f32,
    /// The target's actual rectangle.
    pub rect: WorldRect,
}

/// Edge coordinates of a box placed at a position.
struct Extent {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
}

impl Extent {
    fn overlaps_x(&self, other: &Extent) -> bool {
        self.left < other.right && self.right > other.left
    }

    fn overlaps_y(&self, other: &Extent) -> bool {
        self.top < other.bottom && self.bottom > other.top
    }
}

impl BoundingBox {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn rect_at(&self, pos: Vec2) -> WorldRect {
        WorldRect {
            x: pos.x,
            y: pos.y,
            w: self.width,
            h: self.height,
        }
    }

    fn extent(&self, pos: Vec2) -> Extent {
        Extent {
            left: pos.x,
            right: pos.x + self.width,
            top: pos.y,
            bottom: pos.y + self.height,
        }
    }

    /// Own bottom edge crossed the target's top edge. Touching edges are
    /// not a hit; every comparison is strict.
    pub fn bottom_contact(&self, pos: Vec2, other: &BoundingBox, other_pos: Vec2) -> Option<Contact> {
        let a = self.extent(pos);
        let b = other.extent(other_pos);
        if a.bottom > b.top && a.top < b.top && a.overlaps_x(&b) {
            Some(Contact {
                side: Side::Bottom,
                depth: b.top - a.bottom,
                rect: other.rect_at(other_pos),
            })
        } else {
            None
        }
    }

    /// Own top edge crossed the target's bottom edge.
    pub fn top_contact(&self, pos: Vec2, other: &BoundingBox, other_pos: Vec2) -> Option<Contact> {
        let a = self.extent(pos);
        let b = other.extent(other_pos);
        if a.top < b.bottom && a.bottom > b.bottom && a.overlaps_x(&b) {
            Some(Contact {
                side: Side::Top,
                depth: b.bottom - a.top,
                rect: other.rect_at(other_pos),
            })
        } else {
            None
        }
    }

    /// Own left edge crossed the target's right edge.
    pub fn left_contact(&self, pos: Vec2, other: &BoundingBox, other_pos: Vec2) -> Option<Contact> {
        let a = self.extent(pos);
        let b = other.extent(other_pos);
        if a.left < b.right && a.right > b.right && a.overlaps_y(&b) {
            Some(Contact {
                side: Side::Left,
                depth: b.right - a.left,
                rect: other.rect_at(other_pos),
            })
        } else {
            None
        }
    }

    /// Own right edge crossed the target's left edge.
    pub fn right_contact(&self, pos: Vec2, other: &BoundingBox, other_pos: Vec2) -> Option<Contact> {
        let a = self.extent(pos);
        let b = other.extent(other_pos);
        if a.right > b.left && a.left < b.left && a.overlaps_y(&b) {
            Some(Contact {
                side: Side::Right,
                depth: b.left - a.right,
                rect: other.rect_at(other_pos),
            })
        } else {
            None
        }
    }

    pub fn contact(
        &self,
        side: Side,
        pos: Vec2,
        other: &BoundingBox,
        other_pos: Vec2,
    ) -> Option<Contact> {
        match side {
            Side::Top => self.top_contact(pos, other, other_pos),
            Side::Bottom => self.bottom_contact(pos, other, other_pos),
            Side::Left => self.left_contact(pos, other, other_pos),
            Side::Right => self.right_contact(pos, other, other_pos),
        }
    }
}
