use std::collections::HashMap;

use bevy::prelude::*;
use serde::Deserialize;

/// Display properties of a single tile id, deserialized from RON.
#[derive(Debug, Clone, Deserialize)]
pub struct TileDef {
    pub id: u16,
    pub name: String,
    pub color: [u8; 3],
}

/// Palette of all tile definitions. Inserted as a Resource after asset
/// loading; rendering looks cell ids up here.
#[derive(Resource)]
pub struct TilePalette {
    defs: HashMap<u16, TileDef>,
}

impl TilePalette {
    pub fn from_defs(defs: Vec<TileDef>) -> Self {
        let defs = defs.into_iter().map(|d| (d.id, d)).collect();
        Self { defs }
    }

    pub fn color_of(&self, id: u16) -> Color {
        let [r, g, b] = self.def(id).color;
        Color::srgb_u8(r, g, b)
    }

    pub fn name_of(&self, id: u16) -> &str {
        &self.def(id).name
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    fn def(&self, id: u16) -> &TileDef {
        self.defs
            .get(&id)
            .unwrap_or_else(|| panic!("Unknown tile id: {id}"))
    }
}
