use bevy::prelude::*;

/// Top-level system ordering sets for the game loop.
///
/// Two chains: Control → Physics inside the fixed simulation tick, and
/// Input → Camera → Visuals → Ui per render frame. Individual plugins
/// place their systems into the appropriate set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Control,
    Physics,
    Camera,
    Visuals,
    Ui,
}
