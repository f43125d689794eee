use bevy::prelude::*;
use serde::Deserialize;

/// Animation frame counts per motion state.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameCounts {
    pub standing: u32,
    pub walking: u32,
    pub jumping: u32,
    pub crouching: u32,
}

/// Player tuning loaded from RON. Speeds are per simulation tick.
#[derive(Resource, Debug, Clone)]
pub struct PlayerConfig {
    pub speed: f32,
    pub gravity: f32,
    /// Initial jump velocity; negative moves up the screen.
    pub jump_speed: f32,
    /// Added to the jump velocity each tick until it reaches zero.
    pub jump_decay: f32,
    /// The actor box is square.
    pub size: f32,
    /// Walking ticks between animation frame advances.
    pub walk_frame_ticks: u32,
    pub frames: FrameCounts,
}
