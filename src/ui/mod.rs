pub mod contact_overlay;
pub mod debug_hud;
pub mod debug_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::registry::AppState;
use crate::sets::GameSet;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<debug_panel::DebugUiState>()
            .add_systems(OnEnter(AppState::InGame), debug_hud::spawn_debug_hud)
            .add_systems(
                Update,
                (
                    debug_hud::update_debug_hud,
                    debug_panel::toggle_debug_panel,
                    contact_overlay::draw_contact_overlay,
                )
                    .in_set(GameSet::Ui)
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(
                EguiPrimaryContextPass,
                debug_panel::draw_debug_panel.run_if(in_state(AppState::InGame)),
            );
    }
}
