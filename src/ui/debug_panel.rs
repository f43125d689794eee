use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::camera::Anchor;
use crate::player::state::Motion;
use crate::player::{FrameContacts, Player, ScreenPos};
use crate::stage::StageBounds;

/// Tracks debug panel visibility.
#[derive(Resource, Default)]
pub struct DebugUiState {
    pub visible: bool,
}

/// Toggles debug panel visibility on F3 press.
pub fn toggle_debug_panel(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugUiState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.visible = !state.visible;
    }
}

/// Draws the debug inspector panel using egui.
pub fn draw_debug_panel(
    mut contexts: EguiContexts,
    state: Res<DebugUiState>,
    player_query: Query<(&ScreenPos, &Motion), With<Player>>,
    anchor: Res<Anchor>,
    bounds: Res<StageBounds>,
    contacts: Res<FrameContacts>,
    diagnostics: Res<DiagnosticsStore>,
    entities: Query<Entity>,
) -> Result {
    if !state.visible {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    let panel_frame = egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 200))
        .inner_margin(egui::Margin::same(8))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(60)));

    egui::SidePanel::right("debug_panel")
        .default_width(280.0)
        .resizable(false)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.heading("Debug Panel");
            ui.separator();

            // --- Performance ---
            egui::CollapsingHeader::new(egui::RichText::new("Performance").strong())
                .default_open(true)
                .show(ui, |ui| {
                    egui::Grid::new("perf_grid")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("FPS:");
                            let fps_text = diagnostics
                                .get(&FrameTimeDiagnosticsPlugin::FPS)
                                .and_then(|d| d.smoothed())
                                .map(|v| format!("{v:.1}"))
                                .unwrap_or_else(|| "...".to_string());
                            ui.colored_label(egui::Color32::LIGHT_GREEN, &fps_text);
                            ui.end_row();

                            ui.label("Frame time:");
                            let ft_text = diagnostics
                                .get(&FrameTimeDiagnosticsPlugin::FRAME_TIME)
                                .and_then(|d| d.smoothed())
                                .map(|v| format!("{v:.1}ms"))
                                .unwrap_or_else(|| "...".to_string());
                            ui.label(&ft_text);
                            ui.end_row();

                            ui.label("Entities:");
                            ui.label(format!("{}", entities.iter().count()));
                            ui.end_row();
                        });
                });

            // --- Player ---
            egui::CollapsingHeader::new(egui::RichText::new("Player").strong())
                .default_open(true)
                .show(ui, |ui| {
                    if let Ok((pos, motion)) = player_query.single() {
                        egui::Grid::new("player_grid")
                            .num_columns(2)
                            .spacing([20.0, 4.0])
                            .show(ui, |ui| {
                                ui.label("Screen:");
                                ui.monospace(format!("{:.1}, {:.1}", pos.x, pos.y));
                                ui.end_row();

                                ui.label("World:");
                                ui.monospace(format!(
                                    "{:.1}, {:.1}",
                                    pos.x + anchor.x,
                                    pos.y + anchor.y
                                ));
                                ui.end_row();

                                ui.label("State:");
                                ui.monospace(format!("{:?}", motion.state));
                                ui.end_row();

                                ui.label("Ground:");
                                ui.monospace(format!("{:?}", motion.ground));
                                ui.end_row();

                                ui.label("Facing:");
                                ui.monospace(format!("{:?}", motion.facing));
                                ui.end_row();

                                ui.label("Jump vel:");
                                ui.monospace(format!("{:.2}", motion.jump_vel));
                                ui.end_row();

                                ui.label("Frame:");
                                ui.monospace(format!("{}", motion.frame));
                                ui.end_row();
                            });
                    } else {
                        ui.label("No player entity");
                    }
                });

            // --- Anchor ---
            egui::CollapsingHeader::new(egui::RichText::new("Anchor").strong())
                .default_open(true)
                .show(ui, |ui| {
                    egui::Grid::new("anchor_grid")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Scroll:");
                            ui.monospace(format!("{:.1}, {:.1}", anchor.x, anchor.y));
                            ui.end_row();

                            ui.label("Max X:");
                            ui.monospace(format!("{:.1}", bounds.max_anchor_x));
                            ui.end_row();
                        });
                });

            // --- Contacts ---
            egui::CollapsingHeader::new(egui::RichText::new("Contacts").strong())
                .default_open(true)
                .show(ui, |ui| {
                    if contacts.0.is_empty() {
                        ui.label("none");
                    }
                    for (i, contact) in contacts.0.iter().enumerate() {
                        egui::Grid::new(format!("contact_grid_{i}"))
                            .num_columns(2)
                            .spacing([20.0, 4.0])
                            .show(ui, |ui| {
                                ui.label("Side:");
                                ui.colored_label(
                                    egui::Color32::LIGHT_RED,
                                    format!("{:?}", contact.side),
                                );
                                ui.end_row();

                                ui.label("Depth:");
                                ui.monospace(format!("{:.2}", contact.depth));
                                ui.end_row();

                                ui.label("Tile:");
                                ui.monospace(format!(
                                    "{:.0}, {:.0}",
                                    contact.rect.x, contact.rect.y
                                ));
                                ui.end_row();
                            });
                        ui.separator();
                    }
                });
        });

    Ok(())
}
