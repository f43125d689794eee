use bevy::prelude::*;

use crate::camera::Anchor;
use crate::player::state::Motion;
use crate::player::{Player, ScreenPos};

#[derive(Component)]
pub struct DebugHudText;

pub fn spawn_debug_hud(mut commands: Commands) {
    commands.spawn((
        DebugHudText,
        Text::new("X: 0.0 Y: 0.0 anchor: 0.0"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}

pub fn update_debug_hud(
    player_query: Query<(&ScreenPos, &Motion), With<Player>>,
    mut text_query: Query<&mut Text, With<DebugHudText>>,
    anchor: Res<Anchor>,
) {
    let Ok((pos, motion)) = player_query.single() else {
        return;
    };
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    **text = format!(
        "X: {:.1} Y: {:.1} anchor: {:.1} {:?}/{:?}",
        pos.x, pos.y, anchor.x, motion.state, motion.ground
    );
}
