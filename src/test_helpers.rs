pub mod fixtures {
    use bevy::prelude::*;

    use crate::camera::Anchor;
    use crate::collision::BoundingBox;
    use crate::input::InputIntent;
    use crate::player::FrameContacts;
    use crate::registry::player::{FrameCounts, PlayerConfig};
    use crate::registry::stage::StageConfig;
    use crate::registry::tiles::{TileDef, TilePalette};
    use crate::stage::colliders::{Colliders, StaticCollider};
    use crate::stage::StageBounds;

    pub const TILE_SIZE: f32 = 32.0;

    pub fn test_player_config() -> PlayerConfig {
        PlayerConfig {
            speed: 0.5,
            gravity: 0.9,
            jump_speed: -3.0,
            jump_decay: 0.01,
            size: 32.0,
            walk_frame_ticks: 5,
            frames: FrameCounts {
                standing: 1,
                walking: 3,
                jumping: 1,
                crouching: 1,
            },
        }
    }

    pub fn test_stage_config() -> StageConfig {
        StageConfig {
            tile_size: TILE_SIZE,
            spawn_x: 100.0,
            spawn_y: 96.0,
        }
    }

    pub fn test_palette() -> TilePalette {
        TilePalette::from_defs(vec![
            TileDef {
                id: 1,
                name: "grass".into(),
                color: [106, 190, 48],
            },
            TileDef {
                id: 2,
                name: "dirt".into(),
                color: [139, 90, 43],
            },
            TileDef {
                id: 3,
                name: "stone".into(),
                color: [128, 128, 128],
            },
        ])
    }

    /// Collider set from an ASCII sketch: `#` is a solid cell, anything
    /// else is empty. Indentation and blank lines before the grid are
    /// stripped, so sketches read the way they are drawn in the test.
    pub fn colliders_from_sketch(sketch: &str) -> Colliders {
        let colliders = sketch
            .lines()
            .map(str::trim)
            .skip_while(|line| line.is_empty())
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars().enumerate().filter_map(move |(col, ch)| {
                    (ch == '#').then(|| StaticCollider {
                        bounds: BoundingBox::new(TILE_SIZE, TILE_SIZE),
                        pos: Vec2::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE),
                    })
                })
            })
            .collect();
        Colliders(colliders)
    }

    /// Minimal app carrying the simulation resources. Tests register the
    /// systems under scrutiny in `Update` themselves, so one
    /// `app.update()` is exactly one simulation tick.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<InputIntent>();
        app.init_resource::<Anchor>();
        app.init_resource::<FrameContacts>();
        app.init_resource::<Colliders>();
        app.insert_resource(test_player_config());
        app.insert_resource(test_stage_config());
        app.insert_resource(test_palette());
        app.insert_resource(StageBounds {
            max_anchor_x: 480.0,
        });
        app
    }

    pub fn test_app_with_stage(sketch: &str) -> App {
        let mut app = test_app();
        app.insert_resource(colliders_from_sketch(sketch));
        app
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn sketch_rows_and_columns_map_to_world_positions() {
            let colliders = colliders_from_sketch(
                "
                ....
                ...#
                #...
            ",
            );
            assert_eq!(colliders.0.len(), 2);
            assert_eq!(colliders.0[0].pos, Vec2::new(96.0, 32.0));
            assert_eq!(colliders.0[1].pos, Vec2::new(0.0, 64.0));
        }
    }
}
