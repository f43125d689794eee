use bevy::prelude::*;

use crate::camera::Anchor;
use crate::input::InputIntent;
use crate::registry::player::PlayerConfig;
use crate::stage::{StageBounds, SCREEN_SIZE};

use super::{Player, ScreenPos};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum MotionState {
    Standing,
    Walking,
    Jumping,
    Crouching,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum GroundState {
    Grounded,
    Air,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Facing {
    Left,
    Right,
}

/// The actor's motion state machine, including the animation counters the
/// transitions reset.
#[derive(Component, Debug)]
pub struct Motion {
    pub state: MotionState,
    pub ground: GroundState,
    pub facing: Facing,
    /// Upward velocity while jumping; negative, decaying toward zero.
    pub jump_vel: f32,
    pub frame: usize,
    pub ticks: u32,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            state: MotionState::Standing,
            ground: GroundState::Air,
            facing: Facing::Right,
            jump_vel: 0.0,
            frame: 0,
            ticks: 0,
        }
    }
}

impl Motion {
    pub fn face_left(&mut self) {
        self.facing = Facing::Left;
    }

    pub fn face_right(&mut self) {
        self.facing = Facing::Right;
    }

    pub fn reset_frame(&mut self) {
        self.frame = 0;
        self.ticks = 0;
    }

    /// Enter Walking (unless mid-jump), advance the walk animation, and
    /// move either the anchor or the actor's own screen position.
    ///
    /// With the actor at or past the screen center and the anchor strictly
    /// inside its range, walking scrolls the stage and the actor stays
    /// put. At either anchor limit the actor itself moves; overshoot past
    /// a limit spills into the actor position so no distance is lost.
    pub fn walk(
        &mut self,
        pos: &mut ScreenPos,
        anchor: &mut Anchor,
        config: &PlayerConfig,
        bounds: &StageBounds,
    ) {
        if self.state != MotionState::Jumping {
            self.state = MotionState::Walking;

            self.ticks += 1;
            if self.ticks > config.walk_frame_ticks {
                self.frame = if self.frame + 1 < config.frames.walking as usize {
                    self.frame + 1
                } else {
                    0
                };
                self.ticks = 0;
            }
        }

        let center = SCREEN_SIZE.x / 2.0;
        match self.facing {
            Facing::Left => {
                if pos.x <= center && anchor.x == 0.0 {
                    pos.x -= config.speed;
                } else if pos.x >= center && anchor.x >= bounds.max_anchor_x {
                    pos.x -= config.speed;
                } else {
                    anchor.x -= config.speed;
                    if anchor.x < 0.0 {
                        pos.x += anchor.x;
                        anchor.x = 0.0;
                    }
                }
            }
            Facing::Right => {
                if pos.x >= center && anchor.x < bounds.max_anchor_x {
                    anchor.x += config.speed;
                    if anchor.x > bounds.max_anchor_x {
                        pos.x += anchor.x - bounds.max_anchor_x;
                        anchor.x = bounds.max_anchor_x;
                    }
                } else {
                    pos.x += config.speed;
                }
            }
        }
    }

    /// No horizontal intent: come to rest, unless mid-jump.
    pub fn stand(&mut self) {
        if self.state != MotionState::Jumping {
            self.reset_frame();
            self.state = MotionState::Standing;
        }
    }

    #[allow(dead_code)] // crouch input is not wired up yet
    pub fn crouch(&mut self) {
        if self.state != MotionState::Jumping {
            self.reset_frame();
            self.state = MotionState::Crouching;
        }
    }

    /// Launch a jump. Only from the ground, and never while one is
    /// already in flight.
    pub fn start_jump(&mut self, jump_speed: f32) {
        if self.state != MotionState::Jumping && self.ground == GroundState::Grounded {
            self.reset_frame();
            self.state = MotionState::Jumping;
            self.jump_vel = jump_speed;
        }
    }

    /// Bleed the jump velocity toward zero, clamping at zero.
    pub fn decay_jump(&mut self, rate: f32) {
        self.jump_vel += rate;
        if self.jump_vel >= 0.0 {
            self.jump_vel = 0.0;
        }
    }
}

/// Feed the sampled intent into the state machine. Runs at the head of
/// the fixed tick, before the physics step.
pub fn apply_intent(
    mut intent: ResMut<InputIntent>,
    config: Res<PlayerConfig>,
    bounds: Res<StageBounds>,
    mut anchor: ResMut<Anchor>,
    mut query: Query<(&mut ScreenPos, &mut Motion), With<Player>>,
) {
    let Ok((mut pos, mut motion)) = query.single_mut() else {
        return;
    };

    if intent.left {
        motion.face_left();
        motion.walk(&mut pos, &mut anchor, &config, &bounds);
    }
    if intent.right {
        motion.face_right();
        motion.walk(&mut pos, &mut anchor, &config, &bounds);
    }
    if !(intent.left || intent.right) {
        motion.stand();
    }
    if intent.jump {
        motion.start_jump(config.jump_speed);
        intent.jump = false; // one attempt per press
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixtures;

    const CENTER: f32 = 400.0;
    const MAX_ANCHOR: f32 = 480.0;

    fn walk_setup() -> (Motion, ScreenPos, Anchor, PlayerConfig, StageBounds) {
        (
            Motion::default(),
            ScreenPos { x: CENTER, y: 96.0 },
            Anchor::default(),
            fixtures::test_player_config(),
            StageBounds {
                max_anchor_x: MAX_ANCHOR,
            },
        )
    }

    #[test]
    fn walk_right_at_center_scrolls_the_anchor() {
        let (mut motion, mut pos, mut anchor, config, bounds) = walk_setup();
        anchor.x = 100.0;

        motion.face_right();
        motion.walk(&mut pos, &mut anchor, &config, &bounds);

        assert_eq!(anchor.x, 100.5);
        assert_eq!(pos.x, CENTER, "actor stays put while the stage scrolls");
        assert_eq!(motion.state, MotionState::Walking);
    }

    #[test]
    fn walk_right_at_anchor_limit_moves_the_actor() {
        let (mut motion, mut pos, mut anchor, config, bounds) = walk_setup();
        anchor.x = MAX_ANCHOR;

        motion.face_right();
        motion.walk(&mut pos, &mut anchor, &config, &bounds);

        assert_eq!(anchor.x, MAX_ANCHOR);
        assert_eq!(pos.x, CENTER + config.speed);
    }

    #[test]
    fn walk_right_overshoot_spills_into_actor() {
        let (mut motion, mut pos, mut anchor, config, bounds) = walk_setup();
        anchor.x = MAX_ANCHOR - 0.2;

        motion.face_right();
        motion.walk(&mut pos, &mut anchor, &config, &bounds);

        assert_eq!(anchor.x, MAX_ANCHOR);
        assert!((pos.x - (CENTER + 0.3)).abs() < 1e-4);
    }

    #[test]
    fn walk_left_before_any_scroll_moves_the_actor() {
        let (mut motion, mut pos, mut anchor, config, bounds) = walk_setup();
        pos.x = 120.0;

        motion.face_left();
        motion.walk(&mut pos, &mut anchor, &config, &bounds);

        assert_eq!(pos.x, 120.0 - config.speed);
        assert_eq!(anchor.x, 0.0);
    }

    #[test]
    fn walk_left_mid_stage_scrolls_back() {
        let (mut motion, mut pos, mut anchor, config, bounds) = walk_setup();
        anchor.x = 100.0;

        motion.face_left();
        motion.walk(&mut pos, &mut anchor, &config, &bounds);

        assert_eq!(anchor.x, 99.5);
        assert_eq!(pos.x, CENTER);
    }

    #[test]
    fn walk_left_overshoot_spills_into_actor() {
        let (mut motion, mut pos, mut anchor, config, bounds) = walk_setup();
        anchor.x = 0.3;

        motion.face_left();
        motion.walk(&mut pos, &mut anchor, &config, &bounds);

        assert_eq!(anchor.x, 0.0);
        assert!((pos.x - (CENTER - 0.2)).abs() < 1e-4);
    }

    #[test]
    fn walking_does_not_demote_a_jump() {
        let (mut motion, mut pos, mut anchor, config, bounds) = walk_setup();
        motion.state = MotionState::Jumping;
        pos.x = 120.0;

        motion.face_right();
        motion.walk(&mut pos, &mut anchor, &config, &bounds);

        assert_eq!(motion.state, MotionState::Jumping);
        assert_eq!(pos.x, 120.0 + config.speed, "air control still moves");
    }

    #[test]
    fn walk_frames_advance_and_wrap() {
        let (mut motion, mut pos, mut anchor, mut config, bounds) = walk_setup();
        config.walk_frame_ticks = 2;
        motion.face_right();

        let mut frames = vec![motion.frame];
        for _ in 0..9 {
            motion.walk(&mut pos, &mut anchor, &config, &bounds);
            frames.push(motion.frame);
        }
        // Advances every third walking tick, wrapping after frame 2.
        assert_eq!(frames, vec![0, 0, 0, 1, 1, 1, 2, 2, 2, 0]);
    }

    #[test]
    fn stand_resets_the_animation() {
        let (mut motion, mut pos, mut anchor, config, bounds) = walk_setup();
        motion.face_right();
        for _ in 0..70 {
            motion.walk(&mut pos, &mut anchor, &config, &bounds);
        }
        assert!(motion.ticks > 0);

        motion.stand();
        assert_eq!(motion.state, MotionState::Standing);
        assert_eq!(motion.frame, 0);
        assert_eq!(motion.ticks, 0);
    }

    #[test]
    fn start_jump_requires_ground() {
        let mut motion = Motion::default();
        motion.start_jump(-3.0);
        assert_eq!(motion.state, MotionState::Standing, "airborne, no jump");

        motion.ground = GroundState::Grounded;
        motion.start_jump(-3.0);
        assert_eq!(motion.state, MotionState::Jumping);
        assert_eq!(motion.jump_vel, -3.0);

        // A second press mid-flight must not re-arm the jump.
        motion.jump_vel = -1.0;
        motion.start_jump(-3.0);
        assert_eq!(motion.jump_vel, -1.0);
    }

    #[test]
    fn decay_clamps_at_zero() {
        let mut motion = Motion {
            state: MotionState::Jumping,
            jump_vel: -0.02,
            ..Motion::default()
        };
        motion.decay_jump(0.01);
        assert!((motion.jump_vel + 0.01).abs() < 1e-6);
        motion.decay_jump(0.01);
        assert_eq!(motion.jump_vel, 0.0);
        motion.decay_jump(0.01);
        assert_eq!(motion.jump_vel, 0.0, "stays clamped");
    }

    #[test]
    fn crouch_enters_only_by_direct_call() {
        let mut motion = Motion::default();
        motion.crouch();
        assert_eq!(motion.state, MotionState::Crouching);
        assert_eq!(motion.frame, 0);

        motion.state = MotionState::Jumping;
        motion.crouch();
        assert_eq!(motion.state, MotionState::Jumping, "not while jumping");
    }

    #[test]
    fn intent_drives_walk_and_stand() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, apply_intent);
        app.world_mut().spawn((
            Player,
            ScreenPos { x: 120.0, y: 96.0 },
            Motion::default(),
        ));

        app.world_mut().resource_mut::<InputIntent>().right = true;
        app.update();

        let mut query = app.world_mut().query::<(&ScreenPos, &Motion)>();
        let (pos, motion) = query.iter(app.world()).next().unwrap();
        assert_eq!(motion.state, MotionState::Walking);
        assert_eq!(motion.facing, Facing::Right);
        assert_eq!(pos.x, 120.5);

        app.world_mut().resource_mut::<InputIntent>().right = false;
        app.update();

        let mut query = app.world_mut().query::<&Motion>();
        let motion = query.iter(app.world()).next().unwrap();
        assert_eq!(motion.state, MotionState::Standing);
    }

    #[test]
    fn jump_latch_is_consumed_even_in_air() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, apply_intent);
        app.world_mut().spawn((
            Player,
            ScreenPos { x: 120.0, y: 96.0 },
            Motion::default(), // airborne
        ));

        app.world_mut().resource_mut::<InputIntent>().jump = true;
        app.update();

        assert!(
            !app.world().resource::<InputIntent>().jump,
            "latch cleared after the attempt"
        );
        let mut query = app.world_mut().query::<&Motion>();
        let motion = query.iter(app.world()).next().unwrap();
        assert_eq!(motion.state, MotionState::Standing, "attempt failed in air");
    }
}
