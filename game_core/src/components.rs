use glam::Vec2;

use crate::config::{BallMotion, Deflection, PaddleClamp};
use crate::map::{Aabb, Playfield};
use crate::resources::Events;
use crate::systems::{collision, movement};

/// Anything the presentation layer draws as a filled rectangle
pub trait Renderable {
    fn center(&self) -> Vec2;
    fn half_extent(&self) -> Vec2;

    fn rect(&self) -> Aabb {
        Aabb::from_center_half_extent(self.center(), self.half_extent())
    }
}

/// Which goal the ball touched during the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreSide {
    #[default]
    None,
    /// Left goal touched, right player scores
    Left,
    /// Right goal touched, left player scores
    Right,
}

impl ScoreSide {
    /// Numeric form used by the reference game: 0, -1 (left), 1 (right)
    pub fn as_i8(self) -> i8 {
        match self {
            ScoreSide::None => 0,
            ScoreSide::Left => -1,
            ScoreSide::Right => 1,
        }
    }

    pub fn is_none(self) -> bool {
        self == ScoreSide::None
    }
}

/// Paddle - moves on the y axis only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub center: Vec2,
    pub half_extent: Vec2,
    /// Per-tick y displacement, set from input before each tick
    pub vertical_velocity: f32,
    /// Playfield height
    pub vertical_bound: f32,
    pub clamp: PaddleClamp,
    /// Centre restored when a new round starts
    pub spawn: Vec2,
}

impl Paddle {
    pub fn new(center: Vec2, half_extent: Vec2, vertical_bound: f32, clamp: PaddleClamp) -> Self {
        Self {
            center,
            half_extent,
            vertical_velocity: 0.0,
            vertical_bound,
            clamp,
            spawn: center,
        }
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.half_extent.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_extent.y
    }

    pub fn set_top(&mut self, top: f32) {
        self.center.y = top + self.half_extent.y;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.center.y = bottom - self.half_extent.y;
    }

    pub fn set_vertical_velocity(&mut self, dy: f32) {
        self.vertical_velocity = dy;
    }

    pub fn tick(&mut self) {
        movement::move_paddle(self);
    }
}

impl Renderable for Paddle {
    fn center(&self) -> Vec2 {
        self.center
    }

    fn half_extent(&self) -> Vec2 {
        self.half_extent
    }
}

/// Ball - bounces off the top and bottom walls, scores on the side walls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub center: Vec2,
    pub half_extent: Vec2,
    /// Base trajectory; only signs flip on wall hits, never renormalized
    pub direction: Vec2,
    pub speed: f32,
    pub borders: Playfield,
    pub motion: BallMotion,
    pub deflection: Option<Deflection>,
    pub(crate) score_side: ScoreSide,
}

impl Ball {
    pub fn new(center: Vec2, half_extent: Vec2, direction: Vec2, speed: f32, borders: Playfield) -> Self {
        Self {
            center,
            half_extent,
            direction,
            speed,
            borders,
            motion: BallMotion::Legacy,
            deflection: None,
            score_side: ScoreSide::None,
        }
    }

    pub fn with_motion(mut self, motion: BallMotion) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_deflection(mut self, deflection: Option<Deflection>) -> Self {
        self.deflection = deflection;
        self
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half_extent.x
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half_extent.x
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.half_extent.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_extent.y
    }

    pub fn set_top(&mut self, top: f32) {
        self.center.y = top + self.half_extent.y;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.center.y = bottom - self.half_extent.y;
    }

    /// Per-tick displacement used for collision projection
    pub fn step(&self) -> Vec2 {
        self.direction * self.speed
    }

    /// Goal touched this round, if any
    pub fn score(&self) -> ScoreSide {
        self.score_side
    }

    /// Put the ball back in play for a new round
    pub fn serve(&mut self, center: Vec2, direction: Vec2, speed: f32) {
        self.center = center;
        self.direction = direction;
        self.speed = speed;
        self.score_side = ScoreSide::None;
    }

    /// Advance one frame. Order matters: paddle contact, goal check,
    /// top/bottom reflection, then the position commit.
    pub fn tick(&mut self, paddles: &[Paddle], events: &mut Events) {
        if let Some(deflection) = self.deflection {
            collision::deflect_off_paddles(self, paddles, &deflection, events);
        }

        let step = self.step();
        collision::check_goals(self, step.x);
        collision::reflect_off_walls(self, step.y, events);
        movement::commit_ball(self);
    }
}

impl Renderable for Ball {
    fn center(&self) -> Vec2 {
        self.center
    }

    fn half_extent(&self) -> Vec2 {
        self.half_extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_ball(center: Vec2, direction: Vec2) -> Ball {
        Ball::new(
            center,
            Vec2::splat(10.0),
            direction,
            1.0,
            Playfield::new(1280.0, 720.0),
        )
    }

    #[test]
    fn test_ball_single_tick_from_center() {
        let mut ball = reference_ball(Vec2::new(640.0, 360.0), Vec2::new(1.0, 4.0));
        let mut events = Events::new();

        ball.tick(&[], &mut events);

        assert_eq!(ball.center, Vec2::new(641.0, 364.0));
        assert_eq!(ball.score(), ScoreSide::None);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_score_is_idempotent_between_ticks() {
        let mut ball = reference_ball(Vec2::new(12.0, 360.0), Vec2::new(-4.0, 1.0));
        ball.tick(&[], &mut Events::new());

        let first = ball.score();
        assert_eq!(first, ScoreSide::Left);
        for _ in 0..5 {
            assert_eq!(ball.score(), first);
        }
    }

    #[test]
    fn test_score_side_latches_until_served() {
        let mut ball = reference_ball(Vec2::new(12.0, 360.0), Vec2::new(-4.0, 0.0));
        ball.tick(&[], &mut Events::new());
        assert_eq!(ball.score(), ScoreSide::Left);

        // Teleport next to the right goal; the first result must stick
        ball.center = Vec2::new(1268.0, 360.0);
        ball.direction = Vec2::new(4.0, 0.0);
        ball.tick(&[], &mut Events::new());
        assert_eq!(ball.score(), ScoreSide::Left);

        ball.serve(Vec2::new(640.0, 360.0), Vec2::new(1.0, 4.0), 1.0);
        assert_eq!(ball.score(), ScoreSide::None);
    }

    #[test]
    fn test_score_side_numeric_form() {
        assert_eq!(ScoreSide::None.as_i8(), 0);
        assert_eq!(ScoreSide::Left.as_i8(), -1);
        assert_eq!(ScoreSide::Right.as_i8(), 1);
    }

    #[test]
    fn test_renderable_rects() {
        let paddle = Paddle::new(Vec2::new(0.0, 360.0), Vec2::new(10.0, 50.0), 720.0, PaddleClamp::Legacy);
        let rect = paddle.rect();
        assert_eq!(rect.min, Vec2::new(-10.0, 310.0));
        assert_eq!(rect.max, Vec2::new(10.0, 410.0));

        let ball = reference_ball(Vec2::new(640.0, 360.0), Vec2::new(1.0, 4.0));
        assert_eq!(ball.rect().size(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_paddle_edges() {
        let mut paddle = Paddle::new(Vec2::new(0.0, 360.0), Vec2::new(10.0, 50.0), 720.0, PaddleClamp::Legacy);
        assert_eq!(paddle.top(), 310.0);
        assert_eq!(paddle.bottom(), 410.0);
        paddle.set_top(0.0);
        assert_eq!(paddle.center.y, 50.0);
        paddle.set_bottom(720.0);
        assert_eq!(paddle.center.y, 670.0);
    }
}
