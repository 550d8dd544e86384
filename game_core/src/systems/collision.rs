use log::trace;

use crate::components::{Renderable, ScoreSide};
use crate::config::Deflection;
use crate::map::Side;
use crate::{Ball, Events, Paddle};

/// Flag a goal if the projected horizontal step crosses a side wall.
/// Only the first goal of a round is recorded; the ball keeps moving.
pub fn check_goals(ball: &mut Ball, dx: f32) {
    if !ball.score_side.is_none() {
        return;
    }

    if ball.left() + dx < 0.0 {
        ball.score_side = ScoreSide::Left;
    } else if ball.right() + dx >= ball.borders.width {
        ball.score_side = ScoreSide::Right;
    }
}

/// Reflect off the top or bottom wall when the projected vertical step
/// crosses it. The overflow past the wall is mirrored back into the field
/// and the vertical direction is negated.
pub fn reflect_off_walls(ball: &mut Ball, dy: f32, events: &mut Events) {
    let height = ball.borders.height;

    if ball.top() + dy < 0.0 {
        trace!("ball hit top wall at top={}", ball.top());
        let overflow = -(ball.top() + dy);
        ball.set_top(overflow);
        ball.direction.y = -ball.direction.y;
        events.ball_hit_wall = true;
    } else if ball.bottom() + dy >= height {
        trace!("ball hit bottom wall at bottom={}", ball.bottom());
        let reflected = 2.0 * height - (ball.bottom() + dy);
        ball.set_bottom(reflected);
        ball.direction.y = -ball.direction.y;
        events.ball_hit_wall = true;
    }
}

/// Bounce the ball off the first paddle its projected rect overlaps while
/// moving toward it. Returns true on a hit.
pub fn deflect_off_paddles(
    ball: &mut Ball,
    paddles: &[Paddle],
    deflection: &Deflection,
    events: &mut Events,
) -> bool {
    let projected = ball.rect().translated(ball.step());

    for paddle in paddles {
        let paddle_rect = paddle.rect();
        if !projected.overlaps(&paddle_rect) {
            continue;
        }

        let side = ball.borders.side_of(paddle.center.x);
        let approaching = match side {
            Side::Left => ball.direction.x < 0.0,
            Side::Right => ball.direction.x > 0.0,
        };
        if !approaching {
            continue;
        }

        // Relative hit position from -1 (top edge) to 1 (bottom edge)
        let offset = ((ball.center.y - paddle.center.y) / paddle.half_extent.y).clamp(-1.0, 1.0);

        ball.direction.x = -ball.direction.x;
        let max_y = deflection.max_slope * ball.direction.x.abs();
        ball.direction.y = (ball.direction.y + offset * deflection.spin).clamp(-max_y, max_y);
        ball.speed = (ball.speed * deflection.speed_increase).min(deflection.speed_max);

        // Push out so the faces touch
        ball.center.x = match side {
            Side::Left => paddle_rect.max.x + ball.half_extent.x,
            Side::Right => paddle_rect.min.x - ball.half_extent.x,
        };

        trace!("ball hit {:?} paddle, offset {:.2}", side, offset);
        events.ball_hit_paddle = true;
        return true;
    }

    false
}
