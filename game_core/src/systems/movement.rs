use crate::config::{BallMotion, PaddleClamp};
use crate::{Ball, Paddle};

/// Apply every paddle's velocity intent
pub fn move_paddles(paddles: &mut [Paddle]) {
    for paddle in paddles.iter_mut() {
        paddle.tick();
    }
}

/// Move one paddle by its vertical velocity, then clamp
pub fn move_paddle(paddle: &mut Paddle) {
    paddle.center.y += paddle.vertical_velocity;

    match paddle.clamp {
        PaddleClamp::Legacy => {
            // Top is capped at the bound and bottom floored at zero, so up to
            // the whole paddle may leave the field.
            if paddle.top() > paddle.vertical_bound {
                paddle.set_top(paddle.vertical_bound);
            }
            if paddle.bottom() < 0.0 {
                paddle.set_bottom(0.0);
            }
        }
        PaddleClamp::Contain => {
            if paddle.top() < 0.0 {
                paddle.set_top(0.0);
            }
            if paddle.bottom() > paddle.vertical_bound {
                paddle.set_bottom(paddle.vertical_bound);
            }
        }
    }
}

/// Commit the ball's movement for this tick
pub fn commit_ball(ball: &mut Ball) {
    match ball.motion {
        BallMotion::Legacy => ball.center += ball.direction,
        BallMotion::Scaled => ball.center += ball.direction * ball.speed,
    }
}
