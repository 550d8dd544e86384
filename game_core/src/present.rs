//! Presentation layer contract
//!
//! The core never opens windows or reads devices. A presenter feeds it
//! input events and draws the frames it produces; a frame clock paces the
//! loop.

use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;

use crate::engine::Phase;
use crate::map::Aabb;
use crate::Score;

/// Filled rectangle in playfield coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub min: Vec2,
    pub size: Vec2,
    pub color: [u8; 3],
}

impl DrawRect {
    pub fn from_aabb(aabb: &Aabb, color: [u8; 3]) -> Self {
        Self {
            min: aabb.min,
            size: aabb.size(),
            color,
        }
    }
}

/// One frame worth of drawing
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear_color: [u8; 3],
    pub rects: Vec<DrawRect>,
    pub score: Score,
    pub phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    W,
    S,
    Up,
    Down,
    Digit(u8),
    Other(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or the host asked the session to end
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Window, input and drawing backend
pub trait Presenter {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Append every input event received since the last poll
    fn poll_events(&mut self, events: &mut Vec<InputEvent>) -> Result<(), Self::Error>;

    fn draw(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}

/// Paces the frame loop
pub trait FrameClock {
    /// Block until the next frame is due; returns seconds since the last call
    fn tick(&mut self, target_fps: u32) -> f32;
}

/// Wall-clock pacing with `thread::sleep`
#[derive(Debug, Default)]
pub struct SleepClock {
    last: Option<Instant>,
}

impl SleepClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for SleepClock {
    fn tick(&mut self, target_fps: u32) -> f32 {
        let budget = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));

        let Some(last) = self.last else {
            self.last = Some(Instant::now());
            return 0.0;
        };

        let elapsed = last.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }

        let now = Instant::now();
        self.last = Some(now);
        now.duration_since(last).as_secs_f32()
    }
}

/// Never sleeps; reports a fixed frame time. For headless runs.
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    pub dt: f32,
}

impl ManualClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    pub fn for_fps(target_fps: u32) -> Self {
        Self::new(1.0 / target_fps.max(1) as f32)
    }
}

impl FrameClock for ManualClock {
    fn tick(&mut self, _target_fps: u32) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_rect_from_aabb() {
        let aabb = Aabb::new(Vec2::new(630.0, 350.0), Vec2::new(650.0, 370.0));
        let rect = DrawRect::from_aabb(&aabb, [1, 2, 3]);
        assert_eq!(rect.min, Vec2::new(630.0, 350.0));
        assert_eq!(rect.size, Vec2::new(20.0, 20.0));
        assert_eq!(rect.color, [1, 2, 3]);
    }

    #[test]
    fn test_manual_clock_reports_fixed_dt() {
        let mut clock = ManualClock::for_fps(50);
        assert_eq!(clock.tick(60), 0.02);
        assert_eq!(clock.tick(60), 0.02);
    }

    #[test]
    fn test_sleep_clock_paces_frames() {
        let mut clock = SleepClock::new();
        assert_eq!(clock.tick(200), 0.0, "First tick only starts the clock");

        let started = Instant::now();
        let dt = clock.tick(200);
        assert!(dt >= 0.004, "Frame should last about 5ms, got {}", dt);
        assert!(started.elapsed() >= Duration::from_millis(4));
    }
}
