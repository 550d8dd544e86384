//! Keyboard input handling

use log::debug;

use crate::engine::{PaddleId, SimulationEngine};
use crate::error::ConfigError;
use crate::present::{InputEvent, Key};

/// Movement intent for a paddle: -1 = up, 0 = stop, 1 = down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A key that moves a paddle while held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: Key,
    pub paddle: PaddleId,
    pub dir: i8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub moves: Vec<KeyBinding>,
    pub quit: Key,
    /// Logs a debug line when pressed
    pub debug: Option<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bind = |key, paddle, dir| KeyBinding { key, paddle, dir };
        Self {
            moves: vec![
                bind(Key::W, PaddleId::LEFT, -1),
                bind(Key::S, PaddleId::LEFT, 1),
                bind(Key::Up, PaddleId::RIGHT, -1),
                bind(Key::Down, PaddleId::RIGHT, 1),
            ],
            quit: Key::Escape,
            debug: Some(Key::Digit(0)),
        }
    }
}

impl KeyBindings {
    fn lookup(&self, key: Key) -> Option<&KeyBinding> {
        self.moves.iter().find(|binding| binding.key == key)
    }

    /// Every bound paddle must exist in an engine with `paddle_count` paddles
    pub fn validate(&self, paddle_count: usize) -> Result<(), ConfigError> {
        match self.moves.iter().find(|b| b.paddle.0 >= paddle_count) {
            Some(binding) => Err(ConfigError::UnboundPaddle {
                paddle: binding.paddle.0,
                count: paddle_count,
            }),
            None => Ok(()),
        }
    }
}

/// Held keys and quit requests accumulated from input events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Held movement bindings, most recent last
    held: Vec<KeyBinding>,
    quit_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn handle(&mut self, event: &InputEvent, bindings: &KeyBindings) {
        match *event {
            InputEvent::Quit => self.quit_requested = true,
            InputEvent::KeyDown(key) if key == bindings.quit => self.quit_requested = true,
            InputEvent::KeyDown(key) if Some(key) == bindings.debug => {
                debug!("debug key {:?} pressed", key);
            }
            InputEvent::KeyDown(key) => {
                if let Some(binding) = bindings.lookup(key) {
                    self.held.retain(|held| held.key != key);
                    self.held.push(*binding);
                }
            }
            InputEvent::KeyUp(key) => self.held.retain(|held| held.key != key),
        }
    }

    /// Direction of the most recently pressed key still held for `paddle`
    pub fn intent(&self, paddle: PaddleId) -> PaddleIntent {
        let dir = self
            .held
            .iter()
            .rev()
            .find(|held| held.paddle == paddle)
            .map_or(0, |held| held.dir);
        PaddleIntent { dir }
    }

    /// Turn intents into velocities for every bound paddle
    pub fn apply(&self, engine: &mut SimulationEngine, bindings: &KeyBindings) {
        let speed = engine.config().paddle_speed;
        let mut applied: Vec<PaddleId> = Vec::with_capacity(2);

        for binding in &bindings.moves {
            if applied.contains(&binding.paddle) {
                continue;
            }
            applied.push(binding.paddle);

            let intent = self.intent(binding.paddle);
            engine.set_paddle_velocity(binding.paddle, intent.dir as f32 * speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn test_key_down_and_up_drive_intent() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();

        input.handle(&InputEvent::KeyDown(Key::W), &bindings);
        assert_eq!(input.intent(PaddleId::LEFT).dir, -1);
        assert_eq!(input.intent(PaddleId::RIGHT).dir, 0);

        input.handle(&InputEvent::KeyUp(Key::W), &bindings);
        assert_eq!(input.intent(PaddleId::LEFT).dir, 0);
    }

    #[test]
    fn test_latest_key_wins_and_release_falls_back() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();

        input.handle(&InputEvent::KeyDown(Key::Up), &bindings);
        input.handle(&InputEvent::KeyDown(Key::Down), &bindings);
        assert_eq!(input.intent(PaddleId::RIGHT).dir, 1);

        input.handle(&InputEvent::KeyUp(Key::Down), &bindings);
        assert_eq!(input.intent(PaddleId::RIGHT).dir, -1, "Up is still held");
    }

    #[test]
    fn test_repeated_key_down_is_not_stacked() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();
        for _ in 0..3 {
            input.handle(&InputEvent::KeyDown(Key::S), &bindings);
        }
        input.handle(&InputEvent::KeyUp(Key::S), &bindings);
        assert_eq!(input.intent(PaddleId::LEFT).dir, 0);
    }

    #[test]
    fn test_quit_sources() {
        let bindings = KeyBindings::default();

        let mut input = InputState::new();
        input.handle(&InputEvent::Quit, &bindings);
        assert!(input.quit_requested());

        let mut input = InputState::new();
        input.handle(&InputEvent::KeyDown(Key::Escape), &bindings);
        assert!(input.quit_requested());

        let mut input = InputState::new();
        input.handle(&InputEvent::KeyDown(Key::Digit(0)), &bindings);
        input.handle(&InputEvent::KeyDown(Key::Other(42)), &bindings);
        assert!(!input.quit_requested());
    }

    #[test]
    fn test_apply_sets_paddle_velocities() {
        let bindings = KeyBindings::default();
        let mut engine = SimulationEngine::new(Config::new()).unwrap();
        let mut input = InputState::new();

        input.handle(&InputEvent::KeyDown(Key::S), &bindings);
        input.handle(&InputEvent::KeyDown(Key::Up), &bindings);
        input.apply(&mut engine, &bindings);

        let speed = engine.config().paddle_speed;
        assert_eq!(engine.paddle(PaddleId::LEFT).unwrap().vertical_velocity, speed);
        assert_eq!(engine.paddle(PaddleId::RIGHT).unwrap().vertical_velocity, -speed);
    }

    #[test]
    fn test_validate_rejects_missing_paddle() {
        let mut bindings = KeyBindings::default();
        bindings.moves.push(KeyBinding {
            key: Key::Other(1),
            paddle: PaddleId(2),
            dir: 1,
        });
        assert_eq!(
            bindings.validate(2),
            Err(ConfigError::UnboundPaddle { paddle: 2, count: 2 })
        );
        assert!(KeyBindings::default().validate(2).is_ok());
    }
}
