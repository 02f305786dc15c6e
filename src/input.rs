//! Keyboard state
//!
//! Platform code forwards key names (browser `KeyboardEvent.key` values) and
//! the game reads a `TickInput` once per frame. Steering keys are held
//! state; restart and quit are one-shot presses consumed by the next frame.

use crate::sim::TickInput;

/// Logical game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Restart,
    Quit,
}

impl Action {
    /// Map a key name to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Action::Left),
            "ArrowRight" | "d" | "D" => Some(Action::Right),
            "r" | "R" => Some(Action::Restart),
            "Escape" => Some(Action::Quit),
            _ => None,
        }
    }
}

/// Held keys plus pending one-shot presses
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    restart_pressed: bool,
    quit_pressed: bool,
    close_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Returns true if the key is bound.
    pub fn set_key(&mut self, key: &str, pressed: bool) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.set_action(action, pressed);
                true
            }
            None => false,
        }
    }

    pub fn set_action(&mut self, action: Action, pressed: bool) {
        match action {
            Action::Left => self.left = pressed,
            Action::Right => self.right = pressed,
            // One-shot: only the press edge matters
            Action::Restart => self.restart_pressed |= pressed,
            Action::Quit => self.quit_pressed |= pressed,
        }
    }

    /// The window or page is going away
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Forget held keys (focus lost, key-ups will never arrive)
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
    }

    /// Held direction; right wins when both are held
    pub fn direction(&self) -> i8 {
        if self.right {
            1
        } else if self.left {
            -1
        } else {
            0
        }
    }

    /// Build this frame's input and clear the one-shot presses
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            direction: self.direction(),
            restart: self.restart_pressed,
            quit: self.quit_pressed,
            close: self.close_requested,
        };
        self.restart_pressed = false;
        self.quit_pressed = false;
        input
    }
}
