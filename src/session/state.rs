//! Session phase and per-tick input

use serde::{Deserialize, Serialize};

/// Current phase of the session life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Gameplay objects disabled, start prompt shown
    Menu,
    /// Active gameplay
    Playing,
    /// Session ended, waiting for a restart
    Gameover,
}

/// Input edges sampled once per tick (true only on the frame the action
/// was pressed)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Start/restart action (spacebar in the reference bindings)
    pub start: bool,
    /// Quit action, honored on native builds only
    pub quit: bool,
    /// Screenshot capture action
    pub screenshot: bool,
}
