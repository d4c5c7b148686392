//! Ice Dash session controller
//!
//! Orchestrates the menu/playing/gameover life cycle of a single-player
//! arcade run: score and health tracking, restart behavior, deferred
//! on-screen messages, and high-score persistence. Rendering, physics,
//! audio playback and UI widgets live in the host engine and are
//! injected through the traits in [`ports`].
//!
//! Core modules:
//! - `session`: state machine, tick logic, deferred task queue
//! - `config`: per-session configuration, validated at construction
//! - `ports`: injected collaborator interfaces
//! - `persistence`: key-value store backends
//! - `highscore`: persisted best-score handling
//! - `shell`: quit/screenshot edges, outside the state machine

pub mod config;
pub mod highscore;
pub mod persistence;
pub mod ports;
pub mod session;
pub mod shell;

pub use config::{ConfigError, RestartAnchor, SessionConfig};
pub use session::{Collaborators, SessionController, SessionState, TickInput};

/// Session tuning constants
pub mod consts {
    /// Delay before a temporary message is cleared (seconds)
    pub const MESSAGE_CLEAR_DELAY: f64 = 2.0;
    /// Delay before a finished session falls back to the menu (seconds)
    pub const RETURN_TO_MENU_DELAY: f64 = 2.0;
    /// Default score needed to win
    pub const DEFAULT_WIN_SCORE: i32 = 100;
    /// Upper bound for the configurable win score
    pub const WIN_SCORE_MAX: i32 = 1000;
    /// Default starting health
    pub const DEFAULT_START_HEALTH: f32 = 100.0;
    /// Default store key for the persisted high score
    pub const HIGHSCORE_KEY: &str = "HighScore";
    /// Menu prompt
    pub const START_PROMPT: &str = "Press Space to Start";
}
