//! Collaborator interfaces for the session controller
//!
//! The engine side (scene graph, UI text, audio, storage) is injected
//! through these traits so the session logic stays engine-agnostic and
//! testable with in-memory fakes.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Identifier for an audio clip registered with the host engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipId(pub String);

impl From<&str> for ClipId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier for a scene object toggled at menu/restart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub String);

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Read/write access to the player's health component.
pub trait HealthProvider {
    fn health(&self) -> f32;
    fn set_health(&mut self, value: f32);
}

/// The session timer. Expiry is pushed by the timer's owner (it calls
/// `SessionController::gameover` directly); the controller never polls
/// for timeout.
pub trait TimerProvider {
    /// Seconds elapsed since the last restart.
    fn elapsed(&self) -> f32;
    fn restart(&mut self);
}

/// Scene-graph operations the controller needs at restart and menu.
pub trait SceneView {
    fn set_object_enabled(&mut self, id: &ObjectId, enabled: bool);
    fn place_player(&mut self, position: Vec3, orientation: Quat);
}

/// The start-field resizer, reset to its initial size on each restart.
pub trait StartFieldResizer {
    fn enable(&mut self);
    fn reset_size(&mut self);
}

/// A UI text widget.
pub trait MessageSink {
    fn set_text(&mut self, text: &str);
}

/// One-shot sound playback. An unknown clip id must be a no-op.
pub trait AudioSink {
    fn play_one_shot(&mut self, clip: &ClipId);
}

/// Process-wide key-value storage for persisted integers.
pub trait PersistentKVStore {
    fn get_int(&self, key: &str, default: i32) -> i32;
    fn set_int(&mut self, key: &str, value: i32);
    /// Flush pending writes to backing storage.
    fn save(&mut self);
}
