//! Per-session configuration
//!
//! Set once before the controller is built and static afterwards.
//! Validation happens at construction so a bad setup fails fast instead
//! of crashing deep inside a tick.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_START_HEALTH, DEFAULT_WIN_SCORE, HIGHSCORE_KEY, WIN_SCORE_MAX};
use crate::ports::{ClipId, ObjectId};

/// Where the player is placed on restart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestartAnchor {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Default for RestartAnchor {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Health the player starts each session with
    pub start_health: f32,
    /// Player spawn pose on restart
    pub restart_anchor: RestartAnchor,
    /// Score to achieve for the player to win (0..=1000)
    pub win_score: i32,
    /// End the session as soon as the win score is reached
    pub end_on_win: bool,
    /// Scene objects enabled on restart, disabled at the menu
    pub gameplay_objects: Vec<ObjectId>,
    /// Played on restart when set
    pub start_sound: Option<ClipId>,
    /// Played when the player dies when set
    pub lost_sound: Option<ClipId>,
    /// Store key for the persisted high score
    pub highscore_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_health: DEFAULT_START_HEALTH,
            restart_anchor: RestartAnchor::default(),
            win_score: DEFAULT_WIN_SCORE,
            end_on_win: false,
            gameplay_objects: Vec::new(),
            start_sound: None,
            lost_sound: None,
            highscore_key: HIGHSCORE_KEY.to_string(),
        }
    }
}

/// Configuration rejected at controller construction.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("win score {0} outside 0..=1000")]
    WinScoreOutOfRange(i32),
    #[error("restart anchor is not finite")]
    AnchorNotFinite,
    #[error("start health {0} is not finite")]
    StartHealthNotFinite(f32),
    #[error("high score key is empty")]
    EmptyHighScoreKey,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_score < 0 || self.win_score > WIN_SCORE_MAX {
            return Err(ConfigError::WinScoreOutOfRange(self.win_score));
        }
        if !self.restart_anchor.position.is_finite() || !self.restart_anchor.orientation.is_finite()
        {
            return Err(ConfigError::AnchorNotFinite);
        }
        if !self.start_health.is_finite() {
            return Err(ConfigError::StartHealthNotFinite(self.start_health));
        }
        if self.highscore_key.is_empty() {
            return Err(ConfigError::EmptyHighScoreKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SessionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_win_score_bounds() {
        let mut config = SessionConfig::default();
        config.win_score = 1000;
        assert_eq!(config.validate(), Ok(()));

        config.win_score = 1001;
        assert_eq!(config.validate(), Err(ConfigError::WinScoreOutOfRange(1001)));

        config.win_score = -1;
        assert_eq!(config.validate(), Err(ConfigError::WinScoreOutOfRange(-1)));
    }

    #[test]
    fn test_non_finite_anchor_rejected() {
        let mut config = SessionConfig::default();
        config.restart_anchor.position = Vec3::new(f32::NAN, 0.0, 0.0);
        assert_eq!(config.validate(), Err(ConfigError::AnchorNotFinite));
    }

    #[test]
    fn test_empty_highscore_key_rejected() {
        let mut config = SessionConfig::default();
        config.highscore_key = String::new();
        assert_eq!(config.validate(), Err(ConfigError::EmptyHighScoreKey));
    }
}
