//! Session life cycle: menu / start / gameover
//!
//! The player wins when the configured win score is reached with health
//! remaining. Gameover triggers when health runs out or, if configured,
//! as soon as the win score is reached. Health and score deltas are
//! driven by other game systems; the timer pushes a timeout gameover by
//! calling [`SessionController::gameover`] directly.

use log::{debug, info};

use super::state::{SessionState, TickInput};
use super::tasks::{TaskKind, TaskQueue};
use crate::config::{ConfigError, SessionConfig};
use crate::consts::{MESSAGE_CLEAR_DELAY, START_PROMPT};
use crate::highscore;
use crate::ports::{
    AudioSink, HealthProvider, MessageSink, PersistentKVStore, SceneView, StartFieldResizer,
    TimerProvider,
};

/// Injected engine-side collaborators. Required ones are plain boxes;
/// the optional ones degrade silently when absent (the feature is
/// skipped, nothing else changes).
pub struct Collaborators {
    pub health: Box<dyn HealthProvider>,
    pub timer: Box<dyn TimerProvider>,
    pub scene: Box<dyn SceneView>,
    pub message: Box<dyn MessageSink>,
    pub store: Box<dyn PersistentKVStore>,
    /// UI widget showing the persisted high score
    pub score_text: Option<Box<dyn MessageSink>>,
    pub audio: Option<Box<dyn AudioSink>>,
    pub start_field: Option<Box<dyn StartFieldResizer>>,
}

/// The session state machine.
pub struct SessionController {
    config: SessionConfig,
    state: SessionState,
    score: i32,
    /// Accumulated session clock, advanced only by `tick`
    clock: f64,
    tasks: TaskQueue,
    health: Box<dyn HealthProvider>,
    timer: Box<dyn TimerProvider>,
    scene: Box<dyn SceneView>,
    message: Box<dyn MessageSink>,
    store: Box<dyn PersistentKVStore>,
    score_text: Option<Box<dyn MessageSink>>,
    audio: Option<Box<dyn AudioSink>>,
    start_field: Option<Box<dyn StartFieldResizer>>,
}

impl SessionController {
    /// Build the controller and enter the menu. Fails fast on invalid
    /// configuration.
    pub fn new(config: SessionConfig, collab: Collaborators) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut controller = Self {
            config,
            state: SessionState::Menu,
            score: 0,
            clock: 0.0,
            tasks: TaskQueue::new(),
            health: collab.health,
            timer: collab.timer,
            scene: collab.scene,
            message: collab.message,
            store: collab.store,
            score_text: collab.score_text,
            audio: collab.audio,
            start_field: collab.start_field,
        };
        controller.menu();
        Ok(controller)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Seconds of accumulated tick time.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Advance the session by one frame. Quit/screenshot edges are not
    /// handled here; see the `shell` module.
    pub fn tick(&mut self, dt: f32, input: &TickInput) {
        self.clock += f64::from(dt);
        for task in self.tasks.drain_due(self.clock) {
            match task {
                TaskKind::ClearMessage => self.display_message(""),
                TaskKind::ReturnToMenu => self.menu(),
            }
        }

        if self.state == SessionState::Playing {
            if self.health.health() <= 0.0 || (self.config.end_on_win && self.player_win()) {
                self.gameover();
            }
            // Timeout gameover is pushed by the timer, not polled here
        } else if input.start {
            // Menu or Gameover
            self.restart_game();
        }
    }

    /// Begin a fresh run: reset health, score, player pose and timer,
    /// re-enable gameplay objects and the start field.
    pub fn restart_game(&mut self) {
        info!("session restart");
        self.state = SessionState::Playing;

        self.health.set_health(self.config.start_health);
        let anchor = self.config.restart_anchor;
        self.scene.place_player(anchor.position, anchor.orientation);
        self.score = 0;
        for id in &self.config.gameplay_objects {
            self.scene.set_object_enabled(id, true);
        }

        self.message.set_text("");
        if let Some(score_text) = &mut self.score_text {
            let best = highscore::read(self.store.as_ref(), &self.config.highscore_key);
            score_text.set_text(&format!("High Score: {best}"));
        }

        self.timer.restart();

        if let Some(field) = &mut self.start_field {
            field.enable();
            field.reset_size();
        }

        if let (Some(audio), Some(clip)) = (&mut self.audio, &self.config.start_sound) {
            audio.play_one_shot(clip);
        }
    }

    /// End the current run. Called from `tick` on death or win, and by
    /// the timer's owner on timeout.
    pub fn gameover(&mut self) {
        self.state = SessionState::Gameover;

        let elapsed = self.timer.elapsed();
        let health = self.health.health();
        if self.player_win() {
            let bonus = elapsed + health;
            self.display_message(&format!(
                "You Win\nScore {} - Bonus {}",
                self.score,
                bonus.round() as i64
            ));
        } else if health > 0.0 {
            // Survived but missed the required score in the allowed time
            self.display_message(&format!(
                "Game Over\nMissed {} points",
                self.config.win_score - self.score
            ));
        } else {
            self.display_message(&format!(
                "Game Over\nDied in {} seconds",
                elapsed.round() as i64
            ));
            if let (Some(audio), Some(clip)) = (&mut self.audio, &self.config.lost_sound) {
                audio.play_one_shot(clip);
            }
        }

        // From here on the score field is repurposed as the high-score
        // metric: whole elapsed seconds, discarding the gameplay score
        // reported above. Kept exactly as shipped; see DESIGN.md.
        self.score = elapsed.floor() as i32;
        highscore::submit(self.store.as_mut(), &self.config.highscore_key, self.score);
        info!(
            "session over after {elapsed:.1}s, persisted score {}",
            self.score
        );
    }

    /// Add a signed delta to the score. No clamping; the score may go
    /// negative.
    pub fn add_player_score(&mut self, delta: i32) {
        self.score += delta;
        debug!("player score changed: {}", self.score);
    }

    pub fn increment_score(&mut self) {
        self.add_player_score(1);
    }

    pub fn decrement_score(&mut self) {
        self.add_player_score(-1);
    }

    /// True iff the win score is reached and the player is still alive.
    pub fn player_win(&self) -> bool {
        self.score >= self.config.win_score && self.health.health() > 0.0
    }

    /// Disable gameplay objects and show the start prompt.
    pub fn menu(&mut self) {
        self.state = SessionState::Menu;
        for id in &self.config.gameplay_objects {
            self.scene.set_object_enabled(id, false);
        }
        self.message.set_text(START_PROMPT);
    }

    pub fn display_message(&mut self, text: &str) {
        self.message.set_text(text);
    }

    /// Show `text` now and schedule a clear after the fixed delay. The
    /// clear task is never canceled, so it can wipe a message set later.
    pub fn display_temp_message(&mut self, text: &str) {
        self.message.set_text(text);
        self.tasks
            .schedule(self.clock + MESSAGE_CLEAR_DELAY, TaskKind::ClearMessage);
    }

    /// Schedule a fall-back to the menu after `seconds`.
    pub fn return_to_menu_in(&mut self, seconds: f64) {
        self.tasks
            .schedule(self.clock + seconds, TaskKind::ReturnToMenu);
    }
}
