//! Ice Dash demo entry point
//!
//! Wires the session controller to in-memory collaborators and runs a
//! short scripted session at 60 Hz: start, score a while, take lethal
//! damage, restart once.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::{Quat, Vec3};
    use log::info;

    use ice_dash::persistence::MemoryStore;
    use ice_dash::ports::{
        AudioSink, ClipId, HealthProvider, MessageSink, ObjectId, SceneView, TimerProvider,
    };
    use ice_dash::session::Collaborators;
    use ice_dash::{SessionConfig, SessionController, TickInput};

    #[derive(Clone, Default)]
    struct SharedHealth(Rc<RefCell<f32>>);

    impl HealthProvider for SharedHealth {
        fn health(&self) -> f32 {
            *self.0.borrow()
        }
        fn set_health(&mut self, value: f32) {
            *self.0.borrow_mut() = value;
        }
    }

    /// Stopwatch advanced by the demo loop.
    #[derive(Clone, Default)]
    struct SharedTimer(Rc<RefCell<f32>>);

    impl TimerProvider for SharedTimer {
        fn elapsed(&self) -> f32 {
            *self.0.borrow()
        }
        fn restart(&mut self) {
            *self.0.borrow_mut() = 0.0;
        }
    }

    struct LogScene;

    impl SceneView for LogScene {
        fn set_object_enabled(&mut self, id: &ObjectId, enabled: bool) {
            info!("scene: {} {}", id.0, if enabled { "enabled" } else { "disabled" });
        }
        fn place_player(&mut self, position: Vec3, _orientation: Quat) {
            info!("scene: player placed at {position}");
        }
    }

    struct StdoutText(&'static str);

    impl MessageSink for StdoutText {
        fn set_text(&mut self, text: &str) {
            println!("[{}] {}", self.0, text.replace('\n', " / "));
        }
    }

    struct LogAudio;

    impl AudioSink for LogAudio {
        fn play_one_shot(&mut self, clip: &ClipId) {
            info!("audio: {}", clip.0);
        }
    }

    pub fn run() {
        env_logger::init();

        let health = SharedHealth::default();
        let timer = SharedTimer::default();

        let mut config = SessionConfig::default();
        config.start_health = 100.0;
        config.restart_anchor.position = Vec3::new(0.0, 1.0, 0.0);
        config.gameplay_objects = vec![ObjectId::from("ice-pack"), ObjectId::from("hazards")];
        config.start_sound = Some(ClipId::from("chime"));
        config.lost_sound = Some(ClipId::from("crash"));

        let collab = Collaborators {
            health: Box::new(health.clone()),
            timer: Box::new(timer.clone()),
            scene: Box::new(LogScene),
            message: Box::new(StdoutText("message")),
            store: Box::new(MemoryStore::new()),
            score_text: Some(Box::new(StdoutText("score"))),
            audio: Some(Box::new(LogAudio)),
            start_field: None,
        };
        let mut session = match SessionController::new(config, collab) {
            Ok(session) => session,
            Err(err) => {
                eprintln!("bad session config: {err}");
                std::process::exit(1);
            }
        };

        let dt = 1.0 / 60.0;
        for frame in 0u32..900 {
            let input = TickInput {
                start: frame == 30 || frame == 700,
                ..Default::default()
            };

            // Score trickles in while playing; lethal hit at 10 seconds
            if session.state() == ice_dash::SessionState::Playing {
                *timer.0.borrow_mut() += dt;
                if frame % 60 == 0 {
                    session.increment_score();
                }
                if frame == 630 {
                    health.0.replace(0.0);
                }
            }

            session.tick(dt, &input);
        }

        println!("final state: {:?}, score {}", session.state(), session.score());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}
