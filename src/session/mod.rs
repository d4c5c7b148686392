//! Session state machine
//!
//! Menu → Playing → Gameover and back, driven by an explicit per-frame
//! `tick` plus deferred one-shot tasks.

pub mod controller;
pub mod state;
pub mod tasks;

pub use controller::{Collaborators, SessionController};
pub use state::{SessionState, TickInput};
pub use tasks::{TaskKind, TaskQueue};
