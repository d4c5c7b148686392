//! Deferred one-shot actions
//!
//! Fire-and-forget timers over the controller's accumulated clock. Each
//! call schedules an independent task; nothing de-duplicates or cancels
//! a pending task when state changes underneath it, so a temp message
//! set shortly before an earlier clear fires still gets wiped. That
//! matches the shipped behavior and is pinned by a controller test.

/// What a deferred task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Clear the displayed message
    ClearMessage,
    /// Fall back to the menu
    ReturnToMenu,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: f64,
    kind: TaskKind,
}

/// Pending one-shot tasks, fired by the controller during `tick`.
#[derive(Debug, Default)]
pub struct TaskQueue {
    pending: Vec<Scheduled>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire once the clock reaches `due`.
    pub fn schedule(&mut self, due: f64, kind: TaskKind) {
        self.pending.push(Scheduled { due, kind });
    }

    /// Remove and return every task due at or before `now`, in
    /// scheduling order.
    pub fn drain_due(&mut self, now: f64) -> Vec<TaskKind> {
        let mut due = Vec::new();
        self.pending.retain(|task| {
            if task.due <= now {
                due.push(task.kind);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
