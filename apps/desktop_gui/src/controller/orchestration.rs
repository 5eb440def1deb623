//! Widgets push actions while a frame is drawn; the queue is drained into
//! the session after the frame's widgets are built.

use catalog::CatalogSource;
use session_core::{Action, Outcome, Session};

#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: Vec<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.pending.push(action);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Applies queued actions in order and returns their outcomes.
pub fn apply_actions<C: CatalogSource>(
    session: &mut Session<C>,
    queue: &mut ActionQueue,
) -> Vec<Outcome> {
    queue
        .pending
        .drain(..)
        .map(|action| {
            let name = action.name();
            let outcome = session.dispatch(action);
            tracing::debug!(action = name, ?outcome, "applied ui action");
            outcome
        })
        .collect()
}
