use serde::Serialize;
use tracing::{debug, warn};

/// Where the kitchen is in the preparation of an order.
/// `Running` holds the 1-based number of the step in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KitchenState {
    Idle,
    Running(usize),
    Failed,
    Completed,
    Done,
}

impl KitchenState {
    /// Whether moving to `next` is allowed for a recipe of `steps` steps
    pub fn can_become(&self, next: KitchenState, steps: usize) -> bool {
        match (*self, next) {
            (KitchenState::Idle, KitchenState::Running(1)) => true,
            (KitchenState::Running(current), KitchenState::Running(following)) => {
                following == current + 1 && following <= steps
            }
            (KitchenState::Running(current), KitchenState::Completed) => current == steps,
            (KitchenState::Running(_), KitchenState::Failed) => true,
            (KitchenState::Completed | KitchenState::Failed, KitchenState::Done) => true,
            _ => false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == KitchenState::Done
    }

    fn name(&self) -> &'static str {
        match self {
            KitchenState::Idle => "idle",
            KitchenState::Running(_) => "running",
            KitchenState::Failed => "failed",
            KitchenState::Completed => "completed",
            KitchenState::Done => "done",
        }
    }

    /// Generates a log entry for the state
    ///
    /// # Errors
    ///
    /// Returns an error if serialization of the state fails.
    pub fn log_entry(&self) -> Result<String, serde_json::Error> {
        let serialized = serde_json::to_string(self)?;
        Ok(format!("{} {}", self.name(), serialized))
    }
}

/// Every state the kitchen went through during one day, oldest first
#[derive(Debug, Clone)]
pub struct Journal {
    steps: usize,
    history: Vec<KitchenState>,
}

impl Journal {
    pub fn new(steps: usize) -> Self {
        Journal {
            steps,
            history: vec![KitchenState::Idle],
        }
    }

    pub fn current(&self) -> KitchenState {
        self.history.last().copied().unwrap_or(KitchenState::Idle)
    }

    pub fn history(&self) -> &[KitchenState] {
        &self.history
    }

    pub fn enter(&mut self, next: KitchenState) {
        let current = self.current();
        if !current.can_become(next, self.steps) {
            warn!(?current, ?next, "unexpected kitchen transition");
        }
        match next.log_entry() {
            Ok(entry) => debug!("{}", entry),
            Err(e) => warn!("Error serializing kitchen state: {}", e),
        }
        self.history.push(next);
    }
}
