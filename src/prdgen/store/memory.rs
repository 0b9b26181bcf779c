use super::StateStore;
use crate::error::Result;
use crate::state::PrdState;

/// In-memory storage for testing. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    state: Option<PrdState>,
    pub save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for InMemoryStore {
    fn load(&self) -> Result<PrdState> {
        Ok(self
            .state
            .clone()
            .unwrap_or_default()
            .hydrate())
    }

    fn save(&mut self, state: &PrdState) -> Result<()> {
        self.state = Some(state.clone());
        self.save_count += 1;
        Ok(())
    }
}
