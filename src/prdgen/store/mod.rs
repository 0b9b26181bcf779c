//! Storage layer for the persisted Document State.
//!
//! Persistence is abstracted behind the [`StateStore`] trait so the core can
//! be exercised without a filesystem:
//!
//! - [`fs::FileStore`]: production, one pretty-printed JSON document file.
//! - [`memory::InMemoryStore`]: tests, no persistence.
//!
//! Degradation is silent: a missing or malformed document file loads as the
//! default state rather than surfacing a parse error. Loaded
//! payloads may carry an arbitrary subset of keys (forward/backward
//! compatibility); the merge over defaults happens in serde and
//! `PrdState::hydrate`, not here.

use crate::error::Result;
use crate::state::PrdState;

pub mod fs;
pub mod memory;

/// Abstract interface for Document State persistence.
pub trait StateStore {
    /// Load the persisted state, falling back to defaults when absent or
    /// unreadable as JSON.
    fn load(&self) -> Result<PrdState>;

    /// Persist the full state (called after every mutation).
    fn save(&mut self, state: &PrdState) -> Result<()>;
}
