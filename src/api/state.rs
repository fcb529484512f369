use std::sync::{Mutex, MutexGuard};

use crate::models::garden::Garden;

/// Process-lifetime application state: the single garden, created on demand
/// and lost when the process ends. The engine itself is single-threaded;
/// the mutex serialises actix workers so each operation sees the garden
/// exclusively, one call at a time.
#[derive(Default)]
pub struct AppState {
    garden: Mutex<Option<Garden>>,
}

impl AppState {
    pub fn garden(&self) -> MutexGuard<'_, Option<Garden>> {
        // A poisoned lock only means another worker panicked mid-request;
        // the garden itself is never left half-mutated by the engine.
        self.garden.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
