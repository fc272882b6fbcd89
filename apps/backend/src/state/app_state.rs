use std::sync::Arc;

use crate::services::sequence::SequenceService;

/// Application state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    /// The one game every client plays
    pub sequence: Arc<dyn SequenceService>,
}

impl AppState {
    pub fn new(sequence: Arc<dyn SequenceService>) -> Self {
        Self { sequence }
    }

    pub fn sequence_service(&self) -> &dyn SequenceService {
        self.sequence.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
