use crate::ports::{CompletionClient, PersonaStore};

/// Application context holding the injected collaborators for one submission.
///
/// Built fresh per run; no state crosses submissions.
pub struct AppContext<C: CompletionClient, P: PersonaStore> {
    completion: C,
    personas: P,
}

impl<C: CompletionClient, P: PersonaStore> AppContext<C, P> {
    /// Create a new application context.
    pub fn new(completion: C, personas: P) -> Self {
        Self { completion, personas }
    }

    /// Get a reference to the completion backend client.
    pub fn completion(&self) -> &C {
        &self.completion
    }

    /// Get a reference to the persona store.
    pub fn personas(&self) -> &P {
        &self.personas
    }
}
