//! Persona data source port definition.

use crate::domain::Persona;

/// Result of a persona load: the usable records plus any non-fatal warnings.
///
/// Absence of the source is an expected empty case, never an error, so the
/// port has no failure channel at all.
#[derive(Debug, Default)]
pub struct LoadedPersonas {
    pub personas: Vec<Persona>,
    pub warnings: Vec<String>,
}

/// Port for the optional buyer-persona source.
pub trait PersonaStore {
    fn load(&self) -> LoadedPersonas;
}

/// Store that always yields an empty persona list; used when no source was
/// supplied.
#[derive(Debug, Clone, Default)]
pub struct NoPersonas;

impl PersonaStore for NoPersonas {
    fn load(&self) -> LoadedPersonas {
        LoadedPersonas::default()
    }
}
