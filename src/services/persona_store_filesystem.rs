//! Filesystem persona source: an optional YAML file of buyer personas.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::Persona;
use crate::ports::{LoadedPersonas, PersonaStore};

/// Loads personas from a YAML file.
///
/// A missing or unreadable file degrades to an empty list with a warning; it
/// never aborts the pipeline. Records without an industry or persona label
/// are skipped, one warning each.
#[derive(Debug, Clone)]
pub struct FilesystemPersonaStore {
    path: Option<PathBuf>,
}

/// Raw record shape; every field optional so malformed entries can be
/// reported instead of failing the whole file.
#[derive(Debug, Deserialize)]
struct RawPersona {
    #[serde(default)]
    industry: Option<String>,
    #[serde(default)]
    persona: Option<String>,
    #[serde(default)]
    pain_points: Vec<String>,
}

impl FilesystemPersonaStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl PersonaStore for FilesystemPersonaStore {
    fn load(&self) -> LoadedPersonas {
        let Some(path) = &self.path else {
            return LoadedPersonas::default();
        };

        let display = path.display();

        if !path.exists() {
            return LoadedPersonas {
                personas: Vec::new(),
                warnings: vec![format!(
                    "Persona file not found: {}; continuing without personas",
                    display
                )],
            };
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                return LoadedPersonas {
                    personas: Vec::new(),
                    warnings: vec![format!(
                        "Could not read persona file {}: {}; continuing without personas",
                        display, err
                    )],
                };
            }
        };

        let raw: Vec<RawPersona> = match serde_yaml::from_str(&content) {
            Ok(raw) => raw,
            Err(err) => {
                return LoadedPersonas {
                    personas: Vec::new(),
                    warnings: vec![format!(
                        "Could not parse persona file {}: {}; continuing without personas",
                        display, err
                    )],
                };
            }
        };

        let mut personas = Vec::new();
        let mut warnings = Vec::new();

        for (index, record) in raw.into_iter().enumerate() {
            let industry = record.industry.unwrap_or_default();
            let persona = record.persona.unwrap_or_default();

            if industry.trim().is_empty() || persona.trim().is_empty() {
                warnings.push(format!(
                    "Skipping persona entry {} in {}: missing industry or persona label",
                    index + 1,
                    display
                ));
                continue;
            }

            personas.push(Persona { industry, persona, pain_points: record.pain_points });
        }

        LoadedPersonas { personas, warnings }
    }
}
