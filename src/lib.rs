//! pitchkit: generate an LLM-backed sales toolkit from a business profile.
//!
//! The pipeline is sequential and blocking: collect or load a profile,
//! validate it, assemble prompts, one completion round trip per prompt,
//! segment the responses, and assemble the canonical toolkit document.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::fs;
use std::path::{Path, PathBuf};

use app::commands::generate as generate_cmd;
use app::{AppConfig, AppContext};
use ports::MockCompletionClient;
use services::{FilesystemPersonaStore, HttpCompletionClient};

pub use app::commands::generate::GenerateOutcome;
pub use domain::{AppError, BusinessProfile, SalesToolkit, Variant};

/// Options for one `generate` submission.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Profile TOML file; collected interactively when absent.
    pub profile: Option<PathBuf>,
    /// Persona YAML file; absence is an expected empty case.
    pub personas: Option<PathBuf>,
    pub variant: Variant,
    /// Assemble prompts but stop before any backend call.
    pub dry_run: bool,
    /// Use the offline mock backend.
    pub mock: bool,
}

/// Run one toolkit generation submission.
///
/// Returns `Ok(None)` when interactive collection was cancelled. The backend
/// credential is resolved before the profile is collected, so a missing
/// credential fails fast instead of after the user has typed everything in.
pub fn generate(options: GenerateOptions) -> Result<Option<GenerateOutcome>, AppError> {
    let config = AppConfig::load(Path::new("."))?;
    let personas = FilesystemPersonaStore::new(options.personas.clone());

    if options.dry_run || options.mock {
        let ctx = AppContext::new(MockCompletionClient, personas);
        let Some(profile) = resolve_profile(&options)? else {
            return Ok(None);
        };
        generate_cmd::execute(&ctx, &config, &profile, options.variant, options.dry_run).map(Some)
    } else {
        let client = HttpCompletionClient::from_env(&config.api)?;
        let ctx = AppContext::new(client, personas);
        let Some(profile) = resolve_profile(&options)? else {
            return Ok(None);
        };
        generate_cmd::execute(&ctx, &config, &profile, options.variant, false).map(Some)
    }
}

fn resolve_profile(options: &GenerateOptions) -> Result<Option<BusinessProfile>, AppError> {
    match &options.profile {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|err| {
                AppError::Configuration(format!(
                    "Failed to read profile file {}: {}",
                    path.display(),
                    err
                ))
            })?;
            let profile = BusinessProfile::from_toml_str(&content, &path.display().to_string())?;
            Ok(Some(profile))
        }
        None => app::cli::collect::collect(),
    }
}
