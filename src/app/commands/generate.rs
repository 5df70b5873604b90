//! Toolkit generation pipeline.
//!
//! Sequencing is strict and blocking: validate, assemble prompts, one gateway
//! round trip per prompt in declaration order, segment, assemble. Backend
//! failures become empty sections with warnings; they never abort the
//! submission.

use crate::app::config::AppConfig;
use crate::app::context::AppContext;
use crate::domain::{
    AppError, BusinessProfile, PromptRequest, SalesToolkit, SectionOutcome, Variant, assemble,
    build_prompts,
};
use crate::ports::{CompletionClient, CompletionRequest, PersonaStore};
use crate::services::exporter;

/// Result of one `generate` submission.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// Prompts were assembled but not sent (`--dry-run`). Persona-load
    /// warnings still surface here.
    DryRun { prompts: Vec<PromptRequest>, warnings: Vec<String> },
    /// A toolkit was assembled and rendered.
    Generated { toolkit: SalesToolkit, document: String },
}

/// Run the pipeline for one validated-or-rejected profile.
pub fn execute<C: CompletionClient, P: PersonaStore>(
    ctx: &AppContext<C, P>,
    config: &AppConfig,
    profile: &BusinessProfile,
    variant: Variant,
    dry_run: bool,
) -> Result<GenerateOutcome, AppError> {
    // Validation precedes generation; an incomplete profile never reaches
    // prompt assembly.
    profile.validate()?;
    let questions = config.discovery_questions()?;

    let loaded = ctx.personas().load();
    let prompts = build_prompts(profile, &loaded.personas, variant)?;

    if dry_run {
        return Ok(GenerateOutcome::DryRun { prompts, warnings: loaded.warnings });
    }

    let mut outcomes = Vec::with_capacity(prompts.len());
    for prompt in &prompts {
        let request = CompletionRequest::from_prompt(&config.api.model, prompt);
        outcomes.push(SectionOutcome {
            kind: prompt.kind,
            completion: ctx.completion().complete(request),
        });
    }

    let mut toolkit = assemble(outcomes, &questions);
    let mut warnings = loaded.warnings;
    warnings.append(&mut toolkit.warnings);
    toolkit.warnings = warnings;

    let document = exporter::render(&toolkit, chrono::Local::now().date_naive());

    Ok(GenerateOutcome::Generated { toolkit, document })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BackendError, SectionKind, SectionLabel, Tone};
    use crate::ports::{LoadedPersonas, NoPersonas};

    /// Scripted backend: fixed text per section kind, optional failure.
    struct ScriptedClient {
        fail_kind: Option<SectionKind>,
    }

    impl CompletionClient for ScriptedClient {
        fn complete(&self, request: CompletionRequest) -> Result<String, BackendError> {
            // The walkthrough prompt is the only one carrying a system message.
            let framed = request.messages.first().map(|m| m.role) == Some(crate::ports::ChatRole::System);
            let user = &request.messages.last().unwrap().content;
            let kind = if framed {
                SectionKind::Walkthrough
            } else if user.contains("elevator pitch") {
                SectionKind::ElevatorPitch
            } else if user.contains("call script") {
                SectionKind::CallScript
            } else {
                SectionKind::ColdEmail
            };

            if self.fail_kind == Some(kind) {
                return Err(BackendError::Server(500));
            }

            Ok(match kind {
                SectionKind::ElevatorPitch => "Short pitch here\nLine 2\nLine 3".to_string(),
                SectionKind::CallScript => "Scripted call opening.".to_string(),
                SectionKind::ColdEmail => "Subject: scripted email".to_string(),
                SectionKind::Walkthrough => "Full scripted walkthrough.".to_string(),
            })
        }
    }

    fn acme() -> BusinessProfile {
        BusinessProfile {
            company: "Acme".into(),
            product: "Widgets".into(),
            target_audience: "SMBs".into(),
            top_problems: "cost, speed".into(),
            value_proposition: "half the price".into(),
            tone: Some(Tone::Bold),
            advanced: None,
        }
    }

    fn ctx(fail_kind: Option<SectionKind>) -> AppContext<ScriptedClient, NoPersonas> {
        AppContext::new(ScriptedClient { fail_kind }, NoPersonas)
    }

    #[test]
    fn incomplete_profile_never_reaches_the_backend() {
        struct PanickingClient;
        impl CompletionClient for PanickingClient {
            fn complete(&self, _: CompletionRequest) -> Result<String, BackendError> {
                panic!("backend must not be called for an incomplete profile");
            }
        }

        let ctx = AppContext::new(PanickingClient, NoPersonas);
        let profile = BusinessProfile { company: String::new(), ..acme() };

        let result = execute(&ctx, &AppConfig::default(), &profile, Variant::Discrete, false);

        assert!(matches!(result, Err(AppError::IncompleteProfile { .. })));
    }

    #[test]
    fn dry_run_assembles_prompts_without_calling_the_backend() {
        struct PanickingClient;
        impl CompletionClient for PanickingClient {
            fn complete(&self, _: CompletionRequest) -> Result<String, BackendError> {
                panic!("backend must not be called in dry-run mode");
            }
        }

        let ctx = AppContext::new(PanickingClient, NoPersonas);

        let outcome =
            execute(&ctx, &AppConfig::default(), &acme(), Variant::Discrete, true).unwrap();

        match outcome {
            GenerateOutcome::DryRun { prompts, warnings } => {
                assert_eq!(prompts.len(), 3);
                assert!(warnings.is_empty());
            }
            other => panic!("Expected DryRun, got {:?}", other),
        }
    }

    #[test]
    fn dry_run_carries_persona_warnings() {
        struct WarningStore;
        impl PersonaStore for WarningStore {
            fn load(&self) -> LoadedPersonas {
                LoadedPersonas {
                    personas: Vec::new(),
                    warnings: vec!["Persona file not found: personas.yml".to_string()],
                }
            }
        }

        let ctx = AppContext::new(ScriptedClient { fail_kind: None }, WarningStore);

        let outcome =
            execute(&ctx, &AppConfig::default(), &acme(), Variant::Discrete, true).unwrap();

        let GenerateOutcome::DryRun { warnings, .. } = outcome else {
            panic!("Expected DryRun outcome");
        };
        assert_eq!(warnings, vec!["Persona file not found: personas.yml".to_string()]);
    }

    #[test]
    fn discrete_pipeline_produces_canonical_toolkit() {
        let outcome =
            execute(&ctx(None), &AppConfig::default(), &acme(), Variant::Discrete, false).unwrap();

        let GenerateOutcome::Generated { toolkit, document } = outcome else {
            panic!("Expected Generated outcome");
        };

        let labels: Vec<SectionLabel> = toolkit.sections.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![
                SectionLabel::ShortPitch,
                SectionLabel::MediumPitch,
                SectionLabel::CallScript,
                SectionLabel::ColdEmail,
            ]
        );
        assert_eq!(toolkit.sections[0].body, "Short pitch here");
        assert_eq!(toolkit.sections[1].body, "Line 2\nLine 3");
        assert!(toolkit.warnings.is_empty());
        assert!(document.contains("Short pitch here"));
        assert!(document.contains("- Who else is involved in making this decision?"));
    }

    #[test]
    fn failed_cold_email_yields_partial_toolkit() {
        let outcome = execute(
            &ctx(Some(SectionKind::ColdEmail)),
            &AppConfig::default(),
            &acme(),
            Variant::Discrete,
            false,
        )
        .unwrap();

        let GenerateOutcome::Generated { toolkit, document } = outcome else {
            panic!("Expected Generated outcome");
        };

        let cold_email =
            toolkit.sections.iter().find(|s| s.label == SectionLabel::ColdEmail).unwrap();
        assert!(cold_email.body.is_empty());
        assert_eq!(toolkit.sections[2].body, "Scripted call opening.");
        assert_eq!(toolkit.warnings.len(), 1);
        assert!(toolkit.warnings[0].contains("cold email"));
        // Export still succeeds with the empty section.
        assert!(document.contains("**Cold Email**"));
    }

    #[test]
    fn persona_warnings_surface_in_the_toolkit() {
        struct WarningStore;
        impl PersonaStore for WarningStore {
            fn load(&self) -> LoadedPersonas {
                LoadedPersonas {
                    personas: Vec::new(),
                    warnings: vec!["Persona file not found: personas.yml".to_string()],
                }
            }
        }

        let ctx = AppContext::new(ScriptedClient { fail_kind: None }, WarningStore);

        let outcome =
            execute(&ctx, &AppConfig::default(), &acme(), Variant::Walkthrough, false).unwrap();

        let GenerateOutcome::Generated { toolkit, .. } = outcome else {
            panic!("Expected Generated outcome");
        };

        assert_eq!(toolkit.warnings, vec!["Persona file not found: personas.yml".to_string()]);
        assert_eq!(toolkit.sections.len(), 1);
        assert_eq!(toolkit.sections[0].label, SectionLabel::Walkthrough);
    }
}
