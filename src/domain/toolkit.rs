//! Toolkit assembly: combining segmented sections with the fixed discovery
//! questions into one canonical document value.

use crate::domain::error::BackendError;
use crate::domain::prompt::SectionKind;
use crate::domain::segment::{Section, segment};

/// Default discovery questions attached to every toolkit.
///
/// A configuration constant, not derived from user input; overridable from
/// `pitchkit.toml`.
pub const DEFAULT_DISCOVERY_QUESTIONS: &[&str] = &[
    "What does your current process look like from first contact to close?",
    "What prompted you to start looking for a solution now?",
    "Who else is involved in making this decision?",
    "What happens if this problem goes unsolved for another year?",
    "How will you measure success for a purchase like this?",
    "What budget range have you set aside for solving this?",
];

/// Outcome of one completion-gateway call, keyed by the prompt that issued it.
#[derive(Debug)]
pub struct SectionOutcome {
    pub kind: SectionKind,
    pub completion: Result<String, BackendError>,
}

/// The canonical generated sales-document bundle for one business profile.
///
/// Immutable after assembly; built fresh per submission and never persisted
/// beyond the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesToolkit {
    /// Sections in generation order; failed prompts leave empty bodies.
    pub sections: Vec<Section>,
    /// Ordered discovery-question list, 5-7 items.
    pub discovery_questions: Vec<String>,
    /// Non-fatal problems surfaced during the submission.
    pub warnings: Vec<String>,
}

impl SalesToolkit {
    /// Whether every section carries generated text.
    pub fn is_complete(&self) -> bool {
        self.sections.iter().all(|s| !s.body.is_empty())
    }
}

/// Aggregate per-prompt outcomes into a toolkit.
///
/// Every section a prompt declared appears in the result: a failed gateway
/// call yields its declared sections with empty bodies and a warning, so one
/// failed section never blocks the rest of the toolkit.
pub fn assemble(outcomes: Vec<SectionOutcome>, questions: &[String]) -> SalesToolkit {
    let mut sections = Vec::new();
    let mut warnings = Vec::new();

    for outcome in outcomes {
        match outcome.completion {
            Ok(raw) => sections.extend(segment(outcome.kind, &raw)),
            Err(err) => {
                warnings.push(format!("Generation failed for {}: {}", outcome.kind, err));
                sections.extend(outcome.kind.labels().iter().map(|label| Section::empty(*label)));
            }
        }
    }

    SalesToolkit {
        sections,
        discovery_questions: questions.to_vec(),
        warnings,
    }
}
