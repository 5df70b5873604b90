//! Buyer-persona records and their prompt rendering.

use serde::Deserialize;

/// Rendered in place of the persona bullet list when no personas are supplied.
pub const NO_PERSONAS_PLACEHOLDER: &str = "No personas provided.";

/// A buyer archetype used to tailor prompt text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Persona {
    pub industry: String,
    pub persona: String,
    #[serde(default)]
    pub pain_points: Vec<String>,
}

/// Render personas as the ordered bullet list embedded in prompts.
///
/// Exact format per bullet:
/// `- {industry} {persona} with pain points: {comma-joined pain points}`.
/// An empty slice renders as the literal `No personas provided.`.
pub fn render_persona_bullets(personas: &[Persona]) -> String {
    if personas.is_empty() {
        return NO_PERSONAS_PLACEHOLDER.to_string();
    }

    personas
        .iter()
        .map(|p| {
            format!(
                "- {} {} with pain points: {}",
                p.industry,
                p.persona,
                p.pain_points.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
