//! Prompt assembly: the pure mapping from a business profile (plus optional
//! personas) to the completion-request strings a variant declares.
//!
//! Assembly is deterministic: identical inputs produce byte-identical prompt
//! text. Templates are embedded in the binary and rendered with strict
//! undefined-variable semantics, so a template/context drift fails loudly
//! instead of producing a prompt with holes.

use std::fmt;
use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::AppError;
use crate::domain::persona::{Persona, render_persona_bullets};
use crate::domain::profile::BusinessProfile;
use crate::domain::segment::SectionLabel;

const PROFILE_TEMPLATE: &str = include_str!("templates/profile.j2");
const ELEVATOR_PITCH_TEMPLATE: &str = include_str!("templates/elevator_pitch.j2");
const CALL_SCRIPT_TEMPLATE: &str = include_str!("templates/call_script.j2");
const COLD_EMAIL_TEMPLATE: &str = include_str!("templates/cold_email.j2");
const WALKTHROUGH_TEMPLATE: &str = include_str!("templates/walkthrough.j2");
const WALKTHROUGH_SYSTEM: &str = include_str!("templates/walkthrough_system.txt");

/// Substituted for any unset optional or advanced profile slot so the backend
/// always receives a complete-looking template.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Pipeline configuration: which sections are requested and whether the
/// static methodology framing is prepended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Discrete elevator-pitch, call-script, and cold-email prompts.
    #[default]
    Discrete,
    /// One combined walkthrough document with methodology framing.
    Walkthrough,
}

/// Which toolkit content a single prompt requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    ElevatorPitch,
    CallScript,
    ColdEmail,
    Walkthrough,
}

impl SectionKind {
    /// The document sections this prompt's completion is segmented into.
    ///
    /// The elevator pitch declares two sections because its completion is
    /// split at the first line boundary.
    pub fn labels(&self) -> &'static [SectionLabel] {
        match self {
            SectionKind::ElevatorPitch => &[SectionLabel::ShortPitch, SectionLabel::MediumPitch],
            SectionKind::CallScript => &[SectionLabel::CallScript],
            SectionKind::ColdEmail => &[SectionLabel::ColdEmail],
            SectionKind::Walkthrough => &[SectionLabel::Walkthrough],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::ElevatorPitch => "elevator pitch",
            SectionKind::CallScript => "call script",
            SectionKind::ColdEmail => "cold email",
            SectionKind::Walkthrough => "sales walkthrough",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One assembled completion request. Created fresh per generation call and
/// discarded after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub kind: SectionKind,
    /// Methodology framing, present only for the walkthrough variant.
    pub system: Option<String>,
    pub user: String,
}

#[derive(Serialize)]
struct ProfileVars {
    company: String,
    product: String,
    target_audience: String,
    top_problems: String,
    value_proposition: String,
    tone: String,
    desired_action: String,
    top_objection: String,
    customer_quote: String,
    delivery_method: String,
    business_model: String,
    sales_cycle: String,
    competitive_edge: String,
    fallback_rebuttal: String,
    conversation_style: String,
    comfort_level: String,
    personas: String,
}

impl ProfileVars {
    fn new(profile: &BusinessProfile, personas: &[Persona]) -> Self {
        let advanced = profile.advanced.clone().unwrap_or_default();

        Self {
            company: profile.company.clone(),
            product: profile.product.clone(),
            target_audience: profile.target_audience.clone(),
            top_problems: profile.top_problems.clone(),
            value_proposition: profile.value_proposition.clone(),
            tone: profile
                .tone
                .map(|t| t.as_str().to_string())
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            desired_action: or_not_specified(advanced.desired_action),
            top_objection: or_not_specified(advanced.top_objection),
            customer_quote: or_not_specified(advanced.customer_quote),
            delivery_method: or_not_specified(advanced.delivery_method),
            business_model: or_not_specified(advanced.business_model),
            sales_cycle: or_not_specified(advanced.sales_cycle),
            competitive_edge: or_not_specified(advanced.competitive_edge),
            fallback_rebuttal: or_not_specified(advanced.fallback_rebuttal),
            conversation_style: or_not_specified(advanced.conversation_style),
            comfort_level: advanced
                .comfort_level
                .map(|level| level.to_string())
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            personas: render_persona_bullets(personas),
        }
    }
}

fn or_not_specified(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_SPECIFIED.to_string(),
    }
}

/// Build the completion requests a variant declares, in generation order.
///
/// The profile must already be validated; assembly performs no I/O and no
/// validation of its own.
pub fn build_prompts(
    profile: &BusinessProfile,
    personas: &[Persona],
    variant: Variant,
) -> Result<Vec<PromptRequest>, AppError> {
    let vars = ProfileVars::new(profile, personas);
    let profile_block = render_template(PROFILE_TEMPLATE, &vars, "profile")?;

    #[derive(Serialize)]
    struct SectionVars {
        profile_block: String,
    }
    let section_vars = SectionVars { profile_block };

    match variant {
        Variant::Discrete => Ok(vec![
            PromptRequest {
                kind: SectionKind::ElevatorPitch,
                system: None,
                user: render_template(ELEVATOR_PITCH_TEMPLATE, &section_vars, "elevator_pitch")?,
            },
            PromptRequest {
                kind: SectionKind::CallScript,
                system: None,
                user: render_template(CALL_SCRIPT_TEMPLATE, &section_vars, "call_script")?,
            },
            PromptRequest {
                kind: SectionKind::ColdEmail,
                system: None,
                user: render_template(COLD_EMAIL_TEMPLATE, &section_vars, "cold_email")?,
            },
        ]),
        Variant::Walkthrough => Ok(vec![PromptRequest {
            kind: SectionKind::Walkthrough,
            system: Some(WALKTHROUGH_SYSTEM.to_string()),
            user: render_template(WALKTHROUGH_TEMPLATE, &section_vars, "walkthrough")?,
        }]),
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Render an embedded template with strict undefined-variable semantics.
fn render_template<S: Serialize>(
    template: &str,
    vars: &S,
    template_name: &str,
) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(template, vars).map_err(|err| AppError::TemplateRender {
        template: template_name.to_string(),
        reason: err.to_string(),
    })
}
