//! Business profile: the structured input a toolkit is generated from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Requested writing tone for generated sales copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tone {
    Friendly,
    Formal,
    Bold,
    Consultative,
    Professional,
    Confident,
}

impl Tone {
    /// All supported tones, in presentation order.
    pub const ALL: [Tone; 6] = [
        Tone::Friendly,
        Tone::Formal,
        Tone::Bold,
        Tone::Consultative,
        Tone::Professional,
        Tone::Confident,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Friendly => "Friendly",
            Tone::Formal => "Formal",
            Tone::Bold => "Bold",
            Tone::Consultative => "Consultative",
            Tone::Professional => "Professional",
            Tone::Confident => "Confident",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "friendly" => Ok(Tone::Friendly),
            "formal" => Ok(Tone::Formal),
            "bold" => Ok(Tone::Bold),
            "consultative" => Ok(Tone::Consultative),
            "professional" => Ok(Tone::Professional),
            "confident" => Ok(Tone::Confident),
            _ => Err(AppError::InvalidTone(value.to_string())),
        }
    }
}

impl TryFrom<String> for Tone {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        tone.as_str().to_string()
    }
}

/// Optional advanced sub-record of a business profile.
///
/// Every slot is optional; unset slots render as the literal `Not specified`
/// in assembled prompts rather than being omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_objection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<String>,
    /// B2B / B2C flag, kept free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_cycle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitive_edge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_rebuttal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_style: Option<String>,
    /// Seller comfort level on a 0-10 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comfort_level: Option<u8>,
}

/// Business-description fields collected from the caller.
///
/// The five required fields must be non-blank before a toolkit may be
/// generated; `validate` names every missing field so the caller can
/// re-prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub top_problems: String,
    #[serde(default)]
    pub value_proposition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced: Option<AdvancedDetails>,
}

impl BusinessProfile {
    /// Ensure every required field is non-blank and advanced values are in range.
    ///
    /// Validation always precedes prompt assembly; an incomplete profile never
    /// reaches the completion backend.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("company", &self.company),
            ("product", &self.product),
            ("target_audience", &self.target_audience),
            ("top_problems", &self.top_problems),
            ("value_proposition", &self.value_proposition),
        ];

        let missing: Vec<String> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::IncompleteProfile { missing });
        }

        if let Some(advanced) = &self.advanced
            && let Some(level) = advanced.comfort_level
            && level > 10
        {
            return Err(AppError::InvalidComfortLevel(level));
        }

        Ok(())
    }

    /// Parse a profile from TOML content.
    pub fn from_toml_str(content: &str, source: &str) -> Result<Self, AppError> {
        toml::from_str(content).map_err(|err| AppError::ProfileParse {
            path: source.to_string(),
            reason: err.to_string(),
        })
    }

    /// Serialize the profile as TOML for reuse in later runs.
    pub fn to_toml_string(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self).map_err(|err| AppError::ProfileParse {
            path: "(in-memory profile)".to_string(),
            reason: err.to_string(),
        })
    }
}
