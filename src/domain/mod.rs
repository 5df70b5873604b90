pub mod error;
pub mod persona;
pub mod profile;
pub mod prompt;
pub mod segment;
pub mod toolkit;

pub use error::{AppError, BackendError};
pub use persona::{NO_PERSONAS_PLACEHOLDER, Persona, render_persona_bullets};
pub use profile::{AdvancedDetails, BusinessProfile, Tone};
pub use prompt::{NOT_SPECIFIED, PromptRequest, SectionKind, Variant, build_prompts};
pub use segment::{Section, SectionLabel, segment};
pub use toolkit::{DEFAULT_DISCOVERY_QUESTIONS, SalesToolkit, SectionOutcome, assemble};
