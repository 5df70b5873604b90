//! Response segmenting: organizing raw completion text into labeled sections.

use std::fmt;

use crate::domain::prompt::SectionKind;

/// Identity of one section in the canonical toolkit document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLabel {
    ShortPitch,
    MediumPitch,
    CallScript,
    ColdEmail,
    Walkthrough,
}

impl SectionLabel {
    /// Heading used for the section in the exported document.
    pub fn title(&self) -> &'static str {
        match self {
            SectionLabel::ShortPitch => "Short Elevator Pitch",
            SectionLabel::MediumPitch => "Medium Elevator Pitch",
            SectionLabel::CallScript => "Call Script",
            SectionLabel::ColdEmail => "Cold Email",
            SectionLabel::Walkthrough => "Sales Walkthrough",
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One labeled piece of generated text. The body may be empty when the
/// backend failed for the originating prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: SectionLabel,
    pub body: String,
}

impl Section {
    pub fn new(label: SectionLabel, body: impl Into<String>) -> Self {
        Self { label, body: body.into() }
    }

    /// An empty-bodied section, used when generation failed for its prompt.
    pub fn empty(label: SectionLabel) -> Self {
        Self { label, body: String::new() }
    }
}

/// Split raw completion text into the sections its prompt kind declares.
///
/// Only the elevator-pitch response is split: line 0 becomes the short pitch
/// and the remaining lines, rejoined, the medium pitch. Every other kind
/// passes through verbatim as a single section. The asymmetry is intentional;
/// downstream display depends on it.
pub fn segment(kind: SectionKind, raw: &str) -> Vec<Section> {
    match kind {
        SectionKind::ElevatorPitch => {
            let (short, medium) = split_first_line(raw);
            vec![
                Section::new(SectionLabel::ShortPitch, short),
                Section::new(SectionLabel::MediumPitch, medium),
            ]
        }
        SectionKind::CallScript => vec![Section::new(SectionLabel::CallScript, raw)],
        SectionKind::ColdEmail => vec![Section::new(SectionLabel::ColdEmail, raw)],
        SectionKind::Walkthrough => vec![Section::new(SectionLabel::Walkthrough, raw)],
    }
}

/// Split at the first line boundary. No boundary means the whole text is the
/// first piece; empty input means both pieces are empty.
fn split_first_line(raw: &str) -> (String, String) {
    match raw.split_once('\n') {
        Some((first, rest)) => (first.strip_suffix('\r').unwrap_or(first).to_string(), rest.to_string()),
        None => (raw.to_string(), String::new()),
    }
}
