//! Completion backend port definition.

use crate::domain::{BackendError, PromptRequest};

/// Message role in a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
}

impl ChatRole {
    /// Wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
        }
    }
}

/// One `{role, content}` message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Request to the completion backend: model identifier plus ordered messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// Build the wire request for an assembled prompt. A system message is
    /// issued only when the prompt carries methodology framing.
    pub fn from_prompt(model: &str, prompt: &PromptRequest) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &prompt.system {
            messages.push(ChatMessage { role: ChatRole::System, content: system.clone() });
        }
        messages.push(ChatMessage { role: ChatRole::User, content: prompt.user.clone() });

        Self { model: model.to_string(), messages }
    }
}

/// Port for the text-generation backend: prompt in, completion text out.
///
/// One blocking round trip per call, no retry. Failures are typed data the
/// toolkit assembler absorbs per-section; implementations never panic on
/// transport or auth errors.
pub trait CompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<String, BackendError>;
}

/// Offline client for `--mock` and `--dry-run` runs. Returns deterministic
/// placeholder text shaped like a real completion (two lines, so the
/// elevator-pitch split is exercised).
#[derive(Debug, Clone, Default)]
pub struct MockCompletionClient;

impl CompletionClient for MockCompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<String, BackendError> {
        let prompt_chars: usize = request.messages.iter().map(|m| m.content.len()).sum();

        Ok(format!(
            "Mock completion for a {} character prompt.\nThis placeholder body was produced offline; run without --mock to call the completion backend.",
            prompt_chars
        ))
    }
}
