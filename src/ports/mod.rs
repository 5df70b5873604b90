mod completion_client;
mod persona_store;

pub use completion_client::{
    ChatMessage, ChatRole, CompletionClient, CompletionRequest, MockCompletionClient,
};
pub use persona_store::{LoadedPersonas, NoPersonas, PersonaStore};
