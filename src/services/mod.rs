mod completion_client_http;
pub mod exporter;
mod persona_store_filesystem;

pub use completion_client_http::HttpCompletionClient;
pub use persona_store_filesystem::FilesystemPersonaStore;
