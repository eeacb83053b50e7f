//! Backend client for OpenAI-compatible `/chat/completions` servers
//! (llamafile, llama.cpp server, Ollama, vLLM).

mod provider;
mod serde_api;
mod tests;
mod transport;
mod types;

pub use provider::OpenAiCompatProvider;
pub use serde_api::{interpret_completion, interpret_models};
pub use transport::{HttpTransport, OpenAiCompatTransport};
pub use types::{ChatCompletion, ChatMessage, ChatRequest};
