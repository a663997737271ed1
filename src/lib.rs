pub mod config;
pub mod error;
pub mod gemini;
pub mod orchestrator;
pub mod prompt;
pub mod server;

pub use config::AppConfig;
pub use error::ServiceError;
pub use gemini::GeminiClient;
pub use orchestrator::{PromptOrchestrator, TextGenerator};
pub use prompt::{Creativity, GenerationConfig, Mode};
pub use server::build_router;
