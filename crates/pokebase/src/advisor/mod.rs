mod corpus;
mod gemini;
mod prompts;
mod service;

pub use corpus::{CorpusError, DescriptionCorpus};
pub use gemini::{CompletionChunks, CompletionError, CompletionModel, GeminiClient};
pub use prompts::{compose, PromptKind};
pub use service::BattleAdvisor;
