pub mod completion;
pub mod embedder;
pub mod error;

pub use async_trait::async_trait;
pub use completion::{Completion, CompletionRequest};
pub use embedder::Embedder;
pub use error::AiError;
