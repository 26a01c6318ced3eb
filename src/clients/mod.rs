pub mod language_client;
pub mod traits;

pub use language_client::LanguageClient;
pub use traits::{KnowledgeBase, TextAnalyzer};
