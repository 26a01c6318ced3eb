pub mod analysis;
pub mod answer;
pub mod document;
pub mod loaders;

pub use analysis::{AnalysisReport, DetectedLanguage, Entity, LinkedEntity, Sentiment};
pub use answer::AnswerCandidate;
pub use document::Document;
pub use loaders::{list_documents, load_document};
