pub mod confidence;
pub mod consultation;
pub mod engine;
pub mod extractor;
pub mod pathway;
pub mod responder;
pub mod sentiment;
pub mod severity;
pub mod templates;
pub mod vocabulary;

pub use consultation::is_consultation_complete;
pub use engine::{analyze_text, TriageEngine};
pub use extractor::extract;
pub use responder::generate;
pub use sentiment::classify_sentiment;
pub use severity::classify_severity;
