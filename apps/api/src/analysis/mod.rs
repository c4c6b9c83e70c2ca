// Resume-to-job matching engine.
// Extraction, classification, scoring and suggestions are pure functions.
// The ATS jitter is the only injected effect (see scorer::JitterSource).

pub mod classifier;
pub mod errors;
pub mod extractor;
pub mod handlers;
pub mod pipeline;
pub mod scorer;
pub mod suggestions;
pub mod vocabulary;
