pub mod analyzer;
pub mod inference;
pub mod keywords;
pub mod meta;
pub mod recommend;
pub mod scoring;
pub mod sentiment;
pub mod structure;

pub use analyzer::SeoAnalyzer;
pub use inference::{DisabledInference, HfInference, InferenceOutcome, InferenceProvider};
