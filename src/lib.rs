pub mod analyzer;
pub mod args;
pub mod config;
pub mod conversation;
pub mod export;
pub mod input;
pub mod message;
pub mod parser;
pub mod scoring;
pub mod stats;
pub mod stopwords;
pub mod utils;
pub mod words;

pub use analyzer::analyze;
pub use args::Args;
pub use config::AnalyzerConfig;
pub use message::{Message, ParsedChat};
pub use stats::{AnalysisResult, AuthorCount, PodiumEntry, ResponseTime};
pub use stopwords::{init_default_stop_words, StopWords};
