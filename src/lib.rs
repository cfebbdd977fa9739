pub mod cli;
pub mod commands;
pub mod error;
pub mod seqio;
pub mod types;
pub mod utils;

// Re-export the types used at the command boundary
pub use error::ConfigError;
pub use types::ReadType;
