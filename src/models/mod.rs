pub mod config;
pub mod generation;

pub use config::{AppConfig, ConfigError, Limits};
pub use generation::{ColorGeneration, GenerationKind};
