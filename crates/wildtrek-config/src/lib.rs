//! Configuration system for Wildtrek.
//!
//! Settings persist to disk as RON and every section falls back to documented
//! defaults, so old and partial files keep loading. The weighting scheme, both
//! rarity weight tables, and the null-encounter chance live here so that the
//! encounter behaviour is always an explicit configuration choice.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DataConfig, DebugConfig, EncounterConfig, PoolWeights, ProbabilityWeights,
    WeightScheme,
};
pub use error::ConfigError;
