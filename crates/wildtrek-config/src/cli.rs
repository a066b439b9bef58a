//! Command-line overrides for Wildtrek settings.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, WeightScheme};

/// Wildtrek command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "wildtrek", about = "Wildtrek")]
pub struct CliArgs {
    /// Path to the organism dataset (JSON).
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Strip non-JSON text around the dataset before parsing.
    #[arg(long)]
    pub recover: Option<bool>,

    /// Use the built-in dataset if the real one cannot be loaded.
    #[arg(long)]
    pub builtin_fallback: Option<bool>,

    /// Encounter weighting scheme.
    #[arg(long, value_enum)]
    pub scheme: Option<WeightScheme>,

    /// Chance (0.0 - 1.0) that an exploration finds nothing.
    #[arg(long)]
    pub null_chance: Option<f64>,

    /// Fixed RNG seed for a reproducible session.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref path) = args.data {
            self.data.organisms_path = path.clone();
        }
        if let Some(recover) = args.recover {
            self.data.recover_embedded_json = recover;
        }
        if let Some(fallback) = args.builtin_fallback {
            self.data.builtin_fallback = fallback;
        }
        if let Some(scheme) = args.scheme {
            self.encounter.scheme = scheme;
        }
        if let Some(chance) = args.null_chance {
            self.encounter.null_encounter_chance = chance;
        }
        if let Some(seed) = args.seed {
            self.encounter.seed = Some(seed);
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
