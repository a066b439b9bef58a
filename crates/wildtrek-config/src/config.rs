//! Configuration structs with documented defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level game configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Organism dataset settings.
    pub data: DataConfig,
    /// Encounter weighting settings.
    pub encounter: EncounterConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Where the organism dataset comes from and how forgiving loading is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the organism JSON file.
    pub organisms_path: PathBuf,
    /// Strip non-JSON text around the dataset object before parsing.
    pub recover_embedded_json: bool,
    /// Fall back to the two-organism built-in dataset if loading fails.
    pub builtin_fallback: bool,
}

/// Which weight table drives the encounter draw.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum WeightScheme {
    /// Integer weights; each candidate fills `weight` slots of a virtual pool.
    #[default]
    RepetitionPool,
    /// Fractional probability mass per candidate; unknown rarities weigh 0.
    Normalized,
}

/// Encounter selection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EncounterConfig {
    /// Active weighting scheme.
    pub scheme: WeightScheme,
    /// Chance (0.0 - 1.0) that an exploration finds nothing even when
    /// candidates exist.
    pub null_encounter_chance: f64,
    /// Table used by [`WeightScheme::RepetitionPool`].
    pub pool_weights: PoolWeights,
    /// Table used by [`WeightScheme::Normalized`].
    pub probability_weights: ProbabilityWeights,
    /// Fixed RNG seed for reproducible sessions. `None` seeds from the OS.
    pub seed: Option<u64>,
}

/// Integer pool weights per rarity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PoolWeights {
    pub common: u32,
    pub uncommon: u32,
    pub rare: u32,
    pub epic: u32,
    pub legendary: u32,
    pub mythical: u32,
    /// Weight for any rarity tag outside the six tiers.
    pub unrecognized: u32,
}

/// Fractional probability weights per rarity. Unrecognized tags weigh 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProbabilityWeights {
    pub common: f64,
    pub uncommon: f64,
    pub rare: f64,
    pub epic: f64,
    pub legendary: f64,
    pub mythical: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Directory for the JSON log file written by debug builds.
    pub log_dir: Option<PathBuf>,
}

// --- Default implementations ---

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            organisms_path: PathBuf::from("assets/organisms.json"),
            recover_embedded_json: false,
            builtin_fallback: true,
        }
    }
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            scheme: WeightScheme::RepetitionPool,
            null_encounter_chance: 0.3,
            pool_weights: PoolWeights::default(),
            probability_weights: ProbabilityWeights::default(),
            seed: None,
        }
    }
}

impl Default for PoolWeights {
    fn default() -> Self {
        Self {
            common: 50,
            uncommon: 80,
            rare: 40,
            epic: 20,
            legendary: 10,
            mythical: 1,
            unrecognized: 10,
        }
    }
}

impl Default for ProbabilityWeights {
    fn default() -> Self {
        Self {
            common: 0.60,
            uncommon: 0.25,
            rare: 0.10,
            epic: 0.04,
            legendary: 0.01,
            mythical: 0.005,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

// --- Validation ---

impl Config {
    /// Check value ranges that the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let chance = self.encounter.null_encounter_chance;
        if !(0.0..=1.0).contains(&chance) {
            return Err(ConfigError::Invalid(format!(
                "encounter.null_encounter_chance must be within 0.0..=1.0, got {chance}"
            )));
        }

        let weights = &self.encounter.probability_weights;
        for (name, weight) in [
            ("common", weights.common),
            ("uncommon", weights.uncommon),
            ("rare", weights.rare),
            ("epic", weights.epic),
            ("legendary", weights.legendary),
            ("mythical", weights.mythical),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "encounter.probability_weights.{name} must be finite and >= 0, got {weight}"
                )));
            }
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
