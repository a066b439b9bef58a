//! Rarity weight tables.
//!
//! Two interchangeable schemes: integer pool weights, where unrecognized
//! rarities get a configurable default, and fractional probability weights,
//! where unrecognized rarities weigh nothing.

use wildtrek_catalog::Rarity;
use wildtrek_config::{EncounterConfig, PoolWeights, ProbabilityWeights, WeightScheme};

/// The active weight table.
#[derive(Clone, Debug, PartialEq)]
pub enum WeightTable {
    /// Each candidate fills `weight` slots of a virtual pool.
    RepetitionPool(PoolWeights),
    /// Each candidate contributes `weight` probability mass.
    Normalized(ProbabilityWeights),
}

impl WeightTable {
    /// Picks the table named by `config.scheme`.
    pub fn from_config(config: &EncounterConfig) -> Self {
        match config.scheme {
            WeightScheme::RepetitionPool => Self::RepetitionPool(config.pool_weights.clone()),
            WeightScheme::Normalized => Self::Normalized(config.probability_weights.clone()),
        }
    }

    /// Which scheme this table implements.
    pub fn scheme(&self) -> WeightScheme {
        match self {
            Self::RepetitionPool(_) => WeightScheme::RepetitionPool,
            Self::Normalized(_) => WeightScheme::Normalized,
        }
    }

    /// Weight of `rarity` under this table, as a float for either scheme.
    pub fn weight(&self, rarity: &Rarity) -> f64 {
        match self {
            Self::RepetitionPool(table) => f64::from(pool_weight(table, rarity)),
            Self::Normalized(table) => probability_weight(table, rarity),
        }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::from_config(&EncounterConfig::default())
    }
}

/// Pool slots for `rarity`.
pub fn pool_weight(table: &PoolWeights, rarity: &Rarity) -> u32 {
    match rarity {
        Rarity::Common => table.common,
        Rarity::Uncommon => table.uncommon,
        Rarity::Rare => table.rare,
        Rarity::Epic => table.epic,
        Rarity::Legendary => table.legendary,
        Rarity::Mythical => table.mythical,
        Rarity::Unrecognized(_) => table.unrecognized,
    }
}

/// Probability mass for `rarity`. Unrecognized rarities weigh 0.
pub fn probability_weight(table: &ProbabilityWeights, rarity: &Rarity) -> f64 {
    match rarity {
        Rarity::Common => table.common,
        Rarity::Uncommon => table.uncommon,
        Rarity::Rare => table.rare,
        Rarity::Epic => table.epic,
        Rarity::Legendary => table.legendary,
        Rarity::Mythical => table.mythical,
        Rarity::Unrecognized(_) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_defaults() {
        let table = PoolWeights::default();
        assert_eq!(pool_weight(&table, &Rarity::Common), 50);
        assert_eq!(pool_weight(&table, &Rarity::Uncommon), 80);
        assert_eq!(pool_weight(&table, &Rarity::Mythical), 1);
        assert_eq!(pool_weight(&table, &Rarity::parse("Shiny")), 10);
    }

    #[test]
    fn test_probability_unrecognized_is_zero() {
        let table = ProbabilityWeights::default();
        assert_eq!(probability_weight(&table, &Rarity::Common), 0.60);
        assert_eq!(probability_weight(&table, &Rarity::parse("")), 0.0);
    }

    #[test]
    fn test_from_config_follows_scheme() {
        let mut config = EncounterConfig::default();
        assert_eq!(
            WeightTable::from_config(&config).scheme(),
            WeightScheme::RepetitionPool
        );

        config.scheme = WeightScheme::Normalized;
        let table = WeightTable::from_config(&config);
        assert_eq!(table.scheme(), WeightScheme::Normalized);
        assert_eq!(table.weight(&Rarity::Legendary), 0.01);
    }

    #[test]
    fn test_weight_as_float() {
        let table = WeightTable::default();
        assert_eq!(table.weight(&Rarity::Rare), 40.0);
    }
}
