//! Rarity-weighted encounter selection.
//!
//! [`EncounterSelector::select`] is a pure function of the candidates, the
//! weight table, the null-encounter chance, and the RNG it is handed.

use rand::Rng;
use thiserror::Error;
use wildtrek_catalog::Organism;
use wildtrek_config::EncounterConfig;

use crate::weights::{WeightTable, pool_weight, probability_weight};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned when building a selector.
#[derive(Debug, Error, PartialEq)]
pub enum EncounterError {
    /// The null-encounter chance is not a probability.
    #[error("null encounter chance must be within 0.0..=1.0, got {0}")]
    InvalidNullChance(f64),

    /// A normalized weight is negative, infinite, or NaN.
    #[error("weight for {rarity} must be finite and non-negative, got {weight}")]
    InvalidWeight {
        /// Rarity tier the weight belongs to.
        rarity: &'static str,
        /// Offending value.
        weight: f64,
    },
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// Draws at most one organism from a candidate list.
///
/// Two independent random events decide the outcome: a suppression roll
/// against `null_encounter_chance`, then the weighted pick.
#[derive(Clone, Debug, PartialEq)]
pub struct EncounterSelector {
    weights: WeightTable,
    null_encounter_chance: f64,
}

impl EncounterSelector {
    /// Creates a selector.
    ///
    /// # Errors
    ///
    /// Returns [`EncounterError`] if the chance is outside `0.0..=1.0` or a
    /// normalized weight is not a finite non-negative number.
    pub fn new(weights: WeightTable, null_encounter_chance: f64) -> Result<Self, EncounterError> {
        if !(0.0..=1.0).contains(&null_encounter_chance) {
            return Err(EncounterError::InvalidNullChance(null_encounter_chance));
        }
        if let WeightTable::Normalized(table) = &weights {
            for (rarity, weight) in [
                ("Common", table.common),
                ("Uncommon", table.uncommon),
                ("Rare", table.rare),
                ("Epic", table.epic),
                ("Legendary", table.legendary),
                ("Mythical", table.mythical),
            ] {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(EncounterError::InvalidWeight { rarity, weight });
                }
            }
        }
        Ok(Self {
            weights,
            null_encounter_chance,
        })
    }

    /// Builds a selector from the `encounter` config section.
    ///
    /// # Errors
    ///
    /// See [`EncounterSelector::new`].
    pub fn from_config(config: &EncounterConfig) -> Result<Self, EncounterError> {
        let selector = Self::new(
            WeightTable::from_config(config),
            config.null_encounter_chance,
        )?;
        log::debug!(
            "Encounter selector: {:?} scheme, null chance {}",
            config.scheme,
            config.null_encounter_chance
        );
        Ok(selector)
    }

    /// The active weight table.
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Probability that an exploration with eligible candidates finds nothing.
    pub fn null_encounter_chance(&self) -> f64 {
        self.null_encounter_chance
    }

    /// Picks one organism from `candidates`, or `None`.
    ///
    /// Returns `None` without touching `rng` when `candidates` is empty or
    /// every candidate weighs zero. Otherwise rolls for suppression and then
    /// draws by weight.
    pub fn select<'a, R: Rng + ?Sized>(
        &self,
        candidates: &[&'a Organism],
        rng: &mut R,
    ) -> Option<&'a Organism> {
        if candidates.is_empty() {
            return None;
        }

        let index = match &self.weights {
            WeightTable::RepetitionPool(table) => {
                let slots: Vec<u64> = candidates
                    .iter()
                    .map(|organism| u64::from(pool_weight(table, organism.rarity())))
                    .collect();
                let pool_size: u64 = slots.iter().sum();
                if pool_size == 0 {
                    return None;
                }
                if self.suppressed(rng) {
                    return None;
                }
                pool_index(&slots, rng.random_range(0..pool_size))
            }
            WeightTable::Normalized(table) => {
                let masses: Vec<f64> = candidates
                    .iter()
                    .map(|organism| probability_weight(table, organism.rarity()))
                    .collect();
                let total: f64 = masses.iter().sum();
                if total <= 0.0 {
                    return None;
                }
                if self.suppressed(rng) {
                    return None;
                }
                normalized_index(&masses, rng.random::<f64>() * total)
            }
        };

        index.map(|i| candidates[i])
    }

    /// Chance of each candidate being returned by one call to
    /// [`select`](Self::select), suppression included.
    pub fn odds<'a>(&self, candidates: &[&'a Organism]) -> Vec<(&'a Organism, f64)> {
        let weights: Vec<f64> = candidates
            .iter()
            .map(|organism| self.weights.weight(organism.rarity()))
            .collect();
        let total: f64 = weights.iter().sum();
        let found = 1.0 - self.null_encounter_chance;

        candidates
            .iter()
            .zip(weights)
            .map(|(organism, weight)| {
                let odds = if total > 0.0 {
                    found * weight / total
                } else {
                    0.0
                };
                (*organism, odds)
            })
            .collect()
    }

    fn suppressed<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        self.null_encounter_chance > 0.0 && rng.random::<f64>() < self.null_encounter_chance
    }
}

impl Default for EncounterSelector {
    fn default() -> Self {
        Self {
            weights: WeightTable::default(),
            null_encounter_chance: EncounterConfig::default().null_encounter_chance,
        }
    }
}

// ---------------------------------------------------------------------------
// Draw helpers
// ---------------------------------------------------------------------------

/// Maps a slot in `0..sum(slots)` to the candidate occupying it.
fn pool_index(slots: &[u64], mut slot: u64) -> Option<usize> {
    for (index, &width) in slots.iter().enumerate() {
        if slot < width {
            return Some(index);
        }
        slot -= width;
    }
    None
}

/// Walks `masses`, subtracting each from `draw`; the candidate that drives
/// the remainder negative wins. If rounding leaves the remainder at or above
/// zero after the last subtraction, the last candidate with positive mass
/// wins.
fn normalized_index(masses: &[f64], draw: f64) -> Option<usize> {
    let mut remainder = draw;
    for (index, &mass) in masses.iter().enumerate() {
        if mass <= 0.0 {
            continue;
        }
        remainder -= mass;
        if remainder < 0.0 {
            return Some(index);
        }
    }
    masses.iter().rposition(|&mass| mass > 0.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
