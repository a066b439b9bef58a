//! Session state owned by the front end.
//!
//! Counters live only as long as the [`Expedition`] that owns them; starting
//! over means constructing a new one.

use std::collections::BTreeSet;

use rand::Rng;
use thiserror::Error;
use wildtrek_catalog::Catalog;

use crate::exploration::{Encounter, explore_biome};
use crate::selector::EncounterSelector;

/// Errors from driving an [`Expedition`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpeditionError {
    /// `explore` was called while at base camp.
    #[error("no biome entered; enter a biome before exploring")]
    NoActiveBiome,
    /// `enter_biome` was given a blank name.
    #[error("biome name is blank")]
    BlankBiome,
}

/// Monotonic session counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    explorations: u64,
    encounters: u64,
    species_found: BTreeSet<String>,
}

impl SessionStats {
    /// Explorations attempted, successful or not.
    pub fn explorations(&self) -> u64 {
        self.explorations
    }

    /// Explorations that found an organism.
    pub fn encounters(&self) -> u64 {
        self.encounters
    }

    /// Distinct species names encountered, sorted.
    pub fn species_found(&self) -> &BTreeSet<String> {
        &self.species_found
    }

    /// Number of distinct species encountered.
    pub fn species_count(&self) -> usize {
        self.species_found.len()
    }

    /// Counts one exploration and its outcome.
    pub fn record(&mut self, encounter: &Encounter<'_>) {
        self.explorations += 1;
        if let Encounter::Found(organism) = encounter {
            self.encounters += 1;
            self.species_found.insert(organism.name().to_string());
        }
    }
}

/// A play session: the catalog being explored, the selector, the biome the
/// player is standing in, and the running counters.
#[derive(Debug)]
pub struct Expedition<'c> {
    catalog: &'c Catalog,
    selector: EncounterSelector,
    biome: Option<String>,
    stats: SessionStats,
}

impl<'c> Expedition<'c> {
    /// Starts a session at base camp with zeroed counters.
    pub fn new(catalog: &'c Catalog, selector: EncounterSelector) -> Self {
        Self {
            catalog,
            selector,
            biome: None,
            stats: SessionStats::default(),
        }
    }

    /// Moves into `biome`, replacing any current one.
    ///
    /// # Errors
    ///
    /// Returns [`ExpeditionError::BlankBiome`] for an empty or whitespace name.
    pub fn enter_biome(&mut self, biome: &str) -> Result<(), ExpeditionError> {
        let biome = biome.trim();
        if biome.is_empty() {
            return Err(ExpeditionError::BlankBiome);
        }
        log::info!("Entered {biome} biome");
        self.biome = Some(biome.to_string());
        Ok(())
    }

    /// Returns to base camp, yielding the biome that was left.
    pub fn return_to_camp(&mut self) -> Option<String> {
        let left = self.biome.take();
        if left.is_some() {
            log::info!("Returned to base camp");
        }
        left
    }

    /// The biome currently being explored.
    pub fn current_biome(&self) -> Option<&str> {
        self.biome.as_deref()
    }

    /// Explores the current biome once and updates the counters.
    ///
    /// # Errors
    ///
    /// Returns [`ExpeditionError::NoActiveBiome`] at base camp; counters are
    /// left untouched in that case.
    pub fn explore<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Encounter<'c>, ExpeditionError> {
        let biome = self.biome.as_deref().ok_or(ExpeditionError::NoActiveBiome)?;
        let encounter = explore_biome(self.catalog, &self.selector, biome, rng);

        match encounter {
            Encounter::Found(organism) => log::info!(
                "Found {} ({}) in {biome}",
                organism.name(),
                organism.rarity()
            ),
            Encounter::Elusive => log::info!("Searched {biome} but the animals were too elusive"),
            Encounter::NoWildlife => {
                log::info!("Searched {biome}: no animals listed for this biome")
            }
        }

        self.stats.record(&encounter);
        Ok(encounter)
    }

    /// Counters so far.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// The selector in use.
    pub fn selector(&self) -> &EncounterSelector {
        &self.selector
    }

    /// Swaps in a new selector. Counters and the current biome are kept.
    pub fn set_selector(&mut self, selector: EncounterSelector) {
        log::debug!("Encounter selector replaced mid-session");
        self.selector = selector;
    }

    /// The catalog being explored.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }
}
