//! One exploration: habitat filter followed by a weighted draw.

use rand::Rng;
use wildtrek_catalog::{Catalog, Organism};

use crate::selector::EncounterSelector;

/// Outcome of exploring a biome once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Encounter<'a> {
    /// An organism was found.
    Found(&'a Organism),
    /// Organisms live here, but the draw came up empty.
    Elusive,
    /// No organism in the catalog lists this biome.
    NoWildlife,
}

impl<'a> Encounter<'a> {
    /// The organism found, if any.
    pub fn organism(&self) -> Option<&'a Organism> {
        match *self {
            Encounter::Found(organism) => Some(organism),
            Encounter::Elusive | Encounter::NoWildlife => None,
        }
    }

    /// Returns `true` for [`Encounter::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Encounter::Found(_))
    }
}

/// Filters `catalog` by `biome` and draws from the matches.
pub fn explore_biome<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    selector: &EncounterSelector,
    biome: &str,
    rng: &mut R,
) -> Encounter<'a> {
    let candidates = catalog.query_by_habitat(biome);
    if candidates.is_empty() {
        return Encounter::NoWildlife;
    }

    match selector.select(&candidates, rng) {
        Some(organism) => Encounter::Found(organism),
        None => Encounter::Elusive,
    }
}
