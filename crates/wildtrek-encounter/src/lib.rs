//! Encounter selection for Wildtrek.
//!
//! Given the organisms living in a biome, draws at most one of them weighted
//! by rarity, with an independent chance of finding nothing at all. Also holds
//! the per-session exploration counters a front end displays.

mod exploration;
mod rng;
mod selector;
mod session;
pub mod weights;

pub use exploration::{Encounter, explore_biome};
pub use rng::encounter_rng;
pub use selector::{EncounterError, EncounterSelector};
pub use session::{Expedition, ExpeditionError, SessionStats};
pub use weights::WeightTable;
