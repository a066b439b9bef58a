//! Organism catalog for Wildtrek.
//!
//! Loads the organism dataset once, validates it, and answers which organisms
//! live in a given biome. The catalog is read-only after loading.

mod builtin;
mod catalog;
mod error;
mod organism;
mod rarity;
pub mod recovery;

pub use catalog::{Catalog, ParseMode};
pub use error::DataError;
pub use organism::{Organism, Stats};
pub use rarity::Rarity;
