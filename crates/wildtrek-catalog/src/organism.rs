//! Organism records: the raw dataset shape and the immutable catalog entry.

use serde::Deserialize;

use crate::rarity::Rarity;

// ---------------------------------------------------------------------------
// Dataset record
// ---------------------------------------------------------------------------

/// One entry of the `Animals` list as it appears in the dataset.
///
/// Only `name` is required. Nullable text fields are `Option` so that an
/// explicit `null` behaves like a missing key.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct OrganismRecord {
    pub name: String,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub habitat: Option<String>,
    #[serde(default)]
    pub drops: Option<String>,
    #[serde(default)]
    pub attack: f64,
    #[serde(default)]
    pub defense: f64,
    #[serde(default)]
    pub health: f64,
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub abilities: Option<String>,
    #[serde(default, rename = "catagory", alias = "category")]
    pub category: Option<String>,
    #[serde(default)]
    pub moves: Option<String>,
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Combat stat block. Display-only; the encounter logic never reads it.
///
/// Values are kept exactly as the dataset gives them, fractional or negative
/// included.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stats {
    /// Attack power.
    pub attack: f64,
    /// Defense.
    pub defense: f64,
    /// Hit points.
    pub health: f64,
    /// Speed.
    pub speed: f64,
}

// ---------------------------------------------------------------------------
// Organism
// ---------------------------------------------------------------------------

/// An immutable catalog entry.
///
/// Habitat tokens are split and trimmed once at load time; a lowercase copy
/// backs case-insensitive biome matching.
#[derive(Clone, Debug, PartialEq)]
pub struct Organism {
    name: String,
    scientific_name: String,
    habitat: String,
    habitats: Vec<String>,
    habitat_keys: Vec<String>,
    drops: String,
    stats: Stats,
    abilities: String,
    category: String,
    moves: String,
    sprite: String,
    rarity: Rarity,
    description: String,
}

impl From<OrganismRecord> for Organism {
    fn from(record: OrganismRecord) -> Self {
        let habitat = record.habitat.unwrap_or_default();
        let mut habitats = Vec::new();
        let mut habitat_keys = Vec::new();
        for token in split_list(&habitat) {
            let key = token.to_lowercase();
            if !habitat_keys.contains(&key) {
                habitats.push(token.to_string());
                habitat_keys.push(key);
            }
        }

        Self {
            name: record.name,
            scientific_name: record.scientific_name.unwrap_or_default(),
            habitat,
            habitats,
            habitat_keys,
            drops: record.drops.unwrap_or_default(),
            stats: Stats {
                attack: record.attack,
                defense: record.defense,
                health: record.health,
                speed: record.speed,
            },
            abilities: record.abilities.unwrap_or_default(),
            category: record.category.unwrap_or_default(),
            moves: record.moves.unwrap_or_default(),
            sprite: record.sprite.unwrap_or_default(),
            rarity: Rarity::parse(record.rarity.as_deref().unwrap_or_default()),
            description: record.description.unwrap_or_default(),
        }
    }
}

impl Organism {
    /// Common name. Not guaranteed unique within a catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Binomial name.
    pub fn scientific_name(&self) -> &str {
        &self.scientific_name
    }

    /// The comma-separated habitat field exactly as written in the dataset.
    pub fn habitat_field(&self) -> &str {
        &self.habitat
    }

    /// Trimmed habitat tokens in dataset order, without case-insensitive duplicates.
    pub fn habitats(&self) -> &[String] {
        &self.habitats
    }

    /// Returns `true` if `biome` names one of this organism's habitats,
    /// ignoring case and surrounding whitespace.
    pub fn lives_in(&self, biome: &str) -> bool {
        habitat_key(biome).is_some_and(|key| self.has_habitat_key(&key))
    }

    pub(crate) fn has_habitat_key(&self, key: &str) -> bool {
        self.habitat_keys.iter().any(|k| k == key)
    }

    /// Resource dropped by the organism.
    pub fn drops(&self) -> &str {
        &self.drops
    }

    /// Combat stats.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Ability description.
    pub fn abilities(&self) -> &str {
        &self.abilities
    }

    /// Taxonomic category, e.g. "Mammal".
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Individual moves split out of the comma-separated moves field.
    pub fn moves(&self) -> impl Iterator<Item = &str> {
        split_list(&self.moves)
    }

    /// Sprite URI.
    pub fn sprite(&self) -> &str {
        &self.sprite
    }

    /// Rarity tier.
    pub fn rarity(&self) -> &Rarity {
        &self.rarity
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Splits a comma-separated field into trimmed, non-empty tokens.
pub(crate) fn split_list(field: &str) -> impl Iterator<Item = &str> {
    field.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Normalizes a biome query for matching. `None` for blank input.
pub(crate) fn habitat_key(biome: &str) -> Option<String> {
    let trimmed = biome.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}
