//! Rarity tags attached to every organism.

use std::fmt;

/// Ordinal rarity of an organism, from most to least frequently encountered.
///
/// Values outside the six known tiers are kept verbatim in
/// [`Rarity::Unrecognized`] so the encounter weights can apply their fallback.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rarity {
    /// Everyday wildlife.
    Common,
    /// Slightly harder to find.
    Uncommon,
    /// Rare sighting.
    Rare,
    /// Very rare sighting.
    Epic,
    /// Once-in-a-lifetime sighting.
    Legendary,
    /// Practically a myth.
    Mythical,
    /// Any other tag, including a missing one (stored as an empty string).
    Unrecognized(String),
}

impl Rarity {
    /// The six known tiers in ascending order of rarity.
    pub const TIERS: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythical,
    ];

    /// Parses a dataset tag. Matching ignores case and surrounding whitespace.
    pub fn parse(tag: &str) -> Self {
        let trimmed = tag.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "common" => Rarity::Common,
            "uncommon" => Rarity::Uncommon,
            "rare" => Rarity::Rare,
            "epic" => Rarity::Epic,
            "legendary" => Rarity::Legendary,
            "mythical" => Rarity::Mythical,
            _ => Rarity::Unrecognized(trimmed.to_string()),
        }
    }

    /// Display name of the tag.
    pub fn as_str(&self) -> &str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythical => "Mythical",
            Rarity::Unrecognized(tag) => tag,
        }
    }

    /// Returns `true` for the six known tiers.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Rarity::Unrecognized(_))
    }
}

impl From<&str> for Rarity {
    fn from(tag: &str) -> Self {
        Rarity::parse(tag)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
