//! Small built-in dataset for when the real one cannot be loaded.
//!
//! The catalog never substitutes this on its own; front ends opt in.

use crate::catalog::Catalog;
use crate::organism::OrganismRecord;

impl Catalog {
    /// Two urban pets, enough to keep the game playable without data files.
    pub fn builtin() -> Self {
        Self::from_records(vec![
            OrganismRecord {
                name: "Calico Cat".to_string(),
                scientific_name: Some("Felis catus".to_string()),
                habitat: Some("Urban".to_string()),
                drops: Some("Fur".to_string()),
                attack: 40.0,
                defense: 35.0,
                health: 55.0,
                speed: 70.0,
                abilities: Some("Lucky Pelt".to_string()),
                category: Some("Mammal".to_string()),
                moves: Some(
                    "Scratch, Pounce, Charm, Quick Dash, Night Vision, Playful Swipe".to_string(),
                ),
                sprite: Some("https://i.postimg.cc/kgZHx9N0/calico.png".to_string()),
                rarity: Some("Common".to_string()),
                description: Some(
                    "A nimble and curious companion, the domestic cat uses its sharp senses \
                     to detect threats and hidden resources. Though small, it's agile, \
                     stealthy, and fiercely protective when cornered."
                        .to_string(),
                ),
            },
            OrganismRecord {
                name: "Beagle Hound".to_string(),
                scientific_name: Some("Canis lupus familiaris".to_string()),
                habitat: Some("Urban".to_string()),
                drops: Some("Fur".to_string()),
                attack: 45.0,
                defense: 40.0,
                health: 65.0,
                speed: 70.0,
                abilities: Some("Keen Nose".to_string()),
                category: Some("Mammal".to_string()),
                moves: Some(
                    "Bite, Quick Dash, Howl, Sniff Out, Pounce, Agility Strike".to_string(),
                ),
                sprite: Some("https://i.postimg.cc/brmHLB7f/beagle-hound.png".to_string()),
                rarity: Some("Uncommon".to_string()),
                description: Some(
                    "A loyal and protective companion, the domestic dog excels at guarding \
                     and tracking with its keen senses. Strong and courageous, it thrives \
                     in a pack and will defend its allies without hesitation."
                        .to_string(),
                ),
            },
        ])
    }
}
