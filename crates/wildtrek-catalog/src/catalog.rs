//! Organism catalog: loads the dataset once and answers habitat queries.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::DataError;
use crate::organism::{Organism, OrganismRecord, habitat_key};
use crate::recovery::extract_balanced_object;

// ---------------------------------------------------------------------------
// Dataset manifest
// ---------------------------------------------------------------------------

/// Top-level shape of the dataset.
#[derive(Deserialize)]
struct OrganismManifest {
    #[serde(rename = "Animals", alias = "animals", alias = "organisms")]
    animals: Option<Vec<OrganismRecord>>,
}

/// How raw dataset text is turned into JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// The whole text must be one JSON object.
    #[default]
    Strict,
    /// Extract the first balanced object from surrounding noise, then parse
    /// it strictly.
    Recover,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Read-only collection of organisms.
///
/// Built once at startup; every query borrows from it and nothing mutates it
/// afterwards. Query results keep dataset order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    organisms: Vec<Organism>,
}

impl Catalog {
    /// Parse a dataset that must consist of exactly one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if the text is not JSON, is not an object, or
    /// lacks a non-empty organism list.
    pub fn load(source: &str) -> Result<Self, DataError> {
        let value: serde_json::Value =
            serde_json::from_str(source).map_err(DataError::Malformed)?;
        if !value.is_object() {
            return Err(DataError::NotAnObject);
        }

        let manifest: OrganismManifest =
            serde_json::from_value(value).map_err(DataError::Malformed)?;
        let records = manifest.animals.ok_or(DataError::MissingOrganismList)?;
        if records.is_empty() {
            return Err(DataError::EmptyOrganismList);
        }

        let catalog = Self::from_records(records);
        log::info!(
            "Loaded {} organisms across {} habitats",
            catalog.len(),
            catalog.distinct_habitats().len()
        );
        Ok(catalog)
    }

    /// Parse a dataset that may carry non-JSON noise before or after the
    /// object, such as log prefixes or a stray HTML wrapper.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::NoBalancedObject`] if no object can be located,
    /// otherwise the same errors as [`Catalog::load`] for the extracted text.
    pub fn load_recovering(source: &str) -> Result<Self, DataError> {
        let object = extract_balanced_object(source).ok_or(DataError::NoBalancedObject)?;
        let skipped = source.len() - object.len();
        if skipped > 0 {
            log::warn!("Ignored {skipped} bytes of non-JSON text around organism data");
        }
        Self::load(object)
    }

    /// Parse `source` with the given mode.
    ///
    /// # Errors
    ///
    /// See [`Catalog::load`] and [`Catalog::load_recovering`].
    pub fn load_with(source: &str, mode: ParseMode) -> Result<Self, DataError> {
        match mode {
            ParseMode::Strict => Self::load(source),
            ParseMode::Recover => Self::load_recovering(source),
        }
    }

    /// Read and parse a dataset file.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Io`] if the file cannot be read, otherwise the
    /// parse errors of the chosen mode.
    pub fn from_path(path: &Path, mode: ParseMode) -> Result<Self, DataError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read organism data from {}", path.display());
        Self::load_with(&contents, mode)
    }

    /// Organisms living in `biome`, in dataset order.
    ///
    /// Matching trims the query and ignores case on both sides. An unknown
    /// or blank biome yields an empty vector.
    pub fn query_by_habitat(&self, biome: &str) -> Vec<&Organism> {
        let Some(key) = habitat_key(biome) else {
            return Vec::new();
        };
        let matches: Vec<&Organism> = self
            .organisms
            .iter()
            .filter(|organism| organism.has_habitat_key(&key))
            .collect();
        log::debug!("Biome {:?}: {} candidate organisms", biome.trim(), matches.len());
        matches
    }

    /// Every habitat used by the dataset, sorted.
    ///
    /// Tokens differing only in case count once, under their lexicographically
    /// smallest spelling, so the result does not depend on record order.
    pub fn distinct_habitats(&self) -> BTreeSet<String> {
        let mut spellings: BTreeMap<String, &str> = BTreeMap::new();
        for habitat in self.organisms.iter().flat_map(|organism| organism.habitats()) {
            spellings
                .entry(habitat.to_lowercase())
                .and_modify(|spelling| {
                    if habitat.as_str() < *spelling {
                        *spelling = habitat.as_str();
                    }
                })
                .or_insert(habitat.as_str());
        }
        spellings.into_values().map(str::to_string).collect()
    }

    /// First organism whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Organism> {
        self.organisms.iter().find(|organism| organism.name() == name)
    }

    /// Organism at `index` in dataset order.
    pub fn get(&self, index: usize) -> Option<&Organism> {
        self.organisms.get(index)
    }

    /// All organisms in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, Organism> {
        self.organisms.iter()
    }

    /// Number of organisms.
    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    /// Returns `true` if the catalog holds no organisms.
    ///
    /// A loaded catalog is never empty; only a default-constructed one is.
    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    pub(crate) fn from_records(records: Vec<OrganismRecord>) -> Self {
        Self {
            organisms: records.into_iter().map(Organism::from).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Organism;
    type IntoIter = std::slice::Iter<'a, Organism>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rarity;

    fn sample_json() -> &'static str {
        r#"{
            "Animals": [
                {"name": "Calico Cat", "habitat": "Urban", "rarity": "Common"},
                {"name": "Beagle Hound", "habitat": "Urban", "rarity": "Uncommon"},
                {"name": "Red Fox", "habitat": "Forest, Urban", "rarity": "Rare"},
                {"name": "Barn Owl", "habitat": "Forest,Grassland", "rarity": "Epic"}
            ]
        }"#
    }

    fn names(organisms: &[&Organism]) -> Vec<String> {
        organisms.iter().map(|o| o.name().to_string()).collect()
    }

    #[test]
    fn test_load_sample() {
        let catalog = Catalog::load(sample_json()).unwrap();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(2).unwrap().rarity(), &Rarity::Rare);
    }

    #[test]
    fn test_urban_returns_both_pets_and_ocean_is_empty() {
        let json = r#"{"Animals": [
            {"name": "Calico Cat", "habitat": "Urban", "rarity": "Common"},
            {"name": "Beagle Hound", "habitat": "Urban", "rarity": "Uncommon"}
        ]}"#;
        let catalog = Catalog::load(json).unwrap();
        assert_eq!(
            names(&catalog.query_by_habitat("Urban")),
            ["Calico Cat", "Beagle Hound"]
        );
        assert!(catalog.query_by_habitat("Ocean").is_empty());
    }

    #[test]
    fn test_multi_habitat_matches_each_token_case_insensitively() {
        let catalog = Catalog::load(sample_json()).unwrap();
        assert!(names(&catalog.query_by_habitat("forest")).contains(&"Red Fox".to_string()));
        assert!(names(&catalog.query_by_habitat("Urban")).contains(&"Red Fox".to_string()));
        assert_eq!(
            names(&catalog.query_by_habitat("  GRASSLAND ")),
            ["Barn Owl"]
        );
    }

    #[test]
    fn test_query_is_stable() {
        let catalog = Catalog::load(sample_json()).unwrap();
        let first = names(&catalog.query_by_habitat("Urban"));
        for _ in 0..10 {
            assert_eq!(names(&catalog.query_by_habitat("urban")), first);
        }
        assert_eq!(first, ["Calico Cat", "Beagle Hound", "Red Fox"]);
    }

    #[test]
    fn test_blank_query_is_empty() {
        let catalog = Catalog::load(sample_json()).unwrap();
        assert!(catalog.query_by_habitat("").is_empty());
        assert!(catalog.query_by_habitat("   ").is_empty());
    }

    #[test]
    fn test_distinct_habitats_sorted() {
        let catalog = Catalog::load(sample_json()).unwrap();
        let habitats: Vec<String> = catalog.distinct_habitats().into_iter().collect();
        assert_eq!(habitats, ["Forest", "Grassland", "Urban"]);
    }

    #[test]
    fn test_distinct_habitats_ignore_record_order() {
        let reversed = r#"{
            "Animals": [
                {"name": "Barn Owl", "habitat": "Forest,Grassland", "rarity": "Epic"},
                {"name": "Red Fox", "habitat": "Forest, Urban", "rarity": "Rare"},
                {"name": "Beagle Hound", "habitat": "Urban", "rarity": "Uncommon"},
                {"name": "Calico Cat", "habitat": "Urban", "rarity": "Common"}
            ]
        }"#;
        let a = Catalog::load(sample_json()).unwrap();
        let b = Catalog::load(reversed).unwrap();
        assert_eq!(a.distinct_habitats(), b.distinct_habitats());
    }

    #[test]
    fn test_distinct_habitats_fold_case() {
        let json = r#"{"Animals": [
            {"name": "Red Fox", "habitat": "forest"},
            {"name": "Badger", "habitat": "Forest, Grassland"},
            {"name": "Hare", "habitat": "GRASSLAND"}
        ]}"#;
        let reversed = r#"{"Animals": [
            {"name": "Hare", "habitat": "GRASSLAND"},
            {"name": "Badger", "habitat": "Forest, Grassland"},
            {"name": "Red Fox", "habitat": "forest"}
        ]}"#;
        let catalog = Catalog::load(json).unwrap();
        let habitats: Vec<String> = catalog.distinct_habitats().into_iter().collect();
        assert_eq!(habitats, ["Forest", "GRASSLAND"]);
        assert_eq!(catalog.query_by_habitat(&habitats[0]).len(), 2);
        assert_eq!(catalog.query_by_habitat(&habitats[1]).len(), 2);

        let reversed = Catalog::load(reversed).unwrap();
        assert_eq!(reversed.distinct_habitats(), catalog.distinct_habitats());
    }

    #[test]
    fn test_duplicate_names_are_distinct_entries() {
        let json = r#"{"Animals": [
            {"name": "Sparrow", "habitat": "Urban"},
            {"name": "Sparrow", "habitat": "Urban"}
        ]}"#;
        let catalog = Catalog::load(json).unwrap();
        assert_eq!(catalog.query_by_habitat("Urban").len(), 2);
        assert_eq!(catalog.find_by_name("Sparrow").unwrap().name(), "Sparrow");
        assert!(catalog.find_by_name("sparrow").is_none());
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let result = Catalog::load("{not json");
        assert!(matches!(result, Err(DataError::Malformed(_))));
    }

    #[test]
    fn test_array_top_level_rejected() {
        let result = Catalog::load(r#"[{"name": "Calico Cat"}]"#);
        assert!(matches!(result, Err(DataError::NotAnObject)));
    }

    #[test]
    fn test_missing_list_rejected() {
        let result = Catalog::load(r#"{"Plants": []}"#);
        assert!(matches!(result, Err(DataError::MissingOrganismList)));
    }

    #[test]
    fn test_empty_list_rejected() {
        let result = Catalog::load(r#"{"Animals": []}"#);
        assert!(matches!(result, Err(DataError::EmptyOrganismList)));
    }

    #[test]
    fn test_record_without_name_is_malformed() {
        let result = Catalog::load(r#"{"Animals": [{"habitat": "Urban"}]}"#);
        assert!(matches!(result, Err(DataError::Malformed(_))));
    }

    #[test]
    fn test_fractional_and_negative_stats_load() {
        let json = r#"{"Animals": [
            {"name": "Tree Frog", "habitat": "Jungle", "attack": 40.5, "speed": -5},
            {"name": "Sloth", "habitat": "Jungle", "health": 120}
        ]}"#;
        let catalog = Catalog::load(json).unwrap();
        assert_eq!(catalog.len(), 2);

        let frog = catalog.find_by_name("Tree Frog").unwrap().stats();
        assert_eq!(frog.attack, 40.5);
        assert_eq!(frog.speed, -5.0);
        assert_eq!(frog.defense, 0.0);
        assert_eq!(catalog.find_by_name("Sloth").unwrap().stats().health, 120.0);
    }

    #[test]
    fn test_lowercase_list_alias() {
        let catalog =
            Catalog::load(r#"{"organisms": [{"name": "Koi", "habitat": "Pond"}]}"#).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_strict_load_rejects_noise() {
        let noisy = format!("data: {} // end", sample_json());
        assert!(matches!(Catalog::load(&noisy), Err(DataError::Malformed(_))));
    }

    #[test]
    fn test_recovering_load_strips_noise() {
        let noisy = format!("<pre>{}</pre>", sample_json());
        let catalog = Catalog::load_recovering(&noisy).unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_recovering_load_without_object() {
        let result = Catalog::load_recovering("<html>404</html>");
        assert!(matches!(result, Err(DataError::NoBalancedObject)));
    }

    #[test]
    fn test_recovering_load_keeps_structural_errors() {
        let result = Catalog::load_recovering(r#"noise {"Animals": 5} noise"#);
        assert!(matches!(result, Err(DataError::Malformed(_))));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::from_path(&dir.path().join("missing.json"), ParseMode::Strict);
        assert!(matches!(result, Err(DataError::Io { .. })));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("organisms.json");
        std::fs::write(&path, format!("\u{feff}junk\n{}", sample_json())).unwrap();

        assert!(Catalog::from_path(&path, ParseMode::Strict).is_err());
        let catalog = Catalog::from_path(&path, ParseMode::Recover).unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_default_catalog_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.query_by_habitat("Urban").is_empty());
        assert!(catalog.distinct_habitats().is_empty());
    }
}
