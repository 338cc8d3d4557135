//! Mapping file model and (de)serialization
//!
//! The mapping file is the sidecar JSON written next to the anonymized
//! spreadsheet. It records the three user-facing mappings (full name, email,
//! username) as flat string-to-string maps; the internal first/last-name
//! fragment maps are not exported.

use crate::anonymization::mapper::IdentityMapper;
use crate::domain::{MaskeraError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Extension of the sidecar mapping file
pub const MAPPING_EXTENSION: &str = "mapping.json";

/// Serialized original -> alias correspondences for one anonymization run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingFile {
    /// Original full name -> "first last" alias
    pub name_mapping: BTreeMap<String, String>,
    /// Original email -> alias email
    pub email_mapping: BTreeMap<String, String>,
    /// Original username -> alias username
    pub username_mapping: BTreeMap<String, String>,
}

impl MappingFile {
    /// Build the exportable mapping file from a mapper's state
    ///
    /// Name alias pairs are rendered as `"first last"`.
    pub fn from_mapper(mapper: &IdentityMapper) -> Self {
        let name_mapping = mapper
            .name_mapping()
            .iter()
            .map(|(name, (first, last))| (name.clone(), format!("{first} {last}")))
            .collect();
        let email_mapping = mapper
            .email_mapping()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let username_mapping = mapper
            .username_mapping()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Self {
            name_mapping,
            email_mapping,
            username_mapping,
        }
    }

    /// Write the mapping as indented UTF-8 JSON
    ///
    /// serde_json leaves non-ASCII characters unescaped, so Swedish names
    /// stay human-readable in the file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json).map_err(|e| {
            MaskeraError::Mapping(format!(
                "Failed to write mapping file {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }

    /// Load a mapping file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            MaskeraError::Mapping(format!(
                "Failed to read mapping file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Flatten all three maps into a single anonymized -> original lookup
    pub fn reverse_lookup(&self) -> HashMap<String, String> {
        let mut reverse = HashMap::new();
        for map in [&self.name_mapping, &self.email_mapping, &self.username_mapping] {
            for (original, anonymized) in map {
                reverse.insert(anonymized.clone(), original.clone());
            }
        }
        reverse
    }

    /// Total number of recorded identities
    pub fn len(&self) -> usize {
        self.name_mapping.len() + self.email_mapping.len() + self.username_mapping.len()
    }

    /// Whether no identities were recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sidecar path for a given output spreadsheet
    ///
    /// The output's extension is replaced: `report.xlsx` -> `report.mapping.json`.
    pub fn path_for(output: impl AsRef<Path>) -> PathBuf {
        output.as_ref().with_extension(MAPPING_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::alias::AliasGenerator;
    use tempfile::TempDir;

    fn sample_mapping() -> MappingFile {
        let mut mapper = IdentityMapper::with_generator(AliasGenerator::from_seed(11));
        mapper.anonymize_full_name("anna svensson");
        mapper.anonymize_username("anna.svensson", Some("anna svensson"));
        mapper.anonymize_email("anna.svensson@example.com");
        MappingFile::from_mapper(&mapper)
    }

    #[test]
    fn test_from_mapper_renders_name_pairs() {
        let mapping = sample_mapping();
        let alias = &mapping.name_mapping["anna svensson"];
        assert_eq!(alias.split(' ').count(), 2);
        assert_eq!(mapping.len(), 3);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.mapping.json");

        let mapping = sample_mapping();
        mapping.save(&path).unwrap();
        let loaded = MappingFile::load(&path).unwrap();
        assert_eq!(mapping, loaded);
    }

    #[test]
    fn test_saved_json_has_exactly_three_top_level_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.mapping.json");
        sample_mapping().save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["email_mapping", "name_mapping", "username_mapping"]);
    }

    #[test]
    fn test_non_ascii_left_unescaped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.mapping.json");

        let mut mapper = IdentityMapper::with_generator(AliasGenerator::from_seed(3));
        mapper.anonymize_full_name("åsa öberg");
        MappingFile::from_mapper(&mapper).save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("åsa öberg"));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn test_reverse_lookup_covers_all_maps() {
        let mapping = sample_mapping();
        let reverse = mapping.reverse_lookup();
        assert_eq!(reverse.len(), 3);
        for (original, anonymized) in &mapping.email_mapping {
            assert_eq!(reverse.get(anonymized), Some(original));
        }
    }

    #[test]
    fn test_path_for_replaces_extension() {
        assert_eq!(
            MappingFile::path_for("reports/out.xlsx"),
            PathBuf::from("reports/out.mapping.json")
        );
    }

    #[test]
    fn test_load_missing_file_is_mapping_error() {
        let err = MappingFile::load("/nonexistent/m.json").unwrap_err();
        assert!(matches!(err, MaskeraError::Mapping(_)));
    }
}
